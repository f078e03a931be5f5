//! Legal Notices
//!
//! Privacy policy and terms of service, shown as modals from the footer.

use leptos::*;

/// Modal frame shared by the legal notices
#[component]
fn LegalModal(title: &'static str, open: RwSignal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-[70] bg-black/70 flex items-center justify-center p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    class="bg-gray-800 rounded-lg max-w-2xl w-full max-h-[80vh] overflow-y-auto p-6"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-2xl font-bold">{title}</h2>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-white"
                            on:click=move |_| open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="space-y-4 text-gray-300 text-sm leading-relaxed">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn PrivacyPolicy(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <LegalModal title="Privacy Policy" open=open>
            <p>
                "This site records anonymous page views. A random session identifier is \
                 kept in your browser's local storage so repeat visits can be counted; \
                 it is not linked to your name or email."
            </p>
            <p>
                "Messages sent through the contact form are used only to reply to you \
                 and are never shared with third parties."
            </p>
            <p>"You can clear the session identifier at any time by clearing site data."</p>
        </LegalModal>
    }
}

#[component]
pub fn TermsOfService(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <LegalModal title="Terms of Service" open=open>
            <p>
                "The content of this site is provided for information only. Project \
                 descriptions and source links belong to their respective owners."
            </p>
            <p>
                "Please do not use the contact form to send unsolicited advertising \
                 or automated submissions."
            </p>
        </LegalModal>
    }
}
