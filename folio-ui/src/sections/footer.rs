//! Footer Section

use folio::section::{self, SectionState};
use folio::FooterContent;
use leptos::*;

use crate::components::{Loading, PrivacyPolicy, TermsOfService};
use crate::state::use_section;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_section(section::footer());

    move || match footer.get() {
        SectionState::Loading => view! { <footer><Loading /></footer> }.into_view(),
        SectionState::Ready(content) => view! { <FooterBody content=content /> }.into_view(),
    }
}

#[component]
fn FooterBody(content: FooterContent) -> impl IntoView {
    let privacy_open = create_rw_signal(false);
    let terms_open = create_rw_signal(false);
    let quick_links = content.quick_links_or_anchors();
    let contact_lines = content.contact_lines();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 pt-12 pb-6">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <p class="text-lg font-semibold mb-2">{content.tagline}</p>
                        <p class="text-gray-400 text-sm">{content.description}</p>
                        <div class="flex gap-4 mt-4">
                            {content
                                .social_links
                                .into_iter()
                                .map(|link| view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.name.clone()
                                        class="text-gray-400 hover:text-white"
                                    >
                                        {link.name}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-3">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm">
                            {quick_links
                                .into_iter()
                                .map(|link| view! {
                                    <li><a href=link.url class="text-gray-400 hover:text-white">{link.name}</a></li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-3">"Contact"</h4>
                        <ul class="space-y-2 text-sm text-gray-400">
                            {contact_lines
                                .into_iter()
                                .map(|line| view! { <li>{line}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-700 pt-6 flex flex-col md:flex-row items-center justify-between text-sm text-gray-500">
                    <p>{content.copyright}</p>
                    <div class="flex gap-4 mt-2 md:mt-0">
                        <button type="button" class="hover:text-white" on:click=move |_| privacy_open.set(true)>
                            "Privacy Policy"
                        </button>
                        <button type="button" class="hover:text-white" on:click=move |_| terms_open.set(true)>
                            "Terms of Service"
                        </button>
                    </div>
                </div>
            </div>

            <PrivacyPolicy open=privacy_open />
            <TermsOfService open=terms_open />
        </footer>
    }
}
