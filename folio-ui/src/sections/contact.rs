//! Contact Section
//!
//! Contact details from the content API next to the contact form. The form
//! is cleared only after a successful submission.

use folio::section::{self, SectionState};
use folio::{ContactField, ContactForm, ContactSettings, ContactSubmitter, SubmitStatus};
use leptos::*;

use crate::api::{self, GlooTransport};
use crate::components::SectionLoading;
use crate::state::use_section;

#[component]
pub fn Contact() -> impl IntoView {
    let settings = use_section(section::contact_settings());

    move || match settings.get() {
        SectionState::Loading => view! { <SectionLoading id="contact" /> }.into_view(),
        SectionState::Ready(settings) => view! { <ContactBody settings=settings /> }.into_view(),
    }
}

#[component]
fn ContactBody(settings: ContactSettings) -> impl IntoView {
    let lines = settings.contact_lines();

    view! {
        <section id="contact" class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-4">{settings.contact_title}</h2>
                <p class="text-xl text-blue-400 text-center mb-2">{settings.contact_subtitle}</p>
                <p class="text-gray-400 text-center max-w-2xl mx-auto mb-12">{settings.contact_description}</p>

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {lines
                            .into_iter()
                            .map(|line| view! {
                                <a href=line.link class="flex items-center space-x-4 bg-gray-800 rounded-lg p-4 hover:bg-gray-700">
                                    <div>
                                        <div class="text-sm text-gray-500">{line.title}</div>
                                        <div class="text-gray-200">{line.value}</div>
                                    </div>
                                </a>
                            })
                            .collect_view()}
                    </div>

                    {if settings.form_enabled {
                        view! { <ContactFormView /> }.into_view()
                    } else {
                        view! {}.into_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let status = create_rw_signal(SubmitStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }

        let submitter = match ContactSubmitter::new(&api::endpoints()) {
            Ok(submitter) => submitter,
            Err(e) => {
                web_sys::console::error_1(&format!("Contact endpoint error: {}", e).into());
                status.set(SubmitStatus::Error);
                return;
            }
        };

        status.set(SubmitStatus::Submitting);
        spawn_local(async move {
            let sent = form.get_untracked();
            let outcome = submitter.attempt(&GlooTransport, &sent).await;

            let _ = form.try_update(|live| outcome.apply_to(live));
            let _ = status.try_set(outcome);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <Field form=form field=ContactField::FirstName label="First Name" />
                <Field form=form field=ContactField::LastName label="Last Name" />
            </div>
            <Field form=form field=ContactField::Email label="Email" input_type="email" />
            <Field form=form field=ContactField::Subject label="Subject" />
            <Field form=form field=ContactField::Message label="Message" multiline=true />

            <button
                type="submit"
                disabled=move || status.get().is_submitting()
                class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if status.get().is_submitting() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Sending..."</span>
                    }.into_view()
                } else {
                    view! { <span>"Send Message"</span> }.into_view()
                }}
            </button>

            {move || match status.get() {
                SubmitStatus::Success => view! {
                    <p class="text-green-400">"Thank you for your message! I'll get back to you soon."</p>
                }.into_view(),
                SubmitStatus::Error => view! {
                    <p class="text-red-400">"Sorry, there was an error sending your message. Please try again."</p>
                }.into_view(),
                _ => view! {}.into_view(),
            }}
        </form>
    }
}

/// Required input bound to one form field
#[component]
fn Field(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
    };
    let class = "w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 \
                 focus:outline-none focus:border-blue-500";

    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">{label}</span>
            {if multiline {
                view! {
                    <textarea rows=5 required=true class=class prop:value=value on:input=on_input />
                }.into_view()
            } else {
                view! {
                    <input type=input_type required=true class=class prop:value=value on:input=on_input />
                }.into_view()
            }}
        </label>
    }
}
