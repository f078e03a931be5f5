//! About Section

use folio::section::{self, SectionState};
use folio::AboutContent;
use leptos::*;

use crate::components::SectionLoading;
use crate::state::use_section;

#[component]
pub fn About() -> impl IntoView {
    let about = use_section(section::about());

    move || match about.get() {
        SectionState::Loading => view! { <SectionLoading id="about" /> }.into_view(),
        SectionState::Ready(content) => view! { <AboutBody content=content /> }.into_view(),
    }
}

#[component]
fn AboutBody(content: AboutContent) -> impl IntoView {
    let stats = content.stats();
    let highlights = content.highlight_parts();
    let title = content.display_title().to_string();

    view! {
        <section id="about" class="py-20 bg-gray-800/50">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12">{title}</h2>

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <p class="text-gray-300 leading-relaxed">{content.about_text}</p>

                        <ul class="space-y-3">
                            {highlights
                                .into_iter()
                                .map(|(lead, rest)| view! {
                                    <li class="text-gray-300">
                                        <span class="font-semibold text-white">{lead}</span>
                                        ": "
                                        {rest}
                                    </li>
                                })
                                .collect_view()}
                        </ul>

                        <dl class="grid grid-cols-2 gap-4 text-sm">
                            <Detail label="Experience" value=content.experience />
                            <Detail label="Education" value=content.education />
                            <Detail label="Location" value=content.location />
                            <Detail label="Email" value=content.email />
                        </dl>
                    </div>

                    <div class="grid grid-cols-2 gap-6">
                        {stats
                            .into_iter()
                            .map(|stat| view! {
                                <div class="bg-gray-800 rounded-lg p-6 text-center">
                                    <div class="text-3xl font-bold text-blue-400">{stat.value}</div>
                                    <div class="text-gray-400 text-sm mt-2">{stat.label}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One labelled fact; hidden when the value is empty
#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    (!value.is_empty()).then(|| view! {
        <div>
            <dt class="text-gray-500">{label}</dt>
            <dd class="text-gray-200">{value}</dd>
        </div>
    })
}
