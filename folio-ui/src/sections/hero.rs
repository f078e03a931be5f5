//! Hero Section

use folio::section::{self, SectionState};
use folio::{HeroContent, ResumeInfo};
use leptos::*;

use crate::api;
use crate::components::SectionLoading;
use crate::state::use_section;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_section(section::hero());
    let resume = use_section(section::resume_info());

    move || match hero.get() {
        SectionState::Loading => view! { <SectionLoading id="home" /> }.into_view(),
        SectionState::Ready(content) => view! {
            <HeroBanner content=content resume=resume />
        }
        .into_view(),
    }
}

#[component]
fn HeroBanner(
    content: HeroContent,
    resume: RwSignal<SectionState<Option<ResumeInfo>>>,
) -> impl IntoView {
    let links = content.profile_links();

    view! {
        <section id="home" class="min-h-screen flex items-center pt-16">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-4">{content.name}</h1>
                <h2 class="text-2xl md:text-3xl text-blue-400 mb-6">{content.title}</h2>
                <p class="text-xl text-gray-300 mb-4">{content.subtitle}</p>
                <p class="text-gray-400 max-w-2xl mx-auto mb-8">{content.description}</p>

                <div class="flex flex-wrap justify-center gap-2 mb-8">
                    {content
                        .technology_tags
                        .into_iter()
                        .map(|tag| view! {
                            <span class="px-3 py-1 bg-gray-800 rounded-full text-sm text-gray-300">{tag}</span>
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-8">
                    <a href="#projects" class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold">
                        "View My Work"
                    </a>
                    <a href="#contact" class="px-6 py-3 border border-gray-600 hover:border-white rounded-lg font-semibold">
                        "Get In Touch"
                    </a>
                    {move || resume.get().content().cloned().flatten().map(|info| view! {
                        <ResumeButtons info=info />
                    })}
                </div>

                <div class="flex justify-center gap-6">
                    {links
                        .into_iter()
                        .map(|link| view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-gray-400 hover:text-white"
                            >
                                {link.name}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// View and download buttons for a published resume
#[component]
fn ResumeButtons(info: ResumeInfo) -> impl IntoView {
    let Ok(url) = api::endpoints().resume_download_url(&info.id) else {
        return view! {}.into_view();
    };

    view! {
        <a
            href=url.clone()
            target="_blank"
            rel="noopener noreferrer"
            class="px-6 py-3 border border-gray-600 hover:border-white rounded-lg font-semibold"
        >
            "View Resume"
        </a>
        <a
            href=url
            download=info.original_name
            class="px-6 py-3 border border-gray-600 hover:border-white rounded-lg font-semibold"
        >
            "Download Resume"
        </a>
    }
    .into_view()
}
