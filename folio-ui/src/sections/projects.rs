//! Projects Section
//!
//! Every active project on the home page, plus the card shared with the full
//! projects page.

use folio::section::{self, SectionState};
use folio::{Project, ProjectsSettings};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::SectionLoading;
use crate::state::use_section;

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let projects = use_section(section::projects());
    let settings = use_section(section::projects_settings());

    move || match (projects.get(), settings.get()) {
        (SectionState::Ready(projects), SectionState::Ready(settings)) => view! {
            <FeaturedBody projects=projects settings=settings />
        }
        .into_view(),
        _ => view! { <SectionLoading id="projects" /> }.into_view(),
    }
}

#[component]
fn FeaturedBody(projects: Vec<Project>, settings: ProjectsSettings) -> impl IntoView {
    let external = settings.view_all_is_external();

    view! {
        <section id="projects" class="py-20 bg-gray-800/50">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-4">{settings.projects_title}</h2>
                <p class="text-gray-400 text-center max-w-2xl mx-auto mb-12">{settings.projects_subtitle}</p>

                {if projects.is_empty() {
                    view! {
                        <p class="text-center text-gray-400">"No projects available at the moment."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {projects
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()}
                        </div>
                    }.into_view()
                }}

                {settings.show_view_all_button.then(|| {
                    let class = "inline-block px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold";
                    let button = if external {
                        view! {
                            <a
                                href=settings.view_all_button_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=class
                            >
                                {settings.view_all_button_text}
                            </a>
                        }.into_view()
                    } else {
                        view! {
                            <A href=settings.view_all_button_url class=class>
                                {settings.view_all_button_text}
                            </A>
                        }.into_view()
                    };
                    view! { <div class="text-center mt-12">{button}</div> }
                })}
            </div>
        </section>
    }
}

/// Card for a single project
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let (techs, hidden) = project.card_technologies();
    let techs = techs.to_vec();
    let image = project
        .image
        .as_deref()
        .and_then(|image| api::endpoints().image_url(image).ok());

    view! {
        <article class="bg-gray-800 rounded-lg overflow-hidden flex flex-col">
            {image.map(|src| view! {
                <img src=src alt=project.title.clone() class="w-full h-48 object-cover" />
            })}

            <div class="p-6 flex-1 flex flex-col">
                <div class="flex items-center justify-between mb-2">
                    <h3 class="text-xl font-semibold">{project.title.clone()}</h3>
                    {project.featured.then(|| view! {
                        <span class="text-xs px-2 py-1 bg-blue-600 rounded-full">"Featured"</span>
                    })}
                </div>
                <p class="text-gray-400 mb-4 flex-1">{project.description.clone()}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {techs
                        .into_iter()
                        .map(|tech| view! {
                            <span class="px-2 py-1 bg-gray-700 rounded text-xs text-gray-300">{tech}</span>
                        })
                        .collect_view()}
                    {(hidden > 0).then(|| view! {
                        <span class="px-2 py-1 text-xs text-gray-500">{format!("+{}", hidden)}</span>
                    })}
                </div>

                <div class="flex gap-4 text-sm">
                    {project.github.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="text-gray-300 hover:text-white">
                            "Code"
                        </a>
                    })}
                    {project.live.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="text-blue-400 hover:text-blue-300">
                            "Live Demo"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
