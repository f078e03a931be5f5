//! Projects Page
//!
//! Every project the server returns, in its order.

use folio::section::{self, SectionState};
use leptos::*;
use leptos_router::*;

use crate::components::{Loading, PageView};
use crate::sections::{Footer, ProjectCard};
use crate::state::use_section;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = use_section(section::all_projects());

    view! {
        <PageView page="projects" />
        <section class="pt-28 pb-20">
            <div class="container mx-auto px-4">
                <A href="/" class="text-blue-400 hover:text-blue-300">"← Back to Home"</A>
                <h1 class="text-5xl font-bold mt-6 mb-12">"All Projects"</h1>

                {move || match projects.get() {
                    SectionState::Loading => view! { <Loading /> }.into_view(),
                    SectionState::Ready(list) if list.is_empty() => view! {
                        <p class="text-gray-400">"No projects available at the moment."</p>
                    }
                    .into_view(),
                    SectionState::Ready(list) => view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {list
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </section>
        <Footer />
    }
}
