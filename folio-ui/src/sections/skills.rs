//! Skills Section

use folio::section::{self, SectionState};
use folio::SkillCategory;
use leptos::*;

use crate::components::SectionLoading;
use crate::state::use_section;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = use_section(section::skills());
    let extra = use_section(section::additional_technologies());

    move || match skills.get() {
        SectionState::Loading => view! { <SectionLoading id="skills" /> }.into_view(),
        SectionState::Ready(categories) => view! {
            <section id="skills" class="py-20">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center mb-12">"Skills & Expertise"</h2>

                    {if categories.is_empty() {
                        view! {
                            <p class="text-center text-gray-400">"No skills available at the moment."</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {categories
                                    .into_iter()
                                    .map(|category| view! { <CategoryCard category=category /> })
                                    .collect_view()}
                            </div>
                        }.into_view()
                    }}

                    {move || {
                        let techs = extra.get().content().cloned().unwrap_or_default();
                        (!techs.is_empty()).then(|| view! {
                        <div class="mt-12 text-center">
                            <h3 class="text-xl font-semibold mb-4">"Additional Technologies"</h3>
                            <div class="flex flex-wrap justify-center gap-2">
                                {techs
                                    .into_iter()
                                    .map(|tech| view! {
                                        <span class="px-3 py-1 bg-gray-800 rounded-full text-sm text-gray-300">{tech}</span>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        })
                    }}
                </div>
            </section>
        }
        .into_view(),
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6" data-icon=category.icon()>
            <h3 class="text-xl font-semibold mb-4">{category.category.clone()}</h3>
            <div class="space-y-4">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| {
                        let width = format!("{}%", skill.bar_width());
                        view! {
                            <div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span>{skill.name}</span>
                                    <span class="text-gray-400">{width.clone()}</span>
                                </div>
                                <div class="h-2 bg-gray-700 rounded-full">
                                    <div class="h-2 bg-blue-500 rounded-full" style:width=width />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
