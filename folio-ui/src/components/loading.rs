//! Loading Component
//!
//! Spinners shown while a section's content is in flight.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Full-height placeholder for a whole page section
#[component]
pub fn SectionLoading(id: &'static str) -> impl IntoView {
    view! {
        <section id=id class="min-h-[50vh] flex items-center justify-center">
            <div class="loading-spinner w-12 h-12" />
        </section>
    }
}
