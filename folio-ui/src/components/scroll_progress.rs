//! Scroll Progress Bar

use leptos::*;

use crate::state::use_scroll_state;

/// Thin bar across the top of the viewport showing how far the page is read
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = use_scroll_state();

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 z-[60] bg-transparent">
            <div
                class="h-full bg-gradient-to-r from-blue-500 to-purple-500 transition-[width] duration-150"
                style:width=move || format!("{:.2}%", scroll.get().progress)
            />
        </div>
    }
}
