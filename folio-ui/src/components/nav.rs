//! Navigation Component
//!
//! Fixed header with in-page section links. On the home page the link for
//! the section currently in view is highlighted.

use folio::scroll::NAV_SECTIONS;
use leptos::*;
use leptos_router::*;

use crate::state::use_scroll_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let scroll = use_scroll_state();
    let location = use_location();
    let on_home = move || location.pathname.get() == "/";
    let (menu_open, set_menu_open) = create_signal(false);

    let header_class = move || {
        let base = "fixed top-1 left-0 right-0 z-50 transition-colors duration-300";
        if scroll.get().scrolled {
            format!("{} bg-gray-900/95 backdrop-blur shadow-lg", base)
        } else {
            format!("{} bg-transparent", base)
        }
    };

    view! {
        <nav class=header_class>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold text-white">"Portfolio"</A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_SECTIONS
                            .iter()
                            .map(|id| view! { <SectionLink id=*id on_home=Signal::derive(on_home) /> })
                            .collect_view()}
                    </div>

                    // Mobile menu toggle
                    <button
                        type="button"
                        class="md:hidden text-gray-300 hover:text-white"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                {move || {
                    if menu_open.get() {
                        view! {
                            <div class="md:hidden pb-4 flex flex-col space-y-1" on:click=move |_| set_menu_open.set(false)>
                                {NAV_SECTIONS
                                    .iter()
                                    .map(|id| view! { <SectionLink id=*id on_home=Signal::derive(on_home) /> })
                                    .collect_view()}
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </nav>
    }
}

/// Link to one page section
#[component]
fn SectionLink(id: &'static str, on_home: Signal<bool>) -> impl IntoView {
    let scroll = use_scroll_state();

    let href = move || {
        if on_home.get() {
            format!("#{}", id)
        } else {
            format!("/#{}", id)
        }
    };

    let class = move || {
        let base = "px-4 py-2 rounded-lg transition-colors";
        if on_home.get() && scroll.get().active_section == id {
            format!("{} text-blue-400", base)
        } else {
            format!("{} text-gray-300 hover:text-white", base)
        }
    };

    view! {
        <a href=href class=class>{label(id)}</a>
    }
}

fn label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
