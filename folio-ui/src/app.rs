//! App Root Component
//!
//! Main application component with routing and the page chrome.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, ScrollProgress};
use crate::pages::{Home, Projects};
use crate::state::scroll::provide_scroll_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Scroll progress and active section, shared by the nav and progress bar
    provide_scroll_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <ScrollProgress />
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/projects" view=Projects />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-32 text-center">
            <h1 class="text-6xl font-bold text-gray-600 mb-4">"404"</h1>
            <p class="text-xl text-gray-400 mb-8">"Page not found"</p>
            <A href="/" class="text-blue-400 hover:text-blue-300">"Back home"</A>
        </div>
    }
}
