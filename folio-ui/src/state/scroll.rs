//! Scroll Tracking
//!
//! Samples the window on every scroll event (and once after the first
//! paint) and shares the derived [`ScrollState`] through context.

use folio::scroll::{self, ScrollMetrics, ScrollState};
use leptos::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
struct ScrollContext(ReadSignal<ScrollState>);

/// Start listening to scroll events and provide the state to descendants
pub fn provide_scroll_state() {
    let (state, set_state) = create_signal(ScrollState::default());
    let update = move || set_state.set(sample());

    request_animation_frame(update);
    let handle = window_event_listener(ev::scroll, move |_| update());
    on_cleanup(move || handle.remove());

    provide_context(ScrollContext(state));
}

/// Current scroll state; the default state outside a provider
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    use_context::<ScrollContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| create_signal(ScrollState::default()).0)
}

fn sample() -> ScrollState {
    let Some(window) = web_sys::window() else {
        return ScrollState::default();
    };
    let document = window.document();

    let metrics = ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height: document
            .as_ref()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
    };

    scroll::observe(&metrics, |id| {
        document
            .as_ref()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|el| el.offset_top() as f64)
    })
}
