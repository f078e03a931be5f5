//! Section Loading
//!
//! Binds a [`SectionSpec`] to a reactive signal. The section starts out
//! `Loading`, fetches once when the component mounts, and settles on either
//! the server's content or its defaults.

use folio::section::{RemoteSection, SectionSpec, SectionState};
use leptos::*;
use serde::de::DeserializeOwned;

use crate::api::{self, GlooTransport};

/// Mount a remote section and return its state signal
pub fn use_section<T>(spec: SectionSpec<T>) -> RwSignal<SectionState<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let state = create_rw_signal(SectionState::Loading);

    match RemoteSection::new(spec, &api::endpoints()) {
        Ok(mut section) => {
            spawn_local(async move {
                let content = section.load(&GlooTransport).await.clone();
                // The component may have unmounted while the request was in flight
                let _ = state.try_set(SectionState::Ready(content));
            });
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Section endpoint error: {}", e).into());
        }
    }

    state
}
