//! Page View Beacon
//!
//! Renders nothing. Posts one view for `page` when mounted; any failure is
//! swallowed by the tracker.

use folio::ViewTracker;
use leptos::*;

use crate::api::{self, GlooTransport};
use crate::state::LocalStorageStore;

#[component]
pub fn PageView(
    #[prop(default = folio::tracking::DEFAULT_PAGE)]
    page: &'static str,
) -> impl IntoView {
    match ViewTracker::new(&api::endpoints(), LocalStorageStore) {
        Ok(tracker) => spawn_local(async move {
            tracker.track(&GlooTransport, page).await;
        }),
        Err(e) => web_sys::console::error_1(&format!("Tracking endpoint error: {}", e).into()),
    }
}
