//! Scroll State
//!
//! Pure computations behind the progress bar and the navigation highlight.
//! The UI feeds these from the window on every scroll event and once at
//! mount; nothing here is debounced.

use serde::Serialize;

/// Navigable sections, in page order
pub const NAV_SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Distance below the viewport top at which a section counts as reached
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;

/// Scroll distance after which the header gets its solid background
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Window measurements sampled on a scroll tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Everything derived from one scroll tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    pub progress: f64,
    pub scrolled: bool,
    pub active_section: &'static str,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            scrolled: false,
            active_section: NAV_SECTIONS[0],
        }
    }
}

/// Percentage of the scrollable height already scrolled.
///
/// A page shorter than the viewport reports 0.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    metrics.scroll_y / scrollable * 100.0
}

/// The deepest section whose top has been passed.
///
/// Scans from the last section to the first and picks the first one whose
/// offset is at or above `scroll_y + 150`. Sections without an element
/// (`offset_of` returns `None`) are skipped. Falls back to `home`.
pub fn active_section<F>(scroll_y: f64, offset_of: F) -> &'static str
where
    F: Fn(&str) -> Option<f64>,
{
    let position = scroll_y + ACTIVE_SECTION_OFFSET;

    NAV_SECTIONS
        .iter()
        .rev()
        .find(|id| offset_of(id).is_some_and(|top| top <= position))
        .copied()
        .unwrap_or(NAV_SECTIONS[0])
}

/// Recompute the full scroll state for one tick
pub fn observe<F>(metrics: &ScrollMetrics, offset_of: F) -> ScrollState
where
    F: Fn(&str) -> Option<f64>,
{
    ScrollState {
        progress: scroll_progress(metrics),
        scrolled: metrics.scroll_y > SCROLLED_THRESHOLD,
        active_section: active_section(metrics.scroll_y, offset_of),
    }
}
