//! UI Components
//!
//! Page chrome and small reusable pieces.

pub mod legal;
pub mod loading;
pub mod nav;
pub mod page_view;
pub mod scroll_progress;

pub use legal::{PrivacyPolicy, TermsOfService};
pub use loading::{Loading, SectionLoading};
pub use nav::Nav;
pub use page_view::PageView;
pub use scroll_progress::ScrollProgress;
