//! State Management
//!
//! Section loading, scroll tracking and browser storage.

pub mod scroll;
pub mod section;
pub mod storage;

pub use scroll::{provide_scroll_state, use_scroll_state};
pub use section::use_section;
pub use storage::LocalStorageStore;
