//! # Folio
//!
//! Content fetch-and-render layer for a single-owner portfolio site. Every
//! visible section is backed by a remote JSON endpoint, with hard-coded
//! defaults shown whenever the content API is slow, broken, or empty.
//!
//! ## Features
//!
//! - **Endpoint registry**: logical keys resolved against one API base
//! - **Section loaders**: one GET per section, silent fallback to defaults
//! - **Contact form**: Idle → Submitting → Success/Error submission flow
//! - **View beacon**: fire-and-forget page views with a persisted session id
//! - **Scroll state**: reading progress and the active navigation section
//!
//! ## Modules
//!
//! - [`endpoints`]: Endpoint registry and URL resolution
//! - [`content`]: Section content shapes and their defaults
//! - [`transport`]: The network seam, with a reqwest implementation
//! - [`section`]: Generic remote section loader and the page's sections
//! - [`contact`]: Contact form state and submission
//! - [`tracking`]: Page-view beacon and session storage
//! - [`scroll`]: Scroll progress and active-section detection
//! - [`page`]: Home page composition
//! - `config`, `fixture`: native-only configuration and local content server
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::{Endpoints, HomePage, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoints = Endpoints::default();
//!     let transport = HttpTransport::new();
//!
//!     let snapshot = HomePage::new(&endpoints)?.mount(&transport).await;
//!     println!("{} projects on the home page", snapshot.home_projects().len());
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod contact;
pub mod content;
pub mod endpoints;
#[cfg(feature = "native")]
pub mod fixture;
pub mod page;
pub mod scroll;
pub mod section;
pub mod tracking;
pub mod transport;

// Re-export top-level types for convenience
pub use endpoints::{Endpoint, EndpointError, Endpoints, DEFAULT_API_BASE};

pub use content::{
    AboutContent, ContactSettings, Envelope, FooterContent, HeroContent, Project,
    ProjectsSettings, ResumeInfo, Skill, SkillCategory,
};

pub use transport::{ContentTransport, FetchError, FetchResult, HttpTransport, TransportResponse};

pub use section::{RemoteSection, SectionSpec, SectionState};

pub use contact::{ContactField, ContactForm, ContactSubmitter, SubmitStatus};

pub use tracking::{KeyValueStore, MemoryStore, StoreError, TrackError, ViewTracker};

pub use scroll::{ScrollMetrics, ScrollState};

pub use page::{HomePage, PageSnapshot};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use fixture::{FixtureError, FixtureState};
