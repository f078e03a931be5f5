//! API Layer
//!
//! Browser transport and endpoint configuration.

pub mod transport;

pub use transport::GlooTransport;

use folio::Endpoints;

/// Content API base baked in at build time, or the public default
pub fn api_base() -> &'static str {
    option_env!("FOLIO_API_URL").unwrap_or(folio::DEFAULT_API_BASE)
}

/// Endpoint registry for the configured API base
pub fn endpoints() -> Endpoints {
    Endpoints::new(api_base())
}
