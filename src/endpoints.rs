//! Endpoint Registry
//!
//! Maps logical endpoint names (and optional sub-keys) to absolute URLs
//! against the configured content API base.

use std::collections::BTreeMap;
use thiserror::Error;

/// Default content API base URL
pub const DEFAULT_API_BASE: &str = "https://abdulraheem-api.vercel.app/api";

/// A registered endpoint: either a flat path or a group of named paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Path(&'static str),
    Group(BTreeMap<&'static str, &'static str>),
}

impl Endpoint {
    fn group(entries: &[(&'static str, &'static str)]) -> Self {
        Endpoint::Group(entries.iter().copied().collect())
    }
}

/// Errors raised by endpoint resolution
///
/// An unknown key means the UI and its own registry disagree, so callers
/// treat this as a programming error rather than a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Invalid endpoint: {key}")]
    UnknownEndpoint { key: String },

    #[error("Invalid endpoint: {key}.{sub_key}")]
    UnknownSubEndpoint { key: String, sub_key: String },
}

impl EndpointError {
    fn unknown(key: &str, sub_key: Option<&str>) -> Self {
        match sub_key {
            Some(sub_key) => EndpointError::UnknownSubEndpoint {
                key: key.to_string(),
                sub_key: sub_key.to_string(),
            },
            None => EndpointError::UnknownEndpoint {
                key: key.to_string(),
            },
        }
    }
}

/// Static endpoint registry bound to an API base URL
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    registry: BTreeMap<&'static str, Endpoint>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    /// Build the registry for the given base URL (trailing slashes trimmed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut registry = BTreeMap::new();
        registry.insert("about", Endpoint::Path("/about"));
        registry.insert("skills", Endpoint::Path("/skills"));
        registry.insert(
            "skills/additional-technologies",
            Endpoint::Path("/skills/additional-technologies"),
        );
        registry.insert("projects", Endpoint::Path("/projects"));
        registry.insert("projects/settings", Endpoint::Path("/projects/settings"));
        registry.insert("contact", Endpoint::Path("/contact"));
        registry.insert("contactSettings", Endpoint::Path("/contact/settings"));
        registry.insert("footer", Endpoint::Path("/footer"));
        registry.insert("images", Endpoint::Path("/images"));
        registry.insert(
            "resume",
            Endpoint::group(&[("info", "/resume/info"), ("download", "/resume/download")]),
        );
        registry.insert(
            "analytics",
            Endpoint::group(&[("trackView", "/analytics/track-view")]),
        );

        Self { base_url, registry }
    }

    /// The API base URL every endpoint is joined onto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a raw path onto the base URL
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Resolve a logical key (and optional sub-key) to an absolute URL.
    ///
    /// A sub-key is looked up first when the key names a group. A flat path
    /// ignores any sub-key. Groups without a matching sub-key fail.
    pub fn resolve(&self, key: &str, sub_key: Option<&str>) -> Result<String, EndpointError> {
        let endpoint = self.registry.get(key);

        if let (Some(sub), Some(Endpoint::Group(paths))) = (sub_key, endpoint) {
            if let Some(path) = paths.get(sub) {
                return Ok(self.api_url(path));
            }
        }

        match endpoint {
            Some(Endpoint::Path(path)) => Ok(self.api_url(path)),
            _ => Err(EndpointError::unknown(key, sub_key)),
        }
    }

    /// URL for downloading (or previewing) the resume with the given id
    pub fn resume_download_url(&self, id: &str) -> Result<String, EndpointError> {
        let base = self.resolve("resume", Some("download"))?;
        Ok(format!("{}/{}", base, urlencoding::encode(id)))
    }

    /// Absolute URL for a project image.
    ///
    /// Uploaded images are served outside the API prefix, so relative paths
    /// join the `images` URL with its first `/api` removed.
    pub fn image_url(&self, image: &str) -> Result<String, EndpointError> {
        if image.starts_with("http://") || image.starts_with("https://") || image.starts_with("data:") {
            return Ok(image.to_string());
        }
        let base = self.resolve("images", None)?.replacen("/api", "", 1);
        Ok(format!("{}/{}", base, image.trim_start_matches('/')))
    }

    /// All registered logical keys, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.keys().copied()
    }
}
