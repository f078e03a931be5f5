//! Remote Sections
//!
//! Every page section follows the same contract: start in `Loading`, issue
//! one GET on mount, replace the defaults wholesale with the envelope's
//! `data` when it arrives, and otherwise keep the defaults. Failures are
//! logged and never surfaced; the section always ends up `Ready`.

mod catalog;

pub use catalog::{
    about, active_sorted, additional_technologies, all_projects, contact_settings, footer, hero,
    projects, projects_settings, resume_info, skills, Ranked,
};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoints::{EndpointError, Endpoints};
use crate::transport::{fetch_envelope, ContentTransport, FetchError};

/// Which envelopes count as carrying content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Any envelope with a `data` field
    DataPresent,
    /// Only envelopes with `success: true` and a `data` field
    SuccessfulData,
}

/// Lifecycle of a mounted section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "lowercase")]
pub enum SectionState<T> {
    Loading,
    Ready(T),
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            SectionState::Loading => None,
            SectionState::Ready(content) => Some(content),
        }
    }
}

/// Static description of one section: where it loads from and what it
/// shows when loading fails
#[derive(Debug, Clone)]
pub struct SectionSpec<T> {
    pub name: &'static str,
    pub key: &'static str,
    pub sub_key: Option<&'static str>,
    pub defaults: T,
    pub acceptance: Acceptance,
    pub transform: Option<fn(T) -> T>,
}

impl<T> SectionSpec<T> {
    pub fn new(name: &'static str, key: &'static str, defaults: T) -> Self {
        Self {
            name,
            key,
            sub_key: None,
            defaults,
            acceptance: Acceptance::DataPresent,
            transform: None,
        }
    }

    pub fn sub_key(mut self, sub_key: &'static str) -> Self {
        self.sub_key = Some(sub_key);
        self
    }

    pub fn require_success(mut self) -> Self {
        self.acceptance = Acceptance::SuccessfulData;
        self
    }

    pub fn transform(mut self, transform: fn(T) -> T) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// A section bound to its resolved endpoint, with its own loading state
#[derive(Debug, Clone)]
pub struct RemoteSection<T> {
    spec: SectionSpec<T>,
    url: String,
    state: SectionState<T>,
}

impl<T> RemoteSection<T>
where
    T: DeserializeOwned + Clone,
{
    /// Bind a spec to the registry. Unknown endpoints fail here, before any
    /// request is made.
    pub fn new(spec: SectionSpec<T>, endpoints: &Endpoints) -> Result<Self, EndpointError> {
        let url = endpoints.resolve(spec.key, spec.sub_key)?;
        Ok(Self {
            spec,
            url,
            state: SectionState::Loading,
        })
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn defaults(&self) -> &T {
        &self.spec.defaults
    }

    pub fn state(&self) -> &SectionState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Content once ready
    pub fn content(&self) -> Option<&T> {
        self.state.content()
    }

    pub fn into_state(self) -> SectionState<T> {
        self.state
    }

    /// Perform the GET and decode the envelope.
    ///
    /// `Ok` carries either the (transformed) server payload or, when the
    /// envelope has no acceptable `data`, a copy of the defaults.
    pub async fn fetch<C>(&self, transport: &C) -> Result<T, FetchError>
    where
        C: ContentTransport + ?Sized,
    {
        let envelope = fetch_envelope::<T, C>(transport, &self.url).await?;

        let data = match self.spec.acceptance {
            Acceptance::DataPresent => envelope.data,
            Acceptance::SuccessfulData => envelope.into_successful(),
        };

        Ok(match data {
            Some(data) => match self.spec.transform {
                Some(transform) => transform(data),
                None => data,
            },
            None => {
                tracing::debug!(section = self.spec.name, "No content in response, keeping defaults");
                self.spec.defaults.clone()
            }
        })
    }

    /// Collapse a fetch outcome into displayable content, logging failures
    pub fn settle(&self, outcome: Result<T, FetchError>) -> T {
        outcome.unwrap_or_else(|e| {
            tracing::error!(section = self.spec.name, url = %self.url, error = %e, "Error fetching section content");
            self.spec.defaults.clone()
        })
    }

    /// Load once. Later calls on an already settled section do nothing.
    pub async fn load<C>(&mut self, transport: &C) -> &T
    where
        C: ContentTransport + ?Sized,
    {
        if let SectionState::Loading = self.state {
            let outcome = self.fetch(transport).await;
            self.state = SectionState::Ready(self.settle(outcome));
        }

        self.state.content().unwrap_or(&self.spec.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AboutContent, Project};
    use crate::transport::fakes::{FixedTransport, HangingTransport, OfflineTransport};
    use std::time::Duration;

    fn about_section() -> RemoteSection<AboutContent> {
        RemoteSection::new(about(), &Endpoints::new("http://test/api")).unwrap()
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let section = about_section();
        assert!(section.is_loading());
        assert!(section.content().is_none());
        assert_eq!(section.url(), "http://test/api/about");
    }

    #[tokio::test]
    async fn test_success_replaces_defaults_wholesale() {
        let transport = FixedTransport::new(200, r#"{"success": true, "data": {"aboutText": "Hello"}}"#);
        let mut section = about_section();

        let content = section.load(&transport).await.clone();
        assert_eq!(content.about_text, "Hello");
        // No field-level merge with the defaults
        assert_eq!(content.projects_completed, "");
        assert!(!section.is_loading());
    }

    #[tokio::test]
    async fn test_non_ok_keeps_defaults() {
        let transport = FixedTransport::new(500, r#"{"success": false, "data": {"aboutText": "x"}}"#);
        let mut section = about_section();

        section.load(&transport).await;
        assert_eq!(section.state(), &SectionState::Ready(AboutContent::default()));
    }

    #[tokio::test]
    async fn test_malformed_json_keeps_defaults() {
        let transport = FixedTransport::new(200, "<!doctype html>");
        let mut section = about_section();

        assert_eq!(section.load(&transport).await, &AboutContent::default());
    }

    #[tokio::test]
    async fn test_network_error_keeps_defaults() {
        let mut section = about_section();
        assert_eq!(section.load(&OfflineTransport).await, &AboutContent::default());
    }

    #[tokio::test]
    async fn test_missing_data_keeps_defaults() {
        let transport = FixedTransport::new(200, r#"{"success": true}"#);
        let mut section = about_section();

        assert_eq!(section.load(&transport).await, &AboutContent::default());
    }

    #[tokio::test]
    async fn test_loads_exactly_once() {
        let transport = FixedTransport::new(200, r#"{"data": {"aboutText": "Once"}}"#);
        let mut section = about_section();

        section.load(&transport).await;
        section.load(&transport).await;
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_hung_fetch_stays_loading() {
        let mut section = about_section();

        let result = tokio::time::timeout(Duration::from_millis(50), section.load(&HangingTransport)).await;
        assert!(result.is_err());
        assert!(section.is_loading());
    }

    #[tokio::test]
    async fn test_projects_filtered_and_sorted() {
        let transport = FixedTransport::new(
            200,
            r#"{"success": true, "data": [
                {"_id": "a", "title": "A", "order": 2, "status": "active"},
                {"_id": "b", "title": "B", "order": 1, "status": "active"},
                {"_id": "c", "title": "C", "order": 5, "status": "inactive"}
            ]}"#,
        );
        let mut section =
            RemoteSection::new(projects(), &Endpoints::new("http://test/api")).unwrap();

        let orders: Vec<i64> = section.load(&transport).await.iter().map(|p: &Project| p.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_resume_requires_success() {
        let endpoints = Endpoints::new("http://test/api");

        let transport = FixedTransport::new(200, r#"{"success": false, "data": {"id": "r1"}}"#);
        let mut section = RemoteSection::new(resume_info(), &endpoints).unwrap();
        assert_eq!(section.load(&transport).await, &None);

        let transport = FixedTransport::new(200, r#"{"success": true, "data": {"id": "r1", "originalName": "cv.pdf"}}"#);
        let mut section = RemoteSection::new(resume_info(), &endpoints).unwrap();
        let resume = section.load(&transport).await.clone().unwrap();
        assert_eq!(resume.original_name, "cv.pdf");
        assert_eq!(section.url(), "http://test/api/resume/info");
    }

    #[test]
    fn test_unknown_endpoint_fails_fast() {
        let spec = SectionSpec::new("blog", "blog", Vec::<String>::new());
        let err = RemoteSection::new(spec, &Endpoints::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid endpoint: blog");
    }
}
