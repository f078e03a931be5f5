//! Content API Transport
//!
//! The seam between section loaders and the network. Native builds and the
//! browser build each provide a [`ContentTransport`]; tests substitute fakes.
//!
//! No request carries a timeout. A request that never settles leaves its
//! caller pending.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::content::Envelope;
use crate::endpoints::EndpointError;

/// Errors from a single content API exchange
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Status line and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, matching `Response.ok` in the browser
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`FetchError::Status`] unless the response is ok
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(FetchError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// A way of reaching the content API
///
/// Futures are not required to be `Send`: the browser event loop is
/// single-threaded and every loader runs on the task that mounted it.
#[async_trait(?Send)]
pub trait ContentTransport {
    /// Issue a GET and return whatever the server answered
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;

    /// POST a JSON body and return whatever the server answered
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, FetchError>;
}

/// GET an envelope, failing on transport errors, non-ok status, or bad JSON
pub async fn fetch_envelope<T, C>(transport: &C, url: &str) -> FetchResult<Envelope<T>>
where
    T: DeserializeOwned,
    C: ContentTransport + ?Sized,
{
    transport.get(url).await?.error_for_status()?.json()
}

/// POST a serializable body, failing on transport errors or non-ok status
pub async fn post<B, C>(transport: &C, url: &str, body: &B) -> FetchResult<TransportResponse>
where
    B: Serialize + ?Sized,
    C: ContentTransport + ?Sized,
{
    let body = serde_json::to_value(body)?;
    transport.post_json(url, &body).await?.error_for_status()
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn finish(response: reqwest::Response) -> Result<TransportResponse, FetchError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

#[async_trait(?Send)]
impl ContentTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::finish(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::finish(response).await
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Answers every request with a fixed status and body, recording calls
    pub struct FixedTransport {
        status: u16,
        body: String,
        pub calls: Cell<usize>,
        pub posted: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl FixedTransport {
        pub fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: Cell::new(0),
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContentTransport for FixedTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse, FetchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(TransportResponse::new(self.status, self.body.clone()))
        }

        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<TransportResponse, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.posted.borrow_mut().push((url.to_string(), body.clone()));
            Ok(TransportResponse::new(self.status, self.body.clone()))
        }
    }

    /// Answers by URL suffix; anything unrouted gets a 404
    pub struct RoutedTransport {
        routes: Vec<(String, u16, String)>,
    }

    impl RoutedTransport {
        pub fn new() -> Self {
            Self { routes: Vec::new() }
        }

        pub fn route(mut self, suffix: &str, status: u16, body: &str) -> Self {
            self.routes
                .push((suffix.to_string(), status, body.to_string()));
            self
        }

        fn respond(&self, url: &str) -> TransportResponse {
            self.routes
                .iter()
                .find(|(suffix, _, _)| url.ends_with(suffix.as_str()))
                .map(|(_, status, body)| TransportResponse::new(*status, body.clone()))
                .unwrap_or_else(|| TransportResponse::new(404, ""))
        }
    }

    #[async_trait(?Send)]
    impl ContentTransport for RoutedTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
            Ok(self.respond(url))
        }

        async fn post_json(
            &self,
            url: &str,
            _body: &serde_json::Value,
        ) -> Result<TransportResponse, FetchError> {
            Ok(self.respond(url))
        }
    }

    /// Never settles
    pub struct HangingTransport;

    #[async_trait(?Send)]
    impl ContentTransport for HangingTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse, FetchError> {
            std::future::pending().await
        }

        async fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<TransportResponse, FetchError> {
            std::future::pending().await
        }
    }

    /// Fails every request at the network layer
    pub struct OfflineTransport;

    #[async_trait(?Send)]
    impl ContentTransport for OfflineTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }

        async fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<TransportResponse, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_check() {
        assert!(TransportResponse::new(204, "").is_ok());
        assert!(!TransportResponse::new(304, "").is_ok());

        let err = TransportResponse::new(500, "boom").error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[test]
    fn test_parse_error_conversion() {
        let err = TransportResponse::new(200, "<html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
