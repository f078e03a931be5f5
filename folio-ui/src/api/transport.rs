//! Browser Transport
//!
//! `fetch`-backed [`ContentTransport`] built on gloo-net.

use async_trait::async_trait;
use folio::{ContentTransport, FetchError, TransportResponse};
use gloo_net::http::{Request, Response};

/// Issues requests through the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

async fn finish(response: Response) -> Result<TransportResponse, FetchError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok(TransportResponse::new(status, body))
}

#[async_trait(?Send)]
impl ContentTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = Request::get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        finish(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, FetchError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| FetchError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        finish(response).await
    }
}
