//! View Tracking
//!
//! Best-effort page-view beacon. Each mount posts `{page, sessionId}` to the
//! analytics endpoint; the session id is generated once and persisted in an
//! injected [`KeyValueStore`]. Failures are logged at debug level and
//! otherwise ignored.

mod store;

#[cfg(feature = "native")]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore, StoreError};

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::endpoints::{EndpointError, Endpoints};
use crate::transport::{post, ContentTransport, FetchError};

/// Storage key holding the anonymous session id
pub const SESSION_KEY: &str = "sessionId";

/// Page name used when none is given
pub const DEFAULT_PAGE: &str = "home";

/// Longest base-36 rendering of a `u64`
const FRAGMENT_MAX_LEN: usize = 13;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Track request failed: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackViewRequest {
    pub page: String,
    pub session_id: String,
}

/// Render a number in base 36 using `0-9a-z`
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(FRAGMENT_MAX_LEN);
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// A new session id: two random base-36 fragments, concatenated.
///
/// Collisions between visitors are possible and tolerated.
pub fn generate_session_id<R: Rng>(rng: &mut R) -> String {
    let mut id = to_base36(rng.gen());
    id.push_str(&to_base36(rng.gen()));
    id
}

/// The stored session id, or a freshly generated one written back to the store
pub fn session_id<S, R>(store: &S, rng: &mut R) -> Result<String, StoreError>
where
    S: KeyValueStore + ?Sized,
    R: Rng,
{
    let id = match store.get(SESSION_KEY) {
        Some(id) if !id.is_empty() => id,
        _ => generate_session_id(rng),
    };
    store.set(SESSION_KEY, &id)?;
    Ok(id)
}

/// Page-level view beacon
#[derive(Debug)]
pub struct ViewTracker<S> {
    url: String,
    store: S,
}

impl<S: KeyValueStore> ViewTracker<S> {
    pub fn new(endpoints: &Endpoints, store: S) -> Result<Self, EndpointError> {
        Ok(Self {
            url: endpoints.resolve("analytics", Some("trackView"))?,
            store,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Post one view, returning the session id that was reported
    pub async fn try_track<C>(&self, transport: &C, page: &str) -> Result<String, TrackError>
    where
        C: ContentTransport + ?Sized,
    {
        let session_id = session_id(&self.store, &mut rand::thread_rng())?;

        let body = TrackViewRequest {
            page: page.to_string(),
            session_id: session_id.clone(),
        };
        post(transport, &self.url, &body).await?;

        Ok(session_id)
    }

    /// Fire-and-forget: failures never reach the caller
    pub async fn track<C>(&self, transport: &C, page: &str)
    where
        C: ContentTransport + ?Sized,
    {
        if let Err(e) = self.try_track(transport, page).await {
            tracing::debug!(page, error = %e, "View tracking failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fakes::{FixedTransport, OfflineTransport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_base36(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_generated_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_session_id(&mut rng);
        assert!(is_base36(&id));
        assert!(id.len() >= 2 && id.len() <= 2 * FRAGMENT_MAX_LEN);
    }

    #[test]
    fn test_session_id_persisted_and_reused() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(1);

        let first = session_id(&store, &mut rng).unwrap();
        assert_eq!(store.get(SESSION_KEY), Some(first.clone()));

        let second = session_id(&store, &mut rng).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_track_posts_page_and_session() {
        let transport = FixedTransport::new(200, r#"{"success": true}"#);
        let tracker = ViewTracker::new(&Endpoints::new("http://test/api"), MemoryStore::new()).unwrap();

        let first = tracker.try_track(&transport, "home").await.unwrap();
        let second = tracker.try_track(&transport, "projects").await.unwrap();
        assert_eq!(first, second);
        assert!(is_base36(&first));

        let posted = transport.posted.borrow();
        assert_eq!(posted[0].0, "http://test/api/analytics/track-view");
        assert_eq!(posted[0].1, serde_json::json!({"page": "home", "sessionId": first}));
        assert_eq!(posted[1].1["page"], "projects");
    }

    #[tokio::test]
    async fn test_track_swallows_failures() {
        let tracker = ViewTracker::new(&Endpoints::default(), MemoryStore::new()).unwrap();
        tracker.track(&OfflineTransport, DEFAULT_PAGE).await;

        // The id is still persisted even though the beacon failed
        assert!(tracker.store().get(SESSION_KEY).is_some());

        let transport = FixedTransport::new(503, "");
        assert!(matches!(
            tracker.try_track(&transport, DEFAULT_PAGE).await,
            Err(TrackError::Fetch(FetchError::Status { status: 503, .. }))
        ));
    }
}
