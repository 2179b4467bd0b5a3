//! Shared indexer client construction
//!
//! The wallet keeps one lazily built HTTP client keyed by the active
//! network's indexer URL. The cache is rebuilt only when the URL changes,
//! and construction holds the lock so two callers racing on the same URL
//! build at most one client.

use parking_lot::Mutex;
use tracing::info;

use crate::{IndexerClient, Result};

/// Lazily built, URL-keyed provider of [`IndexerClient`] handles.
#[derive(Debug, Default)]
pub struct TransportProvider {
    current: Mutex<Option<IndexerClient>>,
}

#[allow(dead_code)]
fn _assert_transport_provider_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportProvider>();
}

impl TransportProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the client for `base_url`, building one on first use or when the
    /// URL changed since the last call.
    pub fn client(&self, base_url: &str) -> Result<IndexerClient> {
        let mut current = self.current.lock();
        if let Some(client) = current.as_ref() {
            if client.base_url().trim_end_matches('/') == base_url.trim_end_matches('/') {
                return Ok(client.clone());
            }
        }
        info!(%base_url, "building indexer client");
        let client = IndexerClient::new(base_url)?;
        *current = Some(client.clone());
        Ok(client)
    }
}
