//! Indexer API client
//!
//! Thin typed wrapper over the indexer's account endpoints.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// One transparent balance record from the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparentBalance {
    /// Token address the balance is denominated in
    pub token_address: String,
    /// Integer amount in minor units, as a decimal string
    pub min_denom_amount: String,
}

/// HTTP client bound to a single indexer endpoint.
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IndexerClient {
    /// Build a client for the given indexer base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join drops the last path segment without a trailing slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::InvalidUrl(format!("{normalized}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// The base URL this client was built for.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch the transparent balances held by `address`.
    ///
    /// `GET /api/v1/account/{address}`
    pub async fn transparent_balances(&self, address: &str) -> Result<Vec<TransparentBalance>> {
        let url = self
            .base_url
            .join(&format!("api/v1/account/{address}"))
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        debug!(%url, "fetching transparent balances");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

// Clients are interchangeable when they target the same endpoint.
impl PartialEq for IndexerClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}
