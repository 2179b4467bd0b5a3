//! Chain session establishment
//!
//! A session is a lightweight handle proving the selected network's RPC
//! endpoint answered when the network was activated. The wallet holds one
//! session per active network and replaces it on every switch.

use async_trait::async_trait;
use tracing::debug;

use skiff_core::Network;

use crate::{Error, Result};

/// Handle to an established chain session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSession {
    /// Chain identifier of the session's network
    pub chain_id: String,
}

/// Establishes sessions against a network's RPC endpoint.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Establish a session for `network`.
    async fn establish(&self, network: &Network) -> Result<ChainSession>;
}

/// Session provider that probes the RPC `/status` endpoint.
#[derive(Debug, Clone, Default)]
pub struct RpcSessionProvider {
    http: reqwest::Client,
}

impl RpcSessionProvider {
    /// Create a provider with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionProvider for RpcSessionProvider {
    async fn establish(&self, network: &Network) -> Result<ChainSession> {
        let url = format!("{}/status", network.rpc_url.trim_end_matches('/'));
        debug!(chain_id = %network.chain_id, %url, "establishing chain session");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }
        Ok(ChainSession {
            chain_id: network.chain_id.clone(),
        })
    }
}
