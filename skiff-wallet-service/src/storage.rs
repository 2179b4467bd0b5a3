//! Stored wallet data seam
//!
//! No persistence format is implemented; the trait marks the boundary a
//! real store would plug into, and [`MemoryStorage`] is the in-memory
//! stand-in the client ships with.

use async_trait::async_trait;

use skiff_core::{Account, Network, Result};

/// Accounts and networks as loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct StoredData {
    /// Stored accounts
    pub accounts: Vec<Account>,
    /// Stored networks
    pub networks: Vec<Network>,
    /// Last active account index
    pub active_account_index: usize,
    /// Last active network index
    pub active_network_index: usize,
}

/// Loads the wallet's stored accounts and networks.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the stored snapshot.
    async fn load(&self) -> Result<StoredData>;
}

/// In-memory storage yielding a fixed snapshot on every load.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: StoredData,
}

impl MemoryStorage {
    /// Storage that yields `data` on every load.
    pub fn new(data: StoredData) -> Self {
        Self { data }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> Result<StoredData> {
        Ok(self.data.clone())
    }
}
