//! Wallet data model
//!
//! Accounts, networks, and the assets an account holds. Entities are plain
//! values: edits replace a whole element, they never mutate one in place.

use serde::{Deserialize, Serialize};

/// Display name given to user-added networks.
pub const DEFAULT_NETWORK_NAME: &str = "Custom Network";

/// Balance display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Show the transparent pool only
    Transparent,
    /// Show the shielded pool only
    Shielded,
    /// No single pool selected; show the combined total
    Indeterminate,
}

/// Per-pool balances of a single asset, in major units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Transparent pool balance
    pub transparent: f64,
    /// Shielded pool balance
    pub shielded: f64,
}

impl Balance {
    /// The amount shown under the given display mode.
    pub fn amount(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Transparent => self.transparent,
            Mode::Shielded => self.shielded,
            Mode::Indeterminate => self.transparent + self.shielded,
        }
    }
}

/// A token held by an account.
///
/// `address` is the matching key when reconciling against fetched balance
/// records; `name` is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Display name
    pub name: String,
    /// On-chain token address
    pub address: String,
    /// Current balances
    pub balances: Balance,
}

/// A wallet account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Display name; must be non-empty for the account to be persistable
    pub alias: String,
    /// Transparent address
    pub address: String,
    /// Default shielded payment address
    pub default_pay_addr: String,
    /// Held assets, in insertion order
    pub assets: Vec<Asset>,
    /// Index into `assets`; out of range means no asset selected
    pub active_asset_index: usize,
    /// Estimated pending shielding rewards, non-negative
    pub est_rewards: f64,
}

impl Account {
    /// The selected asset, if the active index is in range.
    pub fn active_asset(&self) -> Option<&Asset> {
        self.assets.get(self.active_asset_index)
    }

    /// Whether this account may be written to storage.
    pub fn is_persistable(&self) -> bool {
        !self.alias.is_empty()
    }
}

/// A chain the wallet can connect to.
///
/// All fields are opaque strings; `chain_id` is a soft identity key only,
/// no uniqueness is enforced across the network list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Display name
    pub name: String,
    /// Chain identifier
    pub chain_id: String,
    /// RPC endpoint
    pub rpc_url: String,
    /// Indexer endpoint used for balance queries
    pub indexer_url: String,
    /// MASP indexer endpoint
    pub masp_indexer_url: String,
}

impl Network {
    /// A user-supplied network carrying the default display name.
    pub fn custom(
        chain_id: impl Into<String>,
        rpc_url: impl Into<String>,
        indexer_url: impl Into<String>,
        masp_indexer_url: impl Into<String>,
    ) -> Self {
        Self {
            name: DEFAULT_NETWORK_NAME.to_string(),
            chain_id: chain_id.into(),
            rpc_url: rpc_url.into(),
            indexer_url: indexer_url.into(),
            masp_indexer_url: masp_indexer_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(transparent: f64, shielded: f64) -> Asset {
        Asset {
            name: "TOK".to_string(),
            address: "tnam1token".to_string(),
            balances: Balance {
                transparent,
                shielded,
            },
        }
    }

    #[test]
    fn test_balance_amount_by_mode() {
        let balance = Balance {
            transparent: 10.0,
            shielded: 2.5,
        };
        assert_eq!(balance.amount(Mode::Transparent), 10.0);
        assert_eq!(balance.amount(Mode::Shielded), 2.5);
        assert_eq!(balance.amount(Mode::Indeterminate), 12.5);
    }

    #[test]
    fn test_active_asset_out_of_range_is_none() {
        let account = Account {
            alias: "main".to_string(),
            address: "tnam1acct".to_string(),
            default_pay_addr: "znam1pay".to_string(),
            assets: vec![asset(1.0, 0.0)],
            active_asset_index: 1,
            est_rewards: 0.0,
        };
        assert!(account.active_asset().is_none());
    }

    #[test]
    fn test_persistable_requires_alias() {
        let mut account = Account {
            alias: String::new(),
            address: "tnam1acct".to_string(),
            default_pay_addr: "znam1pay".to_string(),
            assets: vec![],
            active_asset_index: 0,
            est_rewards: 0.0,
        };
        assert!(!account.is_persistable());
        account.alias = "main".to_string();
        assert!(account.is_persistable());
    }

    #[test]
    fn test_custom_network_default_name() {
        let network = Network::custom("chain-1", "http://rpc", "http://indexer", "http://masp");
        assert_eq!(network.name, DEFAULT_NETWORK_NAME);
        assert_eq!(network.chain_id, "chain-1");
    }
}
