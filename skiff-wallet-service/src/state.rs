//! Application state model
//!
//! The wallet holds a single state value with exactly one live variant at a
//! time. Transitions replace the whole value, so an observer sees either
//! the state before an operation or the state after it, never a partial
//! write.

use skiff_core::{Account, Asset, Network};
use skiff_net::{ChainSession, IndexerClient};

/// Payload carried by the data-bearing states.
#[derive(Debug, Clone, Default)]
pub struct WalletData {
    /// Known accounts, in insertion order
    pub accounts: Vec<Account>,
    /// Known networks, in insertion order
    pub networks: Vec<Network>,
    /// Index into `accounts`; out of range means no account selected
    pub active_account_index: usize,
    /// Index into `networks`; out of range means no network selected
    pub active_network_index: usize,
    /// Session for the active network, once established
    pub session: Option<ChainSession>,
    /// Indexer client for the active network, once built
    pub indexer: Option<IndexerClient>,
}

impl WalletData {
    /// The selected account, if the active index is in range.
    pub fn active_account(&self) -> Option<&Account> {
        self.accounts.get(self.active_account_index)
    }

    /// The selected network, if the active index is in range.
    pub fn active_network(&self) -> Option<&Network> {
        self.networks.get(self.active_network_index)
    }

    /// The selected asset of the selected account.
    pub fn active_asset(&self) -> Option<&Asset> {
        self.active_account().and_then(Account::active_asset)
    }
}

/// Application lifecycle state.
#[derive(Debug, Clone, Default)]
pub enum AppState {
    /// Startup in progress, nothing loaded yet
    #[default]
    Loading,

    /// Steady state, fully usable
    DataLoaded(WalletData),

    /// A network switch is in flight; previous data retained for display
    NetworkLoading {
        /// Data from before the switch began
        last_known: WalletData,
    },

    /// Network init or switch failed; previous data retained
    NetworkError {
        /// Data from before the failed attempt
        last_known: WalletData,
        /// What went wrong, for display
        message: String,
    },

    /// Unrecoverable load failure, no prior data
    Error {
        /// What went wrong, for display
        message: String,
    },
}

impl AppState {
    /// The data payload of this state, if it carries one.
    ///
    /// `NetworkLoading` and `NetworkError` expose the data they retain, so
    /// the UI keeps rendering the last good view while a switch is in
    /// flight or after it failed.
    pub fn last_known_data(&self) -> Option<&WalletData> {
        match self {
            AppState::DataLoaded(data) => Some(data),
            AppState::NetworkLoading { last_known }
            | AppState::NetworkError { last_known, .. } => Some(last_known),
            AppState::Loading | AppState::Error { .. } => None,
        }
    }

    /// Known accounts, empty when no data is loaded.
    pub fn accounts(&self) -> &[Account] {
        self.last_known_data()
            .map(|data| data.accounts.as_slice())
            .unwrap_or(&[])
    }

    /// Known networks, empty when no data is loaded.
    pub fn networks(&self) -> &[Network] {
        self.last_known_data()
            .map(|data| data.networks.as_slice())
            .unwrap_or(&[])
    }

    /// Active account index, absent when no data is loaded.
    pub fn active_account_index(&self) -> Option<usize> {
        self.last_known_data().map(|data| data.active_account_index)
    }

    /// Active network index, absent when no data is loaded.
    pub fn active_network_index(&self) -> Option<usize> {
        self.last_known_data().map(|data| data.active_network_index)
    }

    /// The selected account, if any.
    pub fn active_account(&self) -> Option<&Account> {
        self.last_known_data().and_then(WalletData::active_account)
    }

    /// The selected network, if any.
    pub fn active_network(&self) -> Option<&Network> {
        self.last_known_data().and_then(WalletData::active_network)
    }

    /// The selected asset of the selected account, if any.
    pub fn active_asset(&self) -> Option<&Asset> {
        self.last_known_data().and_then(WalletData::active_asset)
    }
}

/// New active index after deleting element `deleted` from a list that now
/// has `new_len` elements.
///
/// Deleting ahead of the active element shifts it left by one; deleting the
/// active element itself deselects by parking the index one past the new
/// end; deletions behind it leave the same logical element selected. An
/// already out-of-range (none selected) index stays out of range.
pub fn repaired_active_index(deleted: usize, active: usize, new_len: usize) -> usize {
    if deleted < active {
        active - 1
    } else if deleted == active {
        new_len
    } else {
        active
    }
}
