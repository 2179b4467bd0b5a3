//! Wallet service
//!
//! Single-writer owner of the application state. Every operation reads and
//! replaces the state inside one publish, so observers see either the state
//! before or the state after it, never a torn value. Async transitions
//! carry a generation stamp: a result arriving after a newer operation has
//! started is discarded instead of published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use skiff_core::{Account, Asset, Network, DEFAULT_DENOM_DIVISOR};
use skiff_net::{ChainSession, IndexerClient, SessionProvider, TransportProvider};

use crate::notice::{self, Notice, NoticeReceiver, NoticeSender};
use crate::reconcile::reconcile_transparent_balances;
use crate::state::{repaired_active_index, AppState, WalletData};
use crate::storage::Storage;

/// Owner of the application state value.
pub struct WalletService {
    state: watch::Sender<AppState>,
    storage: Arc<dyn Storage>,
    sessions: Arc<dyn SessionProvider>,
    transports: TransportProvider,
    notices: NoticeSender,
    generation: AtomicU64,
}

#[allow(dead_code)]
fn _assert_wallet_service_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WalletService>();
}

impl WalletService {
    /// Create a service in the `Loading` state.
    ///
    /// The returned receiver yields transient notices (action confirmations
    /// and recoverable-failure messages) in emission order.
    pub fn new(
        storage: Arc<dyn Storage>,
        sessions: Arc<dyn SessionProvider>,
    ) -> (Self, NoticeReceiver) {
        let (state, _) = watch::channel(AppState::Loading);
        let (notices, notice_rx) = notice::channel();
        let service = Self {
            state,
            storage,
            sessions,
            transports: TransportProvider::new(),
            notices,
            generation: AtomicU64::new(0),
        };
        (service, notice_rx)
    }

    /// Subscribe to state publishes.
    ///
    /// A new subscriber observes the current value immediately; later
    /// publishes arrive in order, latest value wins.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    // ========================================================================
    // Lifecycle transitions
    // ========================================================================

    /// Load stored data and establish a session for the active network.
    ///
    /// Publishes `Loading`, then exactly one outcome: `DataLoaded` on full
    /// success, `NetworkError` when data loaded but the session could not
    /// be established (the loaded data is kept), or `Error` when the load
    /// itself failed.
    pub async fn initialize(&self) {
        let generation = self.next_generation();
        self.publish_if_current(generation, AppState::Loading);

        let stored = match self.storage.load().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "stored data load failed");
                self.publish_if_current(
                    generation,
                    AppState::Error {
                        message: format!("Failed to initialize: {e}"),
                    },
                );
                return;
            }
        };

        let mut data = WalletData {
            accounts: stored.accounts,
            networks: stored.networks,
            active_account_index: stored.active_account_index,
            active_network_index: stored.active_network_index,
            session: None,
            indexer: None,
        };

        match self.establish_for(&data, data.active_network_index).await {
            Ok((session, indexer)) => {
                info!(chain_id = %session.chain_id, "initialized");
                data.session = Some(session);
                data.indexer = Some(indexer);
                self.publish_if_current(generation, AppState::DataLoaded(data));
            }
            Err(message) => {
                warn!(%message, "network init failed");
                self.publish_if_current(
                    generation,
                    AppState::NetworkError {
                        last_known: data,
                        message: format!("Failed to initialize network: {message}"),
                    },
                );
            }
        }
    }

    /// Switch the active network to `target`.
    ///
    /// Valid from `DataLoaded` and, as a retry, from `NetworkError`; a
    /// silent no-op elsewhere. Publishes `NetworkLoading` immediately so
    /// the UI keeps showing the last known data while the session is
    /// established. On failure the retained data still carries the previous
    /// active network index.
    pub async fn switch_network(&self, target: usize) {
        let mut snapshot = None;
        self.state.send_if_modified(|state| match state {
            AppState::DataLoaded(data) => {
                let data = data.clone();
                snapshot = Some(data.clone());
                *state = AppState::NetworkLoading { last_known: data };
                true
            }
            AppState::NetworkError { last_known, .. } => {
                let data = last_known.clone();
                snapshot = Some(data.clone());
                *state = AppState::NetworkLoading { last_known: data };
                true
            }
            _ => false,
        });
        let Some(data) = snapshot else {
            warn!(index = target, "switch_network ignored outside a data-bearing state");
            return;
        };
        // Stamp only after committing to the switch; a rejected call must
        // not invalidate an operation already in flight.
        let generation = self.next_generation();

        match self.establish_for(&data, target).await {
            Ok((session, indexer)) => {
                info!(index = target, chain_id = %session.chain_id, "network switched");
                let mut data = data;
                data.active_network_index = target;
                data.session = Some(session);
                data.indexer = Some(indexer);
                self.publish_if_current(generation, AppState::DataLoaded(data));
            }
            Err(message) => {
                warn!(index = target, %message, "network switch failed");
                self.publish_if_current(
                    generation,
                    AppState::NetworkError {
                        last_known: data,
                        message: format!("Failed to connect: {message}"),
                    },
                );
            }
        }
    }

    // ========================================================================
    // Account, network, and asset bookkeeping
    // ========================================================================

    /// Add (`index` = `None`) or replace (`index` = `Some`) an account.
    pub fn upsert_account(&self, index: Option<usize>, account: Account) {
        let applied = self.update_data(|data| match index {
            None => data.accounts.push(account),
            Some(i) => {
                if let Some(slot) = data.accounts.get_mut(i) {
                    *slot = account;
                }
            }
        });
        if !applied {
            warn!("upsert_account ignored outside a data-bearing state");
            return;
        }
        self.notify_info(if index.is_none() {
            "Account added"
        } else {
            "Account updated"
        });
    }

    /// Add (`index` = `None`) or replace (`index` = `Some`) a network.
    pub fn upsert_network(&self, index: Option<usize>, network: Network) {
        let applied = self.update_data(|data| match index {
            None => data.networks.push(network),
            Some(i) => {
                if let Some(slot) = data.networks.get_mut(i) {
                    *slot = network;
                }
            }
        });
        if !applied {
            warn!("upsert_network ignored outside a data-bearing state");
            return;
        }
        self.notify_info(if index.is_none() {
            "Network added"
        } else {
            "Network updated"
        });
    }

    /// Delete the account at `index`, repairing the active account index.
    pub fn delete_account(&self, index: usize) {
        let mut removed = false;
        let applied = self.update_data(|data| {
            if index < data.accounts.len() {
                data.accounts.remove(index);
                data.active_account_index = repaired_active_index(
                    index,
                    data.active_account_index,
                    data.accounts.len(),
                );
                removed = true;
            }
        });
        if applied && removed {
            self.notify_info("Account deleted");
        } else {
            warn!(index, "delete_account ignored");
        }
    }

    /// Delete the network at `index`, repairing the active network index.
    pub fn delete_network(&self, index: usize) {
        let mut removed = false;
        let applied = self.update_data(|data| {
            if index < data.networks.len() {
                data.networks.remove(index);
                data.active_network_index = repaired_active_index(
                    index,
                    data.active_network_index,
                    data.networks.len(),
                );
                removed = true;
            }
        });
        if applied && removed {
            self.notify_info("Network deleted");
        } else {
            warn!(index, "delete_network ignored");
        }
    }

    /// Select the account at `index`.
    ///
    /// No bounds check: an out-of-range index means no account selected.
    pub fn set_active_account_index(&self, index: usize) {
        if !self.update_data(|data| data.active_account_index = index) {
            warn!(index, "set_active_account_index ignored outside a data-bearing state");
        }
    }

    /// Select the asset at `index` within the active account.
    ///
    /// No bounds check on the asset index; a no-op when no account is
    /// selected.
    pub fn set_active_asset_index(&self, index: usize) {
        let applied = self.update_data(|data| {
            let active = data.active_account_index;
            if let Some(account) = data.accounts.get_mut(active) {
                account.active_asset_index = index;
            }
        });
        if !applied {
            warn!(index, "set_active_asset_index ignored outside a data-bearing state");
        }
    }

    /// Replace the asset list of the active account.
    ///
    /// A no-op when no account is selected or no data is loaded.
    pub fn update_assets_of_active_account(&self, assets: Vec<Asset>) {
        let mut replaced = false;
        let applied = self.update_data(|data| {
            let active = data.active_account_index;
            if let Some(account) = data.accounts.get_mut(active) {
                account.assets = assets;
                replaced = true;
            }
        });
        if !applied || !replaced {
            warn!("update_assets_of_active_account ignored: no active account");
        }
    }

    // ========================================================================
    // Balance refresh
    // ========================================================================

    /// Fetch transparent balances for the active account and reconcile them
    /// into its asset list.
    ///
    /// Transport and parse failures leave the assets untouched and surface
    /// through the notice channel; the state variant never changes here.
    pub async fn refresh_transparent_balances(&self) {
        let snapshot = {
            let state = self.state.borrow();
            state.last_known_data().and_then(|data| {
                let account = data.active_account()?;
                Some((
                    account.address.clone(),
                    account.assets.clone(),
                    data.indexer.clone(),
                ))
            })
        };
        let Some((address, assets, indexer)) = snapshot else {
            warn!("balance refresh ignored: no active account");
            return;
        };
        let Some(indexer) = indexer else {
            warn!("balance refresh ignored: no indexer session");
            return;
        };

        let records = match indexer.transparent_balances(&address).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "balance fetch failed");
                self.notify_error("Could not fetch latest balances. Check network.");
                return;
            }
        };

        match reconcile_transparent_balances(&assets, &records, DEFAULT_DENOM_DIVISOR) {
            Ok(updated) => self.update_assets_of_active_account(updated),
            Err(e) => {
                warn!(error = %e, "balance reconciliation failed");
                self.notify_error("Could not fetch latest balances. Check network.");
            }
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// Accounts in the current state, empty when nothing is loaded.
    pub fn accounts(&self) -> Vec<Account> {
        self.state.borrow().accounts().to_vec()
    }

    /// Networks in the current state, empty when nothing is loaded.
    pub fn networks(&self) -> Vec<Network> {
        self.state.borrow().networks().to_vec()
    }

    /// The selected account, if any.
    pub fn active_account(&self) -> Option<Account> {
        self.state.borrow().active_account().cloned()
    }

    /// The selected network, if any.
    pub fn active_network(&self) -> Option<Network> {
        self.state.borrow().active_network().cloned()
    }

    /// The selected asset of the selected account, if any.
    pub fn active_asset(&self) -> Option<Asset> {
        self.state.borrow().active_asset().cloned()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Resolve the network at `network_index` and bring up its session and
    /// indexer client. Errors are flattened to the display message the
    /// failure state carries.
    async fn establish_for(
        &self,
        data: &WalletData,
        network_index: usize,
    ) -> std::result::Result<(ChainSession, IndexerClient), String> {
        let network = data
            .networks
            .get(network_index)
            .cloned()
            .ok_or_else(|| format!("no network at index {network_index}"))?;
        let session = self
            .sessions
            .establish(&network)
            .await
            .map_err(|e| e.to_string())?;
        let indexer = self
            .transports
            .client(&network.indexer_url)
            .map_err(|e| e.to_string())?;
        Ok((session, indexer))
    }

    /// Stamp a new operation; any outcome still in flight for an earlier
    /// stamp is now stale.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Publish `next` unless a newer operation has been stamped since
    /// `generation` was taken.
    fn publish_if_current(&self, generation: u64, next: AppState) {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::Acquire) == generation {
                *state = next;
                true
            } else {
                false
            }
        });
    }

    /// Apply `transform` to the current data payload, preserving the
    /// surrounding variant. Returns false without publishing when the state
    /// carries no data.
    fn update_data(&self, transform: impl FnOnce(&mut WalletData)) -> bool {
        self.state.send_if_modified(|state| match state {
            AppState::DataLoaded(data) => {
                transform(data);
                true
            }
            AppState::NetworkError { last_known, .. } => {
                transform(last_known);
                true
            }
            _ => false,
        })
    }

    fn notify_info(&self, message: &str) {
        // Send fails only when the UI dropped its receiver; nothing to do.
        let _ = self.notices.send(Notice::Info(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        let _ = self.notices.send(Notice::Error(message.to_string()));
    }
}
