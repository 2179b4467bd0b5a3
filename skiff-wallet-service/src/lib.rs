//! Skiff wallet service
//!
//! Owns the single application state value observed by the UI layer:
//! lifecycle transitions, account/network/asset bookkeeping, and transparent
//! balance reconciliation against the active network's indexer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod notice;
pub mod reconcile;
pub mod service;
pub mod state;
pub mod storage;

// Re-export main types
pub use notice::{Notice, NoticeReceiver};
pub use reconcile::{reconcile_transparent_balances, PLACEHOLDER_TOKEN_NAME};
pub use service::WalletService;
pub use state::{repaired_active_index, AppState, WalletData};
pub use storage::{MemoryStorage, Storage, StoredData};
