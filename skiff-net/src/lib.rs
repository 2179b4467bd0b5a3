//! Wallet network layer
//!
//! Typed indexer HTTP client, single-flight client construction keyed by
//! the active network's indexer URL, and chain session establishment.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod indexer;
pub mod session;
pub mod transport;

// Re-export main types
pub use error::{Error, Result};
pub use indexer::{IndexerClient, TransparentBalance};
pub use session::{ChainSession, RpcSessionProvider, SessionProvider};
pub use transport::TransportProvider;
