//! Skiff wallet core
//!
//! Data model and pure helpers for the wallet client: accounts, networks,
//! assets and balances, denominated amount parsing, and display utilities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod denom;
pub mod display;
pub mod error;
#[cfg(feature = "test-helpers")]
pub mod fixtures;
pub mod model;

pub use denom::{parse_denom, DEFAULT_DENOM_DIVISOR};
pub use display::truncate_address;
pub use error::{Error, Result};
pub use model::{Account, Asset, Balance, Mode, Network, DEFAULT_NETWORK_NAME};
