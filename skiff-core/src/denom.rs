//! Denominated amount parsing
//!
//! Indexer responses carry integer amounts in minor units; the wallet works
//! in major units.

use crate::{Error, Result};

/// Default minor-units-per-major-unit divisor for indexer amounts.
pub const DEFAULT_DENOM_DIVISOR: u64 = 1_000_000;

/// Parse a minor-unit amount string into a major-unit value.
///
/// Plain floating division, no rounding beyond the native `f64` result.
pub fn parse_denom(amount: &str, divisor: u64) -> Result<f64> {
    if divisor == 0 {
        return Err(Error::InvalidAmount(
            "denomination divisor must be non-zero".to_string(),
        ));
    }
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(format!("not a numeric amount: {amount:?}")))?;
    Ok(value / divisor as f64)
}
