//! Transparent balance reconciliation
//!
//! Merges a fetched balance snapshot into the locally known asset list. The
//! snapshot is authoritative for the transparent pool: matched assets take
//! the fetched amount, newly seen tokens are appended, and local assets
//! absent from the snapshot drop to zero. Shielded balances are never
//! touched here.

use skiff_core::{parse_denom, Asset, Balance, Result};
use skiff_net::TransparentBalance;

/// Display name given to tokens first seen in a balance fetch.
pub const PLACEHOLDER_TOKEN_NAME: &str = "token";

/// Merge `records` into `assets`, returning the updated list.
///
/// Pre-existing assets keep their relative order; newly discovered tokens
/// are appended after them in fetch order. Any unparsable amount fails the
/// whole merge so the caller can keep the original list.
pub fn reconcile_transparent_balances(
    assets: &[Asset],
    records: &[TransparentBalance],
    divisor: u64,
) -> Result<Vec<Asset>> {
    let mut updated: Vec<Asset> = assets.to_vec();

    for record in records {
        let amount = parse_denom(&record.min_denom_amount, divisor)?;
        match updated
            .iter_mut()
            .find(|asset| asset.address == record.token_address)
        {
            Some(asset) => asset.balances.transparent = amount,
            None => updated.push(Asset {
                name: PLACEHOLDER_TOKEN_NAME.to_string(),
                address: record.token_address.clone(),
                balances: Balance {
                    transparent: amount,
                    shielded: 0.0,
                },
            }),
        }
    }

    // The snapshot is authoritative: anything it omits holds zero.
    for asset in &mut updated {
        if !records
            .iter()
            .any(|record| record.token_address == asset.address)
        {
            asset.balances.transparent = 0.0;
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_core::DEFAULT_DENOM_DIVISOR;

    fn asset(address: &str, transparent: f64, shielded: f64) -> Asset {
        Asset {
            name: address.to_uppercase(),
            address: address.to_string(),
            balances: Balance {
                transparent,
                shielded,
            },
        }
    }

    fn record(address: &str, amount: &str) -> TransparentBalance {
        TransparentBalance {
            token_address: address.to_string(),
            min_denom_amount: amount.to_string(),
        }
    }

    #[test]
    fn test_matched_asset_takes_fetched_amount_and_missing_zeroes() {
        let assets = vec![asset("a", 10.0, 5.0), asset("b", 20.0, 3.0)];
        let records = vec![record("a", "5000000")];

        let updated =
            reconcile_transparent_balances(&assets, &records, DEFAULT_DENOM_DIVISOR).unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].balances.transparent, 5.0);
        assert_eq!(updated[0].balances.shielded, 5.0);
        assert_eq!(updated[1].balances.transparent, 0.0);
        assert_eq!(updated[1].balances.shielded, 3.0);
    }

    #[test]
    fn test_unknown_token_appended_with_placeholder_name() {
        let assets = vec![asset("a", 1.0, 1.0)];
        let records = vec![record("a", "1000000"), record("new", "2500000")];

        let updated =
            reconcile_transparent_balances(&assets, &records, DEFAULT_DENOM_DIVISOR).unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[1].name, PLACEHOLDER_TOKEN_NAME);
        assert_eq!(updated[1].address, "new");
        assert_eq!(updated[1].balances.transparent, 2.5);
        assert_eq!(updated[1].balances.shielded, 0.0);
    }

    #[test]
    fn test_names_and_order_preserved() {
        let assets = vec![asset("a", 0.0, 0.0), asset("b", 0.0, 0.0)];
        let records = vec![record("b", "1000000")];

        let updated =
            reconcile_transparent_balances(&assets, &records, DEFAULT_DENOM_DIVISOR).unwrap();

        assert_eq!(updated[0].address, "a");
        assert_eq!(updated[1].address, "b");
        assert_eq!(updated[1].name, "B");
    }

    #[test]
    fn test_empty_snapshot_zeroes_everything() {
        let assets = vec![asset("a", 7.0, 2.0)];
        let updated =
            reconcile_transparent_balances(&assets, &[], DEFAULT_DENOM_DIVISOR).unwrap();
        assert_eq!(updated[0].balances.transparent, 0.0);
        assert_eq!(updated[0].balances.shielded, 2.0);
    }

    #[test]
    fn test_unparsable_amount_fails_whole_merge() {
        let assets = vec![asset("a", 1.0, 1.0)];
        let records = vec![record("a", "garbage")];
        assert!(
            reconcile_transparent_balances(&assets, &records, DEFAULT_DENOM_DIVISOR).is_err()
        );
    }
}
