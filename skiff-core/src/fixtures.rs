//! Sample wallet data
//!
//! The client ships without a persistence layer, so tests and the CLI
//! walkthrough run against this fixed in-memory wallet.

use crate::model::{Account, Asset, Balance, Network};

/// The sample network list: a mainnet and a public testnet.
pub fn sample_networks() -> Vec<Network> {
    vec![
        Network {
            name: "Mainnet".to_string(),
            chain_id: "skiff.9a41c6b02e77f8d1a303958".to_string(),
            rpc_url: "https://rpc.mainnet.skiff.example".to_string(),
            indexer_url: "https://indexer.mainnet.skiff.example".to_string(),
            masp_indexer_url: "https://masp.mainnet.skiff.example".to_string(),
        },
        Network {
            name: "Driftnet".to_string(),
            chain_id: "driftnet-anchor.0c21e88f4ab591".to_string(),
            rpc_url: "https://rpc.driftnet.skiff.example".to_string(),
            indexer_url: "https://indexer.driftnet.skiff.example".to_string(),
            masp_indexer_url: "https://masp.driftnet.skiff.example".to_string(),
        },
    ]
}

/// The sample account list, each holding a different asset mix.
pub fn sample_accounts() -> Vec<Account> {
    let native = |transparent, shielded| Asset {
        name: "NAM".to_string(),
        address: "tnam1q8hce5vz0zznw7mkyrdrjcy4uqedtqdxscjuxwzr".to_string(),
        balances: Balance {
            transparent,
            shielded,
        },
    };
    let atom = Asset {
        name: "ATOM".to_string(),
        address: "tnam1p4sx64tmkzgae7en2pkvv0yyctmclrwjsudqrw9c".to_string(),
        balances: Balance {
            transparent: 8.417,
            shielded: 73.2001,
        },
    };
    let osmo = Asset {
        name: "transfer/channel-0/uosmo".to_string(),
        address: "tnam1pjx9mewxvfqe2n45wzmgnkcfn9s2d9xgkytfdlpj".to_string(),
        balances: Balance {
            transparent: 94.308,
            shielded: 5.71,
        },
    };

    vec![
        Account {
            alias: "daily spend".to_string(),
            address: "tnam1qv6jyu80rf2d3pwzmkue4fvqy3nqqdeh5u30p9zx".to_string(),
            default_pay_addr: "znam1w7eh4fvqy3nqxcpmrc6u80rf2d3pwzedk9fes7hjl5x0mtgrrqwu2aypn34d6z7smc09c4uzm2k"
                .to_string(),
            assets: vec![native(203.115, 41.92), atom, osmo.clone()],
            active_asset_index: 0,
            est_rewards: 17.204,
        },
        Account {
            alias: "savings".to_string(),
            address: "tnam1qrc83k0xwme4d9npk2qgn9y7u0hsd5vaeg6ml3vt".to_string(),
            default_pay_addr: "znam1w7eh4fvqy3nqxcpmrc6u80rf2d3pwzedk9fes7hjl5x0mtgrrqwu2aypn34d6z7smc09c4uzm2k"
                .to_string(),
            assets: vec![native(9.882, 611.45), osmo],
            active_asset_index: 1,
            est_rewards: 2.93,
        },
        Account {
            alias: "cold".to_string(),
            address: "tnam1q0ljtwpmdy7x5aguv93e6ksr2n8zmfc4hcwmx0qn".to_string(),
            default_pay_addr: "znam1m3pcfueslwv98k2q0y7x5agrvhtdn46jc7xs0zgrlne8dq5y2u94zwfkem6t0c3hal7rjv40sx7"
                .to_string(),
            assets: vec![native(48.0, 120.66)],
            active_asset_index: 0,
            est_rewards: 9.118,
        },
    ]
}
