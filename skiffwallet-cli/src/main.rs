//! Skiff wallet command line
//!
//! Drives the wallet service against the built-in sample wallet: inspect
//! application state, switch networks, and refresh transparent balances.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use skiff_core::{fixtures, truncate_address, Mode};
use skiff_net::RpcSessionProvider;
use skiff_wallet_service::{AppState, MemoryStorage, NoticeReceiver, StoredData, WalletService};

#[derive(Parser)]
#[command(name = "skiffwallet", about = "Skiff wallet client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize and print the resulting application state
    Status,
    /// List accounts
    Accounts,
    /// List networks
    Networks,
    /// Refresh and print the active account's balances
    Balances {
        /// Which balance pool to show
        #[arg(long, value_enum, default_value = "indeterminate")]
        mode: BalanceMode,
    },
    /// Switch the active network
    Switch {
        /// Target network index
        index: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BalanceMode {
    Transparent,
    Shielded,
    Indeterminate,
}

impl From<BalanceMode> for Mode {
    fn from(mode: BalanceMode) -> Self {
        match mode {
            BalanceMode::Transparent => Mode::Transparent,
            BalanceMode::Shielded => Mode::Shielded,
            BalanceMode::Indeterminate => Mode::Indeterminate,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let storage = Arc::new(MemoryStorage::new(StoredData {
        accounts: fixtures::sample_accounts(),
        networks: fixtures::sample_networks(),
        active_account_index: 0,
        active_network_index: 0,
    }));
    let (service, mut notices) = WalletService::new(storage, Arc::new(RpcSessionProvider::new()));
    service.initialize().await;

    match cli.command {
        Command::Status => print_state(&service.state()),
        Command::Accounts => {
            let active = service.state().active_account_index();
            for (index, account) in service.accounts().iter().enumerate() {
                let marker = if Some(index) == active { "*" } else { " " };
                println!(
                    "{marker} {index}: {} ({})",
                    account.alias,
                    truncate_address(&account.address, 5)
                );
            }
        }
        Command::Networks => {
            let active = service.state().active_network_index();
            for (index, network) in service.networks().iter().enumerate() {
                let marker = if Some(index) == active { "*" } else { " " };
                println!("{marker} {index}: {} [{}]", network.name, network.chain_id);
            }
        }
        Command::Balances { mode } => {
            service.refresh_transparent_balances().await;
            match service.active_account() {
                Some(account) => {
                    for asset in &account.assets {
                        println!(
                            "{:<28} {:>16.6}",
                            asset.name,
                            asset.balances.amount(mode.into())
                        );
                    }
                }
                None => println!("no active account"),
            }
        }
        Command::Switch { index } => {
            service.switch_network(index).await;
            print_state(&service.state());
        }
    }

    drain_notices(&mut notices);
    Ok(())
}

fn print_state(state: &AppState) {
    match state {
        AppState::Loading => println!("loading..."),
        AppState::DataLoaded(data) => {
            let network = data
                .active_network()
                .map(|n| n.name.as_str())
                .unwrap_or("none");
            println!(
                "ready: {} accounts, active network: {network}",
                data.accounts.len()
            );
        }
        AppState::NetworkLoading { .. } => println!("switching network..."),
        AppState::NetworkError { message, .. } => println!("network error: {message}"),
        AppState::Error { message } => println!("error: {message}"),
    }
}

fn drain_notices(notices: &mut NoticeReceiver) {
    while let Ok(notice) = notices.try_recv() {
        eprintln!("{}", notice.message());
    }
}
