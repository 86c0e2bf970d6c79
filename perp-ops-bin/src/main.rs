use clap::{Parser, Subcommand};

use perp_ops_runtime::admin::{set_minimum_position_size, set_oracle_updater};
use perp_ops_runtime::alloy::primitives::{Address, U256};
use perp_ops_runtime::chain::ChainClient;
use perp_ops_runtime::gateway::{ChainGateway, Route};
use perp_ops_runtime::network::{signer_key_from_env, NetworkRegistry};
use perp_ops_runtime::records::market_config_batch;
use perp_ops_runtime::runner::apply_market_configs;
use perp_ops_runtime::safe::SafeProposer;
use perp_ops_runtime::OpsError;

#[derive(Debug, Parser)]
#[command(name = "perp-ops", about = "Apply on-chain protocol configuration", version)]
struct Args {
    /// Chain id selecting the target network.
    #[arg(long)]
    chain_id: u64,

    /// Path to the network registry file.
    #[arg(long, default_value = "networks.json")]
    networks: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply the compiled-in market configuration batch.
    MarketConfig {
        /// Send setMarketConfig directly instead of proposing through the multisig.
        #[arg(long)]
        direct: bool,

        /// Also trigger borrowing/funding rate updates before each market update.
        #[arg(long)]
        refresh_rates: bool,
    },

    /// Set the protocol-wide minimum position size (raw contract units).
    MinPositionSize { size: u64 },

    /// Grant or revoke oracle updater permission.
    OracleUpdater {
        /// Updater address; defaults to the network's bot handler.
        #[arg(long)]
        updater: Option<Address>,

        /// Revoke the permission instead of granting it.
        #[arg(long)]
        revoke: bool,
    },
}

fn setup_log() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};
    if tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .is_err()
    {}
}

#[tokio::main]
async fn main() {
    setup_log();
    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), OpsError> {
    let args = Args::parse();

    let registry = NetworkRegistry::load(&args.networks)?;
    let network = registry.get(args.chain_id)?;
    let private_key = signer_key_from_env()?;
    let chain = ChainClient::connect(network, &private_key)?;

    tracing::info!(
        chain_id = args.chain_id,
        signer = %chain.signer_address,
        "connected"
    );

    match args.command {
        Command::MarketConfig {
            direct,
            refresh_rates,
        } => {
            let route = if direct {
                Route::Direct
            } else {
                Route::Multisig(SafeProposer::new(
                    network.contracts.multisig,
                    chain.provider.clone(),
                ))
            };
            let gateway = ChainGateway::new(
                chain.provider.clone(),
                network.contracts.config_storage,
                network.contracts.trade_helper,
                route,
            );

            let outcomes =
                apply_market_configs(&gateway, &market_config_batch(), refresh_rates).await?;
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }

        Command::MinPositionSize { size } => {
            let submission = set_minimum_position_size(
                &chain.provider,
                network.contracts.config_storage,
                U256::from(size),
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }

        Command::OracleUpdater { updater, revoke } => {
            let updater = updater.unwrap_or(network.bot_handler);
            let submission = set_oracle_updater(
                &chain.provider,
                network.contracts.oracle_middleware,
                updater,
                !revoke,
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
    }

    Ok(())
}
