//! BlockVote terminal client — entry point.

mod config;
mod render;
mod run;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use blockvote_app::App;
use blockvote_provider::{HttpProvider, Provider};
use blockvote_types::Address;

use crate::config::ClientConfig;

#[derive(Parser)]
#[command(name = "blockvote", about = "Terminal client for the BlockVote election")]
struct Cli {
    /// Wallet agent JSON-RPC endpoint (e.g. http://127.0.0.1:8645).
    #[arg(long, env = "BLOCKVOTE_AGENT_URL")]
    agent_url: Option<String>,

    /// Deployed election contract address.
    #[arg(long, env = "BLOCKVOTE_CONTRACT")]
    contract: Option<Address>,

    /// Election admin account address.
    #[arg(long, env = "BLOCKVOTE_ADMIN")]
    admin: Option<Address>,

    /// Seconds between account/chain polls at the agent.
    #[arg(long, env = "BLOCKVOTE_ACCOUNT_POLL_SECS")]
    account_poll_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BLOCKVOTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => ClientConfig::from_toml_file(path)?,
        None => ClientConfig::default(),
    };

    let config = ClientConfig {
        agent_url: cli.agent_url.or(file_config.agent_url),
        contract_address: cli.contract.or(file_config.contract_address),
        admin_address: cli.admin.or(file_config.admin_address),
        account_poll_secs: cli
            .account_poll_secs
            .unwrap_or(file_config.account_poll_secs),
        log_level: cli.log_level.unwrap_or(file_config.log_level),
    };

    blockvote_utils::init_tracing(&config.log_level);

    let contract_address = config
        .contract_address
        .clone()
        .context("no contract address configured (use --contract or the config file)")?;
    let admin_address = config
        .admin_address
        .clone()
        .context("no admin address configured (use --admin or the config file)")?;

    let provider = match config.agent_url.as_deref() {
        Some(url) => {
            let provider = Arc::new(
                HttpProvider::new(url)
                    .map_err(|e| anyhow::anyhow!("failed to create wallet agent client: {e}"))?,
            );
            tracing::info!(agent = url, "using wallet agent");
            Some(provider)
        }
        None => {
            tracing::warn!("no wallet agent configured; connecting will be unavailable");
            None
        }
    };

    let watcher = provider.as_ref().map(|p| {
        Arc::clone(p).spawn_watcher(Duration::from_secs(config.account_poll_secs.max(1)))
    });

    let provider: Option<Arc<dyn Provider>> = provider.map(|p| p as Arc<dyn Provider>);
    let app = App::new(provider.clone(), contract_address.clone(), admin_address.clone());

    tracing::info!(contract = %contract_address, "starting BlockVote client");
    let result = run::run(app, provider, contract_address, admin_address).await;

    if let Some(watcher) = watcher {
        watcher.abort();
    }
    tracing::info!("BlockVote client exited");
    result
}
