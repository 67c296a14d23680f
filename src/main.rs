use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

use registra::cli::{Cli, commands};
use registra::gateway::ApiClient;
use registra::logging;
use registra_config::{ApiConfig, StorageConfig};
use registra_session::SessionStore;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let _log_guard = logging::init_tracing();

    let cli = Cli::parse();

    // Restore any persisted session before the first command runs.
    let session = Arc::new(SessionStore::open(StorageConfig::from_env()));

    let api = match ApiClient::new(ApiConfig::from_env(), session) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("❌ Failed to initialise the API client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(cli, api).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
