pub mod cli;
pub mod core;
pub mod providers;
pub mod service;

use anyhow::Result;
use tracing::info;

use crate::cli::Shell;
use crate::providers::ExchangeRateApiClient;
use crate::service::ConversionService;

/// Runs the interactive converter on stdin/stdout until the user exits.
pub async fn run(api_key: &str, api_url: &str) -> Result<()> {
    info!("Conversor starting...");

    let client = ExchangeRateApiClient::new(api_url, api_key)?;
    let service = ConversionService::new(client);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&service, stdin.lock(), stdout.lock()).run().await
}
