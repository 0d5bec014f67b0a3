use clap::Parser;
use conversor::core::config::{self, CONFIG_FILE, CONFIG_KEY, ENV_VAR};
use conversor::core::log::init_logging;
use conversor::providers::exchange_rate_api::DEFAULT_BASE_URL;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Properties file holding the API key (defaults to ./config.properties)
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Base URL of the exchange rate API
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(api_key) = config::api_key(cli.config_path.as_deref()) else {
        eprintln!("No se encontró la API key. Configura la variable de entorno {ENV_VAR}");
        eprintln!("o crea un archivo {CONFIG_FILE} con: {CONFIG_KEY}=TU_API_KEY");
        return ExitCode::FAILURE;
    };

    match conversor::run(&api_key, &cli.api_url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
