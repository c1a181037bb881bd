use std::process::ExitCode;

use clap::Parser;
use newrelic_lib::{ApiError, Client};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_API_URL: &str = "https://api.newrelic.com/";

/// Query the New Relic REST API with exporter credentials
#[derive(Debug, Parser)]
#[command(name = "newrelic", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Base URL that request paths are resolved against
    #[arg(long, env = "NEWRELIC_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// REST API key sent as X-Api-Key
    #[arg(long, env = "NEWRELIC_API_KEY", hide_env_values = true)]
    api_key: String,

    /// HTTP method to use
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// API path, relative to the base URL (e.g. v2/applications.json)
    #[arg(value_name = "PATH")]
    path: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    json_logs: bool,
}

const AFTER_HELP: &str = "\
EXIT CODES:
  0  response decoded and printed
  1  response body was not valid JSON
  2  invalid configuration (base URL or API key)
  3  request could not be built or sent

  Examples:
    newrelic v2/applications.json
    newrelic --api-url https://api.eu.newrelic.com/ v2/servers.json
";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Api(ApiError::Config(_)) => 2,
            Self::Api(ApiError::Request(_) | ApiError::Transport(_)) => 3,
            Self::Api(ApiError::Decode(_)) | Self::Render(_) => 1,
        }
    }
}

/// Initialize tracing on stderr; RUST_LOG overrides the verbosity flags.
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,newrelic_lib=info".to_string(),
            2 => "info,newrelic_lib=debug".to_string(),
            _ => "debug,newrelic_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(verbose >= 2)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = Client::new(&cli.api_url, &cli.api_key).map_err(ApiError::from)?;

    let response = client
        .fetch::<serde_json::Value>(&cli.method, &cli.path)
        .await?;
    eprintln!("HTTP {}", response.status());

    let body = response.into_result().map_err(ApiError::from)?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    tracing::debug!(api_url = %cli.api_url, method = %cli.method, path = %cli.path, "newrelic CLI starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
