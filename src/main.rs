//! Entry point: read one request, dispatch it, write one JSON response.

use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use mlb_stats::{
    cli::Cli,
    commands::{handle_request, read_request, Response},
    config::Settings,
    mlb::http::StatsClient,
};
use serde_json::Value;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "mlb_stats=info,warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_level.as_deref()) {
        eprintln!("failed to initialise logging: {e}");
    }

    let response = run(&cli).await;
    emit(&response.body, cli.pretty);
    ExitCode::from(response.exit_code)
}

async fn run(cli: &Cli) -> Response {
    let settings = match Settings::resolve(cli.base_url.clone(), cli.search_timeout) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Response::unexpected();
        }
    };

    let client = match StatsClient::new(&settings) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            return Response::unexpected();
        }
    };

    let raw = match read_request(cli.input.as_deref()) {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "failed to read request");
            return Response::unexpected();
        }
    };

    handle_request(&client, &raw).await
}

/// Write the response to stdout. Logs go to stderr, so this is the only
/// thing on stdout.
fn emit(body: &Value, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)
    } else {
        serde_json::to_string(body)
    };
    match rendered {
        Ok(s) => println!("{s}"),
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            println!(r#"{{"error": "{}"}}"#, mlb_stats::error::GENERIC_ERROR_MESSAGE);
        }
    }
}

/// Initialize tracing to stderr; stdout carries the response.
fn init_tracing(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}
