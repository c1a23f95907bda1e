//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;

/// Answer one MLB stats query.
///
/// Reads a single JSON request object (from stdin unless `--input` is given),
/// writes a single JSON response object to stdout, and exits 0 on a
/// dispatched request or 1 on invalid input or an unexpected failure.
#[derive(Debug, Parser)]
#[clap(name = "mlb-stats", about = "MLB stats query service", version)]
pub struct Cli {
    /// Read the request from this file instead of stdin.
    #[clap(long, short)]
    pub input: Option<PathBuf>,

    /// Stats API base URL (or set `MLB_STATS_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Timeout in seconds for the fallback people search (or set `MLB_STATS_SEARCH_TIMEOUT_SECS`).
    #[clap(long)]
    pub search_timeout: Option<u64>,

    /// Pretty-print the response.
    #[clap(long)]
    pub pretty: bool,

    /// Log filter directive, e.g. `mlb_stats=debug` (or set `RUST_LOG`).
    #[clap(long)]
    pub log_level: Option<String>,
}
