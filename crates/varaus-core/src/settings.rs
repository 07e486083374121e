use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Reservation reports from a pipe-delimited booking export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "varaus",
    about = "Reservation reports from a pipe-delimited booking export",
    version
)]
pub struct Settings {
    /// Path to the reservations file
    #[arg(default_value = "reservations.txt")]
    pub file: PathBuf,

    /// Report to render
    #[arg(long, default_value = "all", value_parser = ["all", "confirmed", "long", "status", "summary", "revenue", "detail"])]
    pub report: String,

    /// Restrict the detail report to a single reservation id
    #[arg(long)]
    pub id: Option<u32>,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The log level after applying the `--debug` override.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
