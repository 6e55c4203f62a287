//! Service configuration.
//!
//! Read once at start-up from command-line flags, each of which can also be
//! supplied through the environment, then passed down explicitly.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::options::Options;

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Configuration of the `leftover-server` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "leftover-server", version, about = "Readable-text extraction and recipe suggestion service")]
pub struct ServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "LEFTOVER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Enable the template AI suggestion endpoint.
    #[arg(long, env = "ENABLE_AI", default_value_t = false, action = clap::ArgAction::Set, value_parser = parse_flag)]
    pub enable_ai: bool,

    /// Page fetch timeout in milliseconds.
    #[arg(long, env = "LEFTOVER_FETCH_TIMEOUT_MS", default_value_t = 10_000)]
    pub fetch_timeout_ms: u64,

    /// Log output format.
    #[arg(long, env = "LEFTOVER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Extraction options derived from this configuration.
    #[must_use]
    pub fn extraction_options(&self) -> Options {
        Options {
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            ..Options::default()
        }
    }
}

/// Lenient boolean: `true`/`1`/`yes`/`on` are true, everything else false.
fn parse_flag(s: &str) -> Result<bool, String> {
    Ok(matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}
