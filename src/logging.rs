//! Structured logging for the benchmark binaries.
//!
//! Logs go to stderr so they never mix with the benchmark report on
//! stdout. The library itself only emits `tracing` events; installing a
//! subscriber is left to the binaries.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `warn`, try `matmul_cache=debug`
//!   to see per-variant timings)
//! - `MATMUL_LOG_FORMAT`: `compact` (default), `pretty` or `full`

use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Single line per event
    Compact,
    /// Multi-line, human-readable
    Pretty,
    /// The default `tracing-subscriber` format
    Full,
}

impl TracingFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pretty" => TracingFormat::Pretty,
            "full" => TracingFormat::Full,
            _ => TracingFormat::Compact,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// Filter directive, e.g. `matmul_cache=debug`
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var("MATMUL_LOG_FORMAT")
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Compact);
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
        }
    }
}

/// Parses `directive`, falling back to [`DEFAULT_FILTER`] when it is malformed.
///
/// The second value is `false` when the fallback was taken.
fn filter_or_default(directive: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_FILTER), false),
    }
}

/// Installs the global subscriber. Call once, at startup.
///
/// A malformed filter never stops a benchmark run: the default filter is
/// used instead and a warning is logged.
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let (filter, accepted) = filter_or_default(&config.filter);
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    let layer = match config.format {
        TracingFormat::Compact => base.compact().with_filter(filter).boxed(),
        TracingFormat::Pretty => base.pretty().with_filter(filter).boxed(),
        TracingFormat::Full => base.with_filter(filter).boxed(),
    };

    tracing_subscriber::registry().with(layer).try_init()?;
    if !accepted {
        tracing::warn!(
            directive = %config.filter,
            fallback = DEFAULT_FILTER,
            "ignoring malformed log filter"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(TracingFormat::parse("pretty"), TracingFormat::Pretty);
        assert_eq!(TracingFormat::parse(" FULL "), TracingFormat::Full);
        assert_eq!(TracingFormat::parse("compact"), TracingFormat::Compact);
        assert_eq!(TracingFormat::parse("nonsense"), TracingFormat::Compact);
    }

    #[test]
    fn test_malformed_filter_falls_back() {
        let (filter, accepted) = filter_or_default("[[bad");
        assert!(!accepted);
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::WARN)
        );
    }

    #[test]
    fn test_valid_filter_is_kept() {
        let (_, accepted) = filter_or_default("matmul_cache=debug");
        assert!(accepted);
    }
}
