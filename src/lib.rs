//! # cutfeed
//!
//! Rewrites CNC cutting programs so that a cyclic subset of the cuts in each
//! part runs at a reduced feed rate, while the last cut of every part keeps
//! the full feed.
//!
//! ## Architecture
//!
//! cutfeed is organized as a workspace with multiple crates:
//!
//! 1. **cutfeed-core** - Programs, part names, thickness and feed values
//! 2. **cutfeed-processor** - Part segmentation, event pre-scan, cyclic policy, rewrite pass
//! 3. **cutfeed-settings** - Configuration files and limit resolution
//! 4. **cutfeed** - Command-line binary that integrates all crates

pub mod cmd;

pub use cmd::{Cli, Commands};

pub use cutfeed_core::{FeedValue, PartName, Program, Thickness};
pub use cutfeed_processor::{
    compute_totals, discover_parts, extract_xy, rewrite, rewrite_with_report, Decision,
    PartScope, PartTotals, RewriteDriver, RewriteLimits, RewriteReport, XyPoint,
};
pub use cutfeed_settings::{Config, ConfigError, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output to stderr, so rewritten programs can go to stdout
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
