//! Command-line argument parsing for linedesk.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `linedesk_config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for linedesk.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --profile, --config-path)
/// 2. Environment variables (e.g., LINEDESK_PROFILE, LINEDESK_BASE_URL)
/// 3. Profile configuration (from config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "linedesk",
    about = "Terminal client for browsing Linedesk lines",
    version,
    after_help = "Examples:\n  linedesk\n  linedesk --profile production\n  linedesk --config-path /etc/linedesk/config.json\n  linedesk --log-dir /var/log/linedesk --no-mouse\n"
)]
pub struct Cli {
    /// Config profile name to load
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}
