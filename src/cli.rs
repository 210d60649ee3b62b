//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can build the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("PROGGY_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("PROGGY_BUILD_DATE"),
    ")"
);

/// Sub-character resolution progress bars for ANSI terminals.
#[derive(Debug, Parser)]
#[command(name = "proggy", version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Write logs to this file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` (overrides the config file)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a bar to stdout without moving the cursor
    Render(RenderArgs),

    /// Animate progress bars on the current terminal
    Demo(DemoArgs),

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Bar appearance shared by `render` and `demo`.
#[derive(Debug, Args)]
pub struct BarArgs {
    /// Bar width in characters
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// Total progress capacity
    #[arg(long, short = 't')]
    pub total: Option<u64>,

    /// Preset name (braille, blocks, shades, ascii) or literal ramp, empty glyph first
    #[arg(long, short = 'c', allow_hyphen_values = true)]
    pub characters: Option<String>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub bar: BarArgs,

    /// Progress to render
    #[arg(long, short = 'p', default_value_t = 0)]
    pub progress: u64,

    /// Draw into a virtual terminal of this many rows and print its screen
    #[arg(long, value_name = "ROWS")]
    pub screen: Option<usize>,
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    #[command(flatten)]
    pub bar: BarArgs,

    /// Number of bars
    #[arg(long, short = 'n', default_value_t = 3)]
    pub bars: usize,

    /// Delay between steps in milliseconds
    #[arg(long, default_value_t = 20)]
    pub delay_ms: u64,

    /// Anchor row (defaults to the cursor position)
    #[arg(long, requires = "column")]
    pub row: Option<i32>,

    /// Anchor column (defaults to the cursor position)
    #[arg(long, requires = "row")]
    pub column: Option<i32>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
