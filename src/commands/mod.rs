//! Subcommand handlers for the proggy binary.

pub mod completions;
pub mod config;
pub mod demo;
pub mod render;

use anyhow::Result;

use proggy::cli::BarArgs;
use proggy::config::BarConfig;
use proggy::{BarInfo, Ramp};

/// Merge command-line bar options over the configured defaults.
pub fn bar_info(defaults: &BarConfig, args: &BarArgs) -> Result<BarInfo> {
    let characters = args.characters.as_deref().unwrap_or(&defaults.characters);
    let ramp = Ramp::from_spec(characters)?;
    Ok(BarInfo::new(
        args.size.unwrap_or(defaults.size),
        args.total.unwrap_or(defaults.total),
    )
    .with_characters(ramp))
}
