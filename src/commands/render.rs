//! Render command handler

use anyhow::{bail, Result};

use proggy::cli::RenderArgs;
use proggy::terminal::VirtualTerminal;
use proggy::tty::{Console, TtyProgressBar};
use proggy::{Bar, Config};

/// Columns of the virtual screen when the bar is narrower.
const MIN_SCREEN_COLUMNS: usize = 80;

/// Print a rendered bar, or the screen of a virtual terminal it was drawn to.
pub fn handle(config: &Config, args: &RenderArgs) -> Result<()> {
    let info = super::bar_info(&config.bar, &args.bar)?.with_progress(args.progress);

    let Some(rows) = args.screen else {
        println!("{}", Bar::new(info)?.render());
        return Ok(());
    };
    if rows == 0 {
        bail!("--screen needs at least one row");
    }

    let columns = info.size.max(MIN_SCREEN_COLUMNS);
    let console = Console::with_config(VirtualTerminal::new(rows, columns), config.console.clone());
    let mut bar = TtyProgressBar::new(console, info)?;
    // Capture before stopping so the trailing newline cannot scroll the bar away
    let screen = bar.scope(|bar| Ok(bar.console().terminal().contents()))?;
    println!("{}", screen);
    Ok(())
}
