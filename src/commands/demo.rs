//! Demo command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use proggy::cli::DemoArgs;
use proggy::tty::{Console, Position, StdTerminal, TtyError, TtyMultiProgressBar};
use proggy::Config;

/// Animate `args.bars` bars, each advancing at a different speed.
///
/// Ctrl-C stops the animation; the bars are stopped normally so the cursor
/// ends up below them.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &DemoArgs) -> Result<()> {
    if !StdTerminal::is_tty() {
        bail!("demo needs an interactive terminal");
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let mut info = super::bar_info(&config.bar, &args.bar)?;
    let (columns, _) = crossterm::terminal::size().context("Failed to get terminal size")?;
    let start_column = args.column.unwrap_or(1).max(1) as usize;
    let room = (columns as usize + 1).saturating_sub(start_column).max(1);
    if info.size > room {
        tracing::debug!(size = info.size, room, "Clamping bar size to terminal width");
        info.size = room;
    }

    let console = Console::with_config(StdTerminal::new(), config.console.clone());
    let mut bars = TtyMultiProgressBar::new(console, vec![info.clone(); args.bars])?;
    if let (Some(row), Some(column)) = (args.row, args.column) {
        bars = bars.with_position(Position::new(row, column));
    }

    let delay = Duration::from_millis(args.delay_ms);
    let total = info.total;
    bars.scope(|bars| {
        while !interrupted.load(Ordering::SeqCst) && !all_complete(bars) {
            for row in 0..bars.len() {
                let remaining = total - bars.bar(row)?.progress();
                let step = (row as u64 + 1).min(remaining);
                if step > 0 {
                    bars.inc(row, step)?;
                }
            }
            thread::sleep(delay);
        }
        Ok::<(), TtyError>(())
    })?;
    Ok(())
}

fn all_complete(bars: &TtyMultiProgressBar<StdTerminal>) -> bool {
    bars.bars().all(|bar| bar.is_complete())
}
