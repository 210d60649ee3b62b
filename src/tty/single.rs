//! Single-row TTY progress bar.

use crate::bar::{Bar, BarInfo, ProgressError, Ramp};

use super::backend::Terminal;
use super::console::Console;
use super::error::TtyError;
use super::position::Position;
use super::session::{Lifecycle, TtyMultiProgressBar};

/// A progress bar drawn to one row of a terminal.
///
/// This is a [`TtyMultiProgressBar`] with a single row; field access goes
/// straight to that row and progress changes redraw it.
#[derive(Debug)]
pub struct TtyProgressBar<T: Terminal> {
    group: TtyMultiProgressBar<T>,
}

impl<T: Terminal> TtyProgressBar<T> {
    pub fn new(console: Console<T>, info: BarInfo) -> Result<Self, ProgressError> {
        Ok(Self {
            group: TtyMultiProgressBar::new(console, vec![info])?,
        })
    }

    /// Draw at an explicit position instead of the cursor position.
    pub fn with_position(self, position: Position) -> Self {
        Self {
            group: self.group.with_position(position),
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.group.position()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.group.lifecycle()
    }

    pub fn console(&self) -> &Console<T> {
        self.group.console()
    }

    pub fn start(&mut self) -> Result<(), TtyError> {
        self.group.start()
    }

    pub fn draw(&mut self) -> Result<(), TtyError> {
        self.group.draw()
    }

    pub fn stop(&mut self) -> Result<(), TtyError> {
        self.group.stop()
    }

    /// Start, run `block`, then stop even if `block` failed.
    pub fn scope<R>(
        &mut self,
        block: impl FnOnce(&mut Self) -> Result<R, TtyError>,
    ) -> Result<R, TtyError> {
        self.start()?;
        let result = block(self);
        let stopped = self.stop();
        let value = result?;
        stopped?;
        Ok(value)
    }

    fn bar(&self) -> &Bar {
        // A single-row group always has row 0.
        self.group.row(0)
    }

    pub fn render(&self) -> String {
        self.bar().render()
    }

    pub fn size(&self) -> usize {
        self.bar().size()
    }

    pub fn total(&self) -> u64 {
        self.bar().total()
    }

    pub fn progress(&self) -> u64 {
        self.bar().progress()
    }

    pub fn characters(&self) -> &Ramp {
        self.bar().characters()
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), TtyError> {
        self.group.bar_at(0)?.set_size(size).map_err(TtyError::from)
    }

    pub fn set_total(&mut self, total: u64) -> Result<(), TtyError> {
        self.group.bar_at(0)?.set_total(total).map_err(TtyError::from)
    }

    pub fn set_characters(&mut self, characters: &str) -> Result<(), TtyError> {
        self.group.bar_at(0)?.set_characters(characters).map_err(TtyError::from)
    }

    /// Set the progress and redraw.
    pub fn set_progress(&mut self, progress: u64) -> Result<(), TtyError> {
        self.group.set_progress(0, progress)
    }

    /// Advance the progress by `delta` and redraw.
    pub fn inc(&mut self, delta: u64) -> Result<(), TtyError> {
        self.group.inc(0, delta)
    }
}
