//! Multi-row TTY progress bars.
//!
//! A [`TtyMultiProgressBar`] binds several bars to consecutive screen rows
//! below an anchor position:
//!
//! ```text
//! anchor + (0, 0)  ⣿⣿⣿⣿⣿⣿⡇
//! anchor + (1, 0)  ⣿⣿⣧
//! anchor + (2, 0)  ⣿⣿⣿⣿⣿⣿⣿⣿⣿⣷
//! ```
//!
//! It moves through `Created -> Started -> Stopped`. Starting reserves the
//! rows (scrolling the terminal if needed) and draws once; every progress
//! change afterwards redraws the whole group; stopping prints a newline so
//! later output lands below the bars.

use std::fmt;

use crate::bar::{Bar, BarInfo, ProgressError, Ramp};

use super::backend::Terminal;
use super::console::Console;
use super::error::TtyError;
use super::position::Position;

/// Lifecycle of a TTY bar session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Started,
    Stopped,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Started => "started",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// A bar and the row it occupies, relative to the anchor.
#[derive(Debug, Clone)]
struct RowBinding {
    offset: usize,
    bar: Bar,
}

/// Several progress bars drawn to fixed rows of a terminal.
///
/// # Usage
///
/// ```
/// use proggy::bar::BarInfo;
/// use proggy::terminal::VirtualTerminal;
/// use proggy::tty::{Console, TtyMultiProgressBar};
///
/// let console = Console::new(VirtualTerminal::new(24, 80));
/// let infos = vec![BarInfo::new(10, 100), BarInfo::new(10, 50)];
/// let mut bars = TtyMultiProgressBar::new(console, infos).unwrap();
///
/// bars.scope(|bars| {
///     bars.set_progress(0, 50)?;
///     bars.bar_at(1)?.set_progress(50)
/// })
/// .unwrap();
/// ```
#[derive(Debug)]
pub struct TtyMultiProgressBar<T: Terminal> {
    console: Console<T>,
    position: Option<Position>,
    rows: Vec<RowBinding>,
    lifecycle: Lifecycle,
}

impl<T: Terminal> TtyMultiProgressBar<T> {
    /// Build a group with one row per [`BarInfo`], in order.
    ///
    /// The anchor is resolved from the cursor position at start unless
    /// [`with_position`](Self::with_position) sets one.
    pub fn new(console: Console<T>, infos: Vec<BarInfo>) -> Result<Self, ProgressError> {
        let rows = infos
            .into_iter()
            .enumerate()
            .map(|(offset, info)| Ok(RowBinding { offset, bar: Bar::new(info)? }))
            .collect::<Result<Vec<_>, ProgressError>>()?;
        Ok(Self {
            console,
            position: None,
            rows,
            lifecycle: Lifecycle::Created,
        })
    }

    /// Draw at an explicit anchor instead of the cursor position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Append a row. Only possible before the rows are reserved.
    ///
    /// # Returns
    /// The index of the new row.
    pub fn add_bar(&mut self, info: BarInfo) -> Result<usize, TtyError> {
        if self.lifecycle != Lifecycle::Created {
            return Err(TtyError::InvalidTransition {
                from: self.lifecycle,
                to: Lifecycle::Created,
            });
        }
        let offset = self.rows.len();
        self.rows.push(RowBinding {
            offset,
            bar: Bar::new(info)?,
        });
        Ok(offset)
    }

    /// Anchor of row 0. Set at start, possibly shifted by scrolling.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn console(&self) -> &Console<T> {
        &self.console
    }

    pub fn bar(&self, index: usize) -> Result<&Bar, TtyError> {
        self.rows
            .get(index)
            .map(|row| &row.bar)
            .ok_or(TtyError::RowOutOfRange {
                index,
                rows: self.rows.len(),
            })
    }

    /// Bars in row order.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.rows.iter().map(|row| &row.bar)
    }

    /// Bar of a row that is known to exist.
    pub(super) fn row(&self, index: usize) -> &Bar {
        &self.rows[index].bar
    }

    fn bar_mut(&mut self, index: usize) -> Result<&mut Bar, TtyError> {
        let rows = self.rows.len();
        self.rows
            .get_mut(index)
            .map(|row| &mut row.bar)
            .ok_or(TtyError::RowOutOfRange { index, rows })
    }

    /// Render a row to a string without touching the terminal.
    pub fn render(&self, index: usize) -> Result<String, TtyError> {
        Ok(self.bar(index)?.render())
    }

    /// Reserve the rows, resolve the anchor and draw for the first time.
    pub fn start(&mut self) -> Result<(), TtyError> {
        if self.lifecycle != Lifecycle::Created {
            return Err(TtyError::InvalidTransition {
                from: self.lifecycle,
                to: Lifecycle::Started,
            });
        }
        let start = match self.position {
            Some(position) => position,
            None => self.console.query_cursor_position()?,
        };
        let anchor = self.console.reserve_rows(self.rows.len(), Some(start))?;
        self.position = Some(anchor);
        self.lifecycle = Lifecycle::Started;
        tracing::debug!(%anchor, rows = self.rows.len(), "Started progress bars");
        self.draw()
    }

    /// Draw every row at its reserved position, top to bottom.
    pub fn draw(&mut self) -> Result<(), TtyError> {
        let anchor = match (self.lifecycle, self.position) {
            (Lifecycle::Started, Some(anchor)) => anchor,
            _ => {
                return Err(TtyError::NotStarted {
                    state: self.lifecycle,
                })
            }
        };
        tracing::trace!(rows = self.rows.len(), "Drawing progress bars");

        let Self { console, rows, .. } = self;
        for row in rows.iter() {
            let rendered = row.bar.render();
            let target = anchor + Position::rows(row.offset as i32);
            console.at_position(target, |console| console.write_str(&rendered))?;
        }
        Ok(())
    }

    /// Print a trailing newline and stop drawing.
    pub fn stop(&mut self) -> Result<(), TtyError> {
        if self.lifecycle != Lifecycle::Started {
            return Err(TtyError::NotStarted {
                state: self.lifecycle,
            });
        }
        self.lifecycle = Lifecycle::Stopped;
        self.console.newline()
    }

    /// Start, run `block`, then stop even if `block` failed.
    ///
    /// The block's error is returned in preference to a failure to stop.
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

    /// Set a row's progress and redraw the group.
    ///
    /// Before start the value is only stored; after stop it is rejected.
    pub fn set_progress(&mut self, index: usize, progress: u64) -> Result<(), TtyError> {
        self.update(index, |bar| bar.set_progress(progress))
    }

    /// Advance a row's progress by `delta` and redraw the group.
    pub fn inc(&mut self, index: usize, delta: u64) -> Result<(), TtyError> {
        self.update(index, |bar| bar.inc(delta))
    }

    fn update(
        &mut self,
        index: usize,
        change: impl FnOnce(&mut Bar) -> Result<(), ProgressError>,
    ) -> Result<(), TtyError> {
        if self.lifecycle == Lifecycle::Stopped {
            return Err(TtyError::NotStarted {
                state: self.lifecycle,
            });
        }
        change(self.bar_mut(index)?)?;
        if self.lifecycle == Lifecycle::Started {
            self.draw()?;
        }
        Ok(())
    }

    /// Handle bound to one row.
    pub fn bar_at(&mut self, index: usize) -> Result<BarHandle<'_, T>, TtyError> {
        self.bar(index)?;
        Ok(BarHandle { group: self, index })
    }
}

impl<T: Terminal> Drop for TtyMultiProgressBar<T> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Started {
            if let Err(e) = self.stop() {
                tracing::warn!("Failed to stop progress bars on drop: {}", e);
            }
        }
    }
}

/// One row of a [`TtyMultiProgressBar`].
///
/// Reads and writes go to the row's bar; progress changes redraw the whole
/// group.
#[derive(Debug)]
pub struct BarHandle<'a, T: Terminal> {
    group: &'a mut TtyMultiProgressBar<T>,
    index: usize,
}

impl<T: Terminal> BarHandle<'_, T> {
    fn bar(&self) -> &Bar {
        &self.group.rows[self.index].bar
    }

    fn bar_mut(&mut self) -> &mut Bar {
        &mut self.group.rows[self.index].bar
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.bar().size()
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), ProgressError> {
        self.bar_mut().set_size(size)
    }

    pub fn total(&self) -> u64 {
        self.bar().total()
    }

    pub fn set_total(&mut self, total: u64) -> Result<(), ProgressError> {
        self.bar_mut().set_total(total)
    }

    pub fn characters(&self) -> &Ramp {
        self.bar().characters()
    }

    pub fn set_characters(&mut self, characters: &str) -> Result<(), ProgressError> {
        self.bar_mut().set_characters(characters)
    }

    pub fn progress(&self) -> u64 {
        self.bar().progress()
    }

    pub fn set_progress(&mut self, progress: u64) -> Result<(), TtyError> {
        self.group.set_progress(self.index, progress)
    }

    pub fn inc(&mut self, delta: u64) -> Result<(), TtyError> {
        self.group.inc(self.index, delta)
    }

    pub fn render(&self) -> String {
        self.bar().render()
    }
}
