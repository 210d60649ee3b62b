//! Console and cursor control.
//!
//! Wraps a [`Terminal`] and provides the cursor operations bars are drawn
//! with: querying and setting the cursor position, running a block at a
//! temporary position, and reserving rows at the bottom of the screen.

use std::io::Write;

use crate::config::ConsoleConfig;

use super::ansi::{self, DEVICE_STATUS_REPORT};
use super::backend::Terminal;
use super::error::TtyError;
use super::position::Position;

/// Cursor-level driver over a terminal.
#[derive(Debug)]
pub struct Console<T> {
    terminal: T,
    config: ConsoleConfig,
}

impl<T: Terminal> Console<T> {
    pub fn new(terminal: T) -> Self {
        Self::with_config(terminal, ConsoleConfig::default())
    }

    pub fn with_config(terminal: T, config: ConsoleConfig) -> Self {
        Self { terminal, config }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Try to get the cursor position once.
    ///
    /// Can fail to decode if there was user input during the round trip.
    ///
    /// # Returns
    /// The current cursor position, or `None` if the response was malformed.
    pub fn try_query_cursor_position(&mut self) -> Result<Option<Position>, TtyError> {
        let tokens = {
            let _cbreak = self.terminal.enter_cbreak()?;
            self.terminal.write_all(DEVICE_STATUS_REPORT.as_bytes())?;
            self.terminal.flush()?;
            ansi::read_response(&mut self.terminal)?
        };
        Ok(ansi::parse_cursor_report(&tokens))
    }

    /// Get the current cursor position, retrying on malformed responses.
    ///
    /// Retries without backoff until a valid report arrives, or until
    /// `max_query_attempts` is reached when one is configured.
    pub fn query_cursor_position(&mut self) -> Result<Position, TtyError> {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            if let Some(position) = self.try_query_cursor_position()? {
                return Ok(position);
            }
            tracing::debug!(attempts, "Malformed cursor position report, retrying");
            if let Some(max) = self.config.max_query_attempts {
                if attempts >= max {
                    return Err(TtyError::CursorQueryExhausted { attempts });
                }
            }
        }
    }

    /// Move the cursor to `position`.
    pub fn set_cursor_position(&mut self, position: Position) -> Result<(), TtyError> {
        self.write_str(&ansi::set_cursor_position(position))
    }

    /// Write text at the current cursor position and flush.
    pub fn write_str(&mut self, text: &str) -> Result<(), TtyError> {
        self.terminal.write_all(text.as_bytes())?;
        self.terminal.flush()?;
        Ok(())
    }

    /// Write a line feed and flush.
    pub fn newline(&mut self) -> Result<(), TtyError> {
        self.write_str("\n")
    }

    /// Run `block` with the cursor at `position`, moving it back afterwards.
    ///
    /// The cursor is moved back even if `block` fails; the block's error is
    /// returned in preference to a failure while moving back.
    pub fn at_position<R>(
        &mut self,
        position: Position,
        block: impl FnOnce(&mut Self) -> Result<R, TtyError>,
    ) -> Result<R, TtyError> {
        let old = self.query_cursor_position()?;
        self.set_cursor_position(position)?;
        let result = block(self);
        let restored = self.set_cursor_position(old);
        let value = result?;
        restored?;
        Ok(value)
    }

    /// Reserve `rows` lines and return the position of the first one.
    ///
    /// Leaves the cursor on the last reserved line. If printing the lines
    /// scrolled the terminal, the returned position accounts for it, so it
    /// can differ from `start`. The column of `start` is kept.
    ///
    /// # Arguments
    /// * `rows` - How many lines to reserve
    /// * `start` - Where the first line should be, or the cursor if `None`
    pub fn reserve_rows(&mut self, rows: usize, start: Option<Position>) -> Result<Position, TtyError> {
        let start = match start {
            Some(start) => start,
            None => self.query_cursor_position()?,
        };
        let extra_lines = rows.saturating_sub(1);

        self.set_cursor_position(start)?;
        self.write_str(&"\n".repeat(extra_lines))?;
        let last_line = self.query_cursor_position()?;
        let first_line = last_line - Position::rows(extra_lines as i32);
        let anchor = Position::new(first_line.row, start.column);

        if anchor != start {
            tracing::debug!(%start, %anchor, rows, "Terminal scrolled while reserving rows");
        }
        Ok(anchor)
    }
}
