//! Terminal data types.
//!
//! Contains the screen state the virtual terminal keeps:
//! - Screen: a grid of characters, the cursor, and counters for tests
//! - the input queue status reports are answered into

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::tty::Position;

/// Screen contents and cursor of a virtual terminal.
///
/// Coordinates are 0-indexed internally and converted to the 1-indexed
/// terminal convention at the public boundary.
#[derive(Debug)]
pub struct Screen {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) grid: Vec<Vec<char>>,
    pub(crate) cursor_row: usize,
    pub(crate) cursor_col: usize,
    /// Lines pushed off the top by line feeds on the last row
    pub(crate) scrolled: usize,
    /// Bytes waiting to be read back by the application
    pub(crate) input: VecDeque<u8>,
    pub(crate) answer_reports: bool,
    pub(crate) reports_answered: usize,
    pub(crate) reports_outside_cbreak: usize,
    /// Every explicit cursor move, in order
    pub(crate) moves: Vec<Position>,
    pub(crate) cbreak: Rc<Cell<bool>>,
}

impl Screen {
    pub fn new(rows: usize, cols: usize, cbreak: Rc<Cell<bool>>) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            grid: vec![vec![' '; cols]; rows],
            cursor_row: 0,
            cursor_col: 0,
            scrolled: 0,
            input: VecDeque::new(),
            answer_reports: true,
            reports_answered: 0,
            reports_outside_cbreak: 0,
            moves: Vec::new(),
            cbreak,
        }
    }

    /// Cursor in terminal coordinates.
    pub fn cursor(&self) -> Position {
        Position::new(self.cursor_row as i32 + 1, self.cursor_col as i32 + 1)
    }

    /// Text of a 1-indexed row without trailing blanks.
    pub fn row_text(&self, row: usize) -> String {
        row.checked_sub(1)
            .and_then(|r| self.grid.get(r))
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// All rows, top to bottom, without trailing blanks.
    pub fn lines(&self) -> Vec<String> {
        (1..=self.rows).map(|row| self.row_text(row)).collect()
    }

    pub(crate) fn put_char(&mut self, c: char) {
        // Auto-wrap is off: output past the right margin is dropped.
        if self.cursor_col < self.cols {
            self.grid[self.cursor_row][self.cursor_col] = c;
            self.cursor_col += 1;
        }
    }
}
