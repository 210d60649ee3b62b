//! Virtual terminal emulator module.
//!
//! Provides a VTE-based in-memory terminal that bars can be drawn to without
//! a real TTY. It understands the small subset of output bars produce
//! (cursor position, device status report, line feed, carriage return,
//! printable text), answers status reports through its input queue, and
//! scrolls when a line feed happens on the last row.
//!
//! Used by the test suite and by `proggy render --screen`.
//!
//! ```
//! use proggy::terminal::VirtualTerminal;
//! use proggy::tty::{Console, Position};
//!
//! let mut console = Console::new(VirtualTerminal::new(5, 20));
//! console.set_cursor_position(Position::new(3, 2)).unwrap();
//! console.write_str("hi").unwrap();
//! assert_eq!(console.terminal().row_text(3), " hi");
//! assert_eq!(console.query_cursor_position().unwrap(), Position::new(3, 4));
//! ```

mod handlers;
pub mod types;

use std::cell::{Cell, RefCell};
use std::io::{self, Read, Write};
use std::rc::Rc;

use crate::tty::{Position, Terminal};

use types::Screen;

/// In-memory terminal implementing [`Terminal`].
pub struct VirtualTerminal {
    parser: vte::Parser,
    screen: Rc<RefCell<Screen>>,
    cbreak: Rc<Cell<bool>>,
    output: Vec<u8>,
}

impl VirtualTerminal {
    /// A blank terminal of `rows` x `cols` with the cursor at (1, 1).
    pub fn new(rows: usize, cols: usize) -> Self {
        let cbreak = Rc::new(Cell::new(false));
        Self {
            parser: vte::Parser::new(),
            screen: Rc::new(RefCell::new(Screen::new(rows, cols, Rc::clone(&cbreak)))),
            cbreak,
            output: Vec::new(),
        }
    }

    /// Queue keystrokes as if the user typed them.
    pub fn type_input(&mut self, text: &str) {
        self.screen.borrow_mut().input.extend(text.bytes());
    }

    /// Whether status reports get a response. Defaults to true.
    pub fn set_answer_reports(&mut self, answer: bool) {
        self.screen.borrow_mut().answer_reports = answer;
    }

    pub fn size(&self) -> (usize, usize) {
        let screen = self.screen.borrow();
        (screen.rows, screen.cols)
    }

    pub fn cursor(&self) -> Position {
        self.screen.borrow().cursor()
    }

    /// Text of a 1-indexed row without trailing blanks.
    pub fn row_text(&self, row: usize) -> String {
        self.screen.borrow().row_text(row)
    }

    pub fn lines(&self) -> Vec<String> {
        self.screen.borrow().lines()
    }

    /// The whole screen, one line per row.
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }

    pub fn scrolled_lines(&self) -> usize {
        self.screen.borrow().scrolled
    }

    pub fn cbreak_active(&self) -> bool {
        self.cbreak.get()
    }

    pub fn reports_answered(&self) -> usize {
        self.screen.borrow().reports_answered
    }

    /// Status reports requested while input was not in cbreak mode.
    pub fn reports_outside_cbreak(&self) -> usize {
        self.screen.borrow().reports_outside_cbreak
    }

    /// Every explicit cursor move, in order.
    pub fn cursor_moves(&self) -> Vec<Position> {
        self.screen.borrow().moves.clone()
    }

    /// Raw bytes written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Read-only view of the screen that outlives the terminal.
    ///
    /// Lets a caller inspect what was drawn after the terminal was moved into,
    /// and dropped with, a console or bar group.
    pub fn watch(&self) -> ScreenWatch {
        ScreenWatch {
            screen: Rc::clone(&self.screen),
        }
    }

    /// Forget recorded output and cursor moves; the screen is kept.
    pub fn clear_history(&mut self) {
        self.output.clear();
        self.screen.borrow_mut().moves.clear();
    }
}

impl std::fmt::Debug for VirtualTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualTerminal")
            .field("screen", &self.screen)
            .field("output_len", &self.output.len())
            .finish()
    }
}

impl Read for VirtualTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut n = 0;
        while n < buf.len() {
            match self.screen.borrow_mut().input.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl Write for VirtualTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(buf);
        self.parser.advance(&mut *self.screen.borrow_mut(), buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Shared read-only view of a [`VirtualTerminal`]'s screen.
#[derive(Debug, Clone)]
pub struct ScreenWatch {
    screen: Rc<RefCell<Screen>>,
}

impl ScreenWatch {
    pub fn cursor(&self) -> Position {
        self.screen.borrow().cursor()
    }

    /// Text of a 1-indexed row without trailing blanks.
    pub fn row_text(&self, row: usize) -> String {
        self.screen.borrow().row_text(row)
    }

    pub fn scrolled_lines(&self) -> usize {
        self.screen.borrow().scrolled
    }
}

/// Sets the virtual cbreak flag back to its previous value on drop.
#[derive(Debug)]
pub struct VirtualCbreakGuard {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for VirtualCbreakGuard {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

impl Terminal for VirtualTerminal {
    type CbreakGuard = VirtualCbreakGuard;

    fn enter_cbreak(&mut self) -> io::Result<VirtualCbreakGuard> {
        let previous = self.cbreak.replace(true);
        Ok(VirtualCbreakGuard {
            flag: Rc::clone(&self.cbreak),
            previous,
        })
    }
}

#[cfg(test)]
mod tests;
