//! Drawing progress bars to ANSI terminals.
//!
//! # Architecture
//!
//! - `position`: (row, column) vectors
//! - `ansi`: escape sequence generation and status report decoding
//! - `backend`: the [`Terminal`] trait and the stdin/stdout implementation
//! - `console`: cursor queries, moves, and row reservation
//! - `session`: multi-row bars and their lifecycle
//! - `single`: single-row bars
//!
//! # Usage
//!
//! ```no_run
//! use proggy::bar::BarInfo;
//! use proggy::tty::{Console, StdTerminal, TtyProgressBar};
//!
//! let console = Console::new(StdTerminal::new());
//! let mut bar = TtyProgressBar::new(console, BarInfo::new(40, 100)).unwrap();
//! bar.scope(|bar| {
//!     for _ in 0..100 {
//!         bar.inc(1)?;
//!     }
//!     Ok(())
//! })
//! .unwrap();
//! ```

pub mod ansi;
mod backend;
mod console;
mod error;
mod position;
mod session;
mod single;

#[cfg(unix)]
pub use backend::{StdCbreakGuard, StdTerminal};
pub use backend::Terminal;
pub use console::Console;
pub use error::TtyError;
pub use position::Position;
pub use session::{BarHandle, Lifecycle, TtyMultiProgressBar};
pub use single::TtyProgressBar;
