//! Errors raised while drawing bars to a terminal.

use crate::bar::ProgressError;

use super::session::Lifecycle;

/// Errors that can occur while driving a terminal session.
#[derive(Debug, thiserror::Error)]
pub enum TtyError {
    #[error("Bar not started (state: {state}). Call start() before drawing.")]
    NotStarted { state: Lifecycle },

    #[error("Cannot go from {from} to {to}")]
    InvalidTransition { from: Lifecycle, to: Lifecycle },

    #[error("No bar at row {index}; the group has {rows} row(s)")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("No valid cursor position report after {attempts} attempt(s)")]
    CursorQueryExhausted { attempts: u32 },

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
