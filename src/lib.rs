//! Proggy - sub-character resolution progress bars for ANSI terminals.
//!
//! - [`bar`]: bar state, validation, and rendering to a string
//! - [`tty`]: drawing bars at fixed rows of a real terminal
//! - [`terminal`]: an in-memory terminal to draw to without a TTY
//! - [`config`]: configuration file
//! - [`cli`]: command-line definitions

pub mod bar;
pub mod cli;
pub mod config;
pub mod terminal;
pub mod tty;

pub use bar::{Bar, BarInfo, ProgressError, Ramp};
pub use config::Config;
