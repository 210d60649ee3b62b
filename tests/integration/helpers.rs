//! Shared helpers for integration tests.

use std::process::Command;

use proggy::terminal::VirtualTerminal;
use proggy::tty::{Console, TtyMultiProgressBar};
use proggy::{BarInfo, Ramp};
use tempfile::TempDir;

/// A bar using `-` for empty and `#` for solid cells.
pub fn ascii_bar(size: usize, total: u64) -> BarInfo {
    BarInfo::new(size, total).with_characters(Ramp::new("-#").unwrap())
}

/// A group of `bars` identical 10-wide ascii bars on a virtual terminal.
pub fn ascii_group(rows: usize, bars: usize) -> TtyMultiProgressBar<VirtualTerminal> {
    let console = Console::new(VirtualTerminal::new(rows, 80));
    TtyMultiProgressBar::new(console, (0..bars).map(|_| ascii_bar(10, 10)).collect()).unwrap()
}

/// Run the proggy binary with an isolated (empty) config.
///
/// # Returns
/// `(stdout, stderr, exit_code)`
pub fn run_proggy(args: &[&str]) -> (String, String, i32) {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_proggy"))
        .args(args)
        .env("PROGGY_CONFIG", dir.path().join("config.toml"))
        .output()
        .expect("Failed to execute proggy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
