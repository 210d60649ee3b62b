//! Cursor handlers.
//!
//! Handles CSI sequences:
//! - H/f: Cursor position
//! - n: Device status report (only `6`, cursor position)
//!
//! And C0 controls:
//! - CR: Carriage return
//! - BS: Backspace

use crate::terminal::types::Screen;

/// CSI row ; col H. Missing or zero parameters mean 1.
pub fn cursor_position(screen: &mut Screen, params: &[u16]) {
    let row = param_or_one(params, 0);
    let col = param_or_one(params, 1);
    screen.cursor_row = (row - 1).min(screen.rows - 1);
    screen.cursor_col = (col - 1).min(screen.cols - 1);
    let cursor = screen.cursor();
    screen.moves.push(cursor);
}

/// CSI 6 n: queue `ESC [ row ; col R` as input.
pub fn device_status_report(screen: &mut Screen, params: &[u16]) {
    if params.first().copied() != Some(6) || !screen.answer_reports {
        return;
    }
    if !screen.cbreak.get() {
        // A cooked terminal would echo the report and hold it until Enter.
        screen.reports_outside_cbreak += 1;
    }
    let cursor = screen.cursor();
    let response = format!("\x1b[{};{}R", cursor.row, cursor.column);
    screen.input.extend(response.bytes());
    screen.reports_answered += 1;
}

pub fn carriage_return(screen: &mut Screen) {
    screen.cursor_col = 0;
}

pub fn backspace(screen: &mut Screen) {
    screen.cursor_col = screen.cursor_col.saturating_sub(1);
}

fn param_or_one(params: &[u16], index: usize) -> usize {
    match params.get(index).copied() {
        None | Some(0) => 1,
        Some(n) => n as usize,
    }
}
