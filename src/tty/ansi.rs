//! ANSI escape generation and status report decoding.
//!
//! Only the two sequences needed for drawing are produced:
//! - `ESC [ {row} ; {col} H`: cursor position
//! - `ESC [ 6 n`: device status report (cursor position query)
//!
//! The terminal answers a status report with `ESC [ {row} ; {col} R`.

use std::io::{self, Read};

use super::position::Position;

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Device status report asking for the cursor position.
pub const DEVICE_STATUS_REPORT: &str = "\x1b[6n";

/// Terminator of a cursor position report.
pub const CURSOR_REPORT_END: u8 = b'R';

/// Length of the introducer skipped before reading a report.
const RESPONSE_INTRODUCER_LEN: usize = 2;

/// Suffixes that define escape sequence types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    CursorPosition,
    DeviceStatusReport,
}

impl EscapeKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::CursorPosition => "H",
            Self::DeviceStatusReport => "6n",
        }
    }
}

/// Build an escape sequence from its kind and numeric parameters.
pub fn escape(kind: EscapeKind, values: &[i32]) -> String {
    let values = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";");
    format!("{}{}{}", CSI, values, kind.suffix())
}

/// Escape sequence moving the cursor to `position`.
pub fn set_cursor_position(position: Position) -> String {
    escape(EscapeKind::CursorPosition, &[position.row, position.column])
}

/// Read a status report response from `input`.
///
/// Discards the two-byte introducer, then accumulates bytes up to the `R`
/// terminator and splits the payload on `;`. Fails only on I/O errors,
/// including end of input before the terminator.
pub fn read_response<R: Read + ?Sized>(input: &mut R) -> io::Result<Vec<Vec<u8>>> {
    let mut introducer = [0u8; RESPONSE_INTRODUCER_LEN];
    input.read_exact(&mut introducer)?;

    let mut buf = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        input.read_exact(&mut byte)?;
        if byte[0] == CURSOR_REPORT_END {
            break;
        }
        buf.push(byte[0]);
    }

    Ok(buf.split(|&b| b == b';').map(<[u8]>::to_vec).collect())
}

/// Decode the tokens of a cursor position report.
///
/// Returns `None` unless there are exactly two tokens and both are integers.
/// That happens when unrelated input was interleaved with the response.
pub fn parse_cursor_report(tokens: &[Vec<u8>]) -> Option<Position> {
    match tokens {
        [row, column] => Some(Position::new(parse_token(row)?, parse_token(column)?)),
        _ => None,
    }
}

fn parse_token(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}
