//! Console cursor control against a virtual terminal.

use proggy::config::ConsoleConfig;
use proggy::terminal::VirtualTerminal;
use proggy::tty::{Console, Position, TtyError};

#[test]
fn reserve_one_row_above_bottom_returns_post_scroll_anchor() {
    for rows in 2..=5 {
        let mut console = Console::new(VirtualTerminal::new(24, 80));
        let anchor = console.reserve_rows(rows, Some(Position::new(23, 1))).unwrap();
        let last = console.query_cursor_position().unwrap();
        assert_eq!(last, Position::new(24, 1));
        assert_eq!(anchor, last - Position::rows(rows as i32 - 1));
        assert_eq!(console.terminal().scrolled_lines(), rows - 2);
    }
}

#[test]
fn reserve_fitting_rows_does_not_scroll() {
    let mut console = Console::new(VirtualTerminal::new(24, 80));
    let anchor = console.reserve_rows(4, Some(Position::new(2, 3))).unwrap();
    assert_eq!(anchor, Position::new(2, 3));
    assert_eq!(console.terminal().scrolled_lines(), 0);
}

#[test]
fn query_survives_several_interleaved_keystrokes() {
    let mut console = Console::new(VirtualTerminal::new(24, 80));
    console.set_cursor_position(Position::new(12, 9)).unwrap();
    console.terminal_mut().type_input("xyz");
    assert_eq!(console.query_cursor_position().unwrap(), Position::new(12, 9));
    assert!(!console.terminal().cbreak_active());
    assert_eq!(console.terminal().reports_outside_cbreak(), 0);
}

#[test]
fn query_limit_reports_attempts() {
    let config = ConsoleConfig {
        max_query_attempts: Some(2),
    };
    let mut console = Console::with_config(VirtualTerminal::new(24, 80), config);
    // enough stray input to garble two responses in a row
    console.terminal_mut().type_input("aRaRa");
    let err = console.query_cursor_position().unwrap_err();
    assert!(matches!(err, TtyError::CursorQueryExhausted { attempts: 2 }));
    assert_eq!(err.to_string(), "No valid cursor position report after 2 attempt(s)");
    assert!(!console.terminal().cbreak_active());
}

#[test]
fn at_position_writes_without_moving_the_cursor() {
    let mut console = Console::new(VirtualTerminal::new(10, 20));
    console.write_str("prompt").unwrap();
    let result = console
        .at_position(Position::new(5, 1), |console| {
            console.write_str("status")?;
            console.query_cursor_position()
        })
        .unwrap();
    assert_eq!(result, Position::new(5, 7));
    assert_eq!(console.terminal().cursor(), Position::new(1, 7));
    assert_eq!(console.terminal().row_text(5), "status");
}
