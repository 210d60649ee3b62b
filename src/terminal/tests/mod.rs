//! Virtual terminal tests.
//!
//! Organized by handler category:
//! - cursor: Cursor position and status reports
//! - scroll: Line feeds at the bottom of the screen
//! - text: Printing and ignored sequences

use std::io::{Read, Write};

use super::VirtualTerminal;
use crate::tty::{Position, Terminal};

fn write(term: &mut VirtualTerminal, text: &str) {
    term.write_all(text.as_bytes()).unwrap();
}

fn read_all(term: &mut VirtualTerminal) -> String {
    let mut buf = Vec::new();
    term.read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn cursor_starts_at_origin() {
    let term = VirtualTerminal::new(10, 10);
    assert_eq!(term.cursor(), Position::new(1, 1));
}

#[test]
fn cursor_position_sequence_moves_cursor() {
    let mut term = VirtualTerminal::new(10, 10);
    write(&mut term, "\x1b[4;7H");
    assert_eq!(term.cursor(), Position::new(4, 7));
    assert_eq!(term.cursor_moves(), &[Position::new(4, 7)]);
}

#[test]
fn cursor_position_defaults_and_clamps() {
    let mut term = VirtualTerminal::new(10, 10);
    write(&mut term, "\x1b[H");
    assert_eq!(term.cursor(), Position::new(1, 1));
    write(&mut term, "\x1b[99;99H");
    assert_eq!(term.cursor(), Position::new(10, 10));
}

#[test]
fn status_report_is_answered_through_input() {
    let mut term = VirtualTerminal::new(10, 10);
    write(&mut term, "\x1b[3;5H\x1b[6n");
    assert_eq!(read_all(&mut term), "\x1b[3;5R");
    assert_eq!(term.reports_answered(), 1);
    assert_eq!(term.reports_outside_cbreak(), 1);
}

#[test]
fn status_report_in_cbreak_is_not_flagged() {
    let mut term = VirtualTerminal::new(10, 10);
    {
        let _guard = term.enter_cbreak().unwrap();
        write(&mut term, "\x1b[6n");
    }
    assert_eq!(term.reports_outside_cbreak(), 0);
    assert!(!term.cbreak_active());
}

#[test]
fn silent_terminal_does_not_answer() {
    let mut term = VirtualTerminal::new(10, 10);
    term.set_answer_reports(false);
    write(&mut term, "\x1b[6n");
    assert_eq!(read_all(&mut term), "");
}

#[test]
fn typed_input_comes_before_reports() {
    let mut term = VirtualTerminal::new(10, 10);
    term.type_input("xy");
    write(&mut term, "\x1b[6n");
    assert_eq!(read_all(&mut term), "xy\x1b[1;1R");
}

#[test]
fn nested_cbreak_guards_restore_in_order() {
    let mut term = VirtualTerminal::new(10, 10);
    let outer = term.enter_cbreak().unwrap();
    let inner = term.enter_cbreak().unwrap();
    drop(inner);
    assert!(term.cbreak_active());
    drop(outer);
    assert!(!term.cbreak_active());
}

// ============================================================================
// Scroll
// ============================================================================

#[test]
fn line_feed_moves_down_and_to_first_column() {
    let mut term = VirtualTerminal::new(10, 10);
    write(&mut term, "abc\n");
    assert_eq!(term.cursor(), Position::new(2, 1));
    assert_eq!(term.scrolled_lines(), 0);
}

#[test]
fn line_feed_on_last_row_scrolls() {
    let mut term = VirtualTerminal::new(3, 10);
    write(&mut term, "one\ntwo\nthree\nfour");
    assert_eq!(term.scrolled_lines(), 1);
    assert_eq!(term.lines(), vec!["two", "three", "four"]);
    assert_eq!(term.cursor(), Position::new(3, 5));
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn prints_unicode_glyphs() {
    let mut term = VirtualTerminal::new(2, 10);
    write(&mut term, "⣿⣿⡇  ");
    assert_eq!(term.row_text(1), "⣿⣿⡇");
}

#[test]
fn carriage_return_overwrites() {
    let mut term = VirtualTerminal::new(2, 10);
    write(&mut term, "aaaa\rbb");
    assert_eq!(term.row_text(1), "bbaa");
}

#[test]
fn output_past_right_margin_is_dropped() {
    let mut term = VirtualTerminal::new(2, 3);
    write(&mut term, "abcdef");
    assert_eq!(term.row_text(1), "abc");
    assert_eq!(term.cursor().row, 1);
}

#[test]
fn unknown_sequences_are_ignored() {
    let mut term = VirtualTerminal::new(2, 10);
    write(&mut term, "\x1b[1;32mok\x1b[0m\x1b[2K");
    assert_eq!(term.row_text(1), "ok");
}

#[test]
fn records_raw_output_until_cleared() {
    let mut term = VirtualTerminal::new(2, 10);
    write(&mut term, "\x1b[2;2Hx");
    assert_eq!(term.output(), b"\x1b[2;2Hx");
    term.clear_history();
    assert!(term.output().is_empty());
    assert!(term.cursor_moves().is_empty());
    assert_eq!(term.row_text(2), " x");
}

#[test]
fn watch_sees_screen_after_terminal_is_dropped() {
    let mut term = VirtualTerminal::new(3, 10);
    let watch = term.watch();
    write(&mut term, "a\nb\nc\nd");
    drop(term);
    assert_eq!(watch.cursor(), Position::new(3, 2));
    assert_eq!(watch.row_text(1), "b");
    assert_eq!(watch.scrolled_lines(), 1);
}

#[test]
fn out_of_range_rows_are_empty() {
    let term = VirtualTerminal::new(2, 10);
    assert_eq!(term.row_text(0), "");
    assert_eq!(term.row_text(3), "");
}
