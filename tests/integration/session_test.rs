//! Multi-row sessions drawn to a virtual terminal.

use proggy::terminal::VirtualTerminal;
use proggy::tty::{Console, Lifecycle, Position, TtyError, TtyMultiProgressBar};

use crate::helpers::{ascii_bar, ascii_group};

/// Row targets of the last draw of a `rows`-row group.
///
/// Each row is one move to the target and one move back.
fn last_draw_targets(term: &VirtualTerminal, rows: usize) -> Vec<Position> {
    let moves = term.cursor_moves();
    moves[moves.len() - 2 * rows..]
        .iter()
        .step_by(2)
        .copied()
        .collect()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn three_rows_at_anchor_are_drawn_top_to_bottom() {
    let mut bars = ascii_group(24, 3).with_position(Position::new(10, 1));
    bars.start().unwrap();
    assert_eq!(bars.position(), Some(Position::new(10, 1)));

    let expected = vec![
        Position::new(10, 1),
        Position::new(11, 1),
        Position::new(12, 1),
    ];
    assert_eq!(last_draw_targets(bars.console().terminal(), 3), expected);

    for progress in [3, 7] {
        bars.set_progress(1, progress).unwrap();
        assert_eq!(last_draw_targets(bars.console().terminal(), 3), expected);
    }

    let term = bars.console().terminal();
    assert_eq!(term.row_text(10), "----------");
    assert_eq!(term.row_text(11), "#######---");
    assert_eq!(term.row_text(12), "----------");
}

#[test]
fn draw_restores_cursor_after_each_row() {
    let mut bars = ascii_group(24, 2).with_position(Position::new(4, 1));
    bars.start().unwrap();
    let before = bars.console().terminal().cursor();
    bars.draw().unwrap();

    let term = bars.console().terminal();
    assert_eq!(term.cursor(), before);
    let moves = term.cursor_moves();
    assert_eq!(moves[moves.len() - 1], before);
    assert_eq!(moves[moves.len() - 3], before);
}

#[test]
fn rows_keep_anchor_column() {
    let mut bars = ascii_group(24, 2).with_position(Position::new(3, 6));
    bars.scope(|bars| bars.set_progress(0, 10)).unwrap();
    let term = bars.console().terminal();
    assert_eq!(term.row_text(3), "     ##########");
    assert_eq!(term.row_text(4), "     ----------");
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn start_near_bottom_shifts_anchor_up() {
    let mut bars = ascii_group(24, 3).with_position(Position::new(23, 1));
    bars.start().unwrap();
    assert_eq!(bars.position(), Some(Position::new(22, 1)));

    bars.set_progress(2, 10).unwrap();
    let term = bars.console().terminal();
    assert_eq!(term.scrolled_lines(), 1);
    assert_eq!(term.row_text(22), "----------");
    assert_eq!(term.row_text(24), "##########");
}

#[test]
fn start_at_cursor_on_last_row_scrolls_whole_group_into_view() {
    let mut console = Console::new(VirtualTerminal::new(5, 40));
    console.write_str("$ run\n\n\n\n").unwrap();
    assert_eq!(console.terminal().cursor(), Position::new(5, 1));

    let mut bars =
        TtyMultiProgressBar::new(console, vec![ascii_bar(4, 4), ascii_bar(4, 4)]).unwrap();
    bars.start().unwrap();
    bars.set_progress(1, 4).unwrap();

    assert_eq!(bars.position(), Some(Position::new(4, 1)));
    let term = bars.console().terminal();
    assert_eq!(term.row_text(4), "----");
    assert_eq!(term.row_text(5), "####");
    // the prompt scrolled off the top
    assert_eq!(term.row_text(1), "");
    assert_eq!(term.scrolled_lines(), 1);
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn keystrokes_before_start_are_tolerated() {
    let mut console = Console::new(VirtualTerminal::new(24, 80));
    console.terminal_mut().type_input("ab");
    let mut bars = TtyMultiProgressBar::new(console, vec![ascii_bar(10, 10)]).unwrap();
    bars.start().unwrap();
    bars.set_progress(0, 5).unwrap();

    let term = bars.console().terminal();
    assert_eq!(bars.position(), Some(Position::new(1, 1)));
    assert_eq!(term.row_text(1), "#####-----");
    assert!(!term.cbreak_active());
    assert_eq!(term.reports_outside_cbreak(), 0);
}

#[test]
fn cbreak_is_released_after_every_query() {
    let mut bars = ascii_group(24, 3);
    bars.scope(|bars| {
        for step in 1..=10 {
            bars.set_progress(0, step)?;
        }
        Ok(())
    })
    .unwrap();
    let term = bars.console().terminal();
    assert!(term.reports_answered() > 10);
    assert_eq!(term.reports_outside_cbreak(), 0);
    assert!(!term.cbreak_active());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn draw_outside_started_fails() {
    let mut bars = ascii_group(24, 1);
    assert!(matches!(
        bars.draw(),
        Err(TtyError::NotStarted {
            state: Lifecycle::Created
        })
    ));
    bars.start().unwrap();
    bars.stop().unwrap();
    assert!(matches!(
        bars.draw(),
        Err(TtyError::NotStarted {
            state: Lifecycle::Stopped
        })
    ));
}

#[test]
fn stop_leaves_cursor_below_group() {
    let mut bars = ascii_group(24, 3).with_position(Position::new(6, 1));
    bars.scope(|_| Ok(())).unwrap();
    assert_eq!(bars.console().terminal().cursor(), Position::new(9, 1));
}

#[test]
fn dropping_started_group_stops_it() {
    let console = Console::new(VirtualTerminal::new(24, 80));
    let watch = console.terminal().watch();
    let mut bars = TtyMultiProgressBar::new(console, vec![ascii_bar(10, 10); 3])
        .unwrap()
        .with_position(Position::new(6, 1));
    bars.start().unwrap();
    bars.set_progress(2, 10).unwrap();
    assert_eq!(watch.cursor(), Position::new(8, 1));

    drop(bars);

    // trailing newline puts the cursor below the last row
    assert_eq!(watch.cursor(), Position::new(9, 1));
    assert_eq!(watch.row_text(8), "##########");
}

#[test]
fn dropping_unstarted_group_writes_nothing() {
    let console = Console::new(VirtualTerminal::new(24, 80));
    let watch = console.terminal().watch();
    drop(TtyMultiProgressBar::new(console, vec![ascii_bar(10, 10)]).unwrap());
    assert_eq!(watch.cursor(), Position::new(1, 1));
    assert_eq!(watch.row_text(1), "");
}
