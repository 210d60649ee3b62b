//! Line feed and scrolling.
//!
//! A line feed on the last row scrolls the whole screen up by one line,
//! which is what shifts the coordinates of previously reserved rows.

use crate::terminal::types::Screen;

/// LF, with ONLCR output processing: also returns to the first column.
pub fn line_feed(screen: &mut Screen) {
    screen.cursor_col = 0;
    if screen.cursor_row + 1 < screen.rows {
        screen.cursor_row += 1;
    } else {
        scroll_up(screen);
    }
}

/// Drop the top line and add a blank one at the bottom.
pub fn scroll_up(screen: &mut Screen) {
    screen.grid.remove(0);
    screen.grid.push(vec![' '; screen.cols]);
    screen.scrolled += 1;
}
