//! VTE performer for the virtual terminal.
//!
//! Routes parsed output to the handler modules. Anything not listed there
//! (SGR, erase, OSC, ...) is ignored.

mod cursor;
mod scroll;

use vte::{Params, Perform};

use super::types::Screen;

const BACKSPACE: u8 = 0x08;
const LINE_FEED: u8 = 0x0a;
const CARRIAGE_RETURN: u8 = 0x0d;

impl Perform for Screen {
    fn print(&mut self, c: char) {
        self.put_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            LINE_FEED => scroll::line_feed(self),
            CARRIAGE_RETURN => cursor::carriage_return(self),
            BACKSPACE => cursor::backspace(self),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore || !intermediates.is_empty() {
            return;
        }
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        match action {
            'H' | 'f' => cursor::cursor_position(self, &params),
            'n' => cursor::device_status_report(self, &params),
            _ => {}
        }
    }
}
