//! Terminal-independent progress bars.
//!
//! - `ramp`: glyph sequences from empty to solid, with named presets
//! - `render`: the pure rendering arithmetic
//! - `state`: validated bar state (`Bar`) and its description (`BarInfo`)
//!
//! Nothing here touches the terminal; see [`crate::tty`] for drawing.

mod error;
pub mod ramp;
pub mod render;
mod state;

pub use error::ProgressError;
pub use ramp::Ramp;
pub use render::render_bar;
pub use state::{Bar, BarInfo};
