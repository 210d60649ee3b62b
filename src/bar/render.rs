//! Bar rendering.
//!
//! A rendered bar is made of three parts, shown here between `|`:
//!
//! ```text
//! |⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣧                      |
//!   \    solid    / | \        empty     /
//!                 leading
//! ```
//!
//! The solid part is progress that won't change anymore. The leading glyph
//! steps through the ramp to show partial fill of one cell. The empty part is
//! progress not reached yet.

use super::ramp::Ramp;

/// Longest UTF-8 encoding of a glyph.
const MAX_GLYPH_BYTES: usize = 4;

/// Number of filled sub-cell steps for the given progress.
///
/// Computed as `floor(size * steps * progress / total)`, in 128-bit
/// arithmetic. A zero total renders as empty and progress past the total is
/// clamped to a full bar.
pub fn filled_steps(size: usize, steps: usize, total: u64, progress: u64) -> u128 {
    let resolution = size as u128 * steps as u128;
    if total == 0 {
        return 0;
    }
    (resolution * progress as u128 / total as u128).min(resolution)
}

/// Split filled steps into the solid cell count and the leading glyph index.
///
/// # Arguments
/// * `filled` - Filled sub-cell steps, see [`filled_steps`]
/// * `steps` - Steps per cell (ramp length minus one)
///
/// # Returns
/// A tuple of (solid_cells, leading_index).
pub fn solid_and_leading(filled: u128, steps: usize) -> (usize, usize) {
    let steps = steps as u128;
    let solid = filled.saturating_sub(1) / steps;
    let leading = if filled == 0 {
        0
    } else {
        (filled - 1) % steps + 1
    };
    (solid as usize, leading as usize)
}

/// Render a bar to a string exactly `size` glyphs wide.
///
/// # Arguments
/// * `size` - Width of the bar in characters
/// * `total` - Total progress capacity
/// * `progress` - Current progress, expected in `0..=total`
/// * `ramp` - Glyphs from empty to solid
pub fn render_bar(size: usize, total: u64, progress: u64, ramp: &Ramp) -> String {
    let glyphs = ramp.glyphs();
    let steps = ramp.steps();
    let filled = filled_steps(size, steps, total, progress);
    let (solid, leading) = solid_and_leading(filled, steps);

    let mut bar = String::with_capacity(capacity_hint(size));
    bar.extend(std::iter::repeat(ramp.solid()).take(solid));
    if size > 0 {
        bar.push(glyphs[leading]);
    }
    let used = solid + usize::from(size > 0);
    bar.extend(std::iter::repeat(ramp.empty()).take(size.saturating_sub(used)));
    bar
}

/// Bytes needed for `size` glyphs of any width, saturating.
fn capacity_hint(size: usize) -> usize {
    size.saturating_mul(MAX_GLYPH_BYTES)
}
