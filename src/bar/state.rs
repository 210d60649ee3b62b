//! Validated progress bar state.

use super::error::ProgressError;
use super::ramp::Ramp;
use super::render::render_bar;

/// Description of a bar before validation.
///
/// Fields are public so callers can use struct update syntax:
///
/// ```
/// use proggy::bar::BarInfo;
///
/// let info = BarInfo { progress: 3, ..BarInfo::new(10, 10) };
/// assert_eq!(info.progress, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarInfo {
    /// Bar width in characters
    pub size: usize,
    /// Total progress capacity in arbitrary units
    pub total: u64,
    /// Starting progress
    pub progress: u64,
    /// Glyphs from empty to solid
    pub characters: Ramp,
}

impl BarInfo {
    /// A bar with zero progress and the default ramp.
    pub fn new(size: usize, total: u64) -> Self {
        Self {
            size,
            total,
            progress: 0,
            characters: Ramp::default(),
        }
    }

    pub fn with_progress(mut self, progress: u64) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_characters(mut self, characters: Ramp) -> Self {
        self.characters = characters;
        self
    }
}

/// A text-based progress bar.
///
/// Every setter validates its input and leaves the bar untouched on error,
/// so `0 <= progress <= total` and `size > 0` hold for the bar's whole life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    size: usize,
    total: u64,
    progress: u64,
    characters: Ramp,
}

impl Bar {
    /// Validate a [`BarInfo`] into a bar.
    pub fn new(info: BarInfo) -> Result<Self, ProgressError> {
        check_size(info.size)?;
        check_progress(info.progress as u128, info.total)?;
        Ok(Self {
            size: info.size,
            total: info.total,
            progress: info.progress,
            characters: info.characters,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn characters(&self) -> &Ramp {
        &self.characters
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), ProgressError> {
        check_size(size)?;
        self.size = size;
        Ok(())
    }

    /// Set the total. It may not drop below the current progress.
    pub fn set_total(&mut self, total: u64) -> Result<(), ProgressError> {
        if total < self.progress {
            return Err(ProgressError::TotalBelowProgress {
                value: total,
                progress: self.progress,
            });
        }
        self.total = total;
        Ok(())
    }

    /// Set the progress, which must lie in `0..=total`.
    pub fn set_progress(&mut self, progress: u64) -> Result<(), ProgressError> {
        check_progress(progress as u128, self.total)?;
        self.progress = progress;
        Ok(())
    }

    /// Advance the progress by `delta`.
    pub fn inc(&mut self, delta: u64) -> Result<(), ProgressError> {
        let target = self.progress as u128 + delta as u128;
        check_progress(target, self.total)?;
        self.progress = target as u64;
        Ok(())
    }

    /// Replace the ramp from a string, which must hold at least two glyphs.
    pub fn set_characters(&mut self, characters: &str) -> Result<(), ProgressError> {
        self.characters = Ramp::new(characters)?;
        Ok(())
    }

    pub fn set_ramp(&mut self, ramp: Ramp) {
        self.characters = ramp;
    }

    /// Fraction of the total reached, `1.0` for an empty total.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.progress as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress == self.total
    }

    /// Render the bar to a string exactly `size` glyphs wide.
    pub fn render(&self) -> String {
        render_bar(self.size, self.total, self.progress, &self.characters)
    }
}

impl TryFrom<BarInfo> for Bar {
    type Error = ProgressError;

    fn try_from(info: BarInfo) -> Result<Self, Self::Error> {
        Self::new(info)
    }
}

fn check_size(size: usize) -> Result<(), ProgressError> {
    if size == 0 {
        return Err(ProgressError::InvalidSize { value: size });
    }
    Ok(())
}

fn check_progress(progress: u128, total: u64) -> Result<(), ProgressError> {
    if progress > total as u128 {
        return Err(ProgressError::ProgressOutOfRange {
            value: progress,
            total,
        });
    }
    Ok(())
}
