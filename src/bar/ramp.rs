//! Character ramps used to draw bars.
//!
//! A ramp is an ordered list of glyphs going from "empty" (first) to
//! "solid" (last). Everything in between is a leading glyph that shows how
//! much of the current cell is filled, raising the bar resolution beyond one
//! step per character.

use std::fmt;
use std::str::FromStr;

use super::error::ProgressError;

/// Minimum number of glyphs in a ramp: one empty and one solid.
pub const MIN_RAMP_LEN: usize = 2;

/// Braille dots filling up one at a time.
pub const BRAILLE: &str = " ⠁⠃⠇⡇⣇⣧⣷⣿";

/// Eighth blocks growing left to right.
pub const BLOCKS: &str = " ▏▎▍▌▋▊▉█";

/// Shade blocks.
pub const SHADES: &str = " ░▒▓█";

/// Plain ASCII, one step per cell.
pub const ASCII: &str = "-#";

/// Named presets, in the order they are listed to users.
pub const PRESETS: &[(&str, &str)] = &[
    ("braille", BRAILLE),
    ("blocks", BLOCKS),
    ("shades", SHADES),
    ("ascii", ASCII),
];

/// Validated glyph sequence with at least [`MIN_RAMP_LEN`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string, one glyph per `char`.
    pub fn new(characters: &str) -> Result<Self, ProgressError> {
        let glyphs: Vec<char> = characters.chars().collect();
        if glyphs.len() < MIN_RAMP_LEN {
            return Err(ProgressError::TooFewCharacters {
                value: characters.to_string(),
                min: MIN_RAMP_LEN,
            });
        }
        Ok(Self { glyphs })
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Result<Self, ProgressError> {
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, characters)| Self::new(characters))
            .unwrap_or_else(|| {
                Err(ProgressError::UnknownPreset {
                    name: name.to_string(),
                    available: preset_names().join(", "),
                })
            })
    }

    /// Resolve either a preset name or a literal ramp.
    ///
    /// Preset names win, so a literal ramp that happens to spell a preset name
    /// cannot be expressed this way; use [`Ramp::new`] for that.
    pub fn from_spec(spec: &str) -> Result<Self, ProgressError> {
        match Self::preset(spec) {
            Ok(ramp) => Ok(ramp),
            Err(ProgressError::UnknownPreset { .. }) => Self::new(spec),
            Err(e) => Err(e),
        }
    }

    /// All glyphs, empty first.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of fill steps per cell (`len - 1`).
    pub fn steps(&self) -> usize {
        self.glyphs.len() - 1
    }

    pub fn empty(&self) -> char {
        self.glyphs[0]
    }

    pub fn solid(&self) -> char {
        self.glyphs[self.steps()]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            glyphs: BRAILLE.chars().collect(),
        }
    }
}

impl FromStr for Ramp {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spec(s)
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Names of all presets.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}
