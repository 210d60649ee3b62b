//! Bar state validation errors.

/// Errors raised when a bar field is set to an invalid value.
///
/// The bar is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Value for size must be positive. Attempted value: {value}.")]
    InvalidSize { value: usize },

    #[error(
        "Value for total cannot be lower than current progress: {progress}. Attempted value was {value}."
    )]
    TotalBelowProgress { value: u64, progress: u64 },

    #[error("Value for progress must be between 0 and {total}. Attempted value was {value}.")]
    ProgressOutOfRange { value: u128, total: u64 },

    #[error(
        "\"characters\" must have at least {min} characters (an empty and a full one). Attempted value: {value:?}."
    )]
    TooFewCharacters { value: String, min: usize },

    #[error("Unknown character preset '{name}'. Available presets: {available}.")]
    UnknownPreset { name: String, available: String },
}

impl ProgressError {
    /// Name of the bar field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => "size",
            Self::TotalBelowProgress { .. } => "total",
            Self::ProgressOutOfRange { .. } => "progress",
            Self::TooFewCharacters { .. } | Self::UnknownPreset { .. } => "characters",
        }
    }
}
