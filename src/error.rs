use thiserror::Error;

/// Errors returned when a layout cannot be computed.
///
/// All of these are caller errors detected before any item is placed; retrying with the same
/// input will fail the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid layout configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("invalid aspect ratio {ratio} for item {index}")]
    InvalidAspectRatio { index: usize, ratio: f64 },

    #[error("too many items: {count} exceeds the limit of {limit}")]
    TooManyItems { count: usize, limit: usize },
}

impl LayoutError {
    pub(crate) fn configuration(reason: impl Into<String>) -> LayoutError {
        LayoutError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns true if the error comes from the layout configuration rather than the items.
    pub fn is_configuration(&self) -> bool {
        matches!(self, LayoutError::InvalidConfiguration { .. })
    }
}
