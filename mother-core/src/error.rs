use thiserror::Error;

/// Errors raised while building or resizing a window.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    #[error("Invalid viewport {width}x{height}: width must be positive and finite")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid slot dimensions {width}x{height}: width must be positive and finite")]
    InvalidSlotDimensions { width: f64, height: f64 },

    #[error(
        "Boundary margin {margin} must be smaller than the slot width {slot_width}"
    )]
    MarginExceedsSlot { margin: f64, slot_width: f64 },

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("Unknown event name: {0}")]
    UnknownEvent(String),
}

impl WindowError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        WindowError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WindowError>;
