//! Application-level error types.

use thiserror::Error;

use crate::color::Channel;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Text-field content that is not a number in `[0.0, 1.0]`.
    ///
    /// Fully recoverable: the editor shows an alert and resets the offending
    /// channel to 0.0. Never propagated beyond the editor screen.
    #[error("{input:?} is not a valid {channel} value: enter a value between 0 and 1")]
    InvalidChannelInput { channel: Channel, input: String },

    /// Malformed `#RRGGBB` command-line argument.
    #[error("invalid color argument {0:?}: expected #RRGGBB")]
    InvalidColorArg(String),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
