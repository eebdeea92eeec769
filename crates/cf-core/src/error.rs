use crate::clipboard::ClipboardFormat;
use thiserror::Error;

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// A required input was absent.
    #[error("invalid argument: `{0}` must not be null")]
    InvalidArgument(&'static str),

    /// The platform advertises the format but its payload is empty or unreadable.
    #[error("clipboard format `{0}` is present but empty")]
    EmptyFormat(ClipboardFormat),

    #[error("clipboard returned a `{actual}` payload for a `{expected}` request")]
    UnexpectedPayload {
        expected: ClipboardFormat,
        actual: ClipboardFormat,
    },

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard platform error: {0}")]
    Platform(#[from] anyhow::Error),

    #[error("clipboard stream I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ClipboardError {
    pub fn is_empty_format(&self) -> bool {
        matches!(self, ClipboardError::EmptyFormat(_))
    }
}
