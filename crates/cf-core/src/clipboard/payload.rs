use super::{ClipboardFormat, StreamReference};

/// One encoded representation of clipboard content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Text(String),
    Rtf(String),
    /// Full HTML fragment envelope (header + wrapped document).
    Html(String),
    Bitmap(StreamReference),
}

impl ClipboardPayload {
    pub fn format(&self) -> ClipboardFormat {
        match self {
            ClipboardPayload::Text(_) => ClipboardFormat::Text,
            ClipboardPayload::Rtf(_) => ClipboardFormat::Rtf,
            ClipboardPayload::Html(_) => ClipboardFormat::Html,
            ClipboardPayload::Bitmap(_) => ClipboardFormat::Bitmap,
        }
    }

    /// String content for the textual formats, `None` for bitmaps.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardPayload::Text(s) | ClipboardPayload::Rtf(s) | ClipboardPayload::Html(s) => {
                Some(s)
            }
            ClipboardPayload::Bitmap(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            ClipboardPayload::Text(s) | ClipboardPayload::Rtf(s) | ClipboardPayload::Html(s) => {
                Some(s)
            }
            ClipboardPayload::Bitmap(_) => None,
        }
    }
}
