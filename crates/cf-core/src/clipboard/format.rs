use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Clipboard format tag understood by the helper.
///
/// 剪贴板格式标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardFormat {
    Text,
    Rtf,
    Html,
    Bitmap,
}

impl ClipboardFormat {
    /// Every supported format, in negotiation order.
    pub const ALL: [ClipboardFormat; 4] = [
        ClipboardFormat::Text,
        ClipboardFormat::Rtf,
        ClipboardFormat::Html,
        ClipboardFormat::Bitmap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardFormat::Text => "text",
            ClipboardFormat::Rtf => "rtf",
            ClipboardFormat::Html => "html",
            ClipboardFormat::Bitmap => "bitmap",
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipboardFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "text/plain" => Ok(ClipboardFormat::Text),
            "rtf" | "text/rtf" => Ok(ClipboardFormat::Rtf),
            "html" | "text/html" => Ok(ClipboardFormat::Html),
            "bitmap" | "image" | "image/png" => Ok(ClipboardFormat::Bitmap),
            other => Err(anyhow::anyhow!("unsupported clipboard format: {other}")),
        }
    }
}
