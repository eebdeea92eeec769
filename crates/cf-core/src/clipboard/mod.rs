//! Clipboard domain models.
mod format;
pub mod html_fragment;
mod package;
mod payload;
pub mod plain_text;
mod stream;

pub use format::ClipboardFormat;
pub use html_fragment::HtmlFragmentHeader;
pub use package::OutgoingClipboardPackage;
pub use payload::ClipboardPayload;
pub use stream::StreamReference;
