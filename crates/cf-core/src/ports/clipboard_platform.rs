//! Clipboard platform port - abstracts the host system clipboard
//!
//! The helper only needs content negotiation, payload access and an explicit
//! flush; everything else about the host clipboard stays in the adapter.

use crate::clipboard::{ClipboardFormat, ClipboardPayload, OutgoingClipboardPackage};
use crate::error::ClipboardResult;
use async_trait::async_trait;

#[async_trait]
pub trait ClipboardPlatformPort: Send + Sync {
    /// Whether the current clipboard content advertises `format`.
    async fn has_format(&self, format: ClipboardFormat) -> ClipboardResult<bool>;

    /// Fetch the payload for `format`.
    ///
    /// Adapters return [`ClipboardError::EmptyFormat`](crate::ClipboardError::EmptyFormat)
    /// when the format is advertised but carries no data.
    async fn get_payload(&self, format: ClipboardFormat) -> ClipboardResult<ClipboardPayload>;

    /// Replace the clipboard content with `package`.
    ///
    /// Stream references in the package are consumed before this returns.
    async fn set_package(&self, package: OutgoingClipboardPackage) -> ClipboardResult<()>;

    /// Make the submitted content available to other consumers immediately.
    async fn flush(&self) -> ClipboardResult<()>;
}
