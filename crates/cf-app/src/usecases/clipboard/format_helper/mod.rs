//! Clipboard format helper.
//!
//! Reads and writes plain text, RTF, HTML and bitmap content on the system
//! clipboard on behalf of application code. A missing format is a normal
//! outcome and reads report it as `None`; only caller contract violations
//! and platform faults surface as errors.

mod read;
mod write;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use cf_core::clipboard::html_fragment::DEFAULT_SOURCE_URL;
use cf_core::ports::{ClipboardPlatformPort, StagingStorePort};
use cf_core::{ClipboardFormat, ClipboardResult, OutgoingClipboardPackage};

/// Format negotiation and encoding on top of the system clipboard.
///
/// 剪贴板格式读写助手。
pub struct ClipboardTextFormatHelper {
    clipboard: Arc<dyn ClipboardPlatformPort>,
    staging: Arc<dyn StagingStorePort>,
    source_url: String,
}

impl ClipboardTextFormatHelper {
    /// Creates a helper over the given clipboard and staging area.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use cf_app::ClipboardTextFormatHelper;
    /// use cf_platform::{FilesystemStagingStore, InMemoryClipboard};
    ///
    /// # async fn demo() -> cf_core::ClipboardResult<()> {
    /// let helper = ClipboardTextFormatHelper::new(
    ///     Arc::new(InMemoryClipboard::new()),
    ///     Arc::new(FilesystemStagingStore::new(
    ///         std::env::temp_dir().join("clipformat-staging"),
    ///     )),
    /// );
    ///
    /// helper.set_raw_html("<b>bold</b>").await?;
    /// assert_eq!(helper.get_raw_html().await?.as_deref(), Some("<b>bold</b>"));
    /// assert_eq!(helper.get_text().await?.as_deref(), Some("bold"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        clipboard: Arc<dyn ClipboardPlatformPort>,
        staging: Arc<dyn StagingStorePort>,
    ) -> Self {
        Self {
            clipboard,
            staging,
            source_url: DEFAULT_SOURCE_URL.to_string(),
        }
    }

    /// `SourceURL` written into HTML fragment envelopes.
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Formats the clipboard currently advertises.
    pub async fn available_formats(&self) -> ClipboardResult<Vec<ClipboardFormat>> {
        let mut formats = Vec::new();
        for format in ClipboardFormat::ALL {
            if self.clipboard.has_format(format).await? {
                formats.push(format);
            }
        }
        Ok(formats)
    }

    /// Submit `package` as the new clipboard content and flush it.
    async fn submit(&self, package: OutgoingClipboardPackage) -> ClipboardResult<()> {
        let formats = package.formats();
        self.clipboard.set_package(package).await?;
        self.clipboard.flush().await?;
        tracing::debug!(?formats, "Clipboard content submitted");
        Ok(())
    }
}
