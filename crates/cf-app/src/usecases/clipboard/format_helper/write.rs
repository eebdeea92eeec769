use cf_core::clipboard::{html_fragment, plain_text};
use cf_core::{
    ClipboardError, ClipboardPayload, ClipboardResult, OutgoingClipboardPackage, StreamReference,
};

use super::ClipboardTextFormatHelper;

impl ClipboardTextFormatHelper {
    /// Put bitmap bytes on the clipboard.
    ///
    /// The bytes travel through a staging file because the platform takes
    /// bitmaps by stream reference. The staging file is removed once the
    /// clipboard has consumed it; removal failures are only logged.
    pub async fn set_image<'a>(&self, image: impl Into<Option<&'a [u8]>>) -> ClipboardResult<()> {
        let image = image.into().ok_or(ClipboardError::InvalidArgument("image"))?;

        let path = self.staging.stage(image).await?;
        let package = OutgoingClipboardPackage::new()
            .with(ClipboardPayload::Bitmap(StreamReference::from_file(&path)));

        let result = self.submit(package).await;

        if let Err(err) = self.staging.discard(&path).await {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to remove clipboard staging file"
            );
        }

        result
    }

    /// Put HTML on the clipboard together with a plain-text rendering of it.
    pub async fn set_raw_html<'a>(&self, html: impl Into<Option<&'a str>>) -> ClipboardResult<()> {
        let html = html.into().ok_or(ClipboardError::InvalidArgument("html"))?;

        let envelope = html_fragment::encode_with_source(html, &self.source_url);
        let fallback = plain_text::html_to_text(html);

        let package = OutgoingClipboardPackage::new()
            .with(ClipboardPayload::Html(envelope))
            .with(ClipboardPayload::Text(fallback));
        self.submit(package).await
    }

    pub async fn set_rtf<'a>(&self, rtf: impl Into<Option<&'a str>>) -> ClipboardResult<()> {
        let rtf = rtf.into().ok_or(ClipboardError::InvalidArgument("rtf"))?;
        self.submit(OutgoingClipboardPackage::new().with(ClipboardPayload::Rtf(rtf.to_string())))
            .await
    }

    pub async fn set_text<'a>(&self, text: impl Into<Option<&'a str>>) -> ClipboardResult<()> {
        let text = text.into().ok_or(ClipboardError::InvalidArgument("text"))?;
        self.submit(OutgoingClipboardPackage::new().with(ClipboardPayload::Text(text.to_string())))
            .await
    }
}
