use cf_core::clipboard::html_fragment;
use cf_core::{ClipboardError, ClipboardFormat, ClipboardPayload, ClipboardResult};

use super::ClipboardTextFormatHelper;

impl ClipboardTextFormatHelper {
    /// Bitmap bytes currently on the clipboard.
    pub async fn get_image(&self) -> ClipboardResult<Option<Vec<u8>>> {
        if !self.clipboard.has_format(ClipboardFormat::Bitmap).await? {
            return Ok(None);
        }

        match self.clipboard.get_payload(ClipboardFormat::Bitmap).await? {
            ClipboardPayload::Bitmap(reference) => {
                let bytes = reference.read_all().await?;
                tracing::debug!(bytes = bytes.len(), "Read clipboard bitmap");
                Ok(Some(bytes))
            }
            other => Err(ClipboardError::UnexpectedPayload {
                expected: ClipboardFormat::Bitmap,
                actual: other.format(),
            }),
        }
    }

    /// Inner fragment of the clipboard HTML, without the envelope.
    pub async fn get_raw_html(&self) -> ClipboardResult<Option<String>> {
        let envelope = self.read_string(ClipboardFormat::Html, true).await?;
        Ok(envelope.map(|envelope| html_fragment::decode(&envelope).to_string()))
    }

    pub async fn get_rtf(&self) -> ClipboardResult<Option<String>> {
        self.read_string(ClipboardFormat::Rtf, true).await
    }

    pub async fn get_text(&self) -> ClipboardResult<Option<String>> {
        self.read_string(ClipboardFormat::Text, false).await
    }

    /// Read a textual format.
    ///
    /// With `empty_is_absent`, a format the platform advertises but cannot
    /// deliver (or delivers empty) reads as `None`.
    async fn read_string(
        &self,
        format: ClipboardFormat,
        empty_is_absent: bool,
    ) -> ClipboardResult<Option<String>> {
        if !self.clipboard.has_format(format).await? {
            return Ok(None);
        }

        let payload = match self.clipboard.get_payload(format).await {
            Ok(payload) => payload,
            Err(ClipboardError::EmptyFormat(_)) if empty_is_absent => {
                tracing::debug!(%format, "Clipboard format advertised but empty");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let actual = payload.format();
        if actual != format {
            return Err(ClipboardError::UnexpectedPayload {
                expected: format,
                actual,
            });
        }

        match payload.into_text() {
            Some(value) if empty_is_absent && value.is_empty() => Ok(None),
            Some(value) => Ok(Some(value)),
            None => Err(ClipboardError::UnexpectedPayload {
                expected: format,
                actual,
            }),
        }
    }
}
