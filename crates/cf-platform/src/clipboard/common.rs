use anyhow::anyhow;
use cf_core::{
    ClipboardError, ClipboardFormat, ClipboardPayload, ClipboardResult,
    OutgoingClipboardPackage, StreamReference,
};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat};

/// Native clipboard format carrying the HTML fragment envelope verbatim.
#[cfg(target_os = "windows")]
const NATIVE_HTML_FORMAT: &str = "HTML Format";

/// Native format carrying bitmap bytes untouched.
#[cfg(target_os = "windows")]
const NATIVE_IMAGE_FORMAT: &str = "PNG";
#[cfg(target_os = "macos")]
const NATIVE_IMAGE_FORMAT: &str = "public.png";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const NATIVE_IMAGE_FORMAT: &str = "image/png";

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> ClipboardResult<T> {
    result.map_err(|e| ClipboardError::Platform(anyhow!(e)))
}

fn content_format(format: ClipboardFormat) -> ContentFormat {
    match format {
        ClipboardFormat::Text => ContentFormat::Text,
        ClipboardFormat::Rtf => ContentFormat::Rtf,
        #[cfg(target_os = "windows")]
        ClipboardFormat::Html => ContentFormat::Other(NATIVE_HTML_FORMAT.to_string()),
        #[cfg(not(target_os = "windows"))]
        ClipboardFormat::Html => ContentFormat::Html,
        ClipboardFormat::Bitmap => ContentFormat::Other(NATIVE_IMAGE_FORMAT.to_string()),
    }
}

/// Empty or unreadable rich formats are reported as `EmptyFormat`.
fn non_empty(
    format: ClipboardFormat,
    result: std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>,
) -> ClipboardResult<String> {
    match result {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(ClipboardError::EmptyFormat(format)),
        Err(err) => {
            tracing::debug!(%format, error = %err, "Advertised clipboard format could not be read");
            Err(ClipboardError::EmptyFormat(format))
        }
    }
}

impl CommonClipboardImpl {
    /// Bitmaps copied by other applications may only exist as a decoded
    /// image, so those count as present too.
    pub fn has_format(ctx: &ClipboardContext, format: ClipboardFormat) -> bool {
        ctx.has(content_format(format))
            || (format == ClipboardFormat::Bitmap && ctx.has(ContentFormat::Image))
    }

    pub fn read_payload(
        ctx: &ClipboardContext,
        format: ClipboardFormat,
    ) -> ClipboardResult<ClipboardPayload> {
        match format {
            ClipboardFormat::Text => Ok(ClipboardPayload::Text(map_clipboard_err(ctx.get_text())?)),
            ClipboardFormat::Rtf => Ok(ClipboardPayload::Rtf(non_empty(
                format,
                ctx.get_rich_text(),
            )?)),
            ClipboardFormat::Html => Ok(ClipboardPayload::Html(non_empty(
                format,
                Self::read_html(ctx),
            )?)),
            ClipboardFormat::Bitmap => Ok(ClipboardPayload::Bitmap(StreamReference::from_bytes(
                Self::read_bitmap(ctx)?,
            ))),
        }
    }

    /// Native image bytes as stored, else the decoded image re-encoded as PNG.
    fn read_bitmap(ctx: &ClipboardContext) -> ClipboardResult<Vec<u8>> {
        if ctx.has(content_format(ClipboardFormat::Bitmap)) {
            return map_clipboard_err(ctx.get_buffer(NATIVE_IMAGE_FORMAT));
        }
        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        Ok(png.get_bytes().to_vec())
    }

    #[cfg(target_os = "windows")]
    fn read_html(
        ctx: &ClipboardContext,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let buf = ctx.get_buffer(NATIVE_HTML_FORMAT)?;
        let text = String::from_utf8_lossy(&buf);
        Ok(text.trim_end_matches('\0').to_string())
    }

    #[cfg(not(target_os = "windows"))]
    fn read_html(
        ctx: &ClipboardContext,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
        ctx.get_html()
    }

    /// Replace the clipboard content with every payload of `package`.
    ///
    /// Bitmap references are loaded here, so a staged file may be removed as
    /// soon as this returns. Bitmap bytes are written as-is under the native
    /// image format; they are never decoded.
    pub fn write_package(
        ctx: &ClipboardContext,
        package: OutgoingClipboardPackage,
    ) -> ClipboardResult<()> {
        let contents = Self::package_contents(package)?;
        map_clipboard_err(ctx.set(contents))
    }

    fn package_contents(
        package: OutgoingClipboardPackage,
    ) -> ClipboardResult<Vec<ClipboardContent>> {
        let mut contents = Vec::with_capacity(package.len());

        for payload in package.into_payloads() {
            let content = match payload {
                ClipboardPayload::Text(text) => ClipboardContent::Text(text),
                ClipboardPayload::Rtf(rtf) => ClipboardContent::Rtf(rtf),
                ClipboardPayload::Html(envelope) => Self::html_content(envelope),
                ClipboardPayload::Bitmap(reference) => ClipboardContent::Other(
                    NATIVE_IMAGE_FORMAT.to_string(),
                    Self::load_bitmap(&reference)?,
                ),
            };
            contents.push(content);
        }

        Ok(contents)
    }

    #[cfg(target_os = "windows")]
    fn html_content(envelope: String) -> ClipboardContent {
        ClipboardContent::Other(NATIVE_HTML_FORMAT.to_string(), envelope.into_bytes())
    }

    /// Outside Windows the native HTML flavour has no header block.
    #[cfg(not(target_os = "windows"))]
    fn html_content(envelope: String) -> ClipboardContent {
        ClipboardContent::Html(cf_core::clipboard::html_fragment::document(&envelope).to_string())
    }

    fn load_bitmap(reference: &StreamReference) -> ClipboardResult<Vec<u8>> {
        match reference {
            StreamReference::File(path) => Ok(std::fs::read(path)?),
            StreamReference::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }
}
