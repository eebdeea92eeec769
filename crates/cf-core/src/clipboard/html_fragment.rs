//! Clipboard HTML fragment envelope codec.
//!
//! The clipboard HTML interchange format prefixes the document with a header
//! of `Key:Value` lines. Offsets in the header are UTF-8 byte positions into
//! the whole payload, written as fixed-width 10 digit decimals so the header
//! length does not depend on the values it carries:
//!
//! ```text
//! Version:0.9
//! StartHTML:0000000180
//! EndHTML:0000000247
//! StartFragment:0000000212
//! EndFragment:0000000215
//! StartSelection:0000000212
//! EndSelection:0000000215
//! SourceURL:about:blank
//! <html><body><!--StartFragment-->...<!--EndFragment--></body></html>
//! ```
//!
//! Decoding trusts only the fragment markers, never the header offsets.

pub const START_FRAGMENT_MARKER: &str = "<!--StartFragment-->";
pub const END_FRAGMENT_MARKER: &str = "<!--EndFragment-->";
pub const DEFAULT_SOURCE_URL: &str = "about:blank";

const VERSION: &str = "0.9";
const LINE_END: &str = "\r\n";
const DOCUMENT_PREFIX: &str = "<html><body>";
const DOCUMENT_SUFFIX: &str = "</body></html>";

/// Parsed header of an HTML fragment envelope.
///
/// Every offset is optional because producers in the wild omit fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlFragmentHeader {
    pub version: Option<String>,
    pub start_html: Option<usize>,
    pub end_html: Option<usize>,
    pub start_fragment: Option<usize>,
    pub end_fragment: Option<usize>,
    pub start_selection: Option<usize>,
    pub end_selection: Option<usize>,
    pub source_url: Option<String>,
    /// Byte length of the header block, line terminators included.
    pub len: usize,
}

impl HtmlFragmentHeader {
    /// Parse the leading `Key:Value` lines of `payload`.
    ///
    /// Returns `None` when the payload does not start with a recognised header.
    pub fn parse(payload: &str) -> Option<Self> {
        let mut header = HtmlFragmentHeader::default();
        let mut recognised = false;
        let mut consumed = 0;

        for raw_line in payload.split_inclusive('\n') {
            let line = raw_line.trim_end_matches(['\r', '\n']);
            let Some((key, value)) = line.split_once(':') else {
                break;
            };
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
                break;
            }

            let offset = || value.trim().parse::<usize>().ok();
            match key {
                "Version" => header.version = Some(value.trim().to_string()),
                "StartHTML" => header.start_html = offset(),
                "EndHTML" => header.end_html = offset(),
                "StartFragment" => header.start_fragment = offset(),
                "EndFragment" => header.end_fragment = offset(),
                "StartSelection" => header.start_selection = offset(),
                "EndSelection" => header.end_selection = offset(),
                "SourceURL" => header.source_url = Some(value.trim().to_string()),
                _ => {}
            }
            recognised = true;
            consumed += raw_line.len();
        }

        if !recognised {
            return None;
        }
        header.len = consumed;
        Some(header)
    }
}

/// Wrap `body` into an envelope with the default `SourceURL`.
pub fn encode(body: &str) -> String {
    encode_with_source(body, DEFAULT_SOURCE_URL)
}

/// Wrap `body` into an envelope.
///
/// 生成剪贴板 HTML 片段格式。
pub fn encode_with_source(body: &str, source_url: &str) -> String {
    // Line breaks inside SourceURL would end the header early.
    let source_url: String = source_url
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect();

    let header_len = render_header(&source_url, &Offsets::default()).len();

    let start_html = header_len;
    let start_fragment = start_html + DOCUMENT_PREFIX.len() + START_FRAGMENT_MARKER.len();
    let end_fragment = start_fragment + body.len();
    let end_html = end_fragment + END_FRAGMENT_MARKER.len() + DOCUMENT_SUFFIX.len();

    let offsets = Offsets {
        start_html,
        end_html,
        start_fragment,
        end_fragment,
    };

    let mut out = render_header(&source_url, &offsets);
    debug_assert_eq!(out.len(), header_len);
    out.reserve(end_html - header_len);
    out.push_str(DOCUMENT_PREFIX);
    out.push_str(START_FRAGMENT_MARKER);
    out.push_str(body);
    out.push_str(END_FRAGMENT_MARKER);
    out.push_str(DOCUMENT_SUFFIX);
    debug_assert_eq!(out.len(), end_html);
    out
}

/// Extract the fragment between the start and end markers.
///
/// A missing start marker means the fragment starts at the beginning of the
/// payload; a missing end marker means it runs to the end. The last end
/// marker closes the fragment, so bodies may contain the marker text.
pub fn decode(payload: &str) -> &str {
    let start = payload
        .find(START_FRAGMENT_MARKER)
        .map(|i| i + START_FRAGMENT_MARKER.len())
        .unwrap_or(0);
    let end = payload[start..]
        .rfind(END_FRAGMENT_MARKER)
        .map(|i| start + i)
        .unwrap_or(payload.len());
    &payload[start..end]
}

/// The envelope without its header block.
pub fn document(payload: &str) -> &str {
    match HtmlFragmentHeader::parse(payload) {
        Some(header) => &payload[header.len..],
        None => payload,
    }
}

#[derive(Default)]
struct Offsets {
    start_html: usize,
    end_html: usize,
    start_fragment: usize,
    end_fragment: usize,
}

fn render_header(source_url: &str, o: &Offsets) -> String {
    format!(
        "Version:{VERSION}{LINE_END}\
         StartHTML:{:010}{LINE_END}\
         EndHTML:{:010}{LINE_END}\
         StartFragment:{:010}{LINE_END}\
         EndFragment:{:010}{LINE_END}\
         StartSelection:{:010}{LINE_END}\
         EndSelection:{:010}{LINE_END}\
         SourceURL:{source_url}{LINE_END}",
        o.start_html,
        o.end_html,
        o.start_fragment,
        o.end_fragment,
        o.start_fragment,
        o.end_fragment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_offsets_match(envelope: &str, body: &str) {
        let header = HtmlFragmentHeader::parse(envelope).expect("header");
        let start_html = header.start_html.unwrap();
        let end_html = header.end_html.unwrap();
        let start_fragment = header.start_fragment.unwrap();
        let end_fragment = header.end_fragment.unwrap();

        assert_eq!(start_html, header.len);
        assert!(envelope[start_html..].starts_with("<html>"));
        assert_eq!(end_html, envelope.len());
        assert!(envelope[..end_html].ends_with("</html>"));
        assert!(envelope[..start_fragment].ends_with(START_FRAGMENT_MARKER));
        assert!(envelope[end_fragment..].starts_with(END_FRAGMENT_MARKER));
        assert_eq!(&envelope[start_fragment..end_fragment], body);
        assert_eq!(header.start_selection, Some(start_fragment));
        assert_eq!(header.end_selection, Some(end_fragment));
    }

    #[test]
    fn encode_offsets_point_at_markers() {
        let body = "<p>hi</p>";
        let envelope = encode(body);

        assert!(envelope.starts_with("Version:0.9\r\nStartHTML:"));
        assert!(envelope.contains("SourceURL:about:blank\r\n"));
        assert_offsets_match(&envelope, body);
    }

    #[test]
    fn encode_counts_bytes_not_chars() {
        let body = "<p>héllo 世界 🎉</p>";
        let envelope = encode(body);
        assert_offsets_match(&envelope, body);
    }

    #[test]
    fn encode_empty_body() {
        let envelope = encode("");
        assert_offsets_match(&envelope, "");
        assert_eq!(decode(&envelope), "");
    }

    #[test]
    fn encode_uses_fixed_width_offsets() {
        let short = encode("a");
        let long = encode(&"a".repeat(10_000));
        let short_header = HtmlFragmentHeader::parse(&short).unwrap();
        let long_header = HtmlFragmentHeader::parse(&long).unwrap();

        assert_eq!(short_header.len, long_header.len);
        assert!(short.contains("StartHTML:0000000"));
    }

    #[test]
    fn encode_with_source_strips_line_breaks() {
        let body = "<i>x</i>";
        let envelope = encode_with_source(body, "https://example.com/\r\npage");
        let header = HtmlFragmentHeader::parse(&envelope).unwrap();

        assert_eq!(header.source_url.as_deref(), Some("https://example.com/page"));
        assert_offsets_match(&envelope, body);
    }

    #[test]
    fn decode_returns_fragment_only() {
        let envelope = encode("<p>hi</p>");
        assert_eq!(decode(&envelope), "<p>hi</p>");
    }

    #[test]
    fn decode_keeps_end_marker_inside_body() {
        let body = "<p>a</p><!--EndFragment--><p>b</p>";
        assert_eq!(decode(&encode(body)), body);
    }

    #[test]
    fn decode_ignores_corrupted_offsets() {
        let envelope = encode("<p>hi</p>").replace("StartFragment:0", "StartFragment:9");
        assert_eq!(decode(&envelope), "<p>hi</p>");
    }

    #[test]
    fn decode_without_markers_returns_input() {
        assert_eq!(decode("<b>plain</b>"), "<b>plain</b>");
    }

    #[test]
    fn decode_missing_end_marker_runs_to_end() {
        assert_eq!(decode("<html><!--StartFragment--><b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn decode_missing_start_marker_starts_at_beginning() {
        assert_eq!(decode("<b>x</b><!--EndFragment--></html>"), "<b>x</b>");
    }

    #[test]
    fn parse_rejects_plain_html() {
        assert!(HtmlFragmentHeader::parse("<html><body></body></html>").is_none());
        assert!(HtmlFragmentHeader::parse("").is_none());
    }

    #[test]
    fn parse_tolerates_lf_line_endings_and_missing_fields() {
        let payload = "Version:1.0\nStartFragment:12\nSourceURL:file:///tmp/a.html\n<html>";
        let header = HtmlFragmentHeader::parse(payload).unwrap();

        assert_eq!(header.version.as_deref(), Some("1.0"));
        assert_eq!(header.start_fragment, Some(12));
        assert_eq!(header.start_html, None);
        assert_eq!(header.source_url.as_deref(), Some("file:///tmp/a.html"));
        assert_eq!(&payload[header.len..], "<html>");
    }

    #[test]
    fn document_strips_header() {
        let envelope = encode("<p>hi</p>");
        assert_eq!(
            document(&envelope),
            "<html><body><!--StartFragment--><p>hi</p><!--EndFragment--></body></html>"
        );
        assert_eq!(document("<p>raw</p>"), "<p>raw</p>");
    }
}
