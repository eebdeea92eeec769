use super::{ClipboardFormat, ClipboardPayload};

/// Fresh outgoing clipboard content, submitted as a whole.
///
/// Holds at most one payload per format; attaching a second payload of the
/// same format replaces the first.
///
/// 待提交的剪贴板内容容器。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingClipboardPackage {
    payloads: Vec<ClipboardPayload>,
}

impl OutgoingClipboardPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, payload: ClipboardPayload) -> &mut Self {
        let format = payload.format();
        self.payloads.retain(|p| p.format() != format);
        self.payloads.push(payload);
        self
    }

    pub fn with(mut self, payload: ClipboardPayload) -> Self {
        self.attach(payload);
        self
    }

    pub fn get(&self, format: ClipboardFormat) -> Option<&ClipboardPayload> {
        self.payloads.iter().find(|p| p.format() == format)
    }

    pub fn formats(&self) -> Vec<ClipboardFormat> {
        self.payloads.iter().map(ClipboardPayload::format).collect()
    }

    pub fn payloads(&self) -> &[ClipboardPayload] {
        &self.payloads
    }

    pub fn into_payloads(self) -> Vec<ClipboardPayload> {
        self.payloads
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }
}
