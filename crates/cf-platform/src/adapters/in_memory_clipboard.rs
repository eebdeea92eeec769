use async_trait::async_trait;
use cf_core::ports::ClipboardPlatformPort;
use cf_core::{
    ClipboardError, ClipboardFormat, ClipboardPayload, ClipboardResult, OutgoingClipboardPackage,
    StreamReference,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct State {
    content: BTreeMap<ClipboardFormat, ClipboardPayload>,
    empty_formats: BTreeSet<ClipboardFormat>,
    unavailable: Option<String>,
    submit_count: usize,
    flush_count: usize,
    flushed: bool,
}

/// In-memory clipboard implementation.
///
/// 内存版的系统剪贴板实现。
///
/// Behaves like a single shared system clipboard: every submission replaces
/// the whole content, and bitmap stream references are copied into memory
/// during submission. Faults can be injected to exercise error paths.
#[derive(Default)]
pub struct InMemoryClipboard {
    state: Mutex<State>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Advertise `format` while answering reads with [`ClipboardError::EmptyFormat`].
    pub fn inject_empty_format(&self, format: ClipboardFormat) {
        self.state().empty_formats.insert(format);
    }

    /// Make every call fail with [`ClipboardError::Unavailable`] until cleared.
    pub fn set_unavailable(&self, reason: Option<&str>) {
        self.state().unavailable = reason.map(str::to_string);
    }

    /// Formats currently held, in [`ClipboardFormat`] order.
    pub fn formats(&self) -> Vec<ClipboardFormat> {
        self.state().content.keys().copied().collect()
    }

    /// Payload currently held for `format`.
    pub fn payload(&self, format: ClipboardFormat) -> Option<ClipboardPayload> {
        self.state().content.get(&format).cloned()
    }

    pub fn submit_count(&self) -> usize {
        self.state().submit_count
    }

    pub fn flush_count(&self) -> usize {
        self.state().flush_count
    }

    /// Whether the latest submission has been flushed.
    pub fn is_flushed(&self) -> bool {
        self.state().flushed
    }

    fn check_available(state: &State) -> ClipboardResult<()> {
        match &state.unavailable {
            Some(reason) => Err(ClipboardError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClipboardPlatformPort for InMemoryClipboard {
    async fn has_format(&self, format: ClipboardFormat) -> ClipboardResult<bool> {
        let state = self.state();
        Self::check_available(&state)?;
        Ok(state.empty_formats.contains(&format) || state.content.contains_key(&format))
    }

    async fn get_payload(&self, format: ClipboardFormat) -> ClipboardResult<ClipboardPayload> {
        let state = self.state();
        Self::check_available(&state)?;
        if state.empty_formats.contains(&format) {
            return Err(ClipboardError::EmptyFormat(format));
        }
        state.content.get(&format).cloned().ok_or_else(|| {
            ClipboardError::Platform(anyhow::anyhow!("clipboard has no `{format}` content"))
        })
    }

    async fn set_package(&self, package: OutgoingClipboardPackage) -> ClipboardResult<()> {
        Self::check_available(&self.state())?;

        // Consume stream references before taking the lock.
        let mut content = BTreeMap::new();
        for payload in package.into_payloads() {
            let payload = match payload {
                ClipboardPayload::Bitmap(reference @ StreamReference::File(_)) => {
                    ClipboardPayload::Bitmap(StreamReference::from_bytes(
                        reference.read_all().await?,
                    ))
                }
                other => other,
            };
            content.insert(payload.format(), payload);
        }

        let mut state = self.state();
        state.content = content;
        state.empty_formats.clear();
        state.submit_count += 1;
        state.flushed = false;
        tracing::debug!(formats = state.content.len(), "In-memory clipboard replaced");
        Ok(())
    }

    async fn flush(&self) -> ClipboardResult<()> {
        let mut state = self.state();
        Self::check_available(&state)?;
        state.flush_count += 1;
        state.flushed = true;
        Ok(())
    }
}
