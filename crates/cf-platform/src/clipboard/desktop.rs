use super::common::CommonClipboardImpl;
use anyhow::anyhow;
use async_trait::async_trait;
use cf_core::ports::ClipboardPlatformPort;
use cf_core::{
    ClipboardError, ClipboardFormat, ClipboardPayload, ClipboardResult, OutgoingClipboardPackage,
};
use clipboard_rs::ClipboardContext;
use std::sync::{Arc, Mutex};
use tokio::task::spawn_blocking;
use tracing::{debug, debug_span, Instrument};

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
use super::x11_persist::{self, PersistOptions, Persistence};

/// System clipboard implementation using clipboard-rs
///
/// 基于 clipboard-rs 的系统剪贴板实现
pub struct DesktopClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    ))]
    persist: PersistOptions,
}

impl DesktopClipboard {
    pub fn new() -> ClipboardResult<Self> {
        let context = ClipboardContext::new().map_err(|e| {
            ClipboardError::Unavailable(format!("Failed to create clipboard context: {e}"))
        })?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            #[cfg(all(
                unix,
                not(any(target_os = "macos", target_os = "ios", target_os = "android"))
            ))]
            persist: PersistOptions::default(),
        })
    }

    /// On X11 without a clipboard manager, make `flush` block until another
    /// application owns the clipboard. No effect on other platforms.
    ///
    /// 在没有剪贴板管理器的 X11 上，`flush` 会一直提供内容直到被其他应用替换。
    pub fn with_hold_until_replaced(
        #[allow(unused_mut)] mut self,
        hold: bool,
    ) -> Self {
        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "ios", target_os = "android"))
        ))]
        {
            self.persist.hold_until_replaced = hold;
        }
        #[cfg(not(all(
            unix,
            not(any(target_os = "macos", target_os = "ios", target_os = "android"))
        )))]
        let _ = hold;
        self
    }

    /// Run a blocking clipboard-rs call off the async runtime.
    async fn with_context<T, F>(&self, f: F) -> ClipboardResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ClipboardContext) -> ClipboardResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        spawn_blocking(move || {
            let ctx = inner
                .lock()
                .map_err(|_| ClipboardError::Unavailable("clipboard context poisoned".into()))?;
            f(&ctx)
        })
        .await
        .map_err(|e| ClipboardError::Platform(anyhow!("clipboard task failed: {e}")))?
    }
}

#[async_trait]
impl ClipboardPlatformPort for DesktopClipboard {
    async fn has_format(&self, format: ClipboardFormat) -> ClipboardResult<bool> {
        let present = self
            .with_context(move |ctx| Ok(CommonClipboardImpl::has_format(ctx, format)))
            .await?;
        debug!(%format, present, "Checked system clipboard format");
        Ok(present)
    }

    async fn get_payload(&self, format: ClipboardFormat) -> ClipboardResult<ClipboardPayload> {
        let span = debug_span!("platform.desktop.read_clipboard", %format);
        self.with_context(move |ctx| CommonClipboardImpl::read_payload(ctx, format))
            .instrument(span)
            .await
    }

    async fn set_package(&self, package: OutgoingClipboardPackage) -> ClipboardResult<()> {
        let span = debug_span!(
            "platform.desktop.write_clipboard",
            representations = package.len(),
        );
        async {
            self.with_context(move |ctx| CommonClipboardImpl::write_package(ctx, package))
                .await?;
            debug!("Wrote clipboard package to system");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// X11 content is served by this process, so it is handed to the
    /// clipboard manager (or held) here.
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    ))]
    async fn flush(&self) -> ClipboardResult<()> {
        let options = self.persist.clone();
        let persistence = spawn_blocking(move || x11_persist::persist(&options))
            .instrument(debug_span!("platform.desktop.flush_clipboard"))
            .await
            .map_err(|e| ClipboardError::Platform(anyhow!("clipboard flush task failed: {e}")))?
            .map_err(ClipboardError::Platform)?;

        match persistence {
            Persistence::ProcessBound => tracing::warn!(
                "No clipboard manager saved the content; it is lost when this process exits"
            ),
            other => debug!(persistence = ?other, "System clipboard flushed"),
        }
        Ok(())
    }

    /// Windows and macOS copy the content into the OS pasteboard inside `set`.
    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )))]
    async fn flush(&self) -> ClipboardResult<()> {
        debug!("System clipboard owns the submitted content");
        Ok(())
    }
}
