//! # Dependency Wiring / 依赖注入模块
//!
//! Assembles a [`ClipboardTextFormatHelper`] from configuration by choosing
//! the clipboard and staging adapters.
//!
//! 根据配置组装剪贴板格式助手：选择剪贴板适配器和暂存目录适配器。

use std::sync::Arc;

use cf_app::ClipboardTextFormatHelper;
use cf_core::config::ClipboardConfig;
use cf_core::ports::ClipboardPlatformPort;
use cf_core::ClipboardError;
use cf_platform::{DesktopClipboard, FilesystemStagingStore};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(#[source] ClipboardError),

    #[error("Staging directory initialization failed: {0}")]
    StagingInit(#[source] anyhow::Error),
}

/// Wire a helper over the desktop system clipboard.
///
/// `hold_until_replaced` makes writes keep serving the clipboard on X11 when
/// no clipboard manager takes a copy, so short-lived processes do not lose it.
pub async fn wire_desktop_helper(
    config: &ClipboardConfig,
    hold_until_replaced: bool,
) -> WiringResult<ClipboardTextFormatHelper> {
    let clipboard = DesktopClipboard::new()
        .map_err(WiringError::ClipboardInit)?
        .with_hold_until_replaced(hold_until_replaced);
    wire_helper(Arc::new(clipboard), config).await
}

/// Wire a helper over any clipboard adapter, staging images under
/// `config.staging_dir`.
///
/// The staging directory is created if it does not exist.
pub async fn wire_helper(
    clipboard: Arc<dyn ClipboardPlatformPort>,
    config: &ClipboardConfig,
) -> WiringResult<ClipboardTextFormatHelper> {
    let staging = FilesystemStagingStore::new(config.staging_dir.clone());
    staging
        .ensure_dir()
        .await
        .map_err(WiringError::StagingInit)?;

    tracing::debug!(
        staging_dir = %config.staging_dir.display(),
        source_url = %config.source_url,
        "Clipboard helper wired"
    );

    Ok(ClipboardTextFormatHelper::new(clipboard, Arc::new(staging))
        .with_source_url(config.source_url.clone()))
}
