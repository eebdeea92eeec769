//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures only. Defaults are resolved by the
//! bootstrap layer, not here.

use std::path::PathBuf;

/// Clipboard helper configuration DTO (pure data, no logic)
/// 剪贴板助手配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardConfig {
    /// Directory for image staging files (may be empty - resolved later)
    pub staging_dir: PathBuf,

    /// `SourceURL` written into HTML fragment envelopes (may be empty)
    pub source_url: String,
}

impl ClipboardConfig {
    /// Create ClipboardConfig from TOML value
    /// 从 TOML 值创建 ClipboardConfig
    ///
    /// Missing keys map to empty values. No validation is performed.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = toml_value.get("clipboard");
        Ok(Self {
            staging_dir: PathBuf::from(
                section
                    .and_then(|c| c.get("staging_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            source_url: section
                .and_then(|c| c.get("source_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }
}
