//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML configuration file and resolves defaults for values the
//! file leaves empty. `ClipboardConfig::from_toml` stays a pure mapping; the
//! defaults live here.

use anyhow::Context;
use std::path::{Path, PathBuf};

use cf_core::clipboard::html_fragment::DEFAULT_SOURCE_URL;
use cf_core::config::ClipboardConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CLIPFORMAT_CONFIG";

const APP_DIR_NAME: &str = "clipformat";
const CONFIG_FILE_NAME: &str = "config.toml";
const STAGING_DIR_NAME: &str = "clipformat-staging";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<ClipboardConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ClipboardConfig::from_toml(&toml_value)
}

/// Fill empty values with their defaults.
pub fn resolve_config(mut config: ClipboardConfig) -> ClipboardConfig {
    if config.staging_dir.as_os_str().is_empty() {
        config.staging_dir = std::env::temp_dir().join(STAGING_DIR_NAME);
    }
    if config.source_url.trim().is_empty() {
        config.source_url = DEFAULT_SOURCE_URL.to_string();
    }
    config
}

/// Pick the config file: explicit path, then `CLIPFORMAT_CONFIG`, then the
/// per-user config file if it exists.
pub fn locate_config(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let user_default = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    locate_from(
        explicit,
        std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        user_default,
    )
}

fn locate_from(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    user_default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(from_env.filter(|p| !p.as_os_str().is_empty()))
        .or(user_default.filter(|p| p.is_file()))
}

/// Locate, load and resolve the configuration.
///
/// Without any config file the defaults are used.
pub fn load_or_default(explicit: Option<PathBuf>) -> anyhow::Result<ClipboardConfig> {
    let config = match locate_config(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading clipboard config");
            load_config(&path)?
        }
        None => ClipboardConfig::default(),
    };
    Ok(resolve_config(config))
}
