//! Filesystem-based staging area for bitmap transfers
//! 基于文件系统的位图暂存区

use anyhow::{Context, Result};
use async_trait::async_trait;
use cf_core::ports::StagingStorePort;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const STAGING_PREFIX: &str = "cf-stage-";

/// Filesystem-based staging store
/// 基于文件系统的暂存存储
pub struct FilesystemStagingStore {
    base_dir: PathBuf,
}

impl FilesystemStagingStore {
    /// Create a new staging store with the given base directory
    /// 使用给定基础目录创建新的暂存存储
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Ensure the staging directory exists
    /// 确保暂存目录存在
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .context("Failed to create staging directory")
    }

    /// Unique path for a new staging file
    fn staging_path(&self) -> PathBuf {
        self.base_dir
            .join(format!("{STAGING_PREFIX}{}", Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl StagingStorePort for FilesystemStagingStore {
    async fn stage(&self, data: &[u8]) -> Result<PathBuf> {
        self.ensure_dir().await?;
        let path = self.staging_path();

        let mut file = tokio::fs::File::create(&path)
            .await
            .with_context(|| format!("Failed to create staging file {}", path.display()))?;
        file.write_all(data)
            .await
            .context("Failed to write staging data")?;
        file.flush().await.context("Failed to flush staging data")?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Staged clipboard bitmap");
        Ok(path)
    }

    async fn discard(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("Failed to remove staging file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Discarded staging file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_unique_and_prefixed() {
        let store = FilesystemStagingStore::new(PathBuf::from("/tmp/staging"));
        let a = store.staging_path();
        let b = store.staging_path();

        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(Path::new("/tmp/staging")));
        assert!(a
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(STAGING_PREFIX)));
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let staging_dir = temp_dir.path().join("nested").join("staging");
        let store = FilesystemStagingStore::new(staging_dir.clone());

        store.ensure_dir().await.unwrap();

        assert!(staging_dir.is_dir());
    }
}
