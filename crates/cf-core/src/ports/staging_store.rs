use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Temporary storage area used to hand bitmaps to the platform by reference.
///
/// 临时文件暂存区。
#[async_trait]
pub trait StagingStorePort: Send + Sync {
    /// Write `data` into a fresh staging file and return its path.
    async fn stage(&self, data: &[u8]) -> Result<PathBuf>;

    /// Delete a staging file previously returned by [`stage`](Self::stage).
    async fn discard(&self, path: &Path) -> Result<()>;
}
