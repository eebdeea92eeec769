use bytes::Bytes;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reference to a bitmap byte stream.
///
/// Bitmap payloads are handed to and from the platform as stream references
/// rather than raw buffers. A `File` reference points at a staged file that
/// the platform consumes during submission; `Memory` carries bytes the
/// platform already holds.
///
/// 位图数据流引用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamReference {
    File(PathBuf),
    Memory(Bytes),
}

impl StreamReference {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        StreamReference::File(path.into())
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        StreamReference::Memory(bytes.into())
    }

    /// Read the whole stream into memory.
    pub async fn read_all(&self) -> std::io::Result<Vec<u8>> {
        match self {
            StreamReference::File(path) => {
                let mut file = tokio::fs::File::open(path).await?;
                let mut data = Vec::new();
                file.read_to_end(&mut data).await?;
                tracing::debug!(path = %path.display(), bytes = data.len(), "Read file stream");
                Ok(data)
            }
            StreamReference::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }
}
