use crate::domain::ContentHandle;
use std::future::Future;

/// Turns a content handle into bytes. Each handle is consumed exactly once.
pub trait ContentReader: Send + Sync {
    fn read(&self, handle: ContentHandle) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// Reads host files through tokio and hands in-memory buffers back as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostReader;

impl ContentReader for HostReader {
    async fn read(&self, handle: ContentHandle) -> std::io::Result<Vec<u8>> {
        match handle {
            ContentHandle::Path(p) => tokio::fs::read(&p).await,
            ContentHandle::Memory(bytes) => Ok(bytes),
        }
    }
}
