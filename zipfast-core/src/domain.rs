// zipfast_core/src/domain.rs
use crate::error::{Result, ZipfastError};
use crate::ratio::scaled_percent;
use std::path::{Path, PathBuf};

/// Where an input's bytes come from.
#[derive(Clone, Debug)]
pub enum ContentHandle {
    Path(PathBuf),
    Memory(Vec<u8>),
}

#[derive(Clone, Debug)]
pub struct FileDescriptor {
    /// Entry path inside the archive.
    pub name: String,
    /// Declared size in bytes. Advisory only.
    pub size: u64,
    pub mime_type: String,
    /// Descriptors without content are skipped when packing.
    pub content: Option<ContentHandle>,
}

impl FileDescriptor {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            mime_type: mime_for(&name).to_string(),
            size: bytes.len() as u64,
            content: Some(ContentHandle::Memory(bytes)),
            name,
        }
    }

    /// Describe a host file; the entry is named after the file's last path component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_path_as(path, name)
    }

    pub fn from_path_as(path: &Path, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let md = std::fs::metadata(path).map_err(|source| ZipfastError::Read {
            name: name.clone(),
            source,
        })?;
        if !md.is_file() {
            return Err(ZipfastError::Read {
                name,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }
        Ok(Self {
            mime_type: mime_for(&name).to_string(),
            size: md.len(),
            content: Some(ContentHandle::Path(path.to_path_buf())),
            name,
        })
    }
}

fn mime_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// Bookkeeping for one pipeline run. Lives only as long as the run.
#[derive(Debug)]
pub struct ArchiveJob {
    processed_count: usize,
    total_count: usize,
    progress_percent: u8,
}

impl ArchiveJob {
    pub fn new(total_count: usize) -> Self {
        Self {
            processed_count: 0,
            total_count,
            progress_percent: 0,
        }
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Count one more input as handled and return the read-phase progress.
    pub(crate) fn advance(&mut self, read_phase_budget: u8) -> u8 {
        self.processed_count = (self.processed_count + 1).min(self.total_count);
        let pct = scaled_percent(self.processed_count, self.total_count, read_phase_budget);
        self.set_progress(pct)
    }

    /// Progress never moves backwards.
    pub(crate) fn set_progress(&mut self, pct: u8) -> u8 {
        self.progress_percent = self.progress_percent.max(pct.min(100));
        self.progress_percent
    }
}

#[derive(Clone, Debug)]
pub struct ArchiveResult {
    compressed_blob: Vec<u8>,
    original_total_size: u64,
    compressed_size: u64,
    compression_ratio_percent: i64,
    file_count: usize,
}

impl ArchiveResult {
    pub(crate) fn new(
        compressed_blob: Vec<u8>,
        original_total_size: u64,
        file_count: usize,
    ) -> Self {
        let compressed_size = compressed_blob.len() as u64;
        Self {
            compression_ratio_percent: crate::ratio::compute_ratio(
                original_total_size,
                compressed_size,
            ),
            compressed_blob,
            original_total_size,
            compressed_size,
            file_count,
        }
    }

    pub fn compressed_blob(&self) -> &[u8] {
        &self.compressed_blob
    }

    pub fn into_blob(self) -> Vec<u8> {
        self.compressed_blob
    }

    pub fn original_total_size(&self) -> u64 {
        self.original_total_size
    }

    pub fn compressed_size(&self) -> u64 {
        self.compressed_size
    }

    pub fn compression_ratio_percent(&self) -> i64 {
        self.compression_ratio_percent
    }

    /// Entries in the archive (after name collisions collapsed).
    pub fn file_count(&self) -> usize {
        self.file_count
    }
}

/// One entry as seen when reading an archive back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRow {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
}
