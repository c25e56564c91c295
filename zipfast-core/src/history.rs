use crate::domain::ArchiveResult;
use crate::error::{Result, ZipfastError};
use crate::ratio::compute_ratio;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

pub const MAX_RECORDS: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionRecord {
    pub id: String,
    pub filename: String,
    pub original_size: u64,
    pub compressed_size: u64,
    pub compression_ratio: i64,
    /// Unix millis.
    pub created_at: i64,
    pub file_count: usize,
}

impl CompressionRecord {
    pub fn from_result(result: &ArchiveResult, filename: impl Into<String>) -> Self {
        let created_at = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        Self {
            id: format!("compression_{created_at}"),
            filename: filename.into(),
            original_size: result.original_total_size(),
            compressed_size: result.compressed_size(),
            compression_ratio: result.compression_ratio_percent(),
            created_at,
            file_count: result.file_count(),
        }
    }

    pub fn recompute_ratio(&self) -> i64 {
        compute_ratio(self.original_size, self.compressed_size)
    }
}

/// Newest-first list of past jobs kept in a JSON file.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<CompressionRecord>,
}

impl HistoryStore {
    /// Missing file means empty history.
    pub fn load(path: &Path) -> Result<Self> {
        let records = match std::fs::read(path) {
            Ok(raw) => serde_json::from_slice(&raw)
                .map_err(|e| ZipfastError::Config(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn records(&self) -> &[CompressionRecord] {
        &self.records
    }

    pub fn push(&mut self, record: CompressionRecord) -> Result<()> {
        self.records.insert(0, record);
        self.records.truncate(MAX_RECORDS);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let body = serde_json::to_vec_pretty(&self.records)
            .map_err(|e| ZipfastError::Config(format!("{}: {e}", self.path.display())))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&body)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
