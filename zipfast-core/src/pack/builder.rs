use crate::error::{Result, ZipfastError};
use indexmap::IndexMap;
use std::io::{Cursor, Write};
use tracing::{debug, instrument};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const ZIP32_LIMIT: usize = u32::MAX as usize;

/// Stages named entries in memory and writes them out as one ZIP container.
///
/// A name that is added twice keeps its original position but takes the
/// bytes of the later call.
#[derive(Default)]
pub struct ArchiveBuilder {
    entries: IndexMap<String, Vec<u8>>,
    staged: u64,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ZipfastError::InvalidEntryName);
        }
        self.staged += bytes.len() as u64;
        if let Some(prev) = self.entries.insert(name, bytes) {
            self.staged -= prev.len() as u64;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Uncompressed bytes currently staged (replaced entries not counted).
    pub fn staged_bytes(&self) -> u64 {
        self.staged
    }

    /// Serialize all staged entries. Level 0 stores, 1..=9 deflates.
    #[instrument(skip(self), fields(entries = self.entries.len(), staged = self.staged))]
    pub fn finalize(self, compression_level: u32) -> Result<Vec<u8>> {
        if compression_level > crate::config::MAX_LEVEL {
            return Err(ZipfastError::Encoding(format!(
                "unsupported compression level {compression_level}"
            )));
        }
        let base = if compression_level == 0 {
            FileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(compression_level as i32))
        };
        let base = base.unix_permissions(0o644);

        let capacity = (self.staged as usize / 2).saturating_add(1024);
        let mut zw = ZipWriter::new(Cursor::new(Vec::with_capacity(capacity)));
        for (name, bytes) in &self.entries {
            let opts = base.large_file(bytes.len() >= ZIP32_LIMIT);
            zw.start_file(name.as_str(), opts)?;
            zw.write_all(bytes)
                .map_err(|e| ZipfastError::Encoding(format!("writing {name}: {e}")))?;
            debug!(entry = %name, bytes = bytes.len(), "entry written");
        }
        let out = zw.finish()?.into_inner();
        debug!(archive_bytes = out.len(), "archive finalized");
        Ok(out)
    }
}
