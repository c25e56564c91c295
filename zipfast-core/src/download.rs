use crate::error::{Result, ZipfastError};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::info;

pub const DEFAULT_FILENAME: &str = "compressed_files.zip";

/// Host primitive that stores a finished archive under a file name.
pub trait SaveTarget {
    fn save(&self, blob: &[u8], filename: &str) -> Result<PathBuf>;
}

/// Saves into a directory; the file only appears once fully written.
#[derive(Clone, Debug)]
pub struct DirectorySaveTarget {
    dir: PathBuf,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectorySaveTarget {
    fn save(&self, blob: &[u8], filename: &str) -> Result<PathBuf> {
        let save_err = |source: std::io::Error| ZipfastError::Save {
            filename: filename.to_string(),
            source,
        };
        let dest = self.dir.join(filename);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(save_err)?;
        tmp.write_all(blob).map_err(save_err)?;
        tmp.as_file().sync_all().map_err(save_err)?;
        tmp.persist(&dest).map_err(|e| save_err(e.error))?;
        Ok(dest)
    }
}

/// Hand `blob` to the host under `filename`. A failure leaves the caller's
/// archive untouched, so the save can simply be retried.
pub fn trigger_download<T: SaveTarget + ?Sized>(
    target: &T,
    blob: &[u8],
    filename: &str,
) -> Result<PathBuf> {
    check_filename(filename)?;
    let path = target.save(blob, filename)?;
    info!(path = %path.display(), bytes = blob.len(), "archive saved");
    Ok(path)
}

/// `zipfast_<unix millis>.zip`
pub fn timestamped_filename() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("zipfast_{millis}.zip")
}

fn check_filename(filename: &str) -> Result<()> {
    let bad = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);
    if bad {
        return Err(ZipfastError::Save {
            filename: filename.to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file name must be a single path component",
            ),
        });
    }
    Ok(())
}
