use crate::domain::EntryRow;
use crate::error::{Result, ZipfastError};
use std::io::{Read, Seek};
use std::path::Path;

pub fn list(archive: &Path) -> Result<Vec<EntryRow>> {
    let f = std::fs::File::open(archive)?;
    list_from(f)
}

/// Entries of any seekable ZIP source, in central-directory order.
pub fn list_from<R: Read + Seek>(src: R) -> Result<Vec<EntryRow>> {
    let mut za = zip::ZipArchive::new(src).map_err(format_err)?;
    let mut rows = Vec::with_capacity(za.len());
    for i in 0..za.len() {
        let zf = za.by_index(i).map_err(format_err)?;
        rows.push(EntryRow {
            name: zf.name().to_string(),
            size: zf.size(),
            compressed_size: zf.compressed_size(),
        });
    }
    Ok(rows)
}

fn format_err(e: zip::result::ZipError) -> ZipfastError {
    match e {
        zip::result::ZipError::Io(io) => ZipfastError::Io(io),
        other => ZipfastError::Format(other.to_string()),
    }
}
