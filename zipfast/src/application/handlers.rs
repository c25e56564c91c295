use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;
use zipfast_core::download::timestamped_filename;
use zipfast_core::error::{Result, ZipfastError};
use zipfast_core::history::{CompressionRecord, HistoryStore};
use zipfast_core::{
    DirectorySaveTarget, FileDescriptor, Pipeline, PipelineConfig, compute_ratio, list,
    trigger_download,
};

/// Files are packed under their own name; directories are walked and their
/// files keep the path relative to the directory's parent.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<FileDescriptor>> {
    let mut out = Vec::new();
    for root in inputs {
        let md = std::fs::metadata(root).map_err(|source| ZipfastError::Read {
            name: root.display().to_string(),
            source,
        })?;
        if !md.is_dir() {
            out.push(FileDescriptor::from_path(root)?);
            continue;
        }
        let base = root.parent().unwrap_or(Path::new(""));
        for e in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let e = e.map_err(std::io::Error::from)?;
            // (symlinks skipped)
            if e.file_type().is_file() {
                let name = entry_name(e.path(), base);
                out.push(FileDescriptor::from_path_as(e.path(), name)?);
            }
        }
    }
    Ok(out)
}

fn entry_name(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Split `--out` into a save directory and a file name.
fn resolve_out(out: &Path) -> Result<(PathBuf, String)> {
    if out.is_dir() {
        return Ok((out.to_path_buf(), timestamped_filename()));
    }
    let filename = out
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| ZipfastError::Save {
            filename: out.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
        })?;
    let dir = match out.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, filename))
}

pub async fn handle_pack(
    inputs: Vec<PathBuf>,
    out: PathBuf,
    level: Option<u32>,
    config: Option<PathBuf>,
    history: Option<PathBuf>,
) -> Result<()> {
    let mut cfg = match config {
        Some(path) => PipelineConfig::from_json_file(&path)?,
        None => PipelineConfig::default(),
    };
    if let Some(level) = level {
        cfg = cfg.with_level(level);
    }
    let pipeline = Pipeline::new(cfg)?;

    let files = collect_inputs(&inputs)?;
    if files.is_empty() {
        warn!("no input files, nothing to pack");
        return Ok(());
    }

    let result = pipeline
        .run(files, |pct| {
            let mut err = std::io::stderr().lock();
            // progress display is best effort; a closed stderr must not fail the pack
            let _ = write!(err, "\rpacking {pct:>3}%");
            if pct == 100 {
                let _ = writeln!(err);
            }
        })
        .await?;

    let (dir, filename) = resolve_out(&out)?;
    let saved = trigger_download(
        &DirectorySaveTarget::new(dir),
        result.compressed_blob(),
        &filename,
    )?;
    println!(
        "{}  {} entries  {} -> {} bytes  ({}% smaller)",
        saved.display(),
        result.file_count(),
        result.original_total_size(),
        result.compressed_size(),
        result.compression_ratio_percent()
    );

    if let Some(path) = history {
        let mut store = HistoryStore::load(&path)?;
        store.push(CompressionRecord::from_result(&result, filename))?;
    }
    Ok(())
}

pub fn handle_list(archive: PathBuf) -> Result<()> {
    for row in list(&archive)? {
        println!(
            "{}  {} bytes  packed={}",
            row.name, row.size, row.compressed_size
        );
    }
    Ok(())
}

pub fn handle_ratio(original: u64, compressed: u64) {
    println!("{}", compute_ratio(original, compressed));
}

pub fn handle_history(file: PathBuf) -> Result<()> {
    let store = HistoryStore::load(&file)?;
    if store.records().is_empty() {
        eprintln!("history: empty");
    }
    for r in store.records() {
        println!(
            "{}  {}  files={}  {} -> {} bytes  ({}%)",
            r.id, r.filename, r.file_count, r.original_size, r.compressed_size, r.compression_ratio
        );
    }
    Ok(())
}
