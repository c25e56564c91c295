use crate::config::PipelineConfig;
use crate::domain::{ArchiveJob, ArchiveResult, FileDescriptor};
use crate::error::{Result, ZipfastError};
use crate::pack::builder::ArchiveBuilder;
use crate::pack::reader::{ContentReader, HostReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Drives one compression job per call: read, pack, finalize, measure.
///
/// A pipeline holds no per-job state, so a single instance can serve
/// concurrent `run` calls; each call builds its own archive.
#[derive(Clone, Debug)]
pub struct Pipeline<R = HostReader> {
    config: PipelineConfig,
    reader: R,
}

impl Pipeline<HostReader> {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_reader(config, HostReader)
    }
}

impl<R: ContentReader> Pipeline<R> {
    pub fn with_reader(config: PipelineConfig, reader: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, reader })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn run<F>(&self, files: Vec<FileDescriptor>, on_progress: F) -> Result<ArchiveResult>
    where
        F: FnMut(u8),
    {
        self.run_with_cancel(files, on_progress, &CancellationToken::new())
            .await
    }

    /// Like [`Pipeline::run`], checking `cancel` before every read and before finalize.
    #[instrument(skip_all, fields(files = files.len(), level = self.config.compression_level))]
    pub async fn run_with_cancel<F>(
        &self,
        files: Vec<FileDescriptor>,
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> Result<ArchiveResult>
    where
        F: FnMut(u8),
    {
        let mut job = ArchiveJob::new(files.len());
        let mut builder = ArchiveBuilder::new();
        let mut original_total = 0u64;
        info!(total = job.total_count(), "compression job started");

        for desc in files {
            if cancel.is_cancelled() {
                info!(processed = job.processed_count(), "compression job cancelled");
                return Err(ZipfastError::Cancelled);
            }
            let FileDescriptor {
                name, size, content, ..
            } = desc;

            match content {
                Some(handle) => {
                    let bytes = self
                        .reader
                        .read(handle)
                        .await
                        .map_err(|source| ZipfastError::Read {
                            name: name.clone(),
                            source,
                        })?;
                    let actual = bytes.len() as u64;
                    if self.config.strict_size_check && actual != size {
                        return Err(ZipfastError::SizeMismatch {
                            name,
                            declared: size,
                            actual,
                        });
                    }
                    if builder.contains(&name) {
                        warn!(entry = %name, "duplicate entry name, later content wins");
                    }
                    debug!(entry = %name, bytes = actual, "packing entry");
                    original_total += actual;
                    builder.add_entry(name, bytes)?;
                }
                None => warn!(entry = %name, "descriptor has no content, skipping"),
            }

            on_progress(job.advance(self.config.read_phase_budget));
        }

        if cancel.is_cancelled() {
            info!("compression job cancelled before finalize");
            return Err(ZipfastError::Cancelled);
        }

        on_progress(job.set_progress(self.config.finalize_progress));
        let file_count = builder.entry_count();
        let level = self.config.compression_level;
        let blob = tokio::task::spawn_blocking(move || builder.finalize(level))
            .await
            .map_err(|e| ZipfastError::Encoding(format!("finalize task failed: {e}")))??;

        let result = ArchiveResult::new(blob, original_total, file_count);
        on_progress(job.set_progress(100));
        info!(
            files = result.file_count(),
            original = result.original_total_size(),
            compressed = result.compressed_size(),
            ratio = result.compression_ratio_percent(),
            "compression job finished"
        );
        Ok(result)
    }
}

/// Run one job with the default configuration and the host reader.
pub async fn run<F>(files: Vec<FileDescriptor>, on_progress: F) -> Result<ArchiveResult>
where
    F: FnMut(u8),
{
    Pipeline::new(PipelineConfig::default())?
        .run(files, on_progress)
        .await
}

/// Progress callback that forwards every value into a channel.
pub fn progress_channel() -> (impl FnMut(u8) + Send + 'static, mpsc::UnboundedReceiver<u8>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink = move |pct: u8| {
        // receiver gone means nobody is watching
        let _ = tx.send(pct);
    };
    (sink, rx)
}
