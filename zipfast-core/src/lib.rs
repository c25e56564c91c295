#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod download;
pub mod error;
pub mod history;
pub mod list;
pub mod ratio;

pub mod pack {
    pub mod builder;
    pub mod pipeline;
    pub mod reader;
}

// Re-exports: stable API surface
pub use config::PipelineConfig;
pub use domain::{ArchiveJob, ArchiveResult, ContentHandle, EntryRow, FileDescriptor};
pub use download::{DirectorySaveTarget, SaveTarget, trigger_download};
pub use error::{ErrorKind, Result, ZipfastError};
pub use list::list;
pub use pack::builder::ArchiveBuilder;
pub use pack::pipeline::{Pipeline, progress_channel, run};
pub use pack::reader::{ContentReader, HostReader};
pub use ratio::compute_ratio;
pub use tokio_util::sync::CancellationToken;
