use crate::error::{Result, ZipfastError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LEVEL: u32 = 6;
pub const MAX_LEVEL: u32 = 9;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// 0 stores entries uncompressed, 1..=9 deflates at that level.
    pub compression_level: u32,
    /// Progress ceiling for the read+pack phase.
    pub read_phase_budget: u8,
    /// Progress emitted right before the archive is finalized.
    pub finalize_progress: u8,
    /// Fail a read when the bytes obtained differ from the declared size.
    pub strict_size_check: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_LEVEL,
            read_phase_budget: 85,
            finalize_progress: 90,
            strict_size_check: true,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)?;
        let cfg: Self = serde_json::from_slice(&raw)
            .map_err(|e| ZipfastError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.compression_level > MAX_LEVEL {
            return Err(ZipfastError::Config(format!(
                "compression_level must be 0..={MAX_LEVEL}, got {}",
                self.compression_level
            )));
        }
        if self.read_phase_budget > self.finalize_progress || self.finalize_progress >= 100 {
            return Err(ZipfastError::Config(format!(
                "progress marks must satisfy read_phase_budget <= finalize_progress < 100 (got {} / {})",
                self.read_phase_budget, self.finalize_progress
            )));
        }
        Ok(())
    }
}
