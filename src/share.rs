use crate::error::{Result, SqueezeError};
use crate::pipeline::ItemResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Hands a finished artifact list to whatever surface the user shares
/// through. Failures are transient: the artifact list is untouched and the
/// call can simply be retried.
pub trait ShareSink: Send + Sync {
    fn share(&self, outputs: &[PathBuf]) -> Result<()>;
}

/// Gathers the shareable output references out of a batch, in order.
/// Compressed and passthrough artifacts both contribute; items whose source
/// never materialized have nothing to share and are skipped.
pub fn collect_share_list(results: &[ItemResult]) -> Vec<PathBuf> {
    results
        .iter()
        .filter_map(|item| item.as_ref().ok())
        .map(|artifact| artifact.output.clone())
        .collect()
}

/// Share surface that copies artifacts into a destination directory.
#[derive(Debug, Clone)]
pub struct DirExportSink {
    dest: PathBuf,
}

impl DirExportSink {
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self { dest: dest.into() }
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }
}

impl ShareSink for DirExportSink {
    fn share(&self, outputs: &[PathBuf]) -> Result<()> {
        if outputs.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(&self.dest)
            .map_err(|_| SqueezeError::DirectoryCreationFailed(self.dest.clone()))?;

        for output in outputs {
            let name = output.file_name().ok_or_else(|| {
                SqueezeError::ShareUnavailable(format!("artifact has no file name: {output:?}"))
            })?;
            fs::copy(output, self.dest.join(name)).map_err(|e| {
                SqueezeError::ShareUnavailable(format!("cannot export {output:?}: {e}"))
            })?;
        }
        Ok(())
    }
}
