use crate::constants::MAX_FILE_SIZE;
use crate::error::{Result, SqueezeError};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Boundary to whatever owns the selected images. The pipeline only ever
/// asks for a readable byte stream; it never takes ownership of a source.
pub trait SourceProvider: Send + Sync {
    fn open(&self, source: &Path) -> Result<Box<dyn Read + Send>>;
}

/// Filesystem-backed provider with basic sanity checks before opening.
#[derive(Debug, Clone)]
pub struct FileSourceProvider {
    max_file_size: u64,
}

impl FileSourceProvider {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for FileSourceProvider {
    fn open(&self, source: &Path) -> Result<Box<dyn Read + Send>> {
        if !source.exists() {
            return Err(SqueezeError::FileNotFound(source.to_path_buf()));
        }
        if !source.is_file() {
            return Err(SqueezeError::SourceRead {
                path: source.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "source is not a regular file",
                ),
            });
        }

        let len = fs::metadata(source)
            .map_err(|e| SqueezeError::SourceRead {
                path: source.to_path_buf(),
                source: e,
            })?
            .len();
        if len > self.max_file_size {
            return Err(SqueezeError::FileTooLarge(len, self.max_file_size));
        }

        let file = File::open(source).map_err(|e| SqueezeError::SourceRead {
            path: source.to_path_buf(),
            source: e,
        })?;
        Ok(Box::new(file))
    }
}
