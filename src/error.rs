use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqueezeError {
    #[error("cannot read source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode error: {0}")]
    Decode(image::ImageError),

    #[error("encode error: {0}")]
    Encode(image::ImageError),

    #[error("invalid quality value: {0}. Must be between 20 and 100")]
    InvalidQuality(u8),

    #[error("file too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("no image files found in input path: {0}")]
    NoImageFilesFound(String),

    #[error("walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("share target unavailable: {0}")]
    ShareUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SqueezeError>;
