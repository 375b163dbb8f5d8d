use crate::constants::{
    COMPRESSED_IMAGE_EXTENSION, COMPRESSED_IMAGE_PREFIX, STAGED_IMAGE_EXTENSION,
    STAGED_IMAGE_PREFIX,
};
use crate::error::Result;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempPath};

/// A source materialized into a local staging file. The file is removed when
/// the handle drops, so it only lives for the duration of one item's run.
#[derive(Debug)]
pub struct StagedSource {
    path: TempPath,
    size: u64,
}

impl StagedSource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length of the materialized source data.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Boundary that turns byte streams into local files: short-lived staging
/// for inputs, kept uniquely-named files for compressed outputs.
pub trait ArtifactStore: Send + Sync {
    fn stage(&self, reader: &mut dyn Read) -> Result<StagedSource>;
    fn persist(&self, bytes: &[u8]) -> Result<PathBuf>;
}

/// Temp-directory-backed store using the `IMG-*.jpg` staging and
/// `CIS-IMG-*.jpg` output naming scheme.
#[derive(Debug, Clone)]
pub struct TempArtifactStore {
    dir: PathBuf,
}

impl TempArtifactStore {
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for TempArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactStore for TempArtifactStore {
    fn stage(&self, reader: &mut dyn Read) -> Result<StagedSource> {
        let mut file = Builder::new()
            .prefix(STAGED_IMAGE_PREFIX)
            .suffix(STAGED_IMAGE_EXTENSION)
            .tempfile_in(&self.dir)?;
        let size = io::copy(reader, &mut file)?;
        file.flush()?;
        Ok(StagedSource {
            path: file.into_temp_path(),
            size,
        })
    }

    fn persist(&self, bytes: &[u8]) -> Result<PathBuf> {
        let mut file = Builder::new()
            .prefix(COMPRESSED_IMAGE_PREFIX)
            .suffix(COMPRESSED_IMAGE_EXTENSION)
            .tempfile_in(&self.dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        let (_file, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stage_measures_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let store = TempArtifactStore::in_dir(temp_dir.path());

        let staged_path;
        {
            let staged = store.stage(&mut &b"twelve bytes"[..]).unwrap();
            assert_eq!(staged.size(), 12);
            let name = staged.path().file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with(STAGED_IMAGE_PREFIX));
            assert!(name.ends_with(STAGED_IMAGE_EXTENSION));
            assert_eq!(fs::read(staged.path()).unwrap(), b"twelve bytes");
            staged_path = staged.path().to_path_buf();
        }
        // Dropped with the handle.
        assert!(!staged_path.exists());
    }

    #[test]
    fn test_persist_keeps_named_output() {
        let temp_dir = TempDir::new().unwrap();
        let store = TempArtifactStore::in_dir(temp_dir.path());

        let path = store.persist(b"jpeg bytes").unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(COMPRESSED_IMAGE_PREFIX));
        assert!(name.ends_with(COMPRESSED_IMAGE_EXTENSION));
        assert_eq!(fs::read(&path).unwrap(), b"jpeg bytes");
    }

    #[test]
    fn test_persist_generates_unique_names() {
        let temp_dir = TempDir::new().unwrap();
        let store = TempArtifactStore::in_dir(temp_dir.path());

        let a = store.persist(b"a").unwrap();
        let b = store.persist(b"b").unwrap();
        assert_ne!(a, b);
    }
}
