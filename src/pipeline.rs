use crate::codec::{ImageCodec, JpegCodec};
use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{Result, SqueezeError};
use crate::source::{FileSourceProvider, SourceProvider};
use crate::store::{ArtifactStore, TempArtifactStore};
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Validated compression settings. Out-of-range quality is rejected rather
/// than clamped; the 20..=100 range mirrors what a picker surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    quality: u8,
}

impl CompressionSettings {
    pub fn new(quality: u8) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(SqueezeError::InvalidQuality(quality));
        }
        Ok(Self { quality })
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Whether an item actually got smaller or was passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Decode + re-encode succeeded; `output` is a newly persisted file.
    Compressed,
    /// Decode or re-encode failed; `output` is the original source and the
    /// size delta is zero.
    Passthrough,
}

/// Per-source result record: where the shareable artifact lives and how the
/// byte sizes compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub kind: ArtifactKind,
}

impl CompressedArtifact {
    /// Bytes saved by compression; zero on the passthrough path and when the
    /// encoder produced a larger file than the source.
    pub fn saved_bytes(&self) -> u64 {
        self.original_size.saturating_sub(self.compressed_size)
    }

    pub fn is_passthrough(&self) -> bool {
        self.kind == ArtifactKind::Passthrough
    }
}

/// Bitmap-mode result: the re-decoded image plus pixel-buffer byte lengths
/// before and after the lossy round trip.
#[derive(Debug)]
pub struct CompressedBitmap {
    pub image: DynamicImage,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// One slot per input source, in input order. `Err` only ever means the
/// source could not be materialized at all.
pub type ItemResult = Result<CompressedArtifact>;

/// The batch compression pipeline. Each source runs
/// materialize -> decode -> re-encode -> persist independently; results come
/// back in input order no matter which item finishes first.
pub struct SharePipeline {
    source: Arc<dyn SourceProvider>,
    codec: Arc<dyn ImageCodec>,
    store: Arc<dyn ArtifactStore>,
    settings: CompressionSettings,
}

impl SharePipeline {
    pub fn new(
        source: Arc<dyn SourceProvider>,
        codec: Arc<dyn ImageCodec>,
        store: Arc<dyn ArtifactStore>,
        settings: CompressionSettings,
    ) -> Self {
        Self {
            source,
            codec,
            store,
            settings,
        }
    }

    /// File-backed pipeline over the local filesystem and temp directory.
    pub fn with_defaults(settings: CompressionSettings) -> Self {
        Self::new(
            Arc::new(FileSourceProvider::new()),
            Arc::new(JpegCodec::new()),
            Arc::new(TempArtifactStore::new()),
            settings,
        )
    }

    pub fn settings(&self) -> CompressionSettings {
        self.settings
    }

    /// Compresses every source in `sources`, one result slot per input.
    ///
    /// The batch itself never fails: an empty input yields an empty vec, a
    /// source that cannot be read yields `Err` in its own slot, and a source
    /// that reads but will not decode or re-encode yields a passthrough
    /// artifact pointing back at the original with a zero size delta.
    pub async fn compress_batch(&self, sources: &[PathBuf]) -> Vec<ItemResult> {
        self.run_indexed(sources, |ctx, src| compress_one(&ctx, &src))
            .await
    }

    /// Bitmap-mode variant: returns the re-decoded image and pixel-buffer
    /// byte sizes instead of persisting a file. There is no passthrough
    /// target here, so decode/encode failures propagate in their slot.
    pub async fn compress_batch_bitmaps(
        &self,
        sources: &[PathBuf],
    ) -> Vec<Result<CompressedBitmap>> {
        self.run_indexed(sources, |ctx, src| bitmap_one(&ctx, &src))
            .await
    }

    /// Fans items out onto the blocking pool and reassembles results by
    /// index, so completion order cannot reorder the output list.
    async fn run_indexed<T, F>(&self, sources: &[PathBuf], work: F) -> Vec<T>
    where
        T: Send + 'static,
        F: Fn(ItemContext, PathBuf) -> T + Send + Sync + Copy + 'static,
    {
        if sources.is_empty() {
            return Vec::new();
        }

        let mut tasks = JoinSet::new();
        for (index, src) in sources.iter().enumerate() {
            let ctx = ItemContext {
                source: Arc::clone(&self.source),
                codec: Arc::clone(&self.codec),
                store: Arc::clone(&self.store),
                settings: self.settings,
            };
            let src = src.clone();
            tasks.spawn_blocking(move || (index, work(ctx, src)));
        }

        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
            .take(sources.len())
            .collect();
        while let Some(joined) = tasks.join_next().await {
            let (index, item) = joined.expect("compression task panicked");
            slots[index] = Some(item);
        }
        slots
            .into_iter()
            .map(|slot| slot.expect("every input slot is written exactly once"))
            .collect()
    }
}

/// Everything one item's blocking task needs, cloned out of the pipeline so
/// tasks share no mutable state.
struct ItemContext {
    source: Arc<dyn SourceProvider>,
    codec: Arc<dyn ImageCodec>,
    store: Arc<dyn ArtifactStore>,
    settings: CompressionSettings,
}

fn compress_one(ctx: &ItemContext, src: &Path) -> ItemResult {
    let mut reader = ctx.source.open(src)?;
    let staged = ctx.store.stage(&mut *reader)?;
    let original_size = staged.size();

    // Decode, re-encode, and persist as one absorbable unit: if any of it
    // fails the item degrades to a zero-savings passthrough of the source.
    let attempt = (|| -> Result<(PathBuf, u64)> {
        let bytes = fs::read(staged.path())?;
        let img = ctx.codec.decode(&bytes)?;
        let encoded = ctx.codec.encode(&img, ctx.settings.quality())?;
        let output = ctx.store.persist(&encoded)?;
        Ok((output, encoded.len() as u64))
    })();

    match attempt {
        Ok((output, compressed_size)) => Ok(CompressedArtifact {
            output,
            original_size,
            compressed_size,
            kind: ArtifactKind::Compressed,
        }),
        Err(_) => Ok(CompressedArtifact {
            output: src.to_path_buf(),
            original_size,
            compressed_size: original_size,
            kind: ArtifactKind::Passthrough,
        }),
    }
}

fn bitmap_one(ctx: &ItemContext, src: &Path) -> Result<CompressedBitmap> {
    let mut reader = ctx.source.open(src)?;
    let staged = ctx.store.stage(&mut *reader)?;

    let bytes = fs::read(staged.path())?;
    let original = ctx.codec.decode(&bytes)?;
    let encoded = ctx.codec.encode(&original, ctx.settings.quality())?;
    let compressed = ctx.codec.decode(&encoded)?;

    Ok(CompressedBitmap {
        original_size: original.as_bytes().len() as u64,
        compressed_size: compressed.as_bytes().len() as u64,
        image: compressed,
    })
}
