pub mod batch;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod info;
pub mod logger;
pub mod pipeline;
pub mod session;
pub mod share;
pub mod source;
pub mod store;
pub mod utils;

pub use batch::{collect_image_files, is_image_file, run_compress};
pub use codec::{ImageCodec, JpegCodec};
pub use error::{Result, SqueezeError};
pub use pipeline::{
    ArtifactKind, CompressedArtifact, CompressedBitmap, CompressionSettings, ItemResult,
    SharePipeline,
};
pub use session::{BatchSession, BatchState};
pub use share::{collect_share_list, DirExportSink, ShareSink};
pub use source::{FileSourceProvider, SourceProvider};
pub use store::{ArtifactStore, StagedSource, TempArtifactStore};
pub use utils::{compression_ratio, kb_or_mb};
