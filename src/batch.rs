use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{Result, SqueezeError};
use crate::pipeline::{CompressionSettings, ItemResult, SharePipeline};
use crate::share::{collect_share_list, DirExportSink, ShareSink};
use crate::utils::{compression_ratio, create_progress_spinner, kb_or_mb};
use crate::{info, verbose, warn};
use glob::glob;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Resolves a CLI input (single file, directory, or glob) into the ordered
/// list of image files to feed the pipeline. Hidden entries are skipped.
pub fn collect_image_files(input: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let input_path = Path::new(input);
    let mut image_files = Vec::new();

    if input_path.is_file() {
        image_files.push(input_path.to_path_buf());
    } else if input_path.is_dir() {
        let walker = if recursive {
            WalkDir::new(input_path).into_iter()
        } else {
            WalkDir::new(input_path).max_depth(1).into_iter()
        };

        // Depth 0 is the root the caller asked for; only entries below it
        // are subject to the hidden-name filter.
        for entry in walker.filter_entry(|e| {
            e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
        }) {
            let entry = entry?;
            if entry.path().is_file() && is_image_file(entry.path()) {
                image_files.push(entry.path().to_path_buf());
            }
        }
        image_files.sort();
    } else if let Ok(pattern) = glob(input) {
        for entry in pattern.flatten() {
            if entry.is_file() && is_image_file(&entry) {
                image_files.push(entry);
            }
        }
    } else {
        return Err(SqueezeError::NoImageFilesFound(input.to_string()));
    }

    Ok(image_files)
}

/// Runs the pipeline over an explicit source list, reports per-item and
/// total accounting, and optionally hands the outputs to an export sink.
///
/// Per-item failures are reported but never fail the run; the batch
/// operation is unconditional by contract.
pub async fn run_compress(
    sources: Vec<PathBuf>,
    settings: CompressionSettings,
    export_dir: Option<PathBuf>,
) -> Result<()> {
    if sources.is_empty() {
        warn!("No image files to process");
        return Ok(());
    }

    info!("🗜️  Compressing {} image(s) at quality {}", sources.len(), settings.quality());
    let started = Instant::now();

    let progress = create_progress_spinner("Compressing batch...");
    progress.enable_steady_tick(std::time::Duration::from_millis(100));

    let pipeline = SharePipeline::with_defaults(settings);
    let results = pipeline.compress_batch(&sources).await;
    progress.finish_and_clear();

    report_items(&sources, &results);
    report_totals(&results, started);

    if let Some(dir) = export_dir {
        let share_list = collect_share_list(&results);
        let sink = DirExportSink::new(&dir);
        // A failed export is transient: nothing in the result list changed,
        // rerunning the command shares the same artifacts again.
        match sink.share(&share_list) {
            Ok(()) => info!("📤 Exported {} file(s) to {:?}", share_list.len(), dir),
            Err(e) => warn!("Share target unavailable, try again: {e}"),
        }
    }

    Ok(())
}

fn report_items(sources: &[PathBuf], results: &[ItemResult]) {
    for (src, item) in sources.iter().zip(results) {
        match item {
            Ok(artifact) if artifact.is_passthrough() => {
                warn!(
                    "{:?}: not a decodable image, passed through unchanged ({})",
                    src,
                    kb_or_mb(artifact.original_size)
                );
            }
            Ok(artifact) => {
                info!(
                    "✅ {:?} -> {:?} ({} -> {}, {:.1}%)",
                    src,
                    artifact.output,
                    kb_or_mb(artifact.original_size),
                    kb_or_mb(artifact.compressed_size),
                    compression_ratio(artifact.original_size, artifact.compressed_size)
                );
            }
            Err(e) => {
                crate::error!("Failed to read {:?}: {}", src, e);
            }
        }
    }
}

fn report_totals(results: &[ItemResult], started: Instant) {
    let compressed: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let failed = results.len() - compressed.len();
    let total_before: u64 = compressed.iter().map(|a| a.original_size).sum();
    let total_after: u64 = compressed.iter().map(|a| a.compressed_size).sum();

    info!("\n📊 Batch Summary:");
    info!("  📁 Items processed: {}", compressed.len());
    info!(
        "  📊 Total size: {} -> {} ({:.1}%)",
        kb_or_mb(total_before),
        kb_or_mb(total_after),
        compression_ratio(total_before, total_after)
    );
    verbose!(
        "Total size in bytes: {} -> {}",
        total_before,
        total_after
    );
    info!("  ⏱️  Total time: {:?}", started.elapsed());
    if failed > 0 {
        warn!("Unreadable sources: {failed}");
    }
}
