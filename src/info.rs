use crate::error::{Result, SqueezeError};
use crate::utils::kb_or_mb;
use image::ImageReader;
use std::fs;
use std::path::Path;

/// Prints what the details view of a compressed item would show: where the
/// file lives, how big it is, and what the decoder makes of it.
pub fn print_image_info(input_path: &Path) -> Result<()> {
    if !input_path.exists() {
        return Err(SqueezeError::FileNotFound(input_path.to_path_buf()));
    }

    let metadata = fs::metadata(input_path)?;
    let reader = ImageReader::open(input_path)?;
    let format = reader.format();
    let img = reader.decode().map_err(SqueezeError::Decode)?;

    println!("📋 Image Information:");
    println!("  📁 File: {:?}", input_path);
    println!("  📏 Dimensions: {}x{} pixels", img.width(), img.height());
    println!(
        "  📦 File size: {} bytes ({})",
        metadata.len(),
        kb_or_mb(metadata.len())
    );
    println!("  🎨 Color type: {:?}", img.color());
    if let Some(format) = format {
        println!("  🎭 Image format: {:?}", format);
    }
    println!(
        "  💾 Decoded pixel buffer: {}",
        kb_or_mb(img.as_bytes().len() as u64)
    );

    Ok(())
}
