use image::{DynamicImage, ImageBuffer, Rgb};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Deterministic non-flat image; enough structure that JPEG quality actually
/// moves the output size.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x * 7 + y * 13) % 256) as u8,
        ])
    }))
}

/// Deterministic pseudo-noise image; hard to compress at any quality, which
/// makes quality/size monotonicity pronounced.
pub fn noise_image(width: u32, height: u32, seed: u64) -> DynamicImage {
    let mut state = seed.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as u8
    };
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| {
        Rgb([next(), next(), next()])
    }))
}

/// Writes a real decodable PNG and returns its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_image(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Writes a file with a .jpg name that no decoder will accept.
pub fn write_garbage_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"this is not a decodable image payload")
        .unwrap();
    path
}
