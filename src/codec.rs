use crate::error::{Result, SqueezeError};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

/// Pixel-grid codec boundary: bytes in, image out; image plus quality in,
/// lossy bytes out. Quality is a monotonic size/fidelity control.
pub trait ImageCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage>;
    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>>;
}

/// Decodes any format the `image` crate recognizes, always re-encodes JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl JpegCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for JpegCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).map_err(SqueezeError::Decode)
    }

    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        // JPEG has no alpha channel; flatten before encoding.
        let rgb = image.to_rgb8();
        let mut buf = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
        encoder.encode_image(&rgb).map_err(SqueezeError::Encode)?;
        Ok(buf)
    }
}
