/// Lowest quality the compression slider range allows.
pub const MIN_QUALITY: u8 = 20;
/// Highest quality the compression slider range allows.
pub const MAX_QUALITY: u8 = 100;
/// Quality used when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 50;

/// Naming for persisted compressed artifacts.
pub const COMPRESSED_IMAGE_PREFIX: &str = "CIS-IMG-";
pub const COMPRESSED_IMAGE_EXTENSION: &str = ".jpg";

/// Naming for the staged intermediate a source is materialized into.
pub const STAGED_IMAGE_PREFIX: &str = "IMG-";
pub const STAGED_IMAGE_EXTENSION: &str = ".jpg";

/// Hard cap on a single source's byte length.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "bmp", "tiff", "tif", "gif",
];

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
