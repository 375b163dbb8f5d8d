use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};

/// Coarse size label used everywhere sizes face the user.
///
/// Legacy behavior, reproduced deliberately: bytes are first divided by 1000
/// (truncating), and the result switches to "mb" past 1024 of those units,
/// again with truncating division. So 2_000_000 bytes is "1mb".
pub fn kb_or_mb(bytes: u64) -> String {
    let kb = bytes / 1000;
    if kb > 1024 {
        format!("{}mb", kb / 1024)
    } else {
        format!("{kb}kb")
    }
}

/// Percentage of bytes removed; negative when the output grew.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb
}
