use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "share-squeeze",
    about = "Batch image compression with size accounting and share-ready output",
    long_about = "share-squeeze compresses batches of images to JPEG at a chosen quality, \
                  records before/after sizes per item, and can export the results to a \
                  share directory. Sources that fail to decode are passed through \
                  unchanged instead of being dropped.",
    version,
    after_help = "EXAMPLES:\n  \
    share-squeeze compress photo1.png photo2.jpg -q 40\n  \
    share-squeeze batch ./camera-roll -r -q 50 --export-dir ./outbox\n  \
    share-squeeze info photo.png"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Print extra diagnostics")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress an explicit list of images",
        long_about = "Compress the given image files in one batch. Results keep the input \
                      order; a file that cannot be decoded is passed through unchanged \
                      with a zero size delta, and a file that cannot be read is reported \
                      without aborting the rest of the batch."
    )]
    Compress {
        #[arg(required = true, help = "Image files to compress")]
        files: Vec<PathBuf>,

        #[arg(
            short = 'q',
            long,
            help = "Compression quality (20-100, default: 50)",
            long_help = "JPEG quality from 20 (smallest output) to 100 (best fidelity). \
                         Values outside the range are rejected."
        )]
        quality: Option<u8>,

        #[arg(
            long,
            value_name = "DIR",
            help = "Copy the finished artifacts into this directory",
            long_help = "After compression, copy every shareable artifact (compressed or \
                         passed-through) into DIR. A failed export leaves the results \
                         intact and can be retried."
        )]
        export_dir: Option<PathBuf>,
    },

    #[command(
        about = "Compress every image under a directory or glob",
        long_about = "Collect image files from a file path, directory, or glob pattern \
                      and compress them as one batch. Hidden entries are skipped."
    )]
    Batch {
        #[arg(
            help = "Input directory, file, or glob",
            long_help = "Examples: './images', 'photo.jpg', './images/*.png'"
        )]
        input: String,

        #[arg(short = 'q', long, help = "Compression quality (20-100, default: 50)")]
        quality: Option<u8>,

        #[arg(short = 'r', long, help = "Recurse into subdirectories")]
        recursive: bool,

        #[arg(long, value_name = "DIR", help = "Copy the finished artifacts into this directory")]
        export_dir: Option<PathBuf>,
    },

    #[command(about = "Display information about an image file")]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,
    },
}
