use clap::Parser;
use share_squeeze::batch::{collect_image_files, run_compress};
use share_squeeze::cli::{Args, Commands};
use share_squeeze::constants::DEFAULT_QUALITY;
use share_squeeze::info::print_image_info;
use share_squeeze::pipeline::CompressionSettings;
use share_squeeze::{logger, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::configure(args.quiet, args.verbose);

    match args.command {
        Commands::Compress {
            files,
            quality,
            export_dir,
        } => {
            let settings = CompressionSettings::new(quality.unwrap_or(DEFAULT_QUALITY))?;
            run_compress(files, settings, export_dir).await?;
        }
        Commands::Batch {
            input,
            quality,
            recursive,
            export_dir,
        } => {
            let settings = CompressionSettings::new(quality.unwrap_or(DEFAULT_QUALITY))?;
            let files = collect_image_files(&input, recursive)?;
            if files.is_empty() {
                warn!("No image files found in the input path");
                return Ok(());
            }
            run_compress(files, settings, export_dir).await?;
        }
        Commands::Info { input } => {
            print_image_info(&input)?;
        }
    }

    Ok(())
}
