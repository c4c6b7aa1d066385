use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imageops_chroma::{
    load_rgba, prepare_logo, write_favicon_set, KeyOptions, RemoveBackgroundExt,
    DEFAULT_COLOR_THRESHOLD, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_LOGO_DIMENSION,
};

#[derive(Parser)]
#[command(name = "logo-icons")]
#[command(about = "Make a logo background transparent and export web icons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the border background and write a resized logo PNG
    Logo {
        /// Source image
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "public")]
        output_dir: PathBuf,

        /// Upper bound on the longest side of the written logo
        #[arg(short, long, default_value_t = DEFAULT_LOGO_DIMENSION)]
        size: u32,

        #[command(flatten)]
        key: KeyArgs,
    },
    /// Write favicon PNGs, an Apple touch icon and favicon.ico
    Favicon {
        /// Source image
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "public")]
        output_dir: PathBuf,

        /// Remove the border background before resizing
        #[arg(long)]
        remove_background: bool,

        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(clap::Args)]
struct KeyArgs {
    /// Share of border pixels the background color must exceed
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    confidence: f64,

    /// Per-channel color tolerance
    #[arg(long, default_value_t = DEFAULT_COLOR_THRESHOLD)]
    threshold: u32,
}

impl KeyArgs {
    fn options(&self) -> anyhow::Result<KeyOptions> {
        KeyOptions::new(self.confidence, self.threshold).context("Invalid background options")
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imageops_chroma=info,logo_icons=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Logo {
            input,
            output_dir,
            size,
            key,
        } => {
            let prepared = prepare_logo(&input, &output_dir, size, &key.options()?)
                .with_context(|| format!("Failed to prepare logo from {}", input.display()))?;
            tracing::info!(
                path = %prepared.path.display(),
                width = prepared.dimensions.0,
                height = prepared.dimensions.1,
                transparent = prepared.removal.pixels_made_transparent(),
                "Logo ready"
            );
        }
        Commands::Favicon {
            input,
            output_dir,
            remove_background,
            key,
        } => {
            let mut image = load_rgba(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            if remove_background {
                let removal = image.remove_background_mut(&key.options()?);
                tracing::info!(
                    applied = removal.is_applied(),
                    transparent = removal.pixels_made_transparent(),
                    "Background removal finished"
                );
            }
            let written = write_favicon_set(&image, &output_dir)
                .with_context(|| format!("Failed to write favicons to {}", output_dir.display()))?;
            tracing::info!(
                files = written.len(),
                output_dir = %output_dir.display(),
                "Favicons ready"
            );
        }
    }

    Ok(())
}
