// Example runner: analyze an image file and print the backdrop color it yields,
// optionally blurring it first the way the acrylic backdrop does.

use anyhow::Context;
use backdrop_tone::acrylic::acrylic_blur;
use backdrop_tone::color_analyzer::{AnalyzerConfig, ColorAnalyzer};
use backdrop_tone::core_modules::utils::image_helper::image_helper::{load_rgba, save_png};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "backdrop_tone", about = "Derive a backdrop color from an image")]
struct Args {
    /// Image to analyze.
    image: PathBuf,

    /// Stack blur radius applied before analysis (the acrylic default is 180).
    #[arg(long)]
    blur_radius: Option<u32>,

    /// Write the blurred image here as PNG.
    #[arg(long, requires = "blur_radius")]
    blur_output: Option<PathBuf>,

    /// Luminance below which the average counts as dark.
    #[arg(long)]
    threshold: Option<f64>,

    /// Per-channel brighten amount for dark averages.
    #[arg(long)]
    delta: Option<u8>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AnalyzerConfig::default();
    if let Some(threshold) = args.threshold {
        config.dark_threshold = threshold;
    }
    if let Some(delta) = args.delta {
        config.brighten_delta = delta;
    }
    let analyzer = ColorAnalyzer::new(config);

    let mut image = load_rgba(&args.image)
        .with_context(|| format!("failed to load {}", args.image.display()))?;
    info!(
        path = %args.image.display(),
        width = image.width(),
        height = image.height(),
        "image loaded"
    );

    if let Some(radius) = args.blur_radius {
        image = acrylic_blur(image, radius).await?;
        if let Some(output) = &args.blur_output {
            save_png(output, &image)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(path = %output.display(), "blurred image written");
        }
    }

    let result = analyzer.analyze_image(&image)?;
    println!("rgba:    {}", result.rgba());
    println!("is_dark: {}", result.is_dark());

    Ok(())
}
