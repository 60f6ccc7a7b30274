//! Sample generator: renders one static and one animated CAPTCHA to disk so
//! the output can be eyeballed in any image viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glyphgate::{CaptchaSpec, ColorRange, GifCaptcha, GifOptions, ShearCaptcha};

/// Glyphgate sample renderer
#[derive(Parser, Debug)]
#[command(name = "render-samples")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Code to render
    #[arg(short, long, default_value = "ABCD")]
    code: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Number of interference elements
    #[arg(long, default_value_t = 10)]
    interference: u32,

    /// GIF encoding quality (values below 1 are clamped to 1)
    #[arg(long, default_value_t = 10)]
    quality: i32,

    /// GIF loop count (0 loops forever, negatives are clamped to 0)
    #[arg(long, default_value_t = 0)]
    repeat: i32,

    /// Output directory
    #[arg(short, long, default_value = "samples")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let code_count = args.code.chars().count().max(1) as u32;
    let spec = CaptchaSpec::new(args.width, args.height, code_count, args.interference)?;

    let image = ShearCaptcha::new(spec).render(&args.code)?;
    let path = args.out.join("shear.png");
    std::fs::write(&path, image.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        bytes = image.as_bytes().len(),
        "Wrote static captcha"
    );

    let options = GifOptions::new()
        .with_quality(args.quality)
        .with_repeat(args.repeat)
        .with_color_range(ColorRange::new(0, 200)?);
    let image = GifCaptcha::new(spec).with_options(options).render(&args.code)?;
    let path = args.out.join("animated.gif");
    std::fs::write(&path, image.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        frames = image.frame_count(),
        bytes = image.as_bytes().len(),
        "Wrote animated captcha"
    );

    Ok(())
}
