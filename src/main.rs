use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slidedeck::{EndBehavior, Environment, PresentationConfig, headless};

#[derive(Parser, Debug)]
#[command(version, about = "Timed scene presentation with manual navigation")]
struct Args {
    /// Directory of scene images, shown in file name order
    images: Option<PathBuf>,

    /// TOML file with presentation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time each scene stays on screen while playing
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Number of scenes for a headless run
    #[arg(long)]
    scenes: Option<u32>,

    /// Go back to the first scene after the last one instead of pausing
    #[arg(long)]
    wrap: bool,

    /// Start paused; scenes only change on input
    #[arg(long)]
    reduced_motion: bool,

    /// Run without a window for this many seconds, logging every scene change
    #[arg(long, value_name = "SECONDS")]
    headless: Option<f32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PresentationConfig::load(path)?,
        None => PresentationConfig::default(),
    };
    config.apply_env_overrides()?;
    if let Some(duration_ms) = args.duration_ms {
        config.scene_duration_ms = duration_ms;
    }
    if let Some(scenes) = args.scenes {
        config.total_scenes = scenes;
    }
    if args.wrap {
        config.end_behavior = EndBehavior::Wrap;
    }

    let mut environment = Environment::from_env();
    environment.reduced_motion |= args.reduced_motion;

    if let Some(seconds) = args.headless {
        headless::run(config, environment, seconds).context("headless run failed")?;
        return Ok(());
    }

    run_viewer(config, environment, args.images)
}

#[cfg(feature = "viewer")]
fn run_viewer(config: PresentationConfig, environment: Environment, images: Option<PathBuf>) -> Result<()> {
    let images = images.context("an image directory is required, or pass --headless SECONDS")?;
    slidedeck::viewer::run(config, environment, &images)
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_config: PresentationConfig, _environment: Environment, _images: Option<PathBuf>) -> Result<()> {
    anyhow::bail!("built without the `viewer` feature; pass --headless SECONDS or rebuild with --features viewer")
}
