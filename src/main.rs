use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{info, warn};

use filterlab::{
    Axis, Detector, FileCapture, FilterFamily, Frame, PipelineController, Stage, Strategy,
};

#[derive(Parser)]
#[command(name = "filterlab")]
#[command(about = "Apply a kernel filter or feature detector to a still image")]
struct Cli {
    /// Image standing in for the camera capture
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Run a feature detector
    #[arg(long, conflicts_with_all = ["family", "axis", "strategy"])]
    detector: Option<Detector>,

    /// Kernel family to convolve with
    #[arg(long, requires = "strategy")]
    family: Option<FilterFamily>,

    /// Derivative axis (ignored for laplacian)
    #[arg(long)]
    axis: Option<Axis>,

    /// Convolution strategy
    #[arg(long, requires = "family")]
    strategy: Option<Strategy>,

    /// Output PNG (defaults to <IMAGE stem>_result.png next to the input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Save the captured frame and the result to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let debug_dir = args.debug_out.as_deref().map(prepare_debug_dir).transpose()?;

    let mut controller = PipelineController::new();
    let mut camera = FileCapture::new(&args.image_path);
    info!("Loading image: {}", camera.path().display());
    controller.capture_from(&mut camera).await?;

    if let (Some(dir), Some(frame)) = (&debug_dir, controller.current_image()) {
        save_frame(frame, &dir.join("00_capture.png"))?;
    }

    match (args.detector, args.family) {
        (Some(detector), _) => controller.choose_detector(detector)?,
        (None, Some(family)) => {
            controller.choose_kernel_family(family)?;
            if family.needs_axis() {
                let axis = args
                    .axis
                    .with_context(|| format!("--axis is required for the {family} family"))?;
                controller.choose_axis(axis)?;
            } else if args.axis.is_some() {
                warn!("--axis is ignored for the {family} family");
            }
            let strategy = args.strategy.context("--strategy is required")?;
            controller.choose_strategy(strategy)?;
        }
        (None, None) => bail!("choose either --detector or --family/--strategy"),
    }

    let Stage::ResultShown { selection } = controller.stage() else {
        bail!("pipeline stopped in stage '{}'", controller.stage());
    };
    let result = controller.snapshot().context("no result frame")?;

    if let Some(dir) = &debug_dir {
        let step_name = selection.build()?.name().to_lowercase().replace(' ', "_");
        save_frame(&result, &dir.join(format!("01_{step_name}.png")))?;
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.image_path));
    save_frame(&result, &output)?;

    println!(
        "{selection}: {}x{} result written to {}",
        result.width(),
        result.height(),
        output.display()
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

/// The directory must be empty or non-existent.
fn prepare_debug_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    if dir.exists() {
        if std::fs::read_dir(dir)?.next().is_some() {
            bail!("Debug directory is not empty: {}", dir.display());
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

fn save_frame(frame: &Frame, path: &Path) -> anyhow::Result<()> {
    frame
        .to_dynamic()?
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    info!("Saved {}", path.display());
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    input.with_file_name(format!("{stem}_result.png"))
}
