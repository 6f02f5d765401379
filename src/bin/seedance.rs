//! CLI for Seedance - BytePlus ModelArk video generation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedance::video::GeneratedVideo;
use seedance::{
    AspectRatio, ClientConfig, GenerationRequest, ImageSource, Resolution, SeedanceClient,
    SeedanceError, SeedanceModel,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seedance")]
#[command(about = "Generate videos with BytePlus ModelArk Seedance models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a video from a text prompt
    Text(TextArgs),

    /// Animate a single image
    Image(ImageArgs),

    /// Generate a transition between a first and a last frame
    Frames(FramesArgs),

    /// Generate a video from 1-4 reference images
    Refs(RefsArgs),

    /// List models and their wire ids
    Models,

    /// Show the resolved configuration
    Config,
}

#[derive(Args)]
struct CommonArgs {
    /// Output resolution
    #[arg(short, long, value_enum, default_value = "720p")]
    resolution: ResolutionArg,

    /// Video duration in seconds (3-12)
    #[arg(short, long, default_value_t = 5)]
    duration: u32,

    /// Seed (-1 lets the server randomize)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    seed: i64,

    /// Disable the watermark
    #[arg(long)]
    no_watermark: bool,

    /// Maximum seconds to wait for the task
    #[arg(long)]
    timeout: Option<u64>,

    /// Download the video to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct TextArgs {
    /// The text prompt describing the video
    prompt: String,

    /// Model to use
    #[arg(short, long, value_enum, default_value = "lite-t2v")]
    model: ModelArg,

    /// Aspect ratio
    #[arg(long, value_enum, default_value = "16:9")]
    ratio: AspectRatioArg,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct ImageArgs {
    /// Image path or http(s) URL
    image: String,

    /// Motion prompt
    #[arg(short, long)]
    prompt: Option<String>,

    /// Model to use
    #[arg(short, long, value_enum, default_value = "lite-i2v")]
    model: ModelArg,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct FramesArgs {
    /// First frame path or URL
    first: String,

    /// Last frame path or URL
    last: String,

    /// Transition prompt
    #[arg(short, long)]
    prompt: Option<String>,

    /// Keep the camera fixed
    #[arg(long)]
    camera_fixed: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct RefsArgs {
    /// Reference image paths or URLs (1-4)
    #[arg(required = true, num_args = 1..)]
    images: Vec<String>,

    /// Scene prompt
    #[arg(short, long)]
    prompt: Option<String>,

    /// Aspect ratio
    #[arg(long, value_enum, default_value = "16:9")]
    ratio: AspectRatioArg,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Pro,
    LiteT2v,
    LiteI2v,
}

impl From<ModelArg> for SeedanceModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Pro => SeedanceModel::Pro,
            ModelArg::LiteT2v => SeedanceModel::LiteT2v,
            ModelArg::LiteI2v => SeedanceModel::LiteI2v,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResolutionArg {
    #[value(name = "480p")]
    P480,
    #[value(name = "720p")]
    P720,
    #[value(name = "1080p")]
    P1080,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::P480 => Resolution::P480,
            ResolutionArg::P720 => Resolution::P720,
            ResolutionArg::P1080 => Resolution::P1080,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AspectRatioArg {
    #[value(name = "16:9")]
    Landscape,
    #[value(name = "4:3")]
    Standard,
    #[value(name = "1:1")]
    Square,
    #[value(name = "3:4")]
    StandardPortrait,
    #[value(name = "9:16")]
    Portrait,
    #[value(name = "21:9")]
    Ultrawide,
}

impl From<AspectRatioArg> for AspectRatio {
    fn from(arg: AspectRatioArg) -> Self {
        match arg {
            AspectRatioArg::Landscape => AspectRatio::Landscape,
            AspectRatioArg::Standard => AspectRatio::Standard,
            AspectRatioArg::Square => AspectRatio::Square,
            AspectRatioArg::StandardPortrait => AspectRatio::StandardPortrait,
            AspectRatioArg::Portrait => AspectRatio::Portrait,
            AspectRatioArg::Ultrawide => AspectRatio::Ultrawide,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Text(args) => {
            let request = GenerationRequest::text_to_video(&args.prompt)
                .with_model(args.model.into())
                .with_aspect_ratio(args.ratio.into());
            run_generation(request, &args.common, cli.json).await?;
        }
        Commands::Image(args) => {
            let mut request = GenerationRequest::image_to_video(ImageSource::from_arg(&args.image))
                .with_model(args.model.into());
            if let Some(prompt) = args.prompt {
                request = request.with_prompt(prompt);
            }
            run_generation(request, &args.common, cli.json).await?;
        }
        Commands::Frames(args) => {
            let mut request = GenerationRequest::first_last_frame(
                ImageSource::from_arg(&args.first),
                ImageSource::from_arg(&args.last),
            )
            .with_camera_fixed(args.camera_fixed);
            if let Some(prompt) = args.prompt {
                request = request.with_prompt(prompt);
            }
            run_generation(request, &args.common, cli.json).await?;
        }
        Commands::Refs(args) => {
            let images = args.images.iter().map(|s| ImageSource::from_arg(s)).collect();
            let mut request =
                GenerationRequest::image_refs(images).with_aspect_ratio(args.ratio.into());
            if let Some(prompt) = args.prompt {
                request = request.with_prompt(prompt);
            }
            run_generation(request, &args.common, cli.json).await?;
        }
        Commands::Models => {
            list_models(cli.json)?;
        }
        Commands::Config => {
            show_config(cli.json)?;
        }
    }

    Ok(())
}

fn apply_common(request: GenerationRequest, common: &CommonArgs) -> GenerationRequest {
    request
        .with_resolution(common.resolution.into())
        .with_duration(common.duration)
        .with_seed(common.seed)
        .with_watermark(!common.no_watermark)
}

async fn run_generation(
    request: GenerationRequest,
    common: &CommonArgs,
    json_output: bool,
) -> anyhow::Result<()> {
    let request = apply_common(request, common);

    let mut builder = ClientConfig::builder();
    if let Some(secs) = common.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = SeedanceClient::new(builder.build().map_err(report)?).map_err(report)?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    if !json_output {
        eprintln!(
            "Generating {} video (this may take a few minutes)...",
            request.mode()
        );
    }
    let video = client
        .generate_with_cancel(&request, &cancel)
        .await
        .map_err(report)?;

    let saved = match &common.output {
        Some(path) => {
            let bytes = client
                .download_with_cancel(&video, &cancel)
                .await
                .map_err(report)?;
            bytes.save(path).map_err(report)?;
            Some((path.clone(), bytes.size()))
        }
        None => None,
    };

    print_video(&video, saved, json_output)
}

fn report(err: SeedanceError) -> anyhow::Error {
    anyhow::anyhow!("[{:?}] {}", err.kind(), err.user_message())
}

fn print_video(
    video: &GeneratedVideo,
    saved: Option<(PathBuf, usize)>,
    json_output: bool,
) -> anyhow::Result<()> {
    if json_output {
        let mut result = serde_json::to_value(video)?;
        result["success"] = serde_json::Value::Bool(true);
        if let Some((path, size)) = &saved {
            result["output"] = serde_json::json!(path.display().to_string());
            result["size_bytes"] = serde_json::json!(size);
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Video generation successful!");
        println!("Task ID: {}", video.task_id);
        println!("Video URL: {}", video.video_url);
        if let Some(model) = &video.model {
            println!("Model: {model}");
        }
        println!("Generation time: {}ms", video.elapsed_ms);
        if let Some((path, size)) = saved {
            println!("Saved: {} ({} bytes)", path.display(), size);
        }
    }
    Ok(())
}

fn list_models(json_output: bool) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    struct ModelInfo {
        name: &'static str,
        wire_id: String,
        env_var: &'static str,
        modes: Vec<String>,
    }

    let table = seedance::ModelTable::from_env();
    let modes = [
        seedance::GenerationMode::TextToVideo,
        seedance::GenerationMode::ImageToVideo,
        seedance::GenerationMode::FirstLastFrame,
        seedance::GenerationMode::ImageRefs,
    ];
    let models: Vec<ModelInfo> = SeedanceModel::ALL
        .into_iter()
        .map(|m| ModelInfo {
            name: m.display_name(),
            wire_id: table.id(m).to_string(),
            env_var: m.env_var(),
            modes: modes
                .iter()
                .filter(|mode| m.supports(**mode))
                .map(|mode| mode.to_string())
                .collect(),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        println!("Available models:\n");
        for m in &models {
            println!("  {} -> {}", m.name, m.wire_id);
            println!("    Override: {}", m.env_var);
            println!("    Modes: {}", m.modes.join(", "));
        }
    }

    Ok(())
}

fn show_config(json_output: bool) -> anyhow::Result<()> {
    let config = ClientConfig::builder().build().map_err(report)?;
    let client = SeedanceClient::new(config.clone()).map_err(report)?;
    let health = client.health_check();

    if json_output {
        let result = serde_json::json!({
            "api_key": config.masked_api_key(),
            "base_url": config.base_url,
            "poll_interval_secs": config.poll_interval.as_secs(),
            "timeout_secs": config.timeout.as_secs(),
            "healthy": health.is_ok(),
            "error": health.as_ref().err().map(|e| e.user_message()),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("API Key: {}", config.masked_api_key());
        println!("Base URL: {}", config.base_url);
        for model in SeedanceModel::ALL {
            println!("{}: {}", model.display_name(), config.models.id(model));
        }
        match health {
            Ok(()) => println!("\nStatus: configured"),
            Err(e) => println!("\nStatus: {}", e.user_message()),
        }
    }

    Ok(())
}
