//! Video generation module.

mod client;
pub mod extract;
pub mod image;
pub mod models;
pub mod prompt;
mod types;
mod wire;

pub use client::SeedanceClient;
pub use extract::{extract_video_url, ResponseShape};
pub use models::{ModelTable, SeedanceModel};
pub use types::{
    AspectRatio, CommonParams, FirstLastFrame, GeneratedVideo, GenerationMode, GenerationRequest,
    ImageRefs, ImageRole, ImageSource, ImageToVideo, Resolution, TaskHandle, TaskSnapshot,
    TaskStatus, TextToVideo, VideoBytes, MAX_DURATION_SECS, MAX_REFERENCE_IMAGES, MAX_SEED,
    MIN_DURATION_SECS, RANDOM_SEED,
};
