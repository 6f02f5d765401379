#![warn(missing_docs)]
//! Seedance - client for BytePlus ModelArk video generation.
//!
//! This crate builds Seedance generation requests in four modes, submits
//! them as asynchronous tasks and polls the task endpoint until a video URL
//! is available.
//!
//! # Quick Start - Text to Video
//!
//! ```no_run
//! use seedance::{AspectRatio, GenerationRequest, SeedanceClient};
//!
//! #[tokio::main]
//! async fn main() -> seedance::Result<()> {
//!     let client = SeedanceClient::from_env()?;
//!     let request = GenerationRequest::text_to_video("A cat playing with a ball")
//!         .with_duration(5)
//!         .with_aspect_ratio(AspectRatio::Portrait);
//!     let video = client.generate(&request).await?;
//!     println!("{}", video.video_url);
//!     Ok(())
//! }
//! ```
//!
//! # Quick Start - First and Last Frame
//!
//! ```no_run
//! use seedance::{GenerationRequest, ImageSource, SeedanceClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> seedance::Result<()> {
//!     let client = SeedanceClient::from_env()?;
//!     let request = GenerationRequest::first_last_frame(
//!         ImageSource::path("start.png"),
//!         ImageSource::url("https://example.com/end.jpg"),
//!     )
//!     .with_camera_fixed(true);
//!     let handle = client.create_task(&request).await?;
//!     let video = client
//!         .await_completion(&handle, Duration::from_secs(300))
//!         .await?;
//!     client.download(&video).await?.save("transition.mp4")?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! - `ARK_API_KEY`: API key (required unless set on the builder)
//! - `ARK_BASE_URL`: API base URL
//! - `MODEL_SEEDANCE_PRO_API`, `MODEL_SEEDANCE_LITE_T2V_API`,
//!   `MODEL_SEEDANCE_LITE_I2V_API`: wire model id overrides
//!
//! # Features
//!
//! - `cli`: the `seedance` command-line binary

mod config;
mod error;
pub mod video;

pub use config::{ClientConfig, ClientConfigBuilder, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{
    sanitize_error_message, ErrorKind, Result, SeedanceError, Stage, MODELARK_CONSOLE_URL,
};

pub use video::{
    AspectRatio, GeneratedVideo, GenerationMode, GenerationRequest, ImageRole, ImageSource,
    ModelTable, Resolution, ResponseShape, SeedanceClient, SeedanceModel, TaskHandle,
    TaskSnapshot, TaskStatus, VideoBytes,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::error::{ErrorKind, Result, SeedanceError};
    pub use crate::video::{
        AspectRatio, GeneratedVideo, GenerationRequest, ImageSource, Resolution, SeedanceClient,
        SeedanceModel, TaskHandle, TaskStatus,
    };
}
