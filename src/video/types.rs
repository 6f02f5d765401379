//! Core types for Seedance video generation.

use crate::error::{Result, SeedanceError};
use crate::video::extract::ResponseShape;
use crate::video::models::SeedanceModel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shortest clip Seedance accepts, in seconds.
pub const MIN_DURATION_SECS: u32 = 3;
/// Longest clip Seedance accepts, in seconds.
pub const MAX_DURATION_SECS: u32 = 12;
/// Largest seed value the API accepts.
pub const MAX_SEED: i64 = 4_294_967_295;
/// Seed value meaning "let the server randomize".
pub const RANDOM_SEED: i64 = -1;
/// Maximum number of reference images in image-refs mode.
pub const MAX_REFERENCE_IMAGES: usize = 4;

/// Output video resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// 854x480.
    #[serde(rename = "480p")]
    P480,
    /// 1280x720.
    #[default]
    #[serde(rename = "720p")]
    P720,
    /// 1920x1080.
    #[serde(rename = "1080p")]
    P1080,
}

impl Resolution {
    /// Returns the resolution token (e.g., "720p").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
        }
    }

    /// Parses a resolution token.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "480p" => Some(Self::P480),
            "720p" => Some(Self::P720),
            "1080p" => Some(Self::P1080),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect ratio for text-to-video and image-refs generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 landscape (widescreen).
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// 4:3 standard landscape.
    #[serde(rename = "4:3")]
    Standard,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
    /// 3:4 standard portrait.
    #[serde(rename = "3:4")]
    StandardPortrait,
    /// 9:16 portrait (tall).
    #[serde(rename = "9:16")]
    Portrait,
    /// 21:9 ultrawide.
    #[serde(rename = "21:9")]
    Ultrawide,
}

impl AspectRatio {
    /// Returns the aspect ratio as a string (e.g., "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Standard => "4:3",
            Self::Square => "1:1",
            Self::StandardPortrait => "3:4",
            Self::Portrait => "9:16",
            Self::Ultrawide => "21:9",
        }
    }

    /// Parses an aspect ratio string such as "9:16".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "16:9" => Some(Self::Landscape),
            "4:3" => Some(Self::Standard),
            "1:1" => Some(Self::Square),
            "3:4" => Some(Self::StandardPortrait),
            "9:16" => Some(Self::Portrait),
            "21:9" => Some(Self::Ultrawide),
            _ => None,
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an input image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote image, passed to the API unchanged.
    Url(String),
    /// Local file, read and inlined as a data URI at submission time.
    Path(PathBuf),
    /// In-memory image bytes. `file_name` is only used to guess the MIME type.
    Bytes {
        /// Raw image bytes.
        data: Vec<u8>,
        /// Original file name, if known.
        file_name: Option<String>,
    },
}

impl ImageSource {
    /// Creates a remote image source.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Creates a local file image source.
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Creates an in-memory image source.
    pub fn bytes(data: Vec<u8>, file_name: Option<String>) -> Self {
        Self::Bytes { data, file_name }
    }

    /// Treats `http://` and `https://` inputs as URLs and everything else as a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Returns true if this image is fetched by the server rather than inlined.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Role attached to an image in the request content list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    /// Opening frame of a first-last-frame clip.
    FirstFrame,
    /// Closing frame of a first-last-frame clip.
    LastFrame,
    /// Subject/style reference in image-refs mode.
    ReferenceImage,
}

/// The four generation modes Seedance supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Prompt only.
    TextToVideo,
    /// One image animated with an optional prompt.
    ImageToVideo,
    /// Interpolation between a first and a last frame.
    FirstLastFrame,
    /// One to four reference images.
    ImageRefs,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextToVideo => write!(f, "text-to-video"),
            Self::ImageToVideo => write!(f, "image-to-video"),
            Self::FirstLastFrame => write!(f, "first-last-frame"),
            Self::ImageRefs => write!(f, "image-refs"),
        }
    }
}

/// Parameters shared by every mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonParams {
    /// Output resolution.
    pub resolution: Resolution,
    /// Clip length in seconds (3-12).
    pub duration_secs: u32,
    /// Seed; `None` or `-1` lets the server randomize.
    pub seed: Option<i64>,
    /// Whether the output carries the vendor watermark.
    pub watermark: bool,
}

impl Default for CommonParams {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            duration_secs: 5,
            seed: None,
            watermark: true,
        }
    }
}

impl CommonParams {
    /// Returns the seed to send, treating `-1` as absent.
    pub fn effective_seed(&self) -> Option<i64> {
        self.seed.filter(|&s| s != RANDOM_SEED)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration_secs) {
            return Err(SeedanceError::Validation(format!(
                "duration must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS} seconds, got {}",
                self.duration_secs
            )));
        }
        if let Some(seed) = self.effective_seed() {
            if !(0..=MAX_SEED).contains(&seed) {
                return Err(SeedanceError::Validation(format!(
                    "seed must be -1 or between 0 and {MAX_SEED}, got {seed}"
                )));
            }
        }
        Ok(())
    }
}

/// Text-to-video request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToVideo {
    /// Scene description (required).
    pub prompt: String,
    /// Model override; defaults to Lite T2V.
    pub model: Option<SeedanceModel>,
    /// Aspect ratio.
    pub ratio: AspectRatio,
    /// Shared parameters.
    pub params: CommonParams,
}

/// Image-to-video request. The aspect ratio is always `adaptive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageToVideo {
    /// Image to animate.
    pub image: ImageSource,
    /// Optional motion description.
    pub prompt: Option<String>,
    /// Model override; defaults to Lite I2V.
    pub model: Option<SeedanceModel>,
    /// Shared parameters.
    pub params: CommonParams,
}

/// First-last-frame request. Both frames must be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstLastFrame {
    /// Opening frame.
    pub first_frame: Option<ImageSource>,
    /// Closing frame.
    pub last_frame: Option<ImageSource>,
    /// Optional transition description.
    pub prompt: Option<String>,
    /// Keep the camera fixed (`--cf`).
    pub camera_fixed: bool,
    /// Shared parameters.
    pub params: CommonParams,
}

/// Multi-reference-image request (1-4 images).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRefs {
    /// Reference images, sent in order.
    pub images: Vec<ImageSource>,
    /// Optional scene description.
    pub prompt: Option<String>,
    /// Aspect ratio.
    pub ratio: AspectRatio,
    /// Shared parameters.
    pub params: CommonParams,
}

/// A request to generate a video, in one of the four modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Prompt only.
    TextToVideo(TextToVideo),
    /// Single image.
    ImageToVideo(ImageToVideo),
    /// First and last frame.
    FirstLastFrame(FirstLastFrame),
    /// Reference images.
    ImageRefs(ImageRefs),
}

impl GenerationRequest {
    /// Creates a text-to-video request.
    pub fn text_to_video(prompt: impl Into<String>) -> Self {
        Self::TextToVideo(TextToVideo {
            prompt: prompt.into(),
            model: None,
            ratio: AspectRatio::default(),
            params: CommonParams::default(),
        })
    }

    /// Creates an image-to-video request.
    pub fn image_to_video(image: ImageSource) -> Self {
        Self::ImageToVideo(ImageToVideo {
            image,
            prompt: None,
            model: None,
            params: CommonParams::default(),
        })
    }

    /// Creates a first-last-frame request.
    pub fn first_last_frame(first_frame: ImageSource, last_frame: ImageSource) -> Self {
        Self::FirstLastFrame(FirstLastFrame {
            first_frame: Some(first_frame),
            last_frame: Some(last_frame),
            prompt: None,
            camera_fixed: false,
            params: CommonParams::default(),
        })
    }

    /// Creates an image-refs request.
    pub fn image_refs(images: Vec<ImageSource>) -> Self {
        Self::ImageRefs(ImageRefs {
            images,
            prompt: None,
            ratio: AspectRatio::default(),
            params: CommonParams::default(),
        })
    }

    /// Returns the mode of this request.
    pub fn mode(&self) -> GenerationMode {
        match self {
            Self::TextToVideo(_) => GenerationMode::TextToVideo,
            Self::ImageToVideo(_) => GenerationMode::ImageToVideo,
            Self::FirstLastFrame(_) => GenerationMode::FirstLastFrame,
            Self::ImageRefs(_) => GenerationMode::ImageRefs,
        }
    }

    /// Returns the shared parameters.
    pub fn params(&self) -> &CommonParams {
        match self {
            Self::TextToVideo(r) => &r.params,
            Self::ImageToVideo(r) => &r.params,
            Self::FirstLastFrame(r) => &r.params,
            Self::ImageRefs(r) => &r.params,
        }
    }

    fn params_mut(&mut self) -> &mut CommonParams {
        match self {
            Self::TextToVideo(r) => &mut r.params,
            Self::ImageToVideo(r) => &mut r.params,
            Self::FirstLastFrame(r) => &mut r.params,
            Self::ImageRefs(r) => &mut r.params,
        }
    }

    /// Returns the free-text prompt, if any.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::TextToVideo(r) => Some(r.prompt.as_str()),
            Self::ImageToVideo(r) => r.prompt.as_deref(),
            Self::FirstLastFrame(r) => r.prompt.as_deref(),
            Self::ImageRefs(r) => r.prompt.as_deref(),
        }
    }

    /// Returns the requested model, if one was set.
    pub fn model(&self) -> Option<SeedanceModel> {
        match self {
            Self::TextToVideo(r) => r.model,
            Self::ImageToVideo(r) => r.model,
            Self::FirstLastFrame(_) | Self::ImageRefs(_) => None,
        }
    }

    /// Sets the free-text prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        match &mut self {
            Self::TextToVideo(r) => r.prompt = prompt,
            Self::ImageToVideo(r) => r.prompt = Some(prompt),
            Self::FirstLastFrame(r) => r.prompt = Some(prompt),
            Self::ImageRefs(r) => r.prompt = Some(prompt),
        }
        self
    }

    /// Selects a model. Ignored by modes that only run on Lite I2V.
    pub fn with_model(mut self, model: SeedanceModel) -> Self {
        match &mut self {
            Self::TextToVideo(r) => r.model = Some(model),
            Self::ImageToVideo(r) => r.model = Some(model),
            Self::FirstLastFrame(_) | Self::ImageRefs(_) => {}
        }
        self
    }

    /// Sets the resolution.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.params_mut().resolution = resolution;
        self
    }

    /// Sets the clip duration in seconds.
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.params_mut().duration_secs = secs;
        self
    }

    /// Sets the seed. `-1` means "let the server randomize".
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.params_mut().seed = Some(seed);
        self
    }

    /// Enables or disables the watermark.
    pub fn with_watermark(mut self, watermark: bool) -> Self {
        self.params_mut().watermark = watermark;
        self
    }

    /// Sets the aspect ratio. Only text-to-video and image-refs use it.
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        match &mut self {
            Self::TextToVideo(r) => r.ratio = ratio,
            Self::ImageRefs(r) => r.ratio = ratio,
            Self::ImageToVideo(_) | Self::FirstLastFrame(_) => {}
        }
        self
    }

    /// Sets the fixed-camera flag. Only first-last-frame uses it.
    pub fn with_camera_fixed(mut self, camera_fixed: bool) -> Self {
        if let Self::FirstLastFrame(r) = &mut self {
            r.camera_fixed = camera_fixed;
        }
        self
    }

    /// Checks inputs before anything is sent.
    pub fn validate(&self) -> Result<()> {
        self.params().validate()?;
        match self {
            Self::TextToVideo(r) => {
                if r.prompt.trim().is_empty() {
                    return Err(SeedanceError::Validation(
                        "text-to-video requires a non-empty prompt".into(),
                    ));
                }
            }
            Self::ImageToVideo(_) => {}
            Self::FirstLastFrame(r) => {
                if r.first_frame.is_none() {
                    return Err(SeedanceError::Validation(
                        "first-last-frame requires a first frame image".into(),
                    ));
                }
                if r.last_frame.is_none() {
                    return Err(SeedanceError::Validation(
                        "first-last-frame requires a last frame image".into(),
                    ));
                }
            }
            Self::ImageRefs(r) => {
                if r.images.is_empty() {
                    return Err(SeedanceError::Validation(
                        "at least one reference image is required".into(),
                    ));
                }
                if r.images.len() > MAX_REFERENCE_IMAGES {
                    return Err(SeedanceError::Validation(format!(
                        "at most {MAX_REFERENCE_IMAGES} reference images are supported, got {}",
                        r.images.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the images of this request with their roles, in send order.
    pub fn images(&self) -> Vec<(&ImageSource, Option<ImageRole>)> {
        match self {
            Self::TextToVideo(_) => Vec::new(),
            Self::ImageToVideo(r) => vec![(&r.image, None)],
            Self::FirstLastFrame(r) => r
                .first_frame
                .iter()
                .map(|img| (img, Some(ImageRole::FirstFrame)))
                .chain(
                    r.last_frame
                        .iter()
                        .map(|img| (img, Some(ImageRole::LastFrame))),
                )
                .collect(),
            Self::ImageRefs(r) => r
                .images
                .iter()
                .map(|img| (img, Some(ImageRole::ReferenceImage)))
                .collect(),
        }
    }
}

/// Opaque id of a server-side generation task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHandle(String);

impl TaskHandle {
    /// Wraps a task id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the task id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task state as reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Waiting for capacity.
    Queued,
    /// Being generated.
    Running,
    /// Finished; the response carries a video URL.
    Succeeded,
    /// Generation failed.
    Failed,
    /// The task expired before it ran.
    Expired,
    /// The task was cancelled server-side.
    Cancelled,
    /// A status string this client does not recognize.
    Unknown(String),
}

impl TaskStatus {
    /// Maps a raw status string to a status.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            "cancelled" => Self::Cancelled,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns true if polling should stop.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Failed | Self::Expired | Self::Cancelled
        )
    }

    /// Returns true for terminal states other than success.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::Expired | Self::Cancelled)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Running => write!(f, "running"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
            Self::Expired => write!(f, "expired"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Unknown(raw) if raw.is_empty() => write!(f, "unknown"),
            Self::Unknown(raw) => write!(f, "unknown ({raw})"),
        }
    }
}

/// One decoded status poll.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    /// Task that was polled.
    pub handle: TaskHandle,
    /// Reported status.
    pub status: TaskStatus,
    /// Server failure message, if present.
    pub error_message: Option<String>,
    /// Full response body, probed for the video URL on success.
    pub body: serde_json::Value,
}

/// A finished generation.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedVideo {
    /// Task that produced the video.
    pub task_id: String,
    /// Where the video can be fetched.
    pub video_url: String,
    /// Response layout the URL was found in.
    pub shape: ResponseShape,
    /// Wire model id used.
    pub model: Option<String>,
    /// Generation mode.
    pub mode: Option<GenerationMode>,
    /// Wall-clock time from submission (or first poll) to success, in milliseconds.
    pub elapsed_ms: u64,
}

/// Downloaded video data.
#[derive(Debug, Clone)]
pub struct VideoBytes {
    /// Raw video bytes.
    pub data: Vec<u8>,
    /// MIME type (e.g., "video/mp4").
    pub mime_type: String,
}

impl VideoBytes {
    /// Returns the size of the video data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Saves the video to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = CommonParams::default();
        assert_eq!(params.resolution, Resolution::P720);
        assert_eq!(params.duration_secs, 5);
        assert!(params.seed.is_none());
        assert!(params.watermark);
        assert_eq!(AspectRatio::default().as_str(), "16:9");
    }

    #[test]
    fn test_resolution_and_ratio_parse() {
        assert_eq!(Resolution::parse("1080P"), Some(Resolution::P1080));
        assert_eq!(Resolution::parse("4k"), None);
        assert_eq!(AspectRatio::parse("9:16"), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::parse("adaptive"), None);
    }

    #[test]
    fn test_seed_sentinel_is_omitted() {
        let req = GenerationRequest::text_to_video("a cat").with_seed(-1);
        assert_eq!(req.params().effective_seed(), None);
        assert!(req.validate().is_ok());

        let req = GenerationRequest::text_to_video("a cat").with_seed(42);
        assert_eq!(req.params().effective_seed(), Some(42));
    }

    #[test]
    fn test_seed_range() {
        assert!(GenerationRequest::text_to_video("a")
            .with_seed(MAX_SEED)
            .validate()
            .is_ok());
        assert!(GenerationRequest::text_to_video("a")
            .with_seed(0)
            .validate()
            .is_ok());

        let err = GenerationRequest::text_to_video("a")
            .with_seed(MAX_SEED + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SeedanceError::Validation(_)));

        let err = GenerationRequest::text_to_video("a")
            .with_seed(-2)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SeedanceError::Validation(_)));
    }

    #[test]
    fn test_duration_range() {
        for secs in [3, 5, 12] {
            assert!(GenerationRequest::text_to_video("a")
                .with_duration(secs)
                .validate()
                .is_ok());
        }
        for secs in [0, 2, 13] {
            assert!(GenerationRequest::text_to_video("a")
                .with_duration(secs)
                .validate()
                .is_err());
        }
    }

    #[test]
    fn test_text_prompt_required() {
        let err = GenerationRequest::text_to_video("   ")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("prompt"));
    }

    #[test]
    fn test_first_last_frame_names_missing_frame() {
        let only_first = GenerationRequest::FirstLastFrame(FirstLastFrame {
            first_frame: Some(ImageSource::url("https://example.com/a.jpg")),
            last_frame: None,
            prompt: None,
            camera_fixed: false,
            params: CommonParams::default(),
        });
        let err = only_first.validate().unwrap_err();
        assert!(err.to_string().contains("last frame"), "{err}");

        let only_last = GenerationRequest::FirstLastFrame(FirstLastFrame {
            first_frame: None,
            last_frame: Some(ImageSource::url("https://example.com/b.jpg")),
            prompt: None,
            camera_fixed: false,
            params: CommonParams::default(),
        });
        let err = only_last.validate().unwrap_err();
        assert!(err.to_string().contains("first frame"), "{err}");
    }

    #[test]
    fn test_image_refs_count() {
        let img = || ImageSource::url("https://example.com/ref.png");

        assert!(GenerationRequest::image_refs(vec![]).validate().is_err());
        assert!(GenerationRequest::image_refs(vec![img(); 5]).validate().is_err());
        for n in 1..=4 {
            assert!(GenerationRequest::image_refs(vec![img(); n]).validate().is_ok());
        }
    }

    #[test]
    fn test_images_roles_in_order() {
        let req = GenerationRequest::image_refs(vec![
            ImageSource::url("https://example.com/1.png"),
            ImageSource::url("https://example.com/2.png"),
        ]);
        let images = req.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].0, &ImageSource::url("https://example.com/1.png"));
        assert!(images
            .iter()
            .all(|(_, role)| *role == Some(ImageRole::ReferenceImage)));

        let req = GenerationRequest::first_last_frame(
            ImageSource::url("https://example.com/first.png"),
            ImageSource::url("https://example.com/last.png"),
        );
        let roles: Vec<_> = req.images().into_iter().map(|(_, r)| r).collect();
        assert_eq!(
            roles,
            vec![Some(ImageRole::FirstFrame), Some(ImageRole::LastFrame)]
        );

        let req = GenerationRequest::image_to_video(ImageSource::path("cat.png"));
        assert_eq!(req.images()[0].1, None);
    }

    #[test]
    fn test_builder_ignores_inapplicable_options() {
        let req = GenerationRequest::image_to_video(ImageSource::url("https://example.com/a.png"))
            .with_aspect_ratio(AspectRatio::Square)
            .with_camera_fixed(true)
            .with_prompt("wave");
        assert_eq!(req.prompt(), Some("wave"));
        assert_eq!(req.mode(), GenerationMode::ImageToVideo);
    }

    #[test]
    fn test_image_source_from_arg() {
        assert!(ImageSource::from_arg("https://example.com/a.png").is_remote());
        assert_eq!(
            ImageSource::from_arg("./frames/a.png"),
            ImageSource::Path(PathBuf::from("./frames/a.png"))
        );
    }

    #[test]
    fn test_task_status_parse() {
        assert_eq!(TaskStatus::parse("queued"), TaskStatus::Queued);
        assert_eq!(TaskStatus::parse("running"), TaskStatus::Running);
        assert_eq!(TaskStatus::parse("succeeded"), TaskStatus::Succeeded);
        assert_eq!(TaskStatus::parse("failed"), TaskStatus::Failed);
        assert_eq!(TaskStatus::parse("expired"), TaskStatus::Expired);
        assert_eq!(
            TaskStatus::parse("paused"),
            TaskStatus::Unknown("paused".into())
        );
        assert!(!TaskStatus::parse("paused").is_terminal());
        assert!(TaskStatus::Cancelled.is_failure());
        assert!(!TaskStatus::Succeeded.is_failure());
    }

    #[test]
    fn test_task_status_display() {
        assert_eq!(TaskStatus::Unknown(String::new()).to_string(), "unknown");
        assert_eq!(
            TaskStatus::Unknown("paused".into()).to_string(),
            "unknown (paused)"
        );
    }
}
