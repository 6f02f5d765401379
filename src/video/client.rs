//! Seedance task client: submit, poll, await.

use crate::config::ClientConfig;
use crate::error::{
    network_error, redact_value, sanitize_error_message, transport_error, Result, SeedanceError,
    Stage,
};
use crate::video::extract::extract_video_url;
use crate::video::image::resolve_image_url;
use crate::video::prompt::build_prompt;
use crate::video::types::{
    GeneratedVideo, GenerationRequest, TaskHandle, TaskSnapshot, TaskStatus, VideoBytes,
};
use crate::video::wire::{self, ContentItem, CreateTaskRequest, CreateTaskResponse, ImageUrl};
use serde_json::Value;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Client for the ModelArk content-generation task API.
///
/// Holds no per-task state; one client can drive any number of tasks
/// concurrently from different tokio tasks.
#[derive(Debug, Clone)]
pub struct SeedanceClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SeedanceClient {
    /// Creates a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SeedanceError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Creates a client configured from `ARK_API_KEY`, `ARK_BASE_URL` and the
    /// `MODEL_SEEDANCE_*_API` variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::builder().build()?)
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn tasks_url(&self) -> String {
        format!("{}/contents/generations/tasks", self.config.base_url)
    }

    fn task_url(&self, handle: &TaskHandle) -> String {
        format!("{}/{}", self.tasks_url(), handle.id())
    }

    /// Returns the wire model id a request will be sent with.
    pub fn model_id_for(&self, request: &GenerationRequest) -> &str {
        self.config.models.resolve(request.mode(), request.model())
    }

    fn api_error(&self, stage: Stage, status: u16, body: &str) -> SeedanceError {
        transport_error(stage, status, &redact_value(body, &self.config.api_key))
    }

    async fn build_body(&self, request: &GenerationRequest) -> Result<CreateTaskRequest> {
        let mut content = vec![ContentItem::Text {
            text: build_prompt(request),
        }];
        for (source, role) in request.images() {
            let url = resolve_image_url(source).await?;
            content.push(ContentItem::ImageUrl {
                image_url: ImageUrl { url },
                role,
            });
        }

        Ok(CreateTaskRequest {
            model: self.model_id_for(request).to_string(),
            content,
        })
    }

    /// Validates and submits a generation request, returning the task handle.
    ///
    /// Validation failures never reach the network.
    pub async fn create_task(&self, request: &GenerationRequest) -> Result<TaskHandle> {
        request.validate()?;
        let body = self.build_body(request).await?;

        let response = self
            .http
            .post(self.tasks_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| network_error(Stage::CreateTask, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| network_error(Stage::CreateTask, e))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), mode = %request.mode(), "task creation rejected");
            return Err(self.api_error(Stage::CreateTask, status.as_u16(), &text));
        }

        let created: CreateTaskResponse =
            serde_json::from_str(&text).map_err(|e| SeedanceError::Transport {
                stage: Stage::CreateTask,
                status: Some(status.as_u16()),
                message: sanitize_error_message(&format!("invalid task creation response: {e}")),
            })?;
        let id = created
            .id
            .filter(|id| !id.is_empty())
            .ok_or(SeedanceError::MissingTaskId)?;

        tracing::info!(
            task_id = %id,
            mode = %request.mode(),
            model = %body.model,
            "created Seedance task"
        );
        Ok(TaskHandle::new(id))
    }

    /// Fetches the current state of a task once.
    pub async fn poll_status(&self, handle: &TaskHandle) -> Result<TaskSnapshot> {
        let response = self
            .http
            .get(self.task_url(handle))
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| network_error(Stage::PollStatus, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| network_error(Stage::PollStatus, e))?;
        if !status.is_success() {
            return Err(self.api_error(Stage::PollStatus, status.as_u16(), &text));
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| SeedanceError::Transport {
            stage: Stage::PollStatus,
            status: Some(status.as_u16()),
            message: sanitize_error_message(&format!("invalid task status response: {e}")),
        })?;
        let task_status = TaskStatus::parse(body.get("status").and_then(Value::as_str).unwrap_or(""));

        Ok(TaskSnapshot {
            handle: handle.clone(),
            status: task_status,
            error_message: wire::error_message(&body),
            body,
        })
    }

    /// Polls a task every `poll_interval` until it succeeds, fails, or `timeout`
    /// elapses.
    pub async fn await_completion(
        &self,
        handle: &TaskHandle,
        timeout: Duration,
    ) -> Result<GeneratedVideo> {
        self.await_completion_with_cancel(handle, timeout, &CancellationToken::new())
            .await
    }

    /// Like [`await_completion`](Self::await_completion), but stops with
    /// [`SeedanceError::Cancelled`] once `cancel` fires.
    ///
    /// Unrecognized status strings are not terminal: polling continues until
    /// the deadline. Transport errors end the wait immediately. A status
    /// request in flight when `cancel` fires is abandoned.
    pub async fn await_completion_with_cancel(
        &self,
        handle: &TaskHandle,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<GeneratedVideo> {
        let start = Instant::now();

        loop {
            if cancel.is_cancelled() {
                return Err(SeedanceError::Cancelled);
            }
            if start.elapsed() >= timeout {
                tracing::warn!(task_id = %handle, timeout_secs = timeout.as_secs(), "task timed out");
                return Err(SeedanceError::Timeout(timeout));
            }

            let snapshot = until_cancelled(cancel, self.poll_status(handle)).await?;
            match &snapshot.status {
                TaskStatus::Succeeded => {
                    let (shape, url) = extract_video_url(&snapshot.body).ok_or_else(|| {
                        SeedanceError::NoVideoUrl {
                            task_id: handle.id().to_string(),
                        }
                    })?;
                    tracing::info!(
                        task_id = %handle,
                        ?shape,
                        elapsed_secs = start.elapsed().as_secs(),
                        "video generation complete"
                    );
                    return Ok(GeneratedVideo {
                        task_id: handle.id().to_string(),
                        video_url: url.to_string(),
                        shape,
                        model: snapshot
                            .body
                            .get("model")
                            .and_then(Value::as_str)
                            .map(String::from),
                        mode: None,
                        elapsed_ms: start.elapsed().as_millis() as u64,
                    });
                }
                status if status.is_failure() => {
                    let message = snapshot
                        .error_message
                        .unwrap_or_else(|| "Unknown error".to_string());
                    tracing::warn!(task_id = %handle, %status, %message, "video generation failed");
                    return Err(SeedanceError::GenerationFailed {
                        status: status.clone(),
                        message: sanitize_error_message(&redact_value(
                            &message,
                            &self.config.api_key,
                        )),
                    });
                }
                TaskStatus::Unknown(raw) => {
                    tracing::warn!(
                        task_id = %handle,
                        status = %raw,
                        elapsed_secs = start.elapsed().as_secs(),
                        "unrecognized task status, polling again"
                    );
                }
                status => {
                    tracing::debug!(
                        task_id = %handle,
                        %status,
                        elapsed_secs = start.elapsed().as_secs(),
                        "polling Seedance video generation"
                    );
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => return Err(SeedanceError::Cancelled),
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }
    }

    /// Submits a request and waits for it within the configured timeout.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedVideo> {
        self.generate_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Like [`generate`](Self::generate), with an external cancellation signal.
    pub async fn generate_with_cancel(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> Result<GeneratedVideo> {
        let start = Instant::now();

        let handle = until_cancelled(cancel, self.create_task(request)).await?;
        let mut video = self
            .await_completion_with_cancel(&handle, self.config.timeout, cancel)
            .await?;

        video.model = Some(self.model_id_for(request).to_string());
        video.mode = Some(request.mode());
        video.elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(video)
    }

    /// Downloads a generated video.
    pub async fn download(&self, video: &GeneratedVideo) -> Result<VideoBytes> {
        let response = self
            .http
            .get(&video.video_url)
            .send()
            .await
            .map_err(|e| network_error(Stage::Download, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(
                Stage::Download,
                status.as_u16(),
                "failed to download video",
            ));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("video/"))
            .unwrap_or("video/mp4")
            .to_string();
        let data = response
            .bytes()
            .await
            .map_err(|e| network_error(Stage::Download, e))?
            .to_vec();
        tracing::debug!(task_id = %video.task_id, bytes = data.len(), "downloaded video");

        Ok(VideoBytes { data, mime_type })
    }

    /// Like [`download`](Self::download), abandoning the transfer once `cancel` fires.
    pub async fn download_with_cancel(
        &self,
        video: &GeneratedVideo,
        cancel: &CancellationToken,
    ) -> Result<VideoBytes> {
        until_cancelled(cancel, self.download(video)).await
    }

    /// Checks that the client is usable without calling the API.
    pub fn health_check(&self) -> Result<()> {
        if self.config.api_key.trim().is_empty() {
            return Err(SeedanceError::Config("API key is empty".into()));
        }
        if !(self.config.base_url.starts_with("http://")
            || self.config.base_url.starts_with("https://"))
        {
            return Err(SeedanceError::Config(format!(
                "invalid base URL: {}",
                self.config.base_url
            )));
        }
        Ok(())
    }
}

/// Runs `fut` unless `cancel` fires first.
async fn until_cancelled<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(SeedanceError::Cancelled),
        res = fut => res,
    }
}
