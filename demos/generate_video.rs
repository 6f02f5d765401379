//! Basic text-to-video example.
//!
//! Run with: `cargo run --example generate_video`
//!
//! Requires `ARK_API_KEY` (and optionally `ARK_BASE_URL`) environment variables.

use seedance::{AspectRatio, GenerationRequest, Resolution, SeedanceClient};

#[tokio::main]
async fn main() -> seedance::Result<()> {
    let client = SeedanceClient::from_env()?;

    let request = GenerationRequest::text_to_video("Ocean waves crashing on a rocky shore at sunset")
        .with_resolution(Resolution::P720)
        .with_aspect_ratio(AspectRatio::Landscape)
        .with_duration(5);

    println!("Generating video (this may take a few minutes)...");
    let video = match client.generate(&request).await {
        Ok(video) => video,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e);
        }
    };

    let bytes = client.download(&video).await?;
    bytes.save("output.mp4")?;
    println!(
        "Generated video: {} bytes, task {}, url {}",
        bytes.size(),
        video.task_id,
        video.video_url
    );

    Ok(())
}
