//! Flag-annotated prompt construction.
//!
//! Seedance takes its generation parameters as command-line style tokens
//! appended to the text prompt. Each mode uses its own token spelling.

use crate::video::types::{CommonParams, GenerationRequest};
use std::fmt::Write;

/// Builds the text entry for a request: trimmed free text followed by the
/// mode's flag tokens.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let flags = flag_tokens(request);
    match request.prompt().map(str::trim).filter(|p| !p.is_empty()) {
        Some(text) => format!("{text} {flags}"),
        None => flags,
    }
}

/// Returns only the flag tokens for a request, space separated.
pub fn flag_tokens(request: &GenerationRequest) -> String {
    let mut out = String::new();
    match request {
        GenerationRequest::TextToVideo(r) => {
            long_form(&mut out, &r.params, r.ratio.as_str());
            no_watermark(&mut out, &r.params);
        }
        GenerationRequest::ImageToVideo(r) => {
            long_form(&mut out, &r.params, "adaptive");
            no_watermark(&mut out, &r.params);
        }
        GenerationRequest::FirstLastFrame(r) => {
            let _ = write!(
                out,
                "--rs {} --dur {} --cf {}",
                r.params.resolution, r.params.duration_secs, r.camera_fixed
            );
            seed(&mut out, &r.params);
            no_watermark(&mut out, &r.params);
        }
        GenerationRequest::ImageRefs(r) => {
            let _ = write!(
                out,
                "--rs {} --dur {} --rt {}",
                r.params.resolution, r.params.duration_secs, r.ratio
            );
            seed(&mut out, &r.params);
            let _ = write!(out, " --wm {}", r.params.watermark);
        }
    }
    out
}

fn long_form(out: &mut String, params: &CommonParams, ratio: &str) {
    let _ = write!(
        out,
        "--resolution {} --duration {} --ratio {}",
        params.resolution, params.duration_secs, ratio
    );
    seed(out, params);
}

fn seed(out: &mut String, params: &CommonParams) {
    if let Some(seed) = params.effective_seed() {
        let _ = write!(out, " --seed {seed}");
    }
}

fn no_watermark(out: &mut String, params: &CommonParams) {
    if !params.watermark {
        out.push_str(" --no-watermark");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::types::{AspectRatio, ImageSource, Resolution};

    fn image() -> ImageSource {
        ImageSource::url("https://example.com/a.png")
    }

    #[test]
    fn test_text_to_video_defaults() {
        let req = GenerationRequest::text_to_video("A sunset over the ocean");
        assert_eq!(
            build_prompt(&req),
            "A sunset over the ocean --resolution 720p --duration 5 --ratio 16:9"
        );
    }

    #[test]
    fn test_text_to_video_all_flags() {
        let req = GenerationRequest::text_to_video("  A cat  ")
            .with_resolution(Resolution::P1080)
            .with_duration(10)
            .with_aspect_ratio(AspectRatio::Portrait)
            .with_seed(4_294_967_295)
            .with_watermark(false);
        assert_eq!(
            build_prompt(&req),
            "A cat --resolution 1080p --duration 10 --ratio 9:16 --seed 4294967295 --no-watermark"
        );
    }

    #[test]
    fn test_image_to_video_is_adaptive() {
        let req = GenerationRequest::image_to_video(image())
            .with_resolution(Resolution::P480)
            .with_duration(3)
            .with_aspect_ratio(AspectRatio::Square)
            .with_seed(7);
        assert_eq!(
            build_prompt(&req),
            "--resolution 480p --duration 3 --ratio adaptive --seed 7"
        );

        let req = req.with_prompt("wind in the trees").with_watermark(false);
        assert_eq!(
            build_prompt(&req),
            "wind in the trees --resolution 480p --duration 3 --ratio adaptive --seed 7 --no-watermark"
        );
    }

    #[test]
    fn test_first_last_frame_short_flags() {
        let req = GenerationRequest::first_last_frame(image(), image());
        assert_eq!(build_prompt(&req), "--rs 720p --dur 5 --cf false");

        let req = req
            .with_camera_fixed(true)
            .with_seed(12)
            .with_watermark(false)
            .with_prompt("morph");
        assert_eq!(
            build_prompt(&req),
            "morph --rs 720p --dur 5 --cf true --seed 12 --no-watermark"
        );
    }

    #[test]
    fn test_image_refs_always_emits_wm() {
        let req = GenerationRequest::image_refs(vec![image()]);
        assert_eq!(build_prompt(&req), "--rs 720p --dur 5 --rt 16:9 --wm true");

        let req = req
            .with_aspect_ratio(AspectRatio::Standard)
            .with_seed(0)
            .with_watermark(false);
        assert_eq!(
            build_prompt(&req),
            "--rs 720p --dur 5 --rt 4:3 --seed 0 --wm false"
        );
    }

    #[test]
    fn test_random_seed_never_emitted() {
        let requests = [
            GenerationRequest::text_to_video("x"),
            GenerationRequest::image_to_video(image()),
            GenerationRequest::first_last_frame(image(), image()),
            GenerationRequest::image_refs(vec![image()]),
        ];
        for req in requests {
            let with_sentinel = req.clone().with_seed(-1);
            assert!(!flag_tokens(&with_sentinel).contains("--seed"));
            assert!(!flag_tokens(&req).contains("--seed"));

            let seeded = req.with_seed(99);
            assert_eq!(flag_tokens(&seeded).matches("--seed 99").count(), 1);
        }
    }

    #[test]
    fn test_watermark_true_emits_nothing_for_long_modes() {
        for req in [
            GenerationRequest::text_to_video("x"),
            GenerationRequest::image_to_video(image()),
            GenerationRequest::first_last_frame(image(), image()),
        ] {
            let flags = flag_tokens(&req.with_watermark(true));
            assert!(!flags.contains("watermark"));
            assert!(!flags.contains("--wm"));
        }
    }
}
