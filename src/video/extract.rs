//! Locating the video URL in a succeeded task response.
//!
//! The status endpoint has returned the URL under several layouts over time.
//! Each layout is one [`ResponseShape`]; they are tried in
//! [`ResponseShape::ORDERED`] order and the first non-empty hit wins.

use serde::Serialize;
use serde_json::Value;

/// A known place where a succeeded task reports its video URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// `{"content": {"video_url": ...}}` (current ModelArk format).
    ContentVideoUrl,
    /// `{"data": [{"type": "video_url", "url": ...}]}`.
    TaggedDataArray,
    /// `{"video_url": ...}`.
    TopLevelVideoUrl,
    /// `{"result": {"video_url" | "url": ...}}` or `{"result": [{...}]}`.
    ResultField,
    /// `{"outputs": [{"video_url" | "url": ...}]}`.
    OutputsArray,
}

impl ResponseShape {
    /// Probe order.
    pub const ORDERED: [Self; 5] = [
        Self::ContentVideoUrl,
        Self::TaggedDataArray,
        Self::TopLevelVideoUrl,
        Self::ResultField,
        Self::OutputsArray,
    ];

    /// Returns the URL if `body` has this shape.
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a str> {
        match self {
            Self::ContentVideoUrl => non_empty(body.get("content")?.get("video_url")?),
            Self::TaggedDataArray => body
                .get("data")?
                .as_array()?
                .iter()
                .find(|item| item.get("type").and_then(Value::as_str) == Some("video_url"))
                .and_then(|item| non_empty(item.get("url")?)),
            Self::TopLevelVideoUrl => non_empty(body.get("video_url")?),
            Self::ResultField => match body.get("result")? {
                Value::Array(items) => first_url_in(items),
                obj @ Value::Object(_) => url_of(obj),
                _ => None,
            },
            Self::OutputsArray => first_url_in(body.get("outputs")?.as_array()?),
        }
    }
}

/// Probes every known shape in order, returning the URL and the shape that held it.
pub fn extract_video_url(body: &Value) -> Option<(ResponseShape, &str)> {
    ResponseShape::ORDERED
        .iter()
        .find_map(|shape| shape.extract(body).map(|url| (*shape, url)))
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn url_of(item: &Value) -> Option<&str> {
    item.get("video_url")
        .and_then(non_empty)
        .or_else(|| item.get("url").and_then(non_empty))
}

fn first_url_in(items: &[Value]) -> Option<&str> {
    items.iter().find_map(url_of)
}
