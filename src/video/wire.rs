// ---------------------------------------------------------------------------
// ModelArk content-generation wire types
// POST {base_url}/contents/generations/tasks       → {"id": ...}
// GET  {base_url}/contents/generations/tasks/{id}  → status + content
// ---------------------------------------------------------------------------

use crate::video::types::ImageRole;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskRequest {
    pub model: String,
    pub content: Vec<ContentItem>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentItem {
    Text {
        text: String,
    },
    ImageUrl {
        image_url: ImageUrl,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<ImageRole>,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskResponse {
    #[serde(default)]
    pub id: Option<String>,
}

/// Reads the failure message from a status body. `error` may be an object with
/// a `message`, a bare string, or anything else (rendered as JSON).
pub(crate) fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => match obj.get("message").and_then(Value::as_str) {
            Some(msg) if !msg.is_empty() => Some(msg.to_string()),
            _ => Some(Value::Object(obj.clone()).to_string()),
        },
        other => Some(other.to_string()),
    }
}
