//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Message returned after a successful rebuild
pub const INDEX_REBUILT: &str = "Index rebuilt.";

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebuildStatus {
    Ok,
    Error,
}

/// Body of every `/api/rebuild` response, success or failure
#[derive(Debug, Serialize, Deserialize)]
pub struct RebuildResponse {
    pub status: RebuildStatus,
    pub message: String,
}

impl RebuildResponse {
    pub fn ok() -> Self {
        Self {
            status: RebuildStatus::Ok,
            message: INDEX_REBUILT.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: RebuildStatus::Error,
            message: message.into(),
        }
    }
}

/// Pull a usable question out of a raw `/api/ask` body
///
/// Anything that is not a JSON object with a non-blank string `question`
/// yields `None`. The returned question is trimmed.
pub fn extract_question(body: &[u8]) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_slice(body).ok()?;
    let question = payload.get("question")?.as_str()?.trim();
    if question.is_empty() {
        None
    } else {
        Some(question.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_question() {
        assert_eq!(
            extract_question(br#"{"question": "  What is X?\n"}"#).as_deref(),
            Some("What is X?")
        );
    }

    #[test]
    fn test_extract_question_rejects_unusable_bodies() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"not json",
            b"[]",
            b"{}",
            br#"{"question": null}"#,
            br#"{"question": "   \t "}"#,
            br#"{"question": 42}"#,
            br#"{"q": "What is X?"}"#,
        ];
        for body in bodies {
            assert_eq!(extract_question(body), None, "{:?}", String::from_utf8_lossy(body));
        }
    }

    #[test]
    fn test_rebuild_response_shape() {
        let json = serde_json::to_value(RebuildResponse::error("disk full")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "disk full"}));

        let json = serde_json::to_value(RebuildResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok", "message": "Index rebuilt."}));
    }
}
