//! # Summary models
//!
//! A summary is produced server-side when an upload completes. The client only
//! holds read-only copies, apart from the title which can be edited.
//!
//! The structured summary travels in two forms: the upload response may carry
//! it as an object or as JSON text, and the detail endpoint always sends JSON
//! text in its `summary` field. [`SummaryPayload`] accepts both and
//! [`SummaryPayload::decode`] turns either into a [`StructuredSummary`].

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// One heading with its bullet points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Sectioned summary text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A structured summary either already decoded or still encoded as JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SummaryPayload {
    Structured(StructuredSummary),
    Encoded(String),
}

impl SummaryPayload {
    pub fn decode(&self) -> Result<StructuredSummary, ApiError> {
        match self {
            SummaryPayload::Structured(summary) => Ok(summary.clone()),
            SummaryPayload::Encoded(text) => Ok(serde_json::from_str(text)?),
        }
    }
}

/// Entry of the caller's summary list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryListItem {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
}

/// A summary as served by the detail endpoint, before its content is decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub summary: Option<SummaryPayload>,
    #[serde(default)]
    pub created_at: String,
}

/// A summary ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: i64,
    pub title: String,
    pub transcript: String,
    pub video_url: Option<String>,
    pub summary: StructuredSummary,
    pub created_at: String,
}

impl TryFrom<RawSummary> for Summary {
    type Error = ApiError;

    fn try_from(raw: RawSummary) -> Result<Self, Self::Error> {
        let summary = match &raw.summary {
            Some(payload) => payload.decode()?,
            None => StructuredSummary::default(),
        };
        Ok(Summary {
            id: raw.id,
            title: raw.title,
            transcript: raw.transcript,
            video_url: raw.video_url.filter(|url| !url.is_empty()),
            summary,
            created_at: raw.created_at,
        })
    }
}

/// The `data` object of a successful upload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub transcript_length: Option<u64>,
    #[serde(default)]
    pub api_calls: Option<u32>,
    #[serde(default)]
    pub remaining_calls: Option<u32>,
    /// Kept undecoded: a summary of unexpected shape must not cost the
    /// caller the rest of the result.
    #[serde(default)]
    pub transcript_summary: Option<serde_json::Value>,
}

impl UploadResult {
    /// The structured summary, if present and decodable.
    pub fn structured_summary(&self) -> Option<StructuredSummary> {
        let value = self.transcript_summary.clone()?;
        serde_json::from_value::<SummaryPayload>(value)
            .ok()?
            .decode()
            .ok()
    }
}

/// A local media file picked for upload.
#[derive(Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENCODED: &str = r#"{"title":"Lecture 3","sections":[{"heading":"Intro","points":["a","b"]},{"heading":"Wrap-up","points":[]}]}"#;

    #[test]
    fn test_payload_accepts_encoded_text() {
        let payload: SummaryPayload =
            serde_json::from_value(serde_json::Value::String(ENCODED.to_string())).unwrap();
        let summary = payload.decode().unwrap();
        assert_eq!(summary.title.as_deref(), Some("Lecture 3"));
        assert_eq!(summary.sections.len(), 2);
        assert_eq!(summary.sections[0].points, vec!["a", "b"]);
    }

    #[test]
    fn test_payload_accepts_object() {
        let payload: SummaryPayload = serde_json::from_str(ENCODED).unwrap();
        assert!(matches!(payload, SummaryPayload::Structured(_)));
        assert_eq!(payload.decode().unwrap().sections[1].heading, "Wrap-up");
    }

    #[test]
    fn test_malformed_text_is_a_decode_error() {
        let payload = SummaryPayload::Encoded("not json".to_string());
        assert!(matches!(payload.decode(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_raw_summary_conversion() {
        let raw: RawSummary = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Physics",
            "transcript": "hello",
            "videoUrl": "",
            "summary": ENCODED,
            "createdAt": "2025-03-01T12:00:00Z"
        }))
        .unwrap();
        let summary = Summary::try_from(raw).unwrap();
        assert_eq!(summary.id, 9);
        assert!(summary.video_url.is_none());
        assert_eq!(summary.summary.sections.len(), 2);
    }

    #[test]
    fn test_upload_result_with_encoded_summary() {
        let result: UploadResult = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": "Talk",
            "transcriptSummary": ENCODED
        }))
        .unwrap();
        assert_eq!(result.structured_summary().unwrap().sections.len(), 2);
    }

    #[test]
    fn test_upload_result_with_plain_text_summary_has_no_sections() {
        let result: UploadResult = serde_json::from_value(serde_json::json!({
            "transcriptSummary": "just a sentence"
        }))
        .unwrap();
        assert!(result.structured_summary().is_none());
    }

    #[test]
    fn test_upload_result_survives_unexpected_summary_shape() {
        let result: UploadResult = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": "Talk",
            "transcript": "hello there",
            "transcriptSummary": { "title": "T", "sections": [{ "points": ["a"] }] }
        }))
        .unwrap();
        assert_eq!(result.id, Some(2));
        assert_eq!(result.transcript.as_deref(), Some("hello there"));
        assert!(result.structured_summary().is_none());
    }
}
