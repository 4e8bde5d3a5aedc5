//! Wire types for the notes service HTTP API and its clients.

use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A note as stored by the notes service.
///
/// List responses may carry summaries only, so `content` and `timestamp`
/// default to empty when absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Generated summary; `None` until a summarize call succeeds
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timestamp: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Marks a field as present even when its value is `null`.
///
/// Paired with `#[serde(default)]`, an absent key stays `None` while
/// `"key": null` becomes `Some("")`.
fn present_even_if_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

// =====================================================
// Response Types
// =====================================================

/// Body of `GET /api/notes`.
///
/// Anything other than a well-formed array of notes is accepted and
/// normalized to an empty list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NoteListBody {
    Notes(Vec<Note>),
    Other(serde_json::Value),
}

impl NoteListBody {
    pub fn into_notes(self) -> Vec<Note> {
        match self {
            NoteListBody::Notes(notes) => notes,
            NoteListBody::Other(_) => Vec::new(),
        }
    }
}

/// Body of `GET /api/notes/{id}`; a missing note comes back as `{error}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetNoteResponse {
    Failed { error: String },
    Found(Note),
}

/// Body of `POST /api/notes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateNoteResponse {
    Failed { error: String },
    Created(Note),
}

/// Body of `DELETE /api/notes/{id}`.
///
/// The service answers `{result}` or `{error}`; presence of the `error` key
/// decides, so `{"error": null}` is a failure with an empty message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_even_if_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl DeleteResponse {
    pub fn deleted(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(error.into()),
        }
    }
}

/// Body of `POST /api/notes/{id}/summarize`.
///
/// Success is `{id, summary}`; failure is `{error}` and may still carry a
/// `summary` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/notes/upload`.
///
/// Only `error` is interpreted; everything else the service sends is kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UploadResponse {
    /// The reported error, if any. An empty string counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
