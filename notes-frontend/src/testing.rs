//! In-memory notes service used by the controller and session tests.

use async_trait::async_trait;
use notes_service_types::{
    CreateNoteResponse, DeleteResponse, Note, SummarizeResponse, UploadResponse,
};
use std::collections::HashSet;
use std::sync::Mutex;

use crate::api::{ApiError, NotesApi};
use crate::upload::UploadFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create { title: String, content: String },
    Get(i64),
    Delete(i64),
    Summarize(i64),
    Upload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Get,
    Delete,
    Summarize,
    Upload,
}

/// Persists notes in memory and records every call it receives.
///
/// Operations listed in `failing` return `ApiError::Transport` as if the
/// connection had been refused; the `*_reply` fields override the service's
/// answer.
#[derive(Default)]
pub struct FakeApi {
    store: Mutex<Vec<Note>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<Op>>,
    create_error: Mutex<Option<String>>,
    delete_error: Mutex<Option<String>>,
    summarize_reply: Mutex<Option<SummarizeResponse>>,
    upload_reply: Mutex<Option<UploadResponse>>,
}

pub fn note(id: i64, title: &str, summary: Option<&str>) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: format!("Content of {}", title),
        summary: summary.map(str::to_string),
        timestamp: "2025-03-01T10:00:00+00:00".to_string(),
    }
}

impl FakeApi {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            store: Mutex::new(notes),
            ..Default::default()
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn reply_create_error(&self, error: Option<&str>) {
        *self.create_error.lock().unwrap() = error.map(str::to_string);
    }

    pub fn reply_delete_error(&self, error: Option<&str>) {
        *self.delete_error.lock().unwrap() = error.map(str::to_string);
    }

    pub fn reply_summarize(&self, reply: SummarizeResponse) {
        *self.summarize_reply.lock().unwrap() = Some(reply);
    }

    pub fn reply_upload(&self, reply: UploadResponse) {
        *self.upload_reply.lock().unwrap() = Some(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn stored(&self) -> Vec<Note> {
        self.store.lock().unwrap().clone()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn insert(&self, title: &str, content: &str) -> Note {
        let mut store = self.store.lock().unwrap();
        let id = store.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let note = Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            summary: None,
            timestamp: "2025-03-02T08:30:00+00:00".to_string(),
        };
        store.push(note.clone());
        note
    }
}

#[async_trait]
impl NotesApi for FakeApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.record(Call::List, Op::List)?;
        Ok(self.stored())
    }

    async fn create_note(
        &self,
        title: &str,
        content: &str,
    ) -> Result<CreateNoteResponse, ApiError> {
        self.record(
            Call::Create {
                title: title.to_string(),
                content: content.to_string(),
            },
            Op::Create,
        )?;

        if let Some(error) = self.create_error.lock().unwrap().clone() {
            return Ok(CreateNoteResponse::Failed { error });
        }
        Ok(CreateNoteResponse::Created(self.insert(title, content)))
    }

    async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        self.record(Call::Get(id), Op::Get)?;
        self.stored()
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| ApiError::Service(format!("Note {} not found", id)))
    }

    async fn delete_note(&self, id: i64) -> Result<DeleteResponse, ApiError> {
        self.record(Call::Delete(id), Op::Delete)?;

        if let Some(error) = self.delete_error.lock().unwrap().clone() {
            return Ok(DeleteResponse::failed(error));
        }
        self.store.lock().unwrap().retain(|n| n.id != id);
        Ok(DeleteResponse::deleted(format!("Note {} deleted", id)))
    }

    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError> {
        self.record(Call::Summarize(id), Op::Summarize)?;

        if let Some(reply) = self.summarize_reply.lock().unwrap().clone() {
            return Ok(reply);
        }

        let mut store = self.store.lock().unwrap();
        match store.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                let summary = format!("Summary of {}", note.title);
                note.summary = Some(summary.clone());
                Ok(SummarizeResponse {
                    id: Some(id),
                    summary: Some(summary),
                    error: None,
                })
            }
            None => Ok(SummarizeResponse {
                error: Some("Note not found".to_string()),
                ..Default::default()
            }),
        }
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(file.file_name.clone()), Op::Upload)?;

        if let Some(reply) = self.upload_reply.lock().unwrap().clone() {
            return Ok(reply);
        }

        let note = self.insert(&file.file_name, "extracted text");
        let mut extra = serde_json::Map::new();
        extra.insert("id".to_string(), note.id.into());
        extra.insert("title".to_string(), note.title.into());
        Ok(UploadResponse { error: None, extra })
    }
}
