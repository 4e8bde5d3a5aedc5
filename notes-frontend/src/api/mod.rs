//! Notes service API: the operations the state controller depends on and
//! the HTTP client that implements them.

mod client;
mod error;

pub use client::NotesClient;
pub use error::ApiError;

use async_trait::async_trait;
use notes_service_types::{
    CreateNoteResponse, DeleteResponse, Note, SummarizeResponse, UploadResponse,
};

use crate::upload::UploadFile;

/// One request per call, no retries, no caching.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// All notes, in service order
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;

    async fn create_note(&self, title: &str, content: &str)
    -> Result<CreateNoteResponse, ApiError>;

    /// A single note including its full content
    async fn get_note(&self, id: i64) -> Result<Note, ApiError>;

    async fn delete_note(&self, id: i64) -> Result<DeleteResponse, ApiError>;

    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError>;

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError>;
}
