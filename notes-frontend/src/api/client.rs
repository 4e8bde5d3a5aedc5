//! Typed HTTP client for the notes service API.

use async_trait::async_trait;
use notes_service_types::{
    CreateNoteRequest, CreateNoteResponse, DeleteResponse, GetNoteResponse, Note, NoteListBody,
    SummarizeResponse, UploadResponse,
};
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::{ApiError, NotesApi};
use crate::config::Config;
use crate::upload::UploadFile;

pub struct NotesClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesClient {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = crate::http::build_client(config)?;
        Ok(Self::new(&config.api_base, client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Parse a response body as JSON regardless of its status code.
///
/// The service reports most failures as `{"error": ...}` bodies, so the
/// status is left for the caller to decide on.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Decode(format!("HTTP {} body: {}", status, e)))
}

#[async_trait]
impl NotesApi for NotesClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        log::debug!("GET {}", self.base_url);
        let resp = self.client.get(&self.base_url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body: NoteListBody = decode(resp).await?;
        Ok(body.into_notes())
    }

    async fn create_note(
        &self,
        title: &str,
        content: &str,
    ) -> Result<CreateNoteResponse, ApiError> {
        log::debug!("POST {}", self.base_url);
        let body = CreateNoteRequest {
            title: title.to_string(),
            content: content.to_string(),
        };

        let resp = self.client.post(&self.base_url).json(&body).send().await?;
        decode(resp).await
    }

    async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        let url = self.note_url(id);
        log::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;

        let body: GetNoteResponse = decode(resp).await?;
        match body {
            GetNoteResponse::Found(note) => Ok(note),
            GetNoteResponse::Failed { error } => Err(ApiError::Service(error)),
        }
    }

    async fn delete_note(&self, id: i64) -> Result<DeleteResponse, ApiError> {
        let url = self.note_url(id);
        log::debug!("DELETE {}", url);
        let resp = self.client.delete(&url).send().await?;
        decode(resp).await
    }

    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError> {
        let url = format!("{}/summarize", self.note_url(id));
        log::debug!("POST {}", url);
        let resp = self.client.post(&url).send().await?;
        decode(resp).await
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|source| ApiError::Io {
                path: file.path().display().to_string(),
                source,
            })?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.base_url);
        log::debug!("POST {} ({})", url, file.file_name);
        let resp = self.client.post(&url).multipart(form).send().await?;
        decode(resp).await
    }
}
