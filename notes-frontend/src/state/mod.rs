//! Session state and the flows that mutate it.
//!
//! `AppState` is the single source of truth for what the panels render.
//! Every mutation is followed by a full list re-fetch; nothing is patched
//! locally. Each operation class that can fail visibly owns an error slot
//! which is cleared when a new attempt of that class starts.

mod form;

pub use form::NoteForm;

use notes_service_types::{CreateNoteResponse, Note};

use crate::api::{ApiError, NotesApi};
use crate::upload::{self, UploadFile};

pub const DELETE_FAILED: &str = "Delete failed.";
pub const UPLOAD_FAILED: &str = "Upload failed.";
pub const CREATE_FAILED: &str = "Create failed.";
pub const LIST_FAILED: &str = "Failed to load notes.";

pub struct AppState<A: NotesApi> {
    api: A,
    notes: Vec<Note>,
    selected_note: Option<Note>,
    /// Summary display buffer; only reconciled with `selected_note` on select
    summary: String,
    loading: bool,
    form: NoteForm,
    upload_error: Option<String>,
    delete_error: Option<String>,
    create_error: Option<String>,
    list_error: Option<String>,
}

impl<A: NotesApi> AppState<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            selected_note: None,
            summary: String::new(),
            loading: false,
            form: NoteForm::default(),
            upload_error: None,
            delete_error: None,
            create_error: None,
            list_error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_note.as_ref()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    pub fn create_error(&self) -> Option<&str> {
        self.create_error.as_deref()
    }

    pub fn list_error(&self) -> Option<&str> {
        self.list_error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
    }

    /// Replace the note list with the service's current list.
    pub async fn refresh_notes(&mut self) {
        self.loading = true;
        self.list_error = None;

        match self.api.list_notes().await {
            Ok(notes) => {
                log::debug!("Loaded {} notes", notes.len());
                self.notes = notes;
            }
            Err(e) => {
                log::warn!("Failed to load notes: {}", e);
                self.notes = Vec::new();
                self.list_error = Some(LIST_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Submit the form. The form is cleared and the list re-fetched whether
    /// or not the service accepted the note.
    pub async fn create_note(&mut self) {
        self.create_error = None;

        match self.api.create_note(&self.form.title, &self.form.content).await {
            Ok(CreateNoteResponse::Created(note)) => {
                log::info!("Created note {} ({})", note.id, note.title);
            }
            Ok(CreateNoteResponse::Failed { error }) => {
                log::warn!("Service rejected note: {}", error);
                self.create_error = Some(error);
            }
            Err(e) => {
                log::warn!("Create request failed: {}", e);
                self.create_error = Some(CREATE_FAILED.to_string());
            }
        }

        self.form.clear();
        self.refresh_notes().await;
    }

    /// Fetch a note in full and make it the selected note. On failure the
    /// previous selection stays in place.
    pub async fn select_note(&mut self, id: i64) -> Result<(), ApiError> {
        let note = self.api.get_note(id).await.inspect_err(|e| {
            log::warn!("Failed to load note {}: {}", id, e);
        })?;

        self.summary = note.summary.clone().unwrap_or_default();
        self.selected_note = Some(note);
        Ok(())
    }

    /// Ask the service for a summary and show it. `selected_note` is left
    /// as fetched; the next select reconciles it.
    pub async fn summarize_note(&mut self, id: i64) -> Result<(), ApiError> {
        let resp = self.api.summarize_note(id).await.inspect_err(|e| {
            log::warn!("Summarize request for note {} failed: {}", id, e);
        })?;

        if let Some(error) = &resp.error {
            log::warn!("Service could not summarize note {}: {}", id, error);
        }

        self.summary = resp.summary.unwrap_or_default();
        self.refresh_notes().await;
        Ok(())
    }

    pub async fn delete_note(&mut self, id: i64) {
        self.delete_error = None;

        match self.api.delete_note(id).await {
            Ok(resp) => match resp.error {
                Some(error) => {
                    log::warn!("Service refused to delete note {}: {}", id, error);
                    self.delete_error = Some(error);
                }
                None => {
                    log::info!("Deleted note {}", id);
                    self.selected_note = None;
                    self.refresh_notes().await;
                }
            },
            Err(e) => {
                log::warn!("Delete request for note {} failed: {}", id, e);
                self.delete_error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Validate and send a document. `None` means no file was chosen.
    pub async fn upload_file(&mut self, file: Option<UploadFile>) {
        self.upload_error = None;

        let file = match upload::validate(file.as_ref()) {
            Ok(file) => file,
            Err(rejection) => {
                self.upload_error = Some(rejection.to_string());
                return;
            }
        };

        match self.api.upload_file(file).await {
            Ok(resp) => match resp.error_message() {
                Some(error) => {
                    log::warn!("Service rejected upload of {}: {}", file.file_name, error);
                    self.upload_error = Some(error.to_string());
                }
                None => {
                    log::info!("Uploaded {}", file.file_name);
                    self.upload_error = None;
                    self.refresh_notes().await;
                }
            },
            Err(e) => {
                log::warn!("Upload of {} failed: {}", file.file_name, e);
                self.upload_error = Some(UPLOAD_FAILED.to_string());
            }
        }
    }
}
