//! Left panel: the add-note form, the upload status, and the note list.

use crate::api::NotesApi;
use crate::state::{AppState, DELETE_FAILED};

use super::format_timestamp;

pub fn render<A: NotesApi>(state: &AppState<A>) -> String {
    let mut out = String::new();

    let form = state.form();
    out.push_str("-- New note --\n");
    out.push_str(&format!("  Title:   {}\n", field_or_placeholder(&form.title)));
    out.push_str(&format!("  Content: {}\n", field_or_placeholder(&form.content)));
    if let Some(err) = state.create_error() {
        out.push_str(&format!("  ! {}\n", err));
    }
    if let Some(err) = state.upload_error() {
        out.push_str(&format!("  ! Upload: {}\n", err));
    }

    out.push_str("\n== All Notes ==\n");
    if let Some(err) = state.delete_error() {
        let err = if err.is_empty() { DELETE_FAILED } else { err };
        out.push_str(&format!("  ! {}\n", err));
    }
    if let Some(err) = state.list_error() {
        out.push_str(&format!("  ! {}\n", err));
    }

    if state.is_loading() {
        out.push_str("  Loading...\n");
        return out;
    }

    if state.notes().is_empty() {
        out.push_str("  No notes yet.\n");
        return out;
    }

    let selected = state.selected_note().map(|n| n.id);
    for note in state.notes() {
        let marker = if Some(note.id) == selected { '*' } else { ' ' };
        let when = format_timestamp(&note.timestamp);
        if when.is_empty() {
            out.push_str(&format!(" {} [{}] {}\n", marker, note.id, note.title));
        } else {
            out.push_str(&format!(" {} [{}] {} ({})\n", marker, note.id, note.title, when));
        }
    }

    out
}

fn field_or_placeholder(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
