//! Right panel: the selected note and its summary.

use crate::api::NotesApi;
use crate::state::AppState;

use super::format_timestamp;

pub fn render<A: NotesApi>(state: &AppState<A>) -> String {
    let Some(note) = state.selected_note() else {
        return "  Select a note to view its details.\n".to_string();
    };

    let mut out = format!("# {}\n", note.title);
    let when = format_timestamp(&note.timestamp);
    if !when.is_empty() {
        out.push_str(&format!("  {}\n", when));
    }
    out.push('\n');
    for line in note.content.lines() {
        out.push_str(&format!("  {}\n", line));
    }

    if !state.summary().is_empty() {
        out.push_str("\nSummary:\n");
        for line in state.summary().lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}
