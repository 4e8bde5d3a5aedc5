//! Interactive session: read commands, run flows, re-render panels.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::NotesApi;
use crate::commands::{self, Command, HELP};
use crate::state::AppState;
use crate::upload::UploadFile;
use crate::views::{detail_panel, list_panel};

const PROMPT: &str = "notes> ";
const FORM_INCOMPLETE: &str = "Title and content are required.";
const NO_SELECTION: &str = "No note selected. Use 'view <id>' first or pass an id.";

enum Outcome {
    Render,
    Message(String),
    Quit,
}

/// Run the session until `quit` or end of input.
pub async fn run<A, R, W>(state: &mut AppState<A>, input: R, output: &mut W) -> std::io::Result<()>
where
    A: NotesApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render(state, output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output)?;
            break;
        };

        let outcome = match commands::parse(&line) {
            Ok(Some(command)) => dispatch(state, command).await,
            Ok(None) => continue,
            Err(e) => Outcome::Message(e.to_string()),
        };

        match outcome {
            Outcome::Render => render(state, output)?,
            Outcome::Message(msg) => writeln!(output, "{}", msg)?,
            Outcome::Quit => break,
        }
    }

    log::info!("Session ended");
    Ok(())
}

async fn dispatch<A: NotesApi>(state: &mut AppState<A>, command: Command) -> Outcome {
    match command {
        Command::Refresh => {
            state.refresh_notes().await;
            Outcome::Render
        }
        Command::Title(title) => {
            state.set_title(title);
            Outcome::Render
        }
        Command::Content(content) => {
            state.set_content(content);
            Outcome::Render
        }
        Command::Add => submit_form(state).await,
        Command::New { title, content } => {
            state.set_title(title);
            state.set_content(content);
            submit_form(state).await
        }
        Command::View(id) => match state.select_note(id).await {
            Ok(()) => Outcome::Render,
            Err(e) => Outcome::Message(format!("Could not load note {}: {}", id, e)),
        },
        Command::Summarize(id) => {
            let Some(id) = id.or_else(|| state.selected_note().map(|n| n.id)) else {
                return Outcome::Message(NO_SELECTION.to_string());
            };
            match state.summarize_note(id).await {
                Ok(()) => Outcome::Render,
                Err(e) => Outcome::Message(format!("Summarize failed: {}", e)),
            }
        }
        Command::Delete(id) => {
            let Some(id) = id.or_else(|| state.selected_note().map(|n| n.id)) else {
                return Outcome::Message(NO_SELECTION.to_string());
            };
            state.delete_note(id).await;
            Outcome::Render
        }
        Command::Upload(path) => {
            state.upload_file(path.map(UploadFile::from_path)).await;
            Outcome::Render
        }
        Command::Help => Outcome::Message(HELP.trim_end().to_string()),
        Command::Quit => Outcome::Quit,
    }
}

/// The form's fields are required; an incomplete form is never sent.
async fn submit_form<A: NotesApi>(state: &mut AppState<A>) -> Outcome {
    if !state.form().is_complete() {
        return Outcome::Message(FORM_INCOMPLETE.to_string());
    }
    state.create_note().await;
    Outcome::Render
}

fn render<A: NotesApi, W: Write>(state: &AppState<A>, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", list_panel::render(state))?;
    writeln!(output)?;
    writeln!(output, "== Note ==")?;
    write!(output, "{}", detail_panel::render(state))?;
    writeln!(output)?;
    Ok(())
}
