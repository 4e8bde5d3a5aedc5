//! Line command parsing for the interactive session.

use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  list | refresh              reload all notes
  title <text>                set the new note's title
  content <text>              set the new note's content
  add                         create a note from title and content
  new <title> | <content>     set both fields and create the note
  view <id>                   show a note in the detail panel
  summarize [id]              summarize a note (default: the one shown)
  delete [id]                 delete a note (default: the one shown)
  upload [path]               upload a .txt or .pdf document
  help                        show this help
  quit | exit                 end the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Title(String),
    Content(String),
    Add,
    New { title: String, content: String },
    View(i64),
    Summarize(Option<i64>),
    Delete(Option<i64>),
    /// `None` when no file was given
    Upload(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("'{0}' is not a valid note id")]
    InvalidId(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "list" | "refresh" | "ls" => Command::Refresh,
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "add" => Command::Add,
        "new" => {
            let (title, content) = rest
                .split_once('|')
                .ok_or(CommandError::Usage("new <title> | <content>"))?;
            Command::New {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            }
        }
        "view" | "show" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("view <id>"));
            }
            Command::View(parse_id(rest)?)
        }
        "summarize" => Command::Summarize(optional_id(rest)?),
        "delete" | "rm" => Command::Delete(optional_id(rest)?),
        "upload" => Command::Upload(optional_path(rest)),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<i64, CommandError> {
    raw.parse::<i64>()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

fn optional_id(raw: &str) -> Result<Option<i64>, CommandError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        parse_id(raw).map(Some)
    }
}

fn optional_path(raw: &str) -> Option<PathBuf> {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    (!unquoted.is_empty()).then(|| PathBuf::from(unquoted))
}
