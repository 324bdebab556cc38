//! Editor selection and the temporary-file edit session.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::EditorEnv;
use crate::error::EditorError;

/// Editor used when neither git nor the environment names one.
pub const FALLBACK_EDITOR: &str = "vi";

/// Pick the editor command.
///
/// Order: `core.editor`, `GIT_EDITOR`, `VISUAL`, `EDITOR`, then [`FALLBACK_EDITOR`].
/// Blank entries are skipped.
pub fn resolve_editor(core_editor: Option<&str>, env: &EditorEnv) -> String {
    [
        core_editor,
        env.git_editor.as_deref(),
        env.visual.as_deref(),
        env.editor.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|e| !e.is_empty())
    .unwrap_or(FALLBACK_EDITOR)
    .to_string()
}

/// Lets the user revise a message.
pub trait MessageEditor {
    /// Open `initial` in `editor` and return the saved text.
    fn edit(&self, editor: &str, initial: &str) -> Result<String, EditorError>;
}

/// Runs the user's editor on a temporary file, attached to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalEditor;

impl MessageEditor for ExternalEditor {
    fn edit(&self, editor: &str, initial: &str) -> Result<String, EditorError> {
        // Removed on drop, whichever way this function returns.
        let mut file = tempfile::Builder::new()
            .prefix("COMMIT_EDITMSG-")
            .tempfile()
            .map_err(EditorError::TempFile)?;
        file.write_all(initial.as_bytes())
            .and_then(|_| file.flush())
            .map_err(EditorError::TempFile)?;

        run_editor(editor, &file)?;

        fs::read_to_string(file.path()).map_err(EditorError::ReadBack)
    }
}

/// Launch `editor` through the shell so values like `code --wait` work.
fn run_editor(editor: &str, file: &NamedTempFile) -> Result<(), EditorError> {
    debug!("Launching editor '{}' on {}", editor, file.path().display());

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{editor} \"$@\""))
        .arg(editor)
        .arg(file.path())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| EditorError::SpawnFailed {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::NonZeroExit {
            editor: editor.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}
