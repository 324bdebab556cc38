//! The review/commit workflow.
//!
//! Runs `Inspect → Summarize → Edit → Confirm → Commit` once. Every step is
//! terminal on failure except a declined confirmation, which ends the run
//! successfully without committing.

use tracing::{debug, warn};

use crate::config::EditorEnv;
use crate::confirm::Confirmer;
use crate::editor::{MessageEditor, resolve_editor};
use crate::error::WorkflowError;
use crate::git::{Vcs, inspect_staged};
use crate::llm::{Summarizer, build_prompt};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed { message: String },
    Declined,
    DryRun { message: String },
}

/// Settings that shape a run.
#[derive(Debug, Clone, Default)]
pub struct WorkflowOptions {
    pub editor_env: EditorEnv,
    /// Stop after editing and print the message instead of committing.
    pub dry_run: bool,
}

/// The collaborators for one run of the workflow.
pub struct Workflow<V, S, E, C> {
    vcs: V,
    summarizer: S,
    editor: E,
    confirmer: C,
    options: WorkflowOptions,
}

impl<V, S, E, C> Workflow<V, S, E, C>
where
    V: Vcs,
    S: Summarizer,
    E: MessageEditor,
    C: Confirmer,
{
    pub fn new(vcs: V, summarizer: S, editor: E, confirmer: C, options: WorkflowOptions) -> Self {
        Self {
            vcs,
            summarizer,
            editor,
            confirmer,
            options,
        }
    }

    pub async fn run(&mut self) -> Result<Outcome, WorkflowError> {
        // Inspect
        let changes = inspect_staged(&self.vcs)?;
        if changes.is_empty() {
            return Err(WorkflowError::NothingStaged);
        }

        println!("Staged files:");
        for file in &changes.files {
            println!("- {}", file);
        }

        // Summarize
        let prompt = build_prompt(&changes);
        debug!(
            "Prompt: {} files, {} chars",
            changes.files.len(),
            prompt.user.len()
        );

        println!("Generating commit message with Claude...");
        let candidate = match self.summarizer.summarize(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                // The empty candidate still goes to the editor.
                warn!("Messages error, type: {}, message: {}", e.kind(), e.message());
                String::new()
            }
        };

        // Edit
        let core_editor = self.vcs.core_editor()?;
        let editor = resolve_editor(core_editor.as_deref(), &self.options.editor_env);
        let message = self.editor.edit(&editor, &candidate)?;

        println!();
        println!("Proposed commit message:");
        println!("{}", message);
        println!();

        if message.trim().is_empty() {
            return Err(WorkflowError::EmptyMessage);
        }

        if self.options.dry_run {
            return Ok(Outcome::DryRun { message });
        }

        // Confirm
        let confirmed = self.confirmer.confirm().map_err(WorkflowError::Prompt)?;
        if !confirmed {
            println!("Commit cancelled.");
            return Ok(Outcome::Declined);
        }

        // Commit
        self.vcs.commit(&message)?;
        Ok(Outcome::Committed { message })
    }
}
