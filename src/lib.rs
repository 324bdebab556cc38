//! git-commit-ai - drafts a commit message for the staged changes with Claude.
//!
//! # Overview
//!
//! git-commit-ai reads the staged file list and diff through the `git` CLI,
//! asks the Anthropic Messages API for a commit message, opens the draft in
//! the user's editor, and commits it once the user confirms.

pub mod config;
pub mod confirm;
pub mod editor;
pub mod error;
pub mod git;
pub mod llm;
pub mod workflow;

// Re-export commonly used types
pub use config::{Config, EditorEnv};
pub use error::{ConfigError, EditorError, GitError, LlmError, WorkflowError};
pub use git::{GitCli, StagedChanges, Vcs};
pub use llm::{AnthropicClient, Prompt, Summarizer};
pub use workflow::{Outcome, Workflow, WorkflowOptions};
