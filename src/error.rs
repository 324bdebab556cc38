//! Error types for git-commit-ai modules using thiserror.

use thiserror::Error;

/// Errors from git command-line invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },
}

/// Errors from startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CLAUDE_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors from the Anthropic Messages API.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Messages error, status: {status}, type: {error_type}, message: {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("Messages request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Messages response could not be decoded: {0}")]
    InvalidResponse(String),

    #[error("Messages response contained no text content")]
    EmptyResponse,
}

impl LlmError {
    /// Short machine-friendly kind, logged alongside the message.
    pub fn kind(&self) -> &str {
        match self {
            LlmError::Api { error_type, .. } => error_type,
            LlmError::Request(_) => "request_error",
            LlmError::InvalidResponse(_) => "invalid_response",
            LlmError::EmptyResponse => "empty_response",
        }
    }

    /// The bare error message, without the kind or status.
    pub fn message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            LlmError::Request(e) => e.to_string(),
            LlmError::InvalidResponse(detail) => detail.clone(),
            LlmError::EmptyResponse => "no text content".to_string(),
        }
    }
}

/// Errors from the editor session.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to prepare temporary message file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to launch editor '{editor}': {source}")]
    SpawnFailed {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with {}", code.map_or("a signal".to_string(), |c| format!("code {c}")))]
    NonZeroExit { editor: String, code: Option<i32> },

    #[error("Failed to read edited message: {0}")]
    ReadBack(#[source] std::io::Error),
}

/// Errors that abort the commit workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No staged changes. Stage files with `git add` first.")]
    NothingStaged,

    #[error("Aborting commit due to empty commit message")]
    EmptyMessage,

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_kind_uses_api_type() {
        let err = LlmError::Api {
            status: 401,
            error_type: "authentication_error".to_string(),
            message: "invalid x-api-key".to_string(),
        };
        assert_eq!(err.kind(), "authentication_error");
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[test]
    fn test_llm_error_message_is_bare() {
        let err = LlmError::Api {
            status: 401,
            error_type: "authentication_error".to_string(),
            message: "invalid x-api-key".to_string(),
        };
        assert_eq!(err.message(), "invalid x-api-key");

        assert_eq!(LlmError::EmptyResponse.message(), "no text content");
        let err = LlmError::InvalidResponse("expected value at line 1".to_string());
        assert_eq!(err.message(), "expected value at line 1");
    }

    #[test]
    fn test_editor_exit_message() {
        let err = EditorError::NonZeroExit {
            editor: "vim".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "Editor 'vim' exited with code 2");

        let err = EditorError::NonZeroExit {
            editor: "vim".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "Editor 'vim' exited with a signal");
    }
}
