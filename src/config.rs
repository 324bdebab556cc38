//! Startup configuration.
//!
//! All environment lookups happen once, in [`Config::from_env`]. The resulting
//! value is passed to the collaborators that need it.

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the Anthropic API key.
pub const API_KEY_ENV_VAR: &str = "CLAUDE_API_KEY";

/// Environment variable to override the Messages API base URL.
pub const API_URL_ENV_VAR: &str = "CLAUDE_API_URL";

/// Default Anthropic API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";

/// Model used when none is given on the command line.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Output token cap for the summary request.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Snapshot of the editor-related environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorEnv {
    pub git_editor: Option<String>,
    pub visual: Option<String>,
    pub editor: Option<String>,
}

impl EditorEnv {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            git_editor: lookup("GIT_EDITOR"),
            visual: lookup("VISUAL"),
            editor: lookup("EDITOR"),
        }
    }
}

/// Configuration built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub editor_env: EditorEnv,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. A missing `CLAUDE_API_KEY` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey)?;
        let api_base = non_blank(API_URL_ENV_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            editor_env: EditorEnv::from_lookup(&non_blank),
        })
    }
}
