//! Summary generation: prompt construction and the remote summarizer.

pub mod anthropic;
pub mod prompt;

pub use anthropic::{AnthropicClient, Summarizer};
pub use prompt::{Prompt, SYSTEM_INSTRUCTION, build_prompt, sanitize_diff};
