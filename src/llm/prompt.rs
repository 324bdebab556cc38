//! Prompt construction for commit message summaries.

use crate::git::StagedChanges;

/// Maximum number of characters of diff text sent to the model.
pub const MAX_DIFF_CHARS: usize = 60_000;

/// Fixed instruction describing the commit message style.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a Git Commit Message Assistant, trained to generate clear, concise, and informative commit messages. Analyze the provided code changes and context, then create a commit message that follows these guidelines.

<commit_structure>
1. Subject line:
  - Start with an imperative verb (e.g., Add, Fix, Update)
  - Limit to 50 characters
  - Capitalize only the first letter
  - No period at the end

2. Body (if needed):
  - Separate from subject with a blank line
  - Wrap at 72 characters per line
  - Explain the what and why of changes, not how
  - Use bullet points for multiple items
</commit_structure>

<additional_instructions>
- Be specific and descriptive about the changes
- Reference relevant issue numbers or pull requests
- Use the imperative mood consistently
- Avoid redundant or unnecessary information
- If multiple significant changes, use a bulleted list in the body
</additional_instructions>

Your response should only contain the commit message, without any additional explanation or commentary."#;

/// A request to the summarizer: a system instruction plus one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the commit message prompt from the staged changes.
pub fn build_prompt(changes: &StagedChanges) -> Prompt {
    let (diff, truncated) = sanitize_diff(&changes.diff, MAX_DIFF_CHARS);

    let mut user = format!(
        "Changed files:\n{}\n\nDiff:\n{}",
        changes.files.join("\n"),
        diff
    );
    if truncated {
        user.push_str("\n\nNote: The diff was truncated due to size. Focus on the visible changes.");
    }

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

/// Clean diff text for inclusion in a prompt.
///
/// Removes ANSI escape sequences and control characters other than newlines
/// and tabs, then truncates to `max_chars` characters. Returns the cleaned
/// text and whether it was truncated.
pub fn sanitize_diff(text: &str, max_chars: usize) -> (String, bool) {
    let cleaned = remove_control_chars(&remove_ansi_escapes(text));

    match cleaned.char_indices().nth(max_chars) {
        Some((end, _)) => (cleaned[..end].to_string(), true),
        None => (cleaned, false),
    }
}

/// Strip CSI escape sequences such as `\x1b[31m`.
fn remove_ansi_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..~
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
