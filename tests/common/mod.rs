//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{Repository, Signature};
use serde_json::json;

/// A throwaway git repository for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository with an identity configured for `git commit`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable signing");
        }

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is in the index.
    pub fn commit_index(&self, message: &str) {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit");
    }

    /// Message of the HEAD commit, if any.
    pub fn head_message(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        let commit = head.peel_to_commit().ok()?;
        commit.message().map(String::from)
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git rev-list");
        if !output.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0)
    }
}

/// Shell editor snippet that copies the file it was given to `<record>.seen`,
/// writes the file's path to `<record>.path`, then runs `action`.
pub fn recording_editor(record: &Path, action: &str) -> String {
    format!(
        "f() {{ cp \"$1\" '{seen}'; echo \"$1\" > '{path}'; {action}; }}; f",
        seen = record.with_extension("seen").display(),
        path = record.with_extension("path").display(),
    )
}

/// Contents the recording editor saw before editing.
pub fn seen_by_editor(record: &Path) -> String {
    std::fs::read_to_string(record.with_extension("seen")).expect("Editor was not invoked")
}

/// Path of the temporary file the recording editor was given.
pub fn edited_path(record: &Path) -> PathBuf {
    let raw = std::fs::read_to_string(record.with_extension("path")).expect("Editor was not invoked");
    PathBuf::from(raw.trim())
}

/// A Messages API success body whose first content block is `text`.
pub fn messages_response(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-sonnet-20241022",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 2}
    })
}
