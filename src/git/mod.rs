//! Repository inspection and commit creation through the `git` CLI.

pub mod cli;

pub use cli::GitCli;

use crate::error::GitError;

/// Files and diff currently staged in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedChanges {
    pub files: Vec<String>,
    pub diff: String,
}

impl StagedChanges {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Version-control operations the commit workflow depends on.
///
/// This abstraction allows mocking git in workflow tests.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// Staged file paths, empty entries removed.
    fn staged_files(&self) -> Result<Vec<String>, GitError>;

    /// Full staged diff as plain text.
    fn staged_diff(&self) -> Result<String, GitError>;

    /// The `core.editor` setting, `None` when unset.
    fn core_editor(&self) -> Result<Option<String>, GitError>;

    /// Create a commit with exactly `message`.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// Read the staged file list and diff. Either both succeed or the first error is returned.
pub fn inspect_staged<V: Vcs + ?Sized>(vcs: &V) -> Result<StagedChanges, GitError> {
    let files = vcs.staged_files()?;
    let diff = vcs.staged_diff()?;
    Ok(StagedChanges { files, diff })
}
