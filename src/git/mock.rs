use crate::error::{Result, VersionGateError};
use crate::git::Repository;
use std::collections::{HashMap, HashSet};

/// A commit as seen by the mock: its changed paths and recorded file contents
#[derive(Debug, Clone, Default)]
pub struct MockCommit {
    pub parent: Option<String>,
    pub changed: Vec<String>,
    pub files: HashMap<String, String>,
}

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    local_tags: HashSet<String>,
    remote_tags: HashMap<String, HashSet<String>>,
    commits: HashMap<String, MockCommit>,
    fail_local: bool,
    fail_remote: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a local tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.local_tags.insert(name.into());
    }

    /// Add a tag advertised by `remote`
    pub fn add_remote_tag(&mut self, remote: impl Into<String>, name: impl Into<String>) {
        self.remote_tags
            .entry(remote.into())
            .or_default()
            .insert(name.into());
    }

    /// Record a commit under `id`
    pub fn add_commit(&mut self, id: impl Into<String>, commit: MockCommit) {
        self.commits.insert(id.into(), commit);
    }

    /// Make every local tag query fail
    pub fn fail_local_queries(&mut self) {
        self.fail_local = true;
    }

    /// Make every remote tag query fail
    pub fn fail_remote_queries(&mut self) {
        self.fail_remote = true;
    }

    fn commit(&self, id: &str) -> Result<&MockCommit> {
        self.commits.get(id).ok_or_else(|| {
            VersionGateError::git_command(format!("Cannot resolve commit '{}'", id))
        })
    }
}

impl Repository for MockRepository {
    fn local_tag_exists(&self, tag_name: &str) -> Result<bool> {
        if self.fail_local {
            return Err(VersionGateError::git_command("local tag query failed"));
        }
        Ok(self.local_tags.contains(tag_name))
    }

    fn remote_tag_exists(&self, remote: &str, tag_name: &str) -> Result<bool> {
        if self.fail_remote {
            return Err(VersionGateError::git_command("remote tag query failed"));
        }
        let tags = self.remote_tags.get(remote).ok_or_else(|| {
            VersionGateError::git_command(format!("Cannot find remote '{}'", remote))
        })?;
        Ok(tags.contains(tag_name))
    }

    fn changed_files(&self, commit: &str) -> Result<Vec<String>> {
        let info = self.commit(commit)?;
        if info.parent.is_none() {
            return Err(VersionGateError::git_command(format!(
                "Commit '{}' has no parent",
                commit
            )));
        }
        Ok(info.changed.clone())
    }

    fn file_at_commit(&self, commit: &str, path: &str) -> Result<String> {
        self.commit(commit)?.files.get(path).cloned().ok_or_else(|| {
            VersionGateError::git_command(format!("Path '{}' does not exist in '{}'", path, commit))
        })
    }
}
