//! Release gate checks built on top of [crate::git::Repository].
//!
//! Both checks collapse query failures into a negative result after logging
//! them. For [tag_exists] this is fail-open: if git cannot answer, the tag is
//! reported as absent and a release may proceed.

use crate::domain::{is_valid_version, TagPattern, Version};
use crate::git::Repository;

/// How release tags are named and where they are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSettings {
    pub pattern: TagPattern,
    pub remote: String,
    pub check_remote: bool,
}

impl Default for TagSettings {
    fn default() -> Self {
        TagSettings {
            pattern: TagPattern::default(),
            remote: "origin".to_string(),
            check_remote: true,
        }
    }
}

/// Checks whether the release tag for `version` exists locally or on the remote.
///
/// Local tags are queried first and short-circuit. Query errors are logged
/// and treated as "not found".
pub fn tag_exists<R: Repository + ?Sized>(repo: &R, version: &str, settings: &TagSettings) -> bool {
    let tag_name = settings.pattern.format(version);

    match repo.local_tag_exists(&tag_name) {
        Ok(true) => {
            tracing::debug!(tag = %tag_name, "tag found locally");
            return true;
        }
        Ok(false) => {}
        Err(e) => tracing::warn!(tag = %tag_name, "Error checking local tags: {}", e),
    }

    if !settings.check_remote {
        return false;
    }

    match repo.remote_tag_exists(&settings.remote, &tag_name) {
        Ok(found) => {
            tracing::debug!(tag = %tag_name, remote = %settings.remote, found, "remote tag query");
            found
        }
        Err(e) => {
            tracing::warn!(
                tag = %tag_name,
                remote = %settings.remote,
                "Error checking git tag existence, treating as absent: {}",
                e
            );
            false
        }
    }
}

/// Strips leading `./` so a configured path matches the root-relative paths git reports.
pub fn repo_relative(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}

/// Returns the new version if `version_file` changed in `commit` and holds a
/// valid version there.
///
/// `version_file` is relative to the repository root, not the working directory.
pub fn version_change_in_commit<R: Repository + ?Sized>(
    repo: &R,
    commit: &str,
    version_file: &str,
) -> Option<Version> {
    let version_file = repo_relative(version_file);
    let changed = match repo.changed_files(commit) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(commit, "Error checking git commit changes: {}", e);
            return None;
        }
    };

    if !changed.iter().any(|path| path == version_file) {
        tracing::debug!(commit, version_file, "version file unchanged");
        return None;
    }

    let content = match repo.file_at_commit(commit, version_file) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(commit, version_file, "Error reading version file: {}", e);
            return None;
        }
    };

    let content = content.trim();
    if !is_valid_version(content) {
        tracing::warn!("Invalid version format in commit {}: {}", commit, content);
        return None;
    }

    Version::parse(content).ok()
}
