use crate::error::{Result, VersionGateError};
use git2::{Cred, CredentialType, Direction, ErrorCode, RemoteCallbacks, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    fn find_commit(&self, commit: &str) -> Result<git2::Commit<'_>> {
        self.repo
            .revparse_single(commit)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                VersionGateError::git_command(format!("Cannot resolve commit '{}': {}", commit, e))
            })
    }
}

/// Credentials for remote listing: SSH agent, then well-known keys, then defaults.
fn credential_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }

            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }
        }

        Cred::default()
    });
    callbacks
}

impl super::Repository for Git2Repository {
    fn local_tag_exists(&self, tag_name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == ErrorCode::InvalidSpec => Ok(false),
            Err(e) => Err(VersionGateError::tag(format!(
                "Cannot look up tag '{}': {}",
                tag_name, e
            ))),
        }
    }

    fn remote_tag_exists(&self, remote: &str, tag_name: &str) -> Result<bool> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            VersionGateError::git_command(format!("Cannot find remote '{}': {}", remote, e))
        })?;

        let connection = remote_handle
            .connect_auth(Direction::Fetch, Some(credential_callbacks()), None)
            .map_err(|e| {
                VersionGateError::git_command(format!(
                    "Cannot connect to remote '{}': {}",
                    remote, e
                ))
            })?;

        let reference = format!("refs/tags/{}", tag_name);
        let peeled = format!("{}^{{}}", reference);
        let heads = connection.list()?;

        Ok(heads
            .iter()
            .any(|head| head.name() == reference || head.name() == peeled))
    }

    fn changed_files(&self, commit: &str) -> Result<Vec<String>> {
        let target = self.find_commit(commit)?;
        let parent = target.parent(0).map_err(|e| {
            VersionGateError::git_command(format!("Commit '{}' has no parent: {}", commit, e))
        })?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&parent.tree()?), Some(&target.tree()?), None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            for file in [delta.old_file(), delta.new_file()] {
                if let Some(path) = file.path().and_then(|p| p.to_str()) {
                    if !files.iter().any(|f| f == path) {
                        files.push(path.to_string());
                    }
                }
            }
        }

        Ok(files)
    }

    fn file_at_commit(&self, commit: &str, path: &str) -> Result<String> {
        let target = self.find_commit(commit)?;
        let entry = target.tree()?.get_path(Path::new(path)).map_err(|e| {
            VersionGateError::git_command(format!(
                "Path '{}' does not exist in '{}': {}",
                path, commit, e
            ))
        })?;

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}
