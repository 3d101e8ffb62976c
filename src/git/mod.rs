//! Git operations abstraction layer
//!
//! The release checks only need four read-only queries against a repository,
//! captured by the [Repository] trait. Implementations:
//!
//! - [cli::GitCli]: shells out to the `git` executable (the default backend)
//! - [repository::Git2Repository]: the same queries through the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use version_gate::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! if repo.local_tag_exists("v1.0.0")? {
//!     println!("already released");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Read-only repository queries used by the release checks
///
/// ## Error Handling
///
/// Every query reports failures as [crate::error::VersionGateError]. Callers in
/// [crate::release] decide how failures collapse into a result.
pub trait Repository {
    /// Whether a local tag with exactly this name exists
    fn local_tag_exists(&self, tag_name: &str) -> Result<bool>;

    /// Whether `remote` advertises `refs/tags/<tag_name>`
    ///
    /// Contacts the remote without changing local state. Errors when the
    /// remote is unknown or unreachable.
    fn remote_tag_exists(&self, remote: &str, tag_name: &str) -> Result<bool>;

    /// Paths that differ between `commit^` and `commit`
    ///
    /// Errors when the commit cannot be resolved or has no parent.
    fn changed_files(&self, commit: &str) -> Result<Vec<String>>;

    /// Content of `path` as recorded in `commit`
    fn file_at_commit(&self, commit: &str, path: &str) -> Result<String>;
}

/// Which implementation answers repository queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    Cli,
    /// Use libgit2 in-process
    Libgit2,
}

/// Opens the configured backend for the repository at `path`
pub fn open(backend: Backend, program: &str, path: &Path) -> Result<Box<dyn Repository>> {
    match backend {
        Backend::Cli => Ok(Box::new(GitCli::with_program(program, path))),
        Backend::Libgit2 => Ok(Box::new(Git2Repository::open(path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: Backend,
        }
        let w: Wrapper = toml::from_str("backend = \"libgit2\"").unwrap();
        assert_eq!(w.backend, Backend::Libgit2);
        let w: Wrapper = toml::from_str("backend = \"cli\"").unwrap();
        assert_eq!(w.backend, Backend::Cli);
    }

    #[test]
    fn test_open_cli_backend_is_lazy() {
        let dir = TempDir::new().unwrap();
        assert!(open(Backend::Cli, "git", dir.path()).is_ok());
    }

    #[test]
    fn test_open_libgit2_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("missing");
        assert!(open(Backend::Libgit2, "git", &nested).is_err());
    }
}
