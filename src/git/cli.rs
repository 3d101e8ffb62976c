use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, VersionGateError};
use crate::git::Repository;

/// Repository queries answered by running the `git` executable
///
/// Each query is one blocking subprocess with no timeout.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Run `git` from `PATH` inside `workdir`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self::with_program("git", workdir)
    }

    /// Run a specific git executable inside `workdir`
    pub fn with_program(program: impl Into<String>, workdir: impl AsRef<Path>) -> Self {
        GitCli {
            program: program.into(),
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Runs git with `args` and returns its stdout on exit status 0
    fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(command = %command_line, cwd = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                VersionGateError::git_command(format!("Failed to execute {}: {}", command_line, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionGateError::git_command(format!(
                "{} exited with code {}: {}",
                command_line,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Refuses revision, tag and remote values that git would parse as options.
fn reject_option_like(kind: &str, value: &str) -> Result<()> {
    if value.starts_with('-') {
        return Err(VersionGateError::git_command(format!(
            "Invalid {} '{}': must not start with '-'",
            kind, value
        )));
    }
    Ok(())
}

impl Repository for GitCli {
    fn local_tag_exists(&self, tag_name: &str) -> Result<bool> {
        reject_option_like("tag", tag_name)?;
        let stdout = self.run(&["tag", "-l", tag_name])?;
        Ok(stdout.lines().any(|line| line.trim() == tag_name))
    }

    fn remote_tag_exists(&self, remote: &str, tag_name: &str) -> Result<bool> {
        reject_option_like("remote", remote)?;
        reject_option_like("tag", tag_name)?;
        let reference = format!("refs/tags/{}", tag_name);
        let stdout = self.run(&["ls-remote", "--tags", remote, &reference])?;
        Ok(ls_remote_has_ref(&stdout, &reference))
    }

    fn changed_files(&self, commit: &str) -> Result<Vec<String>> {
        reject_option_like("commit", commit)?;
        let parent = format!("{}^", commit);
        let stdout = self.run(&["diff", "--name-only", &parent, commit])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn file_at_commit(&self, commit: &str, path: &str) -> Result<String> {
        reject_option_like("commit", commit)?;
        self.run(&["show", &format!("{}:{}", commit, path)])
    }
}

/// `ls-remote` prints `<oid>\t<ref>` lines; annotated tags add a `^{}` entry.
fn ls_remote_has_ref(output: &str, reference: &str) -> bool {
    let peeled = format!("{}^{{}}", reference);
    output
        .lines()
        .filter_map(|line| line.split('\t').nth(1))
        .map(str::trim)
        .any(|name| name == reference || name == peeled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ls_remote_parsing() {
        let output = "1111111111111111111111111111111111111111\trefs/tags/v1.0.0\n";
        assert!(ls_remote_has_ref(output, "refs/tags/v1.0.0"));
        assert!(!ls_remote_has_ref(output, "refs/tags/v1.0.1"));
    }

    #[test]
    fn test_ls_remote_peeled_entry() {
        let output = "2222222222222222222222222222222222222222\trefs/tags/v2.0.0^{}\n";
        assert!(ls_remote_has_ref(output, "refs/tags/v2.0.0"));
    }

    #[test]
    fn test_ls_remote_ignores_suffix_matches() {
        let output = "3333333333333333333333333333333333333333\trefs/tags/nested/v1.0.0\n";
        assert!(!ls_remote_has_ref(output, "refs/tags/v1.0.0"));
        assert!(!ls_remote_has_ref("", "refs/tags/v1.0.0"));
    }

    #[test]
    fn test_option_like_values_never_reach_git() {
        let dir = TempDir::new().unwrap();
        // A missing program proves no subprocess was attempted.
        let git = GitCli::with_program("definitely-not-a-git-binary", dir.path());

        let err = git.changed_files("--output=x").unwrap_err();
        assert!(err.to_string().contains("must not start with '-'"));
        assert!(git.file_at_commit("--output=x", "VERSION").is_err());
        assert!(git
            .local_tag_exists("--sort=x")
            .unwrap_err()
            .to_string()
            .contains("Invalid tag"));
        assert!(git
            .remote_tag_exists("--upload-pack=x", "v1.0.0")
            .unwrap_err()
            .to_string()
            .contains("Invalid remote"));
    }

    #[test]
    fn test_missing_program_is_command_error() {
        let dir = TempDir::new().unwrap();
        let git = GitCli::with_program("definitely-not-a-git-binary", dir.path());
        let err = git.local_tag_exists("v1.0.0").unwrap_err();
        assert!(matches!(err, VersionGateError::GitCommand(_)));
        assert!(err.to_string().contains("Failed to execute"));
    }
}
