use std::cmp::Ordering;
use std::process::ExitCode;

use crate::cli::Command;
use crate::config::Config;
use crate::domain::{compare_versions, is_valid_version};
use crate::error::Result;
use crate::git::Repository;
use crate::release;
use crate::ui;
use crate::version_file::read_version_file;

/// Terminal outcome of one command, as seen by automation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Valid, safe to proceed, or a value was produced
    Success,
    /// Invalid, unsafe to proceed, or nothing found
    Failure,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

impl From<bool> for Outcome {
    fn from(ok: bool) -> Self {
        if ok {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

/// Runs one command.
///
/// `open_repo` is only called by commands that query git, so `validate`,
/// `compare` and `read-version` work outside a repository.
pub fn execute<F>(command: &Command, config: &Config, open_repo: F) -> Outcome
where
    F: FnOnce() -> Result<Box<dyn Repository>>,
{
    match command {
        Command::Validate { version } => validate(version),
        Command::CheckTag { version } => check_tag(version, config, open_repo),
        Command::ReadVersion { file } => {
            read_version(file.as_deref().unwrap_or(config.version_file.as_str()))
        }
        Command::Compare { version1, version2 } => compare(version1, version2),
        Command::CheckCommit { commit } => check_commit(commit, config, open_repo),
    }
}

fn validate(version: &str) -> Outcome {
    let valid = is_valid_version(version);
    if valid {
        ui::display_success(&format!("Version {} is valid", version));
    } else {
        ui::display_failure(&format!("Version {} is invalid", version));
    }
    valid.into()
}

fn check_tag<F>(version: &str, config: &Config, open_repo: F) -> Outcome
where
    F: FnOnce() -> Result<Box<dyn Repository>>,
{
    let settings = match config.tag_settings() {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            return Outcome::Failure;
        }
    };
    let tag_name = settings.pattern.format(version);

    let exists = match open_repo() {
        Ok(repo) => release::tag_exists(repo.as_ref(), version, &settings),
        Err(e) => {
            tracing::warn!("Error checking git tag existence, treating as absent: {}", e);
            false
        }
    };

    if exists {
        ui::display_failure(&format!("Tag {} already exists", tag_name));
        Outcome::Failure
    } else {
        ui::display_success(&format!("Tag {} does not exist", tag_name));
        Outcome::Success
    }
}

fn read_version(path: &str) -> Outcome {
    match read_version_file(path) {
        Ok(version) => {
            println!("{}", version);
            Outcome::Success
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            Outcome::Failure
        }
    }
}

fn compare(version1: &str, version2: &str) -> Outcome {
    match compare_versions(version1, version2) {
        Ok(ordering) => {
            let symbol = match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{} {} {}", version1, symbol, version2);
            Outcome::Success
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            Outcome::Failure
        }
    }
}

fn check_commit<F>(commit: &str, config: &Config, open_repo: F) -> Outcome
where
    F: FnOnce() -> Result<Box<dyn Repository>>,
{
    let change = match open_repo() {
        Ok(repo) => release::version_change_in_commit(repo.as_ref(), commit, &config.version_file),
        Err(e) => {
            tracing::warn!("Error checking git commit changes: {}", e);
            None
        }
    };

    match change {
        Some(version) => {
            println!("{}", version);
            Outcome::Success
        }
        None => {
            println!("No version change detected");
            Outcome::Failure
        }
    }
}
