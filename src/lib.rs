pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod ui;
pub mod version_file;

pub use error::{Result, VersionGateError};
