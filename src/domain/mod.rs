//! Domain logic - pure version and tag rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::TagPattern;
pub use version::{compare_versions, is_valid_version, Version};
