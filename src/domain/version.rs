use crate::error::{Result, VersionGateError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Strict `major.minor.patch`: no leading zeros, no pre-release or build suffix.
const VERSION_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is a valid regex"))
}

/// Checks whether `input` is a strict semantic version after trimming
/// surrounding whitespace.
pub fn is_valid_version(input: &str) -> bool {
    version_regex().is_match(input.trim())
}

/// One numeric version component of any width
///
/// Holds the canonical decimal digits. Leading zeros are impossible, so a
/// longer component is always the larger one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(String);

impl Component {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Component {
    fn from(value: u64) -> Self {
        Component(value.to_string())
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic version representation
///
/// Ordering is lexicographic on `(major, minor, patch)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: Component,
    pub minor: Component,
    pub patch: Component,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
        }
    }

    /// Parse a strict version string (e.g., " 1.2.3 " -> Version(1,2,3))
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = version_regex().captures(trimmed).ok_or_else(|| {
            VersionGateError::invalid_version(format!(
                "'{}' - expected MAJOR.MINOR.PATCH",
                trimmed
            ))
        })?;

        let component = |idx: usize| Component(caps[idx].to_string());

        Ok(Version {
            major: component(1),
            minor: component(2),
            patch: component(3),
        })
    }
}

impl FromStr for Version {
    type Err = VersionGateError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compares two version strings.
///
/// `Ordering as i8` yields the `-1 / 0 / 1` convention used by scripts.
pub fn compare_versions(first: &str, second: &str) -> Result<Ordering> {
    let (Ok(first), Ok(second)) = (Version::parse(first), Version::parse(second)) else {
        return Err(VersionGateError::invalid_version(
            "Both versions must be valid semantic versions",
        ));
    };
    Ok(first.cmp(&second))
}
