use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when a version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version '{input}', expected 'X.Y.Z' or 'X.Y.Z-tag'")]
pub struct VersionError {
    input: String,
}

/// A `major.minor.patch` version with an optional pre-release tag.
///
/// Versions order numerically by component. A pre-release sorts below the
/// plain release it precedes (`1.2.0-beta < 1.2.0`); tags compare lexically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    pre: Option<String>,
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Attach a pre-release tag (e.g. `beta`).
    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    /// The version of this build of the tool.
    pub fn current() -> Self {
        let component = |s: &str| s.parse::<u32>().unwrap_or_default();
        let pre = env!("CARGO_PKG_VERSION_PRE");
        Self {
            major: component(env!("CARGO_PKG_VERSION_MAJOR")),
            minor: component(env!("CARGO_PKG_VERSION_MINOR")),
            patch: component(env!("CARGO_PKG_VERSION_PATCH")),
            pre: (!pre.is_empty()).then(|| pre.to_string()),
        }
    }

    /// Whether `self` is strictly newer than `other`.
    pub fn is_greater_than(&self, other: &Version) -> bool {
        self > other
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let (numbers, pre) = match trimmed.split_once('-') {
            Some((numbers, pre)) if !pre.is_empty() => (numbers, Some(pre.to_string())),
            Some(_) => return Err(invalid()),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = numbers.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let component = |part: &str| part.parse::<u32>().map_err(|_| invalid());

        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
            pre,
        })
    }
}
