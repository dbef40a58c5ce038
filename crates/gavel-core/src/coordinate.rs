use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A `group:artifact:version` triple identifying one publishable unit.
///
/// The version is opaque: any non-empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateTriple {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

/// Why a coordinate literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    #[error("expected 3 colon-delimited fields, found {found}")]
    FieldCount { found: usize },
    #[error("the {field} field is empty")]
    EmptyField { field: &'static str },
}

impl CoordinateTriple {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parse `"group:artifact:version"` into a triple.
    pub fn parse(s: &str) -> Result<Self, CoordinateParseError> {
        let parts: Vec<&str> = s.split(':').collect();
        let [group, artifact, version] = parts.as_slice() else {
            return Err(CoordinateParseError::FieldCount { found: parts.len() });
        };
        for (field, value) in [("group", group), ("artifact", artifact), ("version", version)] {
            if value.is_empty() {
                return Err(CoordinateParseError::EmptyField { field });
            }
        }
        Ok(Self::new(*group, *artifact, *version))
    }

    /// Whether the version is a dynamic selector rather than a fixed version.
    pub fn has_dynamic_version(&self) -> bool {
        is_dynamic_version(&self.version)
    }
}

impl fmt::Display for CoordinateTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for CoordinateTriple {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CoordinateTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CoordinateTriple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns `true` for Gradle-style dynamic version selectors: prefix
/// matches (`1.1+`), `latest.<status>`, and ranges (`[1.0,)`, `(,2.0]`).
pub fn is_dynamic_version(version: &str) -> bool {
    if version.is_empty() {
        return false;
    }
    version.ends_with('+')
        || version.starts_with("latest.")
        || version.starts_with(['[', ']', '('])
}
