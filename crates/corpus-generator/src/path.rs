//! Dot-delimited field paths.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A validated dot path such as `user.id`.
///
/// Always holds at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    segments: Vec<String>,
}

impl PathSpec {
    /// Parse a dot path, rejecting empty segments.
    ///
    /// The empty string, a leading or trailing dot and consecutive dots all
    /// produce an empty segment and fail with [`ConfigError::InvalidPath`].
    pub fn parse(path: &str) -> Result<Self, ConfigError> {
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidPath(path.to_string()));
        }
        Ok(Self { segments })
    }

    /// Path segments in order, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl FromStr for PathSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
