//! Typed target values and their mismatching counterparts.

use crate::error::ConfigError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Suffix appended to a string target to produce a non-matching string.
pub const STRING_MISMATCH_SUFFIX: &str = "_other";

/// Value placed at the path when a null target must not match.
pub const NULL_MISMATCH: &str = "not-null";

/// The JSON type a target value is compared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ValueType {
    #[default]
    String,
    Number,
    Bool,
    Null,
}

impl ValueType {
    /// The lowercase tag used on command lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Bool => "bool",
            ValueType::Null => "null",
        }
    }

    /// Decode value text according to this type.
    ///
    /// Numbers containing `.`, `e` or `E` are floats, everything else must be
    /// a 64-bit signed integer. Integer text is parsed strictly: surrounding
    /// whitespace, `_` digit separators and values outside the `i64` range
    /// are rejected. For `null` the text is ignored.
    pub fn decode(self, text: &str) -> Result<TargetValue, ConfigError> {
        match self {
            ValueType::String => Ok(TargetValue::String(text.to_string())),
            ValueType::Number => {
                if text.contains(['.', 'e', 'E']) {
                    let f: f64 = text
                        .parse()
                        .map_err(|_| ConfigError::InvalidNumber(text.to_string()))?;
                    if !f.is_finite() {
                        return Err(ConfigError::NonFiniteNumber(text.to_string()));
                    }
                    Ok(TargetValue::Float(f))
                } else {
                    text.parse()
                        .map(TargetValue::Int)
                        .map_err(|_| ConfigError::InvalidNumber(text.to_string()))
                }
            }
            ValueType::Bool => match text {
                "true" => Ok(TargetValue::Bool(true)),
                "false" => Ok(TargetValue::Bool(false)),
                _ => Err(ConfigError::InvalidBool(text.to_string())),
            },
            ValueType::Null => Ok(TargetValue::Null),
        }
    }
}

impl FromStr for ValueType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ValueType::String),
            "number" => Ok(ValueType::Number),
            "bool" => Ok(ValueType::Bool),
            "null" => Ok(ValueType::Null),
            other => Err(ConfigError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded target scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl TargetValue {
    /// JSON form placed at the path for matching lines.
    pub fn to_json(&self) -> Value {
        match self {
            TargetValue::String(s) => Value::String(s.clone()),
            TargetValue::Int(n) => Value::from(*n),
            TargetValue::Float(f) => Value::from(*f),
            TargetValue::Bool(b) => Value::Bool(*b),
            TargetValue::Null => Value::Null,
        }
    }

    /// JSON value that a matcher must not accept as equal to this target.
    ///
    /// Numbers follow `(target or 0) + 1`: a zero target (including `0.0`
    /// and `-0.0`) collapses to the integer base 0, so its mismatch is the
    /// integer `1`.
    pub fn mismatch(&self) -> Value {
        match self {
            TargetValue::String(s) => Value::String(format!("{s}{STRING_MISMATCH_SUFFIX}")),
            TargetValue::Int(0) => Value::from(1),
            TargetValue::Int(n) => match n.checked_add(1) {
                Some(next) => Value::from(next),
                // i64::MAX + 1 still fits in u64
                None => Value::from(*n as u64 + 1),
            },
            TargetValue::Float(f) if *f == 0.0 => Value::from(1),
            TargetValue::Float(f) => Value::from(f + 1.0),
            TargetValue::Bool(b) => Value::Bool(!b),
            TargetValue::Null => Value::String(NULL_MISMATCH.to_string()),
        }
    }
}
