//! Ordered configuration maps and their scalar values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from configuration keys to scalar values.
///
/// This is the normalized form every descriptor resolves to. Keys of
/// interest are `adapter`, `host`, `port`, `database`, `username` and
/// `password`; adapter-specific keys (`pool`, `timeout`, ...) pass through
/// unmodified. A fully resolved map never holds a blank value.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A scalar configuration value.
///
/// Connection configurations only ever carry strings and integers. Numeric
/// fields such as `port` stay in whatever representation the URL parser
/// produced; callers must accept either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An integer value (e.g. a port number).
    Int(i64),
    /// A string value.
    Str(String),
}

impl ConfigValue {
    /// Whether this value counts as blank (empty or whitespace-only string).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Str(s) => s.trim().is_empty(),
            Self::Int(_) => false,
        }
    }

    /// Borrow the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u16> for ConfigValue {
    fn from(n: u16) -> Self {
        Self::Int(i64::from(n))
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Drop every blank value from a configuration map.
pub(crate) fn reject_blank(map: &mut ConfigMap) {
    map.retain(|_, value| !value.is_blank());
}
