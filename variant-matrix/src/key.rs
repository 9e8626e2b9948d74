//! Combination identifiers
//!
//! A combination is keyed by the option value ids it is made of. Value ids
//! are alphanumeric tokens, so `-` never appears inside one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const KEY_SEPARATOR: &str = "-";

/// How constituent value ids are ordered before joining
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationKeyMode {
    /// Group order. Reordering values inside a group changes no key, but the
    /// key of a combination depends on the order groups were declared in.
    Positional,
    /// Lexicographic order: the key only depends on which values are chosen.
    #[default]
    Sorted,
}

impl CombinationKeyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombinationKeyMode::Positional => "positional",
            CombinationKeyMode::Sorted => "sorted",
        }
    }
}

impl fmt::Display for CombinationKeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CombinationKeyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(CombinationKeyMode::Positional),
            "sorted" => Ok(CombinationKeyMode::Sorted),
            other => Err(format!("unknown combination key mode: {other}")),
        }
    }
}

/// Build the key of a combination from its value ids (given in group order)
pub fn combination_key<S: AsRef<str>>(value_ids: &[S], mode: CombinationKeyMode) -> String {
    let mut ids: Vec<&str> = value_ids.iter().map(AsRef::as_ref).collect();
    if mode == CombinationKeyMode::Sorted {
        ids.sort_unstable();
    }
    ids.join(KEY_SEPARATOR)
}
