//! Category tags as they appear in inventory records.
//!
//! Records carry categories either as a list of names or as a single
//! comma-separated string. Both shapes normalize to the same ordered list
//! of trimmed, non-empty names. Duplicates are kept.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    List(Vec<String>),
    Joined(String),
}

impl Default for Categories {
    fn default() -> Self {
        Categories::List(Vec::new())
    }
}

impl Categories {
    pub fn normalized(&self) -> Vec<String> {
        match self {
            Categories::List(names) => normalize_categories(names),
            Categories::Joined(joined) => split_categories(joined),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized().is_empty()
    }
}

/// Trim every name and drop the ones that end up empty.
pub fn normalize_categories<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated category string and normalize the parts.
pub fn split_categories(joined: &str) -> Vec<String> {
    let parts: Vec<&str> = joined.split(',').collect();
    normalize_categories(&parts)
}
