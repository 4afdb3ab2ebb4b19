//! The icon-name accumulator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated set of icon names discovered during a scan.
///
/// Every name is trimmed on insertion; empty and whitespace-only names are
/// rejected, so the set never holds them. Iteration is always in
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSet {
    names: BTreeSet<String>,
}

impl IconSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name after trimming it.
    ///
    /// Returns `true` if the name was non-empty and not already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.insert(trimmed.to_string())
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        if self.names.is_empty() {
            self.names = other.names;
        } else {
            self.names.extend(other.names);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Sorted names, ready for the link builder.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> Extend<S> for IconSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for IconSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for IconSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
