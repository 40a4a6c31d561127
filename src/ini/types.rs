//! The key/value mapping held by one INI section.

use std::collections::HashMap;

use crate::error::{TrackerError, TrackerResult};

/// The keys and values declared under one `[section]` header.
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: HashMap<String, String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or a `MissingKey` error naming it.
    ///
    /// # Example
    ///
    /// ```
    /// use remaining_time::error::TrackerError;
    /// use remaining_time::ini::Section;
    ///
    /// let section = Section::new();
    /// match section.require("child0_label") {
    ///     Err(TrackerError::MissingKey { key }) => assert_eq!(key, "child0_label"),
    ///     other => panic!("unexpected: {:?}", other),
    /// }
    /// ```
    pub fn require(&self, key: &str) -> TrackerResult<&str> {
        self.get(key).ok_or_else(|| TrackerError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Shallow-merges `other` over this section; its keys take precedence.
    pub fn merge(&mut self, other: Section) {
        self.entries.extend(other.entries);
    }

    /// Returns true if the section holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Section::new();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}
