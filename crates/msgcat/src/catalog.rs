//! In-memory message catalog.

use std::collections::HashMap;

use crate::types::Translation;

/// A mapping from message id to translation.
///
/// The catalog only grows: [`Catalog::merge`] adds entries and overwrites
/// on key collision, and nothing is ever removed. A lookup miss is an
/// expected outcome meaning "untranslated", not an error.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: HashMap<String, Translation>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the translation for a message id.
    pub fn get(&self, id: &str) -> Option<&Translation> {
        self.entries.get(id)
    }

    /// Whether the catalog has an entry for a message id.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Merge entries into the catalog, overwriting on key collision.
    ///
    /// Merging the same entries twice is idempotent. Returns the number
    /// of entries merged.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, Translation)>) -> usize {
        let mut count = 0;
        for (id, translation) in entries {
            self.entries.insert(id, translation);
            count += 1;
        }
        count
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Translation)> {
        self.entries.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Iterate over all message ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
