//! Locale formatting conventions: date/time patterns and number separators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single formatting convention value.
///
/// The untagged serde representation matches the catalog wire format,
/// where each value is a pattern string, a list of accepted input-parsing
/// patterns, or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatValue {
    /// A display pattern or a literal separator string.
    Pattern(String),

    /// An ordered list of accepted input-parsing patterns.
    Patterns(Vec<String>),

    /// A numeric convention such as first day of week or grouping size.
    Number(i64),
}

impl FormatValue {
    /// Get this value as a single pattern string, if it is one.
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            FormatValue::Pattern(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a pattern list, if it is one.
    pub fn as_patterns(&self) -> Option<&[String]> {
        match self {
            FormatValue::Patterns(patterns) => Some(patterns),
            _ => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FormatValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatValue::Pattern(s) => write!(f, "{s}"),
            FormatValue::Patterns(patterns) => write!(f, "{}", patterns.join(", ")),
            FormatValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(s: &str) -> Self {
        FormatValue::Pattern(s.to_string())
    }
}

impl From<i64> for FormatValue {
    fn from(n: i64) -> Self {
        FormatValue::Number(n)
    }
}

/// Registry of locale formatting conventions keyed by category name.
///
/// Categories mirror the generated catalog: `DATE_FORMAT`,
/// `DATETIME_INPUT_FORMATS`, `DECIMAL_SEPARATOR`, `THOUSAND_SEPARATOR`,
/// `FIRST_DAY_OF_WEEK`, `NUMBER_GROUPING`, and the rest of the fixed
/// set. Entries are merge-only, like the message catalog. Unknown
/// categories are echoed back by `Locale::get_format`, so a lookup can
/// never fail.
#[derive(Debug, Default, Clone)]
pub struct FormatRegistry {
    entries: HashMap<String, FormatValue>,
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a format category.
    pub fn get(&self, category: &str) -> Option<&FormatValue> {
        self.entries.get(category)
    }

    /// Merge entries into the registry, overwriting on key collision.
    ///
    /// Returns the number of entries merged.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, FormatValue)>) -> usize {
        let mut count = 0;
        for (category, value) in entries {
            self.entries.insert(category, value);
            count += 1;
        }
        count
    }

    /// Number of categories with a configured value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
