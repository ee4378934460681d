use serde::{Deserialize, Serialize};

/// A single catalog entry: either one invariant string or an ordered list
/// of plural forms indexed by plural category.
///
/// The untagged serde representation matches the catalog wire format,
/// where each value is either a JSON string or a JSON array of strings.
///
/// # Example
///
/// ```
/// use msgcat::Translation;
///
/// let single = Translation::from("Odustani");
/// assert_eq!(single.base(), Some("Odustani"));
/// assert_eq!(single.arity(), 1);
///
/// let plural = Translation::from(vec!["%d dan".to_string(), "%d dana".to_string()]);
/// assert_eq!(plural.base(), Some("%d dan"));
/// assert_eq!(plural.form(1), Some("%d dana"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    /// A translation with a single invariant form.
    Singular(String),

    /// An ordered sequence of plural forms, one per plural category.
    Plural(Vec<String>),
}

impl Translation {
    /// The base form: the singular string, or plural form 0.
    ///
    /// Returns `None` only for a plural entry with an empty form list.
    pub fn base(&self) -> Option<&str> {
        match self {
            Translation::Singular(s) => Some(s),
            Translation::Plural(forms) => forms.first().map(String::as_str),
        }
    }

    /// Get the plural form at `index`, if present.
    ///
    /// For a singular entry, every index resolves to the single form.
    pub fn form(&self, index: usize) -> Option<&str> {
        match self {
            Translation::Singular(s) => Some(s),
            Translation::Plural(forms) => forms.get(index).map(String::as_str),
        }
    }

    /// Number of forms this entry carries (1 for singular entries).
    pub fn arity(&self) -> usize {
        match self {
            Translation::Singular(_) => 1,
            Translation::Plural(forms) => forms.len(),
        }
    }

    /// Whether this entry distinguishes plural forms.
    pub fn is_plural(&self) -> bool {
        matches!(self, Translation::Plural(_))
    }
}

impl From<&str> for Translation {
    fn from(s: &str) -> Self {
        Translation::Singular(s.to_string())
    }
}

impl From<String> for Translation {
    fn from(s: String) -> Self {
        Translation::Singular(s)
    }
}

impl From<Vec<String>> for Translation {
    fn from(forms: Vec<String>) -> Self {
        Translation::Plural(forms)
    }
}

impl From<&[&str]> for Translation {
    fn from(forms: &[&str]) -> Self {
        Translation::Plural(forms.iter().map(|s| (*s).to_string()).collect())
    }
}
