//! Locale-scoped message resolution.
//!
//! `Locale` owns one locale's catalog, plural rule, and formatting
//! conventions, and implements the gettext-style lookup family. Missing
//! translations are never errors: every resolver degrades to a
//! deterministic fallback string, so UI rendering cannot fail on an
//! untranslated message.

use std::collections::HashMap;

use bon::Builder;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::LoadError;
use crate::formats::{FormatRegistry, FormatValue};
use crate::plural::PluralRule;
use crate::types::Translation;

/// Separator joining a context tag and a message id into one catalog
/// key. `\x04` cannot appear in authored source strings, which keeps
/// context-qualified keys disjoint from plain ones.
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Marks a string for extraction tooling without translating it.
///
/// Always the identity, independent of any catalog state.
pub fn gettext_noop(id: &str) -> &str {
    id
}

/// One locale's catalog payload as served over the wire: translations,
/// formatting conventions, and an optional plural-forms expression.
///
/// # Example
///
/// ```
/// use msgcat::{CatalogData, Locale};
///
/// let data: CatalogData = serde_json::from_str(
///     r#"{
///         "catalog": {"Cancel": "Odustani"},
///         "formats": {"DECIMAL_SEPARATOR": ","},
///         "plural": "(n != 1)"
///     }"#,
/// )
/// .unwrap();
///
/// let mut locale = Locale::with_language("hr");
/// locale.load_data(data).unwrap();
/// assert_eq!(locale.gettext("Cancel"), "Odustani");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogData {
    /// Message id to translation.
    #[serde(default)]
    pub catalog: HashMap<String, Translation>,

    /// Format category to convention value.
    #[serde(default)]
    pub formats: HashMap<String, FormatValue>,

    /// Plural-forms expression over `n`, when the locale has one.
    #[serde(default)]
    pub plural: Option<String>,
}

/// Message resolution context for a single locale.
///
/// # Example
///
/// ```
/// use msgcat::{Locale, Translation};
///
/// let mut locale = Locale::builder().language("en").build();
/// locale
///     .load([("Cancel".to_string(), Translation::from("Abbrechen"))])
///     .unwrap();
///
/// assert_eq!(locale.gettext("Cancel"), "Abbrechen");
/// assert_eq!(locale.gettext("Save"), "Save"); // untranslated
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Locale {
    /// Language code (e.g., "en", "hr", "ru").
    #[builder(default = "en".to_string())]
    language: String,

    /// Plural rule mapping a count to a form index.
    #[builder(default)]
    plural: PluralRule,

    /// Message catalog for this locale.
    #[builder(skip)]
    catalog: Catalog,

    /// Formatting conventions for this locale.
    #[builder(skip)]
    formats: FormatRegistry,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::builder().build()
    }
}

impl Locale {
    /// Create a new Locale with default settings (English, `n != 1`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Locale for a language, with a CLDR-derived plural
    /// rule for that language.
    pub fn with_language(language: impl Into<String>) -> Self {
        let language = language.into();
        let plural = PluralRule::for_language(&language);
        Locale::builder().language(language).plural(plural).build()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the language code.
    ///
    /// This does not touch the catalog or the plural rule; it only
    /// relabels the locale.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Get the active plural rule.
    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural
    }

    /// Replace the plural rule.
    ///
    /// Entries already loaded were validated against the previous rule;
    /// prefer setting the rule before loading.
    pub fn set_plural_rule(&mut self, plural: PluralRule) {
        self.plural = plural;
    }

    /// Get the message catalog (read-only).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the format registry (read-only).
    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Merge entries into the catalog.
    ///
    /// Every plural-valued entry is validated against the plural rule's
    /// form count before anything is merged, so a failed load leaves the
    /// catalog untouched. Loading the same entries twice is idempotent;
    /// a key collision keeps the later value.
    pub fn load(
        &mut self,
        entries: impl IntoIterator<Item = (String, Translation)>,
    ) -> Result<usize, LoadError> {
        let entries: Vec<(String, Translation)> = entries.into_iter().collect();
        let expected = self.plural.nplurals();
        for (id, translation) in &entries {
            if let Translation::Plural(forms) = translation
                && forms.len() != expected
            {
                return Err(LoadError::PluralArityMismatch {
                    id: id.clone(),
                    expected,
                    got: forms.len(),
                });
            }
        }
        Ok(self.catalog.merge(entries))
    }

    /// Merge formatting conventions into the format registry.
    ///
    /// Returns the number of categories merged.
    pub fn load_formats(
        &mut self,
        entries: impl IntoIterator<Item = (String, FormatValue)>,
    ) -> usize {
        self.formats.merge(entries)
    }

    /// Ingest a full catalog payload: plural rule, translations, formats.
    ///
    /// The plural rule, when present, is applied before the catalog is
    /// validated and merged. Returns the number of catalog entries
    /// loaded.
    pub fn load_data(&mut self, data: CatalogData) -> Result<usize, LoadError> {
        if let Some(expression) = &data.plural {
            self.plural = PluralRule::parse(expression)?;
        }
        let count = self.load(data.catalog)?;
        self.formats.merge(data.formats);
        Ok(count)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a message id to its translation.
    ///
    /// An untranslated id resolves to itself. A plural-valued entry
    /// resolves to its base form (index 0), an intentional
    /// simplification for non-count contexts.
    pub fn gettext(&self, id: &str) -> String {
        match self.catalog.get(id).and_then(Translation::base) {
            Some(text) => text.to_string(),
            None => id.to_string(),
        }
    }

    /// Resolve a pluralized message by its singular id and a count.
    ///
    /// An untranslated id falls back two-way on `count == 1`, regardless
    /// of how many forms this locale distinguishes. A singular-valued
    /// entry (a partial catalog) resolves to its single form for every
    /// count.
    pub fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        match self
            .catalog
            .get(singular)
            .and_then(|t| self.plural_form(t, count))
        {
            Some(form) => form.to_string(),
            None => fallback_plural(singular, plural, count).to_string(),
        }
    }

    /// Resolve a context-qualified message id.
    ///
    /// Looks up the composite `context \x04 id` key; when it is absent,
    /// resolution falls back to the unqualified [`Locale::gettext`], and
    /// from there to `id` itself.
    pub fn pgettext(&self, context: &str, id: &str) -> String {
        let key = context_key(context, id);
        match self.catalog.get(&key).and_then(Translation::base) {
            Some(text) => text.to_string(),
            None => self.gettext(id),
        }
    }

    /// Resolve a context-qualified pluralized message.
    ///
    /// When the composite key is absent the context is dropped entirely
    /// and resolution falls back to [`Locale::ngettext`].
    pub fn npgettext(&self, context: &str, singular: &str, plural: &str, count: u64) -> String {
        let key = context_key(context, singular);
        match self
            .catalog
            .get(&key)
            .and_then(|t| self.plural_form(t, count))
        {
            Some(form) => form.to_string(),
            None => self.ngettext(singular, plural, count),
        }
    }

    /// Plural-form index for a count under this locale's rule.
    pub fn plural_index(&self, count: u64) -> usize {
        self.plural.index(count)
    }

    /// Look up a formatting convention by category name.
    ///
    /// An unrecognized category is echoed back as a pattern, the same
    /// graceful fallback message lookup uses.
    pub fn get_format(&self, category: &str) -> FormatValue {
        match self.formats.get(category) {
            Some(value) => value.clone(),
            None => FormatValue::Pattern(category.to_string()),
        }
    }

    /// Select the form of an entry for a count.
    ///
    /// Arity mismatches are rejected at load time; if one slips in
    /// through a direct catalog merge the index clamps to the last form.
    fn plural_form<'a>(&self, translation: &'a Translation, count: u64) -> Option<&'a str> {
        match translation {
            Translation::Singular(text) => Some(text),
            Translation::Plural(forms) => {
                let index = self.plural.index(count);
                forms.get(index).or_else(|| forms.last()).map(String::as_str)
            }
        }
    }
}

/// The two-way English fallback for an untranslated plural message.
fn fallback_plural<'a>(singular: &'a str, plural: &'a str, count: u64) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Join a context tag and a message id into a composite catalog key.
fn context_key(context: &str, id: &str) -> String {
    format!("{context}{CONTEXT_SEPARATOR}{id}")
}
