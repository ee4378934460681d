//! CLDR-backed plural indices.
//!
//! Maps a count to a form index using CLDR cardinal categories: the index
//! of a count is the position of its category within the locale's
//! category set, in canonical order (zero, one, two, few, many, other).
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call. The cache is initialized lazily
//! on first access within each thread.

use std::cell::RefCell;

use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Supported language codes for CLDR plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "hr", "id", "it", "ja", "ko", "nl",
    "pl", "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

/// Canonical CLDR category order used to assign stable indices.
const CATEGORY_ORDER: &[PluralCategory] = &[
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// The region subtag, if any, is ignored ("pt-br" resolves as "pt").
/// Unrecognized codes fall back to `"en"`.
pub(crate) fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == primary)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc: Locale = lang.parse().unwrap_or(Locale::UNKNOWN);
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Run a closure against the cached rules for a language.
fn with_rules<T>(lang: &'static str, f: impl FnOnce(&PluralRules) -> T) -> T {
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return f(&entry.1);
        }
        let rules = build_rules(lang);
        let result = f(&rules);
        cache.push((lang, rules));
        result
    })
}

/// Position of a category in canonical order.
fn category_rank(category: PluralCategory) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len() - 1)
}

/// Number of plural categories the language distinguishes.
pub(crate) fn nplurals(lang: &'static str) -> usize {
    with_rules(lang, |rules| rules.categories().count())
}

/// Form index for a count: the rank of its category among the language's
/// categories in canonical order.
pub(crate) fn index(lang: &'static str, n: u64) -> usize {
    with_rules(lang, |rules| {
        let category = rules.category_for(n);
        let mut present: Vec<PluralCategory> = rules.categories().collect();
        present.sort_by_key(|c| category_rank(*c));
        present.iter().position(|c| *c == category).unwrap_or(0)
    })
}
