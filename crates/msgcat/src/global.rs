//! Global locale storage for the `global-locale` feature.
//!
//! Provides thread-safe access to a shared `Locale` instance, removing
//! the need to pass `&Locale` to every call site. Loads take the write
//! guard; resolvers take the read guard, so a reader racing a load sees
//! either the old or the new entry for a key, never a torn value.

use std::sync::{LazyLock, RwLock};

use crate::Locale;
use crate::formats::FormatValue;

static GLOBAL_LOCALE: LazyLock<RwLock<Locale>> = LazyLock::new(|| RwLock::new(Locale::new()));

/// Provides read access to the global locale.
pub fn with_locale<T>(f: impl FnOnce(&Locale) -> T) -> T {
    let guard = GLOBAL_LOCALE.read().expect("global locale lock poisoned");
    f(&guard)
}

/// Provides write access to the global locale, e.g. for loading.
pub fn with_locale_mut<T>(f: impl FnOnce(&mut Locale) -> T) -> T {
    let mut guard = GLOBAL_LOCALE.write().expect("global locale lock poisoned");
    f(&mut guard)
}

/// Sets the current language for the global locale.
pub fn set_language(language: impl Into<String>) {
    with_locale_mut(|locale| locale.set_language(language));
}

/// Returns the current language of the global locale.
pub fn language() -> String {
    with_locale(|locale| locale.language().to_owned())
}

/// Resolves a message id against the global locale.
pub fn gettext(id: &str) -> String {
    with_locale(|locale| locale.gettext(id))
}

/// Resolves a pluralized message against the global locale.
pub fn ngettext(singular: &str, plural: &str, count: u64) -> String {
    with_locale(|locale| locale.ngettext(singular, plural, count))
}

/// Resolves a context-qualified message against the global locale.
pub fn pgettext(context: &str, id: &str) -> String {
    with_locale(|locale| locale.pgettext(context, id))
}

/// Resolves a context-qualified pluralized message against the global locale.
pub fn npgettext(context: &str, singular: &str, plural: &str, count: u64) -> String {
    with_locale(|locale| locale.npgettext(context, singular, plural, count))
}

/// Plural-form index for a count under the global locale's rule.
pub fn plural_index(count: u64) -> usize {
    with_locale(|locale| locale.plural_index(count))
}

/// Looks up a formatting convention in the global locale.
pub fn get_format(category: &str) -> FormatValue {
    with_locale(|locale| locale.get_format(category))
}
