//! Integration tests for context-qualified lookup.

use msgcat::{CONTEXT_SEPARATOR, Locale, PluralRule, Translation};

fn locale_with_contexts() -> Locale {
    let mut locale = Locale::builder()
        .language("de")
        .plural(PluralRule::parse("(n != 1)").unwrap())
        .build();
    locale
        .load([
            (
                format!("month{CONTEXT_SEPARATOR}May"),
                Translation::from("Mai"),
            ),
            ("May".to_string(), Translation::from("darf")),
            (
                format!("abbrev{CONTEXT_SEPARATOR}%d hour"),
                Translation::from(&["%d Std.", "%d Std."][..]),
            ),
            (
                "%d hour".to_string(),
                Translation::from(&["%d Stunde", "%d Stunden"][..]),
            ),
        ])
        .unwrap();
    locale
}

// =========================================================================
// pgettext
// =========================================================================

#[test]
fn pgettext_resolves_qualified_entry() {
    let locale = locale_with_contexts();
    assert_eq!(locale.pgettext("month", "May"), "Mai");
}

#[test]
fn pgettext_unknown_context_falls_back_to_unqualified() {
    let locale = locale_with_contexts();
    assert_eq!(locale.pgettext("verb", "May"), "darf");
}

#[test]
fn pgettext_falls_all_the_way_back_to_id() {
    let locale = locale_with_contexts();
    assert_eq!(locale.pgettext("month", "June"), "June");
}

#[test]
fn pgettext_never_leaks_the_composite_key() {
    let locale = locale_with_contexts();
    let resolved = locale.pgettext("month", "June");
    assert!(!resolved.contains(CONTEXT_SEPARATOR));
}

#[test]
fn translation_containing_separator_is_not_mangled() {
    // A translated value that legitimately contains the separator byte
    // must come through untouched; fallback detection is keyed on the
    // lookup, not on rescanning the result.
    let mut locale = Locale::new();
    locale
        .load([(
            "weird".to_string(),
            Translation::from(format!("a{CONTEXT_SEPARATOR}b")),
        )])
        .unwrap();
    assert_eq!(
        locale.pgettext("missing", "weird"),
        format!("a{CONTEXT_SEPARATOR}b")
    );
}

// =========================================================================
// npgettext
// =========================================================================

#[test]
fn npgettext_resolves_qualified_plural() {
    let locale = locale_with_contexts();
    assert_eq!(locale.npgettext("abbrev", "%d hour", "%d hours", 1), "%d Std.");
    assert_eq!(locale.npgettext("abbrev", "%d hour", "%d hours", 3), "%d Std.");
}

#[test]
fn npgettext_unknown_context_drops_to_ngettext() {
    let locale = locale_with_contexts();
    assert_eq!(locale.npgettext("longform", "%d hour", "%d hours", 1), "%d Stunde");
    assert_eq!(locale.npgettext("longform", "%d hour", "%d hours", 3), "%d Stunden");
}

#[test]
fn npgettext_untranslated_uses_two_way_fallback() {
    let locale = locale_with_contexts();
    assert_eq!(locale.npgettext("ctx", "%d day", "%d days", 1), "%d day");
    assert_eq!(locale.npgettext("ctx", "%d day", "%d days", 4), "%d days");
}
