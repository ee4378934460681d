#![cfg(feature = "global-locale")]

//! Integration tests for the `global-locale` feature.
//!
//! The global locale is shared state across this test binary, so every
//! test uses its own message ids and only merges entries — merges are
//! additive and cannot disturb a concurrently running test.

use msgcat::{FormatValue, Translation};

#[test]
fn set_language_and_language_round_trip() {
    msgcat::set_language("hr");
    assert_eq!(msgcat::language(), "hr");
}

#[test]
fn global_gettext_resolves_loaded_entries() {
    msgcat::with_locale_mut(|locale| {
        locale
            .load([("global Cancel".to_string(), Translation::from("Odustani"))])
            .unwrap();
    });
    assert_eq!(msgcat::global::gettext("global Cancel"), "Odustani");
    assert_eq!(msgcat::global::gettext("global missing"), "global missing");
}

#[test]
fn global_ngettext_uses_the_loaded_rule() {
    msgcat::with_locale_mut(|locale| {
        locale
            .load([(
                "global %d item".to_string(),
                Translation::from(&["one item", "many items"][..]),
            )])
            .unwrap();
    });
    assert_eq!(
        msgcat::global::ngettext("global %d item", "global %d items", 1),
        "one item"
    );
    assert_eq!(
        msgcat::global::ngettext("global %d item", "global %d items", 4),
        "many items"
    );
}

#[test]
fn global_pgettext_falls_back_without_context() {
    msgcat::with_locale_mut(|locale| {
        locale
            .load([("global May".to_string(), Translation::from("Svibanj"))])
            .unwrap();
    });
    assert_eq!(msgcat::global::pgettext("month", "global May"), "Svibanj");
}

#[test]
fn global_get_format_echoes_unknown_categories() {
    msgcat::with_locale_mut(|locale| {
        locale.load_formats([(
            "GLOBAL_TEST_FORMAT".to_string(),
            FormatValue::from("j. E Y."),
        )]);
    });
    assert_eq!(
        msgcat::global::get_format("GLOBAL_TEST_FORMAT").as_pattern(),
        Some("j. E Y.")
    );
    assert_eq!(
        msgcat::global::get_format("GLOBAL_UNSET").as_pattern(),
        Some("GLOBAL_UNSET")
    );
}

#[test]
fn with_locale_read_access() {
    let n = msgcat::with_locale(|locale| locale.plural_index(1));
    assert!(n < msgcat::with_locale(|locale| locale.plural_rule().nplurals()));
}
