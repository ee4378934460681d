//! Integration tests for loading the `{catalog, formats, plural}` payload.

use msgcat::{CatalogData, FormatValue, LoadError, Locale, Translation};

const HR_PAYLOAD: &str = r#"{
    "catalog": {
        "Cancel": "Odustani",
        "%(sel)s of %(cnt)s selected": [
            "odabrano %(sel)s od %(cnt)s",
            "odabrano %(sel)s od %(cnt)s",
            "odabrano %(sel)s od %(cnt)s"
        ]
    },
    "formats": {
        "DECIMAL_SEPARATOR": ",",
        "THOUSAND_SEPARATOR": ".",
        "FIRST_DAY_OF_WEEK": 1,
        "DATE_INPUT_FORMATS": ["%Y-%m-%d", "%d.%m.%Y."]
    },
    "plural": "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2"
}"#;

fn parse_payload() -> CatalogData {
    serde_json::from_str(HR_PAYLOAD).unwrap()
}

// =========================================================================
// Deserialization
// =========================================================================

#[test]
fn payload_deserializes_strings_and_lists() {
    let data = parse_payload();
    assert_eq!(
        data.catalog.get("Cancel"),
        Some(&Translation::from("Odustani"))
    );
    assert!(matches!(
        data.catalog.get("%(sel)s of %(cnt)s selected"),
        Some(Translation::Plural(forms)) if forms.len() == 3
    ));
    assert_eq!(
        data.formats.get("FIRST_DAY_OF_WEEK"),
        Some(&FormatValue::Number(1))
    );
}

#[test]
fn empty_payload_is_valid() {
    let data: CatalogData = serde_json::from_str("{}").unwrap();
    assert!(data.catalog.is_empty());
    assert!(data.formats.is_empty());
    assert!(data.plural.is_none());
}

// =========================================================================
// load_data
// =========================================================================

#[test]
fn load_data_applies_rule_catalog_and_formats() {
    let mut locale = Locale::with_language("hr");
    let count = locale.load_data(parse_payload()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(locale.plural_rule().nplurals(), 3);
    assert_eq!(locale.gettext("Cancel"), "Odustani");
    assert_eq!(
        locale.get_format("DECIMAL_SEPARATOR"),
        FormatValue::Pattern(",".to_string())
    );
}

#[test]
fn load_data_twice_is_idempotent() {
    let mut locale = Locale::with_language("hr");
    locale.load_data(parse_payload()).unwrap();
    let before = locale.catalog().len();
    locale.load_data(parse_payload()).unwrap();

    assert_eq!(locale.catalog().len(), before);
    assert_eq!(locale.gettext("Cancel"), "Odustani");
    assert_eq!(locale.plural_rule().nplurals(), 3);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn arity_mismatch_fails_fast() {
    // Two-form rule, three-form entry.
    let mut locale = Locale::new();
    let err = locale
        .load([(
            "%d day".to_string(),
            Translation::from(&["%d dan", "%d dana", "%d dana"][..]),
        )])
        .unwrap_err();

    match err {
        LoadError::PluralArityMismatch { id, expected, got } => {
            assert_eq!(id, "%d day");
            assert_eq!(expected, 2);
            assert_eq!(got, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    // A failed load leaves the catalog untouched.
    assert!(locale.catalog().is_empty());
}

#[test]
fn invalid_plural_expression_fails_load() {
    let mut locale = Locale::new();
    let data: CatalogData =
        serde_json::from_str(r#"{"catalog": {}, "formats": {}, "plural": "n ?? 1"}"#).unwrap();
    assert!(matches!(
        locale.load_data(data),
        Err(LoadError::PluralRule(_))
    ));
}
