//! Integration tests for plural rule parsing and evaluation.

use msgcat::PluralRule;

// =========================================================================
// Default and boolean rules
// =========================================================================

#[test]
fn default_rule_is_germanic() {
    let rule = PluralRule::default();
    assert_eq!(rule.nplurals(), 2);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(0), 1);
    assert_eq!(rule.index(2), 1);
}

#[test]
fn boolean_expression_selects_between_two_forms() {
    let rule = PluralRule::parse("(n != 1)").unwrap();
    assert_eq!(rule.nplurals(), 2);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(5), 1);
}

#[test]
fn french_style_zero_is_singular() {
    let rule = PluralRule::parse("(n > 1)").unwrap();
    assert_eq!(rule.index(0), 0);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(2), 1);
}

// =========================================================================
// Ternary chains
// =========================================================================

#[test]
fn croatian_three_form_rule() {
    let rule = PluralRule::parse(
        "n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
    )
    .unwrap();
    assert_eq!(rule.nplurals(), 3);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(21), 0);
    assert_eq!(rule.index(2), 1);
    assert_eq!(rule.index(4), 1);
    assert_eq!(rule.index(22), 1);
    assert_eq!(rule.index(5), 2);
    assert_eq!(rule.index(11), 2);
    assert_eq!(rule.index(14), 2);
    assert_eq!(rule.index(100), 2);
}

#[test]
fn arabic_six_form_rule() {
    let rule = PluralRule::parse(
        "n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 ? 4 : 5",
    )
    .unwrap();
    assert_eq!(rule.nplurals(), 6);
    assert_eq!(rule.index(0), 0);
    assert_eq!(rule.index(1), 1);
    assert_eq!(rule.index(2), 2);
    assert_eq!(rule.index(3), 3);
    assert_eq!(rule.index(11), 4);
    assert_eq!(rule.index(100), 5);
}

#[test]
fn constant_expression_means_one_form() {
    let rule = PluralRule::parse("0").unwrap();
    assert_eq!(rule.nplurals(), 1);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(99), 0);
}

// =========================================================================
// Header parsing
// =========================================================================

#[test]
fn parse_forms_header_takes_declared_count() {
    let rule = PluralRule::parse_forms("nplurals=2; plural=(n != 1);").unwrap();
    assert_eq!(rule.nplurals(), 2);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(3), 1);
}

#[test]
fn parse_forms_header_tolerates_spacing() {
    let rule = PluralRule::parse_forms("nplurals = 3 ; plural = n==1 ? 0 : n==2 ? 1 : 2").unwrap();
    assert_eq!(rule.nplurals(), 3);
    assert_eq!(rule.index(2), 1);
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn parse_error_reports_column() {
    let err = PluralRule::parse("n ==").unwrap_err();
    assert!(err.column > 1, "column was {}", err.column);
}

#[test]
fn parse_rejects_trailing_garbage() {
    assert!(PluralRule::parse("n != 1 x").is_err());
    assert!(PluralRule::parse("(n != 1").is_err());
}

#[test]
fn parse_forms_rejects_missing_plural_clause() {
    assert!(PluralRule::parse_forms("nplurals=2;").is_err());
}

// =========================================================================
// CLDR-derived and custom rules
// =========================================================================

#[test]
fn cldr_english_has_two_forms() {
    let rule = PluralRule::for_language("en");
    assert_eq!(rule.nplurals(), 2);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(2), 1);
}

#[test]
fn cldr_russian_has_four_categories() {
    let rule = PluralRule::for_language("ru");
    assert_eq!(rule.nplurals(), 4);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(2), 1);
    assert_eq!(rule.index(5), 2);
}

#[test]
fn cldr_region_subtag_is_ignored() {
    let rule = PluralRule::for_language("pt-br");
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(7), rule.nplurals() - 1);
}

#[test]
fn cldr_unknown_language_falls_back_to_english() {
    let rule = PluralRule::for_language("xx");
    assert_eq!(rule.nplurals(), 2);
}

#[test]
fn custom_rule_clamps_out_of_range_indices() {
    let rule = PluralRule::from_fn(2, |n| n as usize);
    assert_eq!(rule.index(0), 0);
    assert_eq!(rule.index(1), 1);
    assert_eq!(rule.index(9), 1);
}
