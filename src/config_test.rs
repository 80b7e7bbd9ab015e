use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |name| map.get(name).cloned()
}

// =============================================================
// parse_max_width
// =============================================================

#[test]
fn missing_attribute_uses_default() {
    assert_eq!(parse_max_width(None), DEFAULT_MAX_WIDTH);
}

#[test]
fn empty_attribute_uses_default() {
    assert_eq!(parse_max_width(Some("")), DEFAULT_MAX_WIDTH);
    assert_eq!(parse_max_width(Some("   ")), DEFAULT_MAX_WIDTH);
}

#[test]
fn plain_integer_parses() {
    assert_eq!(parse_max_width(Some("768")), 768);
    assert_eq!(parse_max_width(Some("0")), 0);
}

#[test]
fn trailing_junk_is_ignored() {
    assert_eq!(parse_max_width(Some("640px")), 640);
    assert_eq!(parse_max_width(Some("12.5")), 12);
}

#[test]
fn leading_whitespace_and_plus_sign_accepted() {
    assert_eq!(parse_max_width(Some("  +1024")), 1024);
}

#[test]
fn non_numeric_uses_default() {
    assert_eq!(parse_max_width(Some("wide")), DEFAULT_MAX_WIDTH);
    assert_eq!(parse_max_width(Some("px100")), DEFAULT_MAX_WIDTH);
    assert_eq!(parse_max_width(Some("-")), DEFAULT_MAX_WIDTH);
}

#[test]
fn negative_values_are_kept() {
    assert_eq!(parse_max_width(Some("-200")), -200);
    assert_eq!(parse_max_width(Some("  -48px")), -48);
    assert_eq!(parse_max_width(Some("-0")), 0);
}

#[test]
fn huge_values_saturate() {
    assert_eq!(parse_max_width(Some("99999999999999")), 99_999_999_999_999);
    assert_eq!(parse_max_width(Some("99999999999999999999")), i64::MAX);
    assert_eq!(parse_max_width(Some("-99999999999999999999")), i64::MIN);
}

// =============================================================
// PanelConfig
// =============================================================

#[test]
fn default_config_starts_closed_and_unbounded() {
    let config = PanelConfig::default();
    assert_eq!(config.initial, PanelStatus::Closed);
    assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);
}

#[test]
fn from_attributes_reads_both_attributes() {
    let config = PanelConfig::from_attributes(attrs(&[("max-width", "900"), ("initial", "open")]));
    assert_eq!(config.max_width, 900);
    assert_eq!(config.initial, PanelStatus::Open);
}

#[test]
fn from_attributes_without_attributes_matches_default() {
    assert_eq!(PanelConfig::from_attributes(attrs(&[])), PanelConfig::default());
}

#[test]
fn unknown_initial_falls_back_to_closed() {
    let config = PanelConfig::from_attributes(attrs(&[("initial", "ajar")]));
    assert_eq!(config.initial, PanelStatus::Closed);
}

#[test]
fn config_deserializes_with_missing_fields() {
    let config: PanelConfig = serde_json::from_str(r#"{"maxWidth": 480}"#).expect("deserialize");
    assert_eq!(config.max_width, 480);
    assert_eq!(config.initial, PanelStatus::Closed);
}
