use super::*;

// =============================================================
// PanelStatus
// =============================================================

#[test]
fn default_status_is_open() {
    assert_eq!(PanelStatus::default(), PanelStatus::Open);
}

#[test]
fn inverted_flips_both_ways() {
    assert_eq!(PanelStatus::Open.inverted(), PanelStatus::Closed);
    assert_eq!(PanelStatus::Closed.inverted(), PanelStatus::Open);
}

#[test]
fn next_prefers_explicit_target() {
    assert_eq!(PanelStatus::Open.next(Some(PanelStatus::Open)), PanelStatus::Open);
    assert_eq!(PanelStatus::Closed.next(Some(PanelStatus::Open)), PanelStatus::Open);
    assert_eq!(PanelStatus::Open.next(None), PanelStatus::Closed);
}

#[test]
fn as_str_matches_display() {
    for status in [PanelStatus::Open, PanelStatus::Closed] {
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn parse_is_case_and_whitespace_insensitive() {
    assert_eq!(PanelStatus::parse(" OPEN "), Some(PanelStatus::Open));
    assert_eq!(PanelStatus::parse("closed"), Some(PanelStatus::Closed));
    assert_eq!(PanelStatus::parse("Closed\n"), Some(PanelStatus::Closed));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(PanelStatus::parse(""), None);
    assert_eq!(PanelStatus::parse("shut"), None);
}

#[test]
fn serde_uses_lowercase_names() {
    let raw = serde_json::to_string(&PanelStatus::Closed).expect("serialize");
    assert_eq!(raw, "\"closed\"");
    let back: PanelStatus = serde_json::from_str("\"open\"").expect("deserialize");
    assert_eq!(back, PanelStatus::Open);
}

// =============================================================
// Transition
// =============================================================

#[test]
fn trigger_click_inverts() {
    assert_eq!(Transition::TriggerClick.apply(PanelStatus::Open), PanelStatus::Closed);
    assert_eq!(Transition::TriggerClick.apply(PanelStatus::Closed), PanelStatus::Open);
}

#[test]
fn external_focus_always_closes() {
    assert_eq!(Transition::ExternalFocus.apply(PanelStatus::Open), PanelStatus::Closed);
    assert_eq!(Transition::ExternalFocus.apply(PanelStatus::Closed), PanelStatus::Closed);
}

#[test]
fn explicit_transition_sets_target() {
    let t = Transition::Explicit(PanelStatus::Open);
    assert_eq!(t.apply(PanelStatus::Open), PanelStatus::Open);
    assert_eq!(t.apply(PanelStatus::Closed), PanelStatus::Open);
}

#[test]
fn even_number_of_clicks_restores_start() {
    for start in [PanelStatus::Open, PanelStatus::Closed] {
        let mut status = start;
        for _ in 0..6 {
            status = Transition::TriggerClick.apply(status);
        }
        assert_eq!(status, start);
    }
}
