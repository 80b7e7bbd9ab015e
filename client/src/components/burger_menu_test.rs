use super::*;

#[test]
fn next_status_reports_changes_only() {
    assert_eq!(
        next_status(PanelStatus::Closed, Transition::TriggerClick),
        Some(PanelStatus::Open)
    );
    assert_eq!(next_status(PanelStatus::Closed, Transition::ExternalFocus), None);
    assert_eq!(
        next_status(PanelStatus::Open, Transition::Explicit(PanelStatus::Open)),
        None
    );
}

#[test]
fn external_focus_closes_open_menu() {
    assert_eq!(
        next_status(PanelStatus::Open, Transition::ExternalFocus),
        Some(PanelStatus::Closed)
    );
}

#[test]
fn settles_from_open_into_initial_status() {
    assert_eq!(settled_status(PanelStatus::Closed), PanelStatus::Closed);
    assert_eq!(settled_status(PanelStatus::Open), PanelStatus::Open);
}

#[test]
fn settled_status_matches_core_disclosure() {
    // The core panel also starts open and applies the initial status as an
    // explicit transition.
    for initial in [PanelStatus::Open, PanelStatus::Closed] {
        assert_eq!(
            settled_status(initial),
            Transition::Explicit(initial).apply(PanelStatus::default())
        );
    }
}

#[test]
fn status_attribute_matches_core_markup() {
    assert_eq!(status_attribute(PanelStatus::Open, Marker::Root, STATUS_ATTR), "open");
    assert_eq!(status_attribute(PanelStatus::Closed, Marker::Root, STATUS_ATTR), "closed");
    assert_eq!(status_attribute(PanelStatus::Open, Marker::Trigger, "aria-expanded"), "true");
    assert_eq!(status_attribute(PanelStatus::Closed, Marker::Trigger, "aria-label"), "Open menu");
}

#[test]
fn status_attribute_is_empty_for_unknown_names() {
    assert_eq!(status_attribute(PanelStatus::Open, Marker::Panel, "aria-expanded"), "");
    assert_eq!(status_attribute(PanelStatus::Open, Marker::Root, "hidden"), "");
}
