use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_scheme_is_auto() {
    let state = UiState::default();
    assert_eq!(state.color_scheme, ColorScheme::Auto);
}

#[test]
fn ui_state_default_persistence_is_local() {
    let state = UiState::default();
    assert_eq!(state.scheme_persistence, Persistence::Local);
}

#[test]
fn with_persistence_keeps_auto_scheme() {
    let state = UiState::with_persistence(Persistence::Session);
    assert_eq!(state.scheme_persistence, Persistence::Session);
    assert_eq!(state.color_scheme, ColorScheme::Auto);
}
