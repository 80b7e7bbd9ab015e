//! Local UI chrome state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Components read an `RwSignal<UiState>` from context when an application
//! provides one and fall back to a private signal otherwise, so each component
//! also works standalone.

use burger_menu::scheme::{ColorScheme, Persistence};
use leptos::prelude::*;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub color_scheme: ColorScheme,
    pub scheme_persistence: Persistence,
}

impl UiState {
    #[must_use]
    pub fn with_persistence(persistence: Persistence) -> Self {
        Self { scheme_persistence: persistence, ..Self::default() }
    }
}

/// The context `UiState` signal, or a fresh one when none is provided.
pub fn use_ui_state() -> RwSignal<UiState> {
    use_context::<RwSignal<UiState>>().unwrap_or_else(|| RwSignal::new(UiState::default()))
}
