//! Radio group and select box for choosing the color scheme.

use burger_menu::scheme::ColorScheme;
use leptos::prelude::*;

use crate::state::ui::{UiState, use_ui_state};
use crate::util::color_scheme;

#[cfg(test)]
#[path = "color_scheme_switch_test.rs"]
mod color_scheme_switch_test;

/// Auto/light/dark radio buttons. The checked radio follows the shared state.
#[component]
pub fn ColorSchemeRadios() -> impl IntoView {
    let ui = use_ui_state();
    restore_on_mount(ui);

    let choose = move |scheme: ColorScheme| {
        ui.update(|u| u.color_scheme = color_scheme::switch(u.scheme_persistence, scheme));
    };

    view! {
        <fieldset class="color-scheme-switch">
            <legend class="color-scheme-switch__legend">"Color scheme"</legend>
            {ColorScheme::ALL
                .into_iter()
                .map(move |option| {
                    view! {
                        <label class="color-scheme-switch__option">
                            <input
                                type="radio"
                                name="color-scheme"
                                id=option.as_str()
                                value=option.as_str()
                                prop:checked=move || ui.get().color_scheme == option
                                on:change=move |_| choose(option)
                            />
                            {option.label()}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// Select box variant of [`ColorSchemeRadios`].
#[component]
pub fn ColorSchemeSelect() -> impl IntoView {
    let ui = use_ui_state();
    restore_on_mount(ui);

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let persistence = ui.get_untracked().scheme_persistence;
        match color_scheme::switch_mode(persistence, &value) {
            Ok(scheme) => ui.update(|u| u.color_scheme = scheme),
            Err(err) => log::warn!("{err}"),
        }
    };

    view! {
        <label class="color-scheme-select">
            <span class="color-scheme-select__label">"Color scheme"</span>
            <select class="color-scheme-select__input" on:change=on_change>
                {ColorScheme::ALL
                    .into_iter()
                    .map(move |option| {
                        view! {
                            <option
                                value=option.as_str()
                                prop:selected=move || ui.get().color_scheme == option
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Apply the remembered scheme once the component is live in the browser.
fn restore_on_mount(ui: RwSignal<UiState>) {
    Effect::new(move || {
        let persistence = ui.get_untracked().scheme_persistence;
        let restored = color_scheme::restore(persistence);
        if let Some(next) = changed_scheme(ui.get_untracked().color_scheme, restored) {
            ui.update(|u| u.color_scheme = next);
        }
    });
}

/// `Some(restored)` when it differs from the scheme already in state.
fn changed_scheme(current: ColorScheme, restored: ColorScheme) -> Option<ColorScheme> {
    (current != restored).then_some(restored)
}
