//! Leptos rendition of the `<burger-menu>` disclosure panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the same root/trigger/panel structure as the element upgrade in
//! `crate::element`, so one stylesheet serves both. State lives in a signal
//! instead of the core `Disclosure`; transitions come from the core state
//! machine.

use burger_menu::config::PanelConfig;
use burger_menu::consts::{DEFAULT_MAX_WIDTH, PANEL_MARKER, ROOT_MARKER, STATUS_ATTR, TRIGGER_MARKER};
use burger_menu::markup::{self, Marker};
use burger_menu::status::{PanelStatus, Transition};
use leptos::prelude::*;

#[cfg(test)]
#[path = "burger_menu_test.rs"]
mod burger_menu_test;

/// Collapsible navigation panel with a trigger button.
///
/// Starts closed unless `initial` says otherwise. Focus moving outside the
/// component closes it.
#[component]
pub fn BurgerMenu(
    #[prop(optional)] initial: Option<PanelStatus>,
    #[prop(default = DEFAULT_MAX_WIDTH)] max_width: i64,
    children: Children,
) -> impl IntoView {
    let config = PanelConfig {
        initial: initial.unwrap_or(PanelStatus::Closed),
        max_width,
    };
    let status = RwSignal::new(settled_status(config.initial));
    let root_ref = NodeRef::<leptos::html::Div>::new();

    let on_trigger = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(next) = next_status(status.get_untracked(), Transition::TriggerClick) {
            status.set(next);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::focusin, move |_| {
            let Some(root) = root_ref.get_untracked() else {
                return;
            };
            if focus_within(&root) {
                return;
            }
            if let Some(next) = next_status(status.get_untracked(), Transition::ExternalFocus) {
                status.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="burger-menu"
            data-element=ROOT_MARKER
            data-max-width=config.max_width.to_string()
            data-status=move || status_attribute(status.get(), Marker::Root, STATUS_ATTR)
            node_ref=root_ref
        >
            <button
                class="burger-menu__trigger"
                data-element=TRIGGER_MARKER
                type="button"
                aria-label=move || status_attribute(status.get(), Marker::Trigger, "aria-label")
                aria-expanded=move || status_attribute(status.get(), Marker::Trigger, "aria-expanded")
                on:click=on_trigger
            >
                <span class="burger-menu__bar" aria-hidden="true"></span>
            </button>
            <div class="burger-menu__panel" data-element=PANEL_MARKER>
                {children()}
            </div>
        </div>
    }
}

/// Status after setup: start open, then one explicit transition to `initial`.
fn settled_status(initial: PanelStatus) -> PanelStatus {
    let opening = PanelStatus::Open;
    next_status(opening, Transition::Explicit(initial)).unwrap_or(opening)
}

/// Status after `transition`, or `None` when it would not change anything.
fn next_status(current: PanelStatus, transition: Transition) -> Option<PanelStatus> {
    let next = transition.apply(current);
    (next != current).then_some(next)
}

/// Value the core assigns to `name` on `marker` for `status`.
fn status_attribute(status: PanelStatus, marker: Marker, name: &str) -> &'static str {
    markup::status_attributes(status)
        .into_iter()
        .find(|(m, n, _)| *m == marker && *n == name)
        .map_or("", |(_, _, value)| value)
}

#[cfg(feature = "hydrate")]
fn focus_within(root: &web_sys::HtmlDivElement) -> bool {
    let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.active_element())
    else {
        return false;
    };
    let active: &web_sys::Node = active.as_ref();
    root.contains(Some(active))
}
