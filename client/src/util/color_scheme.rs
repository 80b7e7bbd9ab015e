//! Color-scheme initialization and switching for the live document.
//!
//! Writes the CSS `color-scheme` property on the `<html>` element and
//! remembers the choice in the storage area picked by [`Persistence`].
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Applying and persisting are best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

use burger_menu::scheme::{ColorScheme, Persistence, SchemeError, SchemeSwitch, SchemeTarget};

use super::storage::BrowserStore;

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

/// Attribute on `<html>` naming the storage area: `none`, `session`, `local`.
#[cfg(feature = "hydrate")]
const PERSISTENCE_ATTR: &str = "data-scheme-persistence";

/// [`SchemeTarget`] writing the `color-scheme` property on `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScheme;

impl SchemeTarget for DocumentScheme {
    fn apply(&self, scheme: ColorScheme) {
        apply(scheme);
    }
}

/// Switch wired to the live document and the chosen storage area.
pub fn switcher(persistence: Persistence) -> SchemeSwitch<BrowserStore, DocumentScheme> {
    SchemeSwitch::new(BrowserStore::new(persistence), DocumentScheme)
}

/// Storage area the page asked for via `data-scheme-persistence` on `<html>`.
///
/// Defaults to `localStorage` when the attribute is absent or unknown.
pub fn page_persistence() -> Persistence {
    #[cfg(feature = "hydrate")]
    {
        let value = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute(PERSISTENCE_ATTR));
        match value.as_deref().map(str::trim) {
            Some("none") => Persistence::None,
            Some("session") => Persistence::Session,
            _ => Persistence::Local,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Persistence::Local
    }
}

/// Set the `color-scheme` property on the `<html>` element.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "hydrate")]
    {
        use burger_menu::consts::COLOR_SCHEME_PROPERTY;
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
            let _ = html
                .style()
                .set_property(COLOR_SCHEME_PROPERTY, scheme.css_value());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}

/// Apply the remembered preference. Called once at page load.
pub fn restore(persistence: Persistence) -> ColorScheme {
    switcher(persistence).restore()
}

/// Apply `scheme` and remember it.
pub fn switch(persistence: Persistence, scheme: ColorScheme) -> ColorScheme {
    switcher(persistence).switch(scheme)
}

/// Apply a `<select>` option value.
///
/// # Errors
///
/// Returns [`SchemeError::UnknownMode`] for values other than `auto`,
/// `light` and `dark`; nothing is applied then.
pub fn switch_mode(persistence: Persistence, mode: &str) -> Result<ColorScheme, SchemeError> {
    switcher(persistence).switch_mode(mode)
}
