//! Shell markup wrapped around the author's original content.
//!
//! The author's markup is inserted verbatim: it is HTML the page author wrote
//! inside `<burger-menu>`, not untrusted text.

use crate::consts::{MARKER_ATTR, PANEL_MARKER, ROOT_MARKER, STATUS_ATTR, TRIGGER_MARKER};
use crate::status::PanelStatus;

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Structural pieces the interactive wiring looks up after render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Root,
    Trigger,
    Panel,
}

impl Marker {
    pub const ALL: [Self; 3] = [Self::Root, Self::Trigger, Self::Panel];

    /// Value of the `data-element` attribute.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Root => ROOT_MARKER,
            Self::Trigger => TRIGGER_MARKER,
            Self::Panel => PANEL_MARKER,
        }
    }

    /// CSS selector matching the marked element.
    #[must_use]
    pub fn selector(self) -> String {
        format!("[{MARKER_ATTR}=\"{}\"]", self.value())
    }
}

/// Build the wrapper structure: a root holding the trigger button and a panel
/// that contains `initial_markup`.
#[must_use]
pub fn render_shell(initial_markup: &str) -> String {
    format!(
        concat!(
            "<div class=\"burger-menu\" {attr}=\"{root}\">",
            "<button class=\"burger-menu__trigger\" {attr}=\"{trigger}\" type=\"button\" aria-label=\"Open menu\">",
            "<span class=\"burger-menu__bar\" aria-hidden=\"true\"></span>",
            "</button>",
            "<div class=\"burger-menu__panel\" {attr}=\"{panel}\">{content}</div>",
            "</div>",
        ),
        attr = MARKER_ATTR,
        root = ROOT_MARKER,
        trigger = TRIGGER_MARKER,
        panel = PANEL_MARKER,
        content = initial_markup,
    )
}

/// Attribute writes that reflect `status` on the rendered structure.
///
/// Returned as `(marker, attribute, value)` so every host applies the same set.
#[must_use]
pub fn status_attributes(status: PanelStatus) -> [(Marker, &'static str, &'static str); 3] {
    let expanded = if status.is_open() { "true" } else { "false" };
    let label = if status.is_open() { "Close menu" } else { "Open menu" };
    [
        (Marker::Root, STATUS_ATTR, status.as_str()),
        (Marker::Trigger, "aria-expanded", expanded),
        (Marker::Trigger, "aria-label", label),
    ]
}
