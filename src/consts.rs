//! Shared string and numeric constants for the burger menu.

// ── Element ─────────────────────────────────────────────────────

/// Tag name the disclosure panel is registered under.
pub const TAG_NAME: &str = "burger-menu";

/// Attribute holding the responsive threshold in pixels.
pub const MAX_WIDTH_ATTR: &str = "max-width";

/// Attribute selecting the state the panel settles in after setup.
pub const INITIAL_ATTR: &str = "initial";

/// Threshold used when `max-width` is missing or unparseable.
pub const DEFAULT_MAX_WIDTH: i64 = 9999;

// ── Structural markers ──────────────────────────────────────────

/// Attribute carrying the structural marker values below.
pub const MARKER_ATTR: &str = "data-element";

pub const ROOT_MARKER: &str = "burger-root";
pub const TRIGGER_MARKER: &str = "burger-menu-trigger";
pub const PANEL_MARKER: &str = "burger-menu-panel";

/// Attribute on the root reflecting the current panel status.
pub const STATUS_ATTR: &str = "data-status";

/// Elements eligible for keyboard focus inside the panel.
pub const FOCUSABLE_SELECTOR: &str = concat!(
    "a[href], area[href], ",
    "button:not([disabled]), input:not([disabled]), ",
    "select:not([disabled]), textarea:not([disabled]), ",
    "iframe, object, embed, [contenteditable], ",
    "[tabindex]:not([tabindex^=\"-\"])",
);

// ── Color scheme ────────────────────────────────────────────────

/// Storage key holding the color-scheme preference.
pub const SCHEME_STORAGE_KEY: &str = "mode";

/// CSS property written on `<html>`.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";
