//! Panel configuration read from element attributes or component props.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_WIDTH, INITIAL_ATTR, MAX_WIDTH_ATTR};
use crate::status::PanelStatus;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Settings for one disclosure panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Status the panel settles in once setup finishes.
    pub initial: PanelStatus,
    /// Responsive threshold in pixels. Exposed only; no behavior hangs off it.
    pub max_width: i64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial: PanelStatus::Closed,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl PanelConfig {
    /// Build from an attribute lookup such as `Element::get_attribute`.
    ///
    /// Unknown `initial` values fall back to closed.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let max_width = parse_max_width(get(MAX_WIDTH_ATTR).as_deref());
        let initial = get(INITIAL_ATTR)
            .as_deref()
            .and_then(PanelStatus::parse)
            .unwrap_or(PanelStatus::Closed);
        Self { initial, max_width }
    }
}

/// Parse a `max-width` attribute the way `parseInt(value, 10)` reads it.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. Missing, empty or non-numeric values yield
/// [`DEFAULT_MAX_WIDTH`]; values past the `i64` range saturate.
#[must_use]
pub fn parse_max_width(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_MAX_WIDTH;
    };
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return DEFAULT_MAX_WIDTH;
    }
    rest[..digits_len].bytes().fold(0_i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}
