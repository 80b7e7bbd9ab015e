//! Open/closed panel status and the transitions between them.
//!
//! DESIGN
//! ======
//! The status is a two-valued enum rather than a bool so call sites read as
//! the state machine they drive. Transitions are pure functions of the current
//! status; the disclosure lifecycle decides when to apply them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Visibility of the disclosure panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    /// Panel content visible. Every panel starts here before setup settles it.
    #[default]
    Open,
    /// Panel content hidden behind the trigger.
    Closed,
}

impl PanelStatus {
    /// The opposite status.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Resolve a toggle request: an explicit target wins, otherwise invert.
    #[must_use]
    pub fn next(self, target: Option<Self>) -> Self {
        target.unwrap_or_else(|| self.inverted())
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Attribute value written to the DOM.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Parse an attribute value, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("open") {
            Some(Self::Open)
        } else if value.eq_ignore_ascii_case("closed") {
            Some(Self::Closed)
        } else {
            None
        }
    }
}

impl fmt::Display for PanelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events that move the panel between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The trigger button was clicked.
    TriggerClick,
    /// Focus landed on an element outside the component.
    ExternalFocus,
    /// A caller asked for a specific status.
    Explicit(PanelStatus),
}

impl Transition {
    /// Status after applying this transition to `current`.
    #[must_use]
    pub fn apply(self, current: PanelStatus) -> PanelStatus {
        match self {
            Self::TriggerClick => current.inverted(),
            Self::ExternalFocus => PanelStatus::Closed,
            Self::Explicit(target) => target,
        }
    }
}
