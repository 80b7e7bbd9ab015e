//! Light/dark/auto color-scheme preference.
//!
//! The chosen scheme is applied through a [`SchemeTarget`] (the `color-scheme`
//! style property on `<html>` in the browser) and optionally remembered in a
//! [`PreferenceStore`] under a single string key. `Auto` is never stored: it
//! removes the key so the operating system preference applies again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::SCHEME_STORAGE_KEY;

#[cfg(test)]
#[path = "scheme_test.rs"]
mod scheme_test;

/// Error returned when a mode string names no known scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemeError {
    #[error("unknown color scheme mode: {0:?}")]
    UnknownMode(String),
}

/// User-selectable color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the operating system preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    /// Value for the CSS `color-scheme` property.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Auto => "light dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Mode string used in storage and form values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable label for switch controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Resolve a stored preference. Only `light` and `dark` are honored;
    /// anything else means the operating system decides.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Auto,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SchemeError::UnknownMode(other.to_owned())),
        }
    }
}

/// Where the preference survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persistence {
    /// Not remembered; every page load starts from the OS preference.
    None,
    /// Remembered for the browser tab (`sessionStorage`).
    Session,
    /// Remembered across visits (`localStorage`). Needs consent under GDPR.
    #[default]
    Local,
}

/// String key/value storage for the preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Receives the scheme to render.
pub trait SchemeTarget {
    fn apply(&self, scheme: ColorScheme);
}

/// Applies and remembers the color scheme.
pub struct SchemeSwitch<S, T> {
    store: S,
    target: T,
    current: ColorScheme,
}

impl<S: PreferenceStore, T: SchemeTarget> SchemeSwitch<S, T> {
    #[must_use]
    pub fn new(store: S, target: T) -> Self {
        Self { store, target, current: ColorScheme::Auto }
    }

    /// Apply whatever the store remembers. Called once at page load.
    pub fn restore(&mut self) -> ColorScheme {
        let stored = self.store.get(SCHEME_STORAGE_KEY);
        let scheme = ColorScheme::from_stored(stored.as_deref());
        self.current = scheme;
        self.target.apply(scheme);
        log::debug!("restored color scheme {scheme} from {stored:?}");
        scheme
    }

    /// Apply `scheme` and remember it. `Auto` clears the stored preference.
    pub fn switch(&mut self, scheme: ColorScheme) -> ColorScheme {
        self.target.apply(scheme);
        match scheme {
            ColorScheme::Auto => self.store.remove(SCHEME_STORAGE_KEY),
            other => self.store.set(SCHEME_STORAGE_KEY, other.as_str()),
        }
        self.current = scheme;
        match scheme {
            ColorScheme::Auto => log::info!("Operating system preferred color scheme active"),
            ColorScheme::Light => log::info!("Light mode active"),
            ColorScheme::Dark => log::info!("Dark mode active"),
        }
        scheme
    }

    /// Select-box entry point: parse the option value, then [`switch`](Self::switch).
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::UnknownMode`] without touching the page or the
    /// store when `mode` is not `auto`, `light` or `dark`.
    pub fn switch_mode(&mut self, mode: &str) -> Result<ColorScheme, SchemeError> {
        let scheme = mode.parse::<ColorScheme>()?;
        Ok(self.switch(scheme))
    }

    #[must_use]
    pub fn current(&self) -> ColorScheme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
