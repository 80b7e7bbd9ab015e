//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and read/write shared state from
//! Leptos context when an application provides it.

pub mod burger_menu;
pub mod color_scheme_switch;
