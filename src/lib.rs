//! Browser-independent core for the `<burger-menu>` disclosure panel and the
//! color-scheme switch.
//!
//! Everything here runs on plain Rust so it can be tested natively. The
//! `client` crate supplies the DOM side: it implements [`disclosure::PanelHost`]
//! over `web-sys` elements and [`scheme::PreferenceStore`] over browser storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`status`] | Open/closed panel state and transition rules |
//! | [`observe`] | Value container that notifies one listener on change |
//! | [`markup`] | Shell markup and structural markers |
//! | [`config`] | Attribute parsing (`max-width`, `initial`) |
//! | [`disclosure`] | Attach/toggle/focus lifecycle over a host seam |
//! | [`scheme`] | Light/dark/auto color-scheme preference |
//! | [`consts`] | Tag name, markers, storage keys, defaults |

pub mod config;
pub mod consts;
pub mod disclosure;
pub mod markup;
pub mod observe;
pub mod scheme;
pub mod status;
