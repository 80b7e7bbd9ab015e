//! # client
//!
//! Leptos + WASM front end for the `burger-menu` core crate.
//!
//! Two ways in:
//!
//! - Static pages load the module and call [`start`], which restores the
//!   color scheme and upgrades every `<burger-menu>` element in the document
//!   (and any inserted later) through [`element`].
//! - Leptos applications render the [`components`] directly and share the
//!   color-scheme state through [`state::ui::UiState`].
//!
//! Browser-only code sits behind the `hydrate` feature; without it the
//! helpers compile to no-ops so components still render on the server.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod element;
pub mod state;
pub mod util;

/// Module entry point for static pages.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::color_scheme::restore(util::color_scheme::page_persistence());
    element::register();
}

/// Render [`app::App`] into `<body>` on the client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(app::App);
}

/// Button handler: follow the operating system preference.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = switchAuto)]
pub fn switch_auto() {
    util::color_scheme::switch(util::color_scheme::page_persistence(), burger_menu::scheme::ColorScheme::Auto);
}

/// Button handler: force the light scheme.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = switchLight)]
pub fn switch_light() {
    util::color_scheme::switch(util::color_scheme::page_persistence(), burger_menu::scheme::ColorScheme::Light);
}

/// Button handler: force the dark scheme.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = switchDark)]
pub fn switch_dark() {
    util::color_scheme::switch(util::color_scheme::page_persistence(), burger_menu::scheme::ColorScheme::Dark);
}

/// Select handler: `auto`, `light` or `dark`. Unknown values are logged and
/// ignored.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = switchMode)]
pub fn switch_mode(mode: &str) {
    if let Err(err) = util::color_scheme::switch_mode(util::color_scheme::page_persistence(), mode) {
        log::warn!("{err}");
    }
}
