//! Root application component with context providers.

use burger_menu::scheme::Persistence;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::burger_menu::BurgerMenu;
use crate::components::color_scheme_switch::ColorSchemeRadios;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared UI state and renders site navigation inside a burger
/// menu next to the color-scheme switch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::with_persistence(Persistence::Local));
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/burger-menu.css"/>
        <Title text="Burger menu"/>

        <header class="site-header">
            <BurgerMenu>
                <nav class="site-nav">
                    <a href="/">"Home"</a>
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                </nav>
            </BurgerMenu>
            <ColorSchemeRadios/>
        </header>
    }
}
