//! Root application component and startup wiring.
//!
//! Startup is an explicit initialization list: restore the persisted
//! theme, provide the shared signals, then compose one component per
//! widget. Each component checks its own prerequisites and silently
//! renders nothing useful when they are missing; none depends on another
//! except through the context signals provided here.

use leptos::prelude::*;

use widgets::accent::AccentCycler;

use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let dark_mode = theme::restore();
    log::debug!("startup: restored theme, dark={dark_mode}");

    let ui = RwSignal::new(UiState { dark_mode });
    let accent = RwSignal::new(AccentCycler::new());

    provide_context(ui);
    provide_context(accent);

    view! { <HomePage/> }
}
