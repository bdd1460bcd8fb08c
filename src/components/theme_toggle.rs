//! Dark-mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Button flipping the page between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button class="btn theme-toggle" on:click=on_toggle title="Toggle theme">
            {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
        </button>
    }
}
