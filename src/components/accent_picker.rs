//! Accent color cycler.
//!
//! The current position lives in an [`AccentCycler`] signal rather than
//! being re-derived from rendered style state; each click advances it and
//! re-applies the `--accent-*` custom properties on the document element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use widgets::accent::{Accent, AccentCycler};

/// Write the accent's hue/saturation/lightness custom properties.
fn apply_custom_properties(accent: &Accent) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    let _ = style.set_property("--accent-h", &accent.hue.to_string());
    let _ = style.set_property("--accent-s", accent.saturation);
    let _ = style.set_property("--accent-l", accent.lightness);
}

/// Button cycling through the fixed palette, with label and preview dot.
#[component]
pub fn AccentPicker() -> impl IntoView {
    let cycler = expect_context::<RwSignal<AccentCycler>>();

    let on_cycle = move |_| {
        cycler.update(|c| {
            c.cycle_next();
        });
        if let Some(accent) = cycler.get_untracked().current() {
            apply_custom_properties(&accent);
        }
    };

    let label = move || {
        cycler
            .get()
            .current()
            .map_or_else(|| "Current: default".to_owned(), |a| format!("Current: {}", a.label))
    };
    let dot_color = move || cycler.get().current().map(|a| a.css()).unwrap_or_default();

    view! {
        <button class="btn" on:click=on_cycle>
            "Cycle accent"
        </button>
        <span class="accent-label">{label}</span>
        <span class="accent-preview" style:background=dot_color></span>
    }
}
