//! On-demand browser environment report.

use leptos::prelude::*;

/// Button that writes a one-line user agent / language / network summary.
#[component]
pub fn BrowserInfo() -> impl IntoView {
    let report = RwSignal::new(String::new());

    let on_detect = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let user_agent = navigator.user_agent().unwrap_or_default();
        // An empty language string counts as unset.
        let language = navigator.language().filter(|l| !l.is_empty());
        report.set(widgets::browser::summary(
            &user_agent,
            language.as_deref(),
            navigator.on_line(),
        ));
    };

    view! {
        <button class="btn" on:click=on_detect>
            "Detect browser"
        </button>
        <p class="browser-info">{move || report.get()}</p>
    }
}
