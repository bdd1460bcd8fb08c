//! Thin progress bar tracking how far the page is scrolled.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

/// Current scroll percentage, straight from the window geometry.
///
/// Returns `0.0` whenever the window or body is unavailable, which also
/// covers the not-scrollable case.
fn current_percent() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(body) = window.document().and_then(|d| d.body()) else {
        return 0.0;
    };
    let scrolled = window.scroll_y().unwrap_or(0.0);
    let page_height = f64::from(body.scroll_height());
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    widgets::scroll::progress_percent(scrolled, page_height, viewport_height)
}

/// Fixed bar at the top of the page; recomputes synchronously on every
/// scroll event, no throttling.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let percent = RwSignal::new(current_percent());

    let handle = window_event_listener(ev::scroll, move |_| {
        percent.set(current_percent());
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="scroll-progress">
            <div
                class="scroll-progress__bar"
                style:width=move || format!("{}%", percent.get())
            ></div>
        </div>
    }
}
