//! Dark-mode persistence and the `<body>` class flip.
//!
//! The preference lives in `localStorage` under `prefersDark` as the
//! literal string `"true"` or `"false"`. Toggling also applies a
//! `theme-transition` marker class for the duration of the CSS
//! transition, then removes it. Storage failures are ignored; the page
//! simply starts in light mode.

use gloo_timers::callback::Timeout;

use widgets::consts::THEME_TRANSITION_MS;
use widgets::theme::{STORAGE_KEY, is_dark_stored, stored_value};

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Apply or remove the `dark` class on `<body>`.
pub fn apply(dark: bool) {
    if let Some(body) = body() {
        let classes = body.class_list();
        if dark {
            let _ = classes.add_1("dark");
        } else {
            let _ = classes.remove_1("dark");
        }
    }
}

/// Read the stored preference and apply it. Returns the restored flag.
///
/// Only the exact string `"true"` restores dark mode; anything else,
/// including an absent entry, leaves the light default.
pub fn restore() -> bool {
    let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    let dark = is_dark_stored(stored.as_deref());
    if dark {
        apply(true);
    }
    dark
}

/// Flip the mode, persist the new flag, and run the transition marker.
pub fn toggle(current: bool) -> bool {
    let next = !current;

    if let Some(body) = body() {
        let _ = body.class_list().add_1("theme-transition");
    }
    apply(next);

    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, stored_value(next));
    }

    Timeout::new(THEME_TRANSITION_MS, || {
        if let Some(body) = body() {
            let _ = body.class_list().remove_1("theme-transition");
        }
    })
    .forget();

    next
}
