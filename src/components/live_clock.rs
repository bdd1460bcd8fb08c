//! Live `HH:MM:SS` clock.

use gloo_timers::callback::Interval;
use js_sys::Date;
use leptos::prelude::*;

use widgets::clock::format_hms;
use widgets::consts::CLOCK_TICK_MS;

fn now_hms() -> String {
    let now = Date::new_0();
    format_hms(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Renders immediately, then once a second. The interval handle is kept
/// alive for the component's lifetime and dropped on cleanup, which
/// cancels the timer on page teardown.
#[component]
pub fn LiveClock() -> impl IntoView {
    let display = RwSignal::new(now_hms());

    let interval = StoredValue::new_local(Some(Interval::new(CLOCK_TICK_MS, move || {
        display.set(now_hms());
    })));
    on_cleanup(move || interval.update_value(|i| drop(i.take())));

    view! { <span class="live-clock">{move || display.get()}</span> }
}
