//! Three-channel RGB mixer.

use leptos::prelude::*;

use widgets::mixer::{channel_value, rgb_css};

/// Three number inputs sharing one re-render: any input event re-reads
/// all channels and updates both the swatch and the label. Values are
/// passed through unvalidated, matching the mixer's contract.
#[component]
pub fn RgbMixer() -> impl IntoView {
    let red = RwSignal::new("128".to_owned());
    let green = RwSignal::new("128".to_owned());
    let blue = RwSignal::new("128".to_owned());

    // Rendered once at initialization and again on every change.
    let css = Memo::new(move |_| {
        rgb_css(
            channel_value(&red.get()),
            channel_value(&green.get()),
            channel_value(&blue.get()),
        )
    });

    let channel = |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="mixer__channel">
                {label}
                <input
                    type="number"
                    min="0"
                    max="255"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="mixer">
            {channel("R", red)}
            {channel("G", green)}
            {channel("B", blue)}
            <span class="mixer__swatch" style:background=move || css.get()></span>
            <span class="mixer__label">{move || css.get()}</span>
        </div>
    }
}
