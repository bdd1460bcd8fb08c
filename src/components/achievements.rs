//! Achievement list with a tech-keyword highlight toggle.

use leptos::prelude::*;

use widgets::filter::is_tech;

/// Fixed achievement list rendered on the page.
const ACHIEVEMENTS: [&str; 5] = [
    "Built a game in Unity",
    "Automated the greenhouse with a Raspberry Pi",
    "Placed in a local security CTF",
    "Wrote a poem collection",
    "Ran a charity bake sale",
];

/// List plus the toggle button. The first click highlights tech-related
/// items; the second removes exactly those highlights, so a pair of
/// clicks restores the original state. Non-matching items are never
/// touched.
#[component]
pub fn Achievements() -> impl IntoView {
    let highlighted = RwSignal::new(false);

    view! {
        <button class="btn" on:click=move |_| highlighted.update(|h| *h = !*h)>
            "Highlight tech"
        </button>
        <ul class="achievements">
            {ACHIEVEMENTS
                .into_iter()
                .map(|text| {
                    let tech = is_tech(text);
                    view! {
                        <li class:highlight-tech=move || highlighted.get() && tech>
                            {text}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
