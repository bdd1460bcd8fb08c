//! Deduplicated skill line.

use leptos::prelude::*;

use widgets::skills::{CORE, EXTRA, joined, merge_unique};

/// Renders the merged, deduplicated skill lists once at mount.
#[component]
pub fn SkillList() -> impl IntoView {
    let merged = merge_unique(&CORE, &EXTRA);
    view! { <p class="merged-skills">{joined(&merged)}</p> }
}
