//! The single page: every widget section in one column.

use leptos::prelude::*;

use crate::components::accent_picker::AccentPicker;
use crate::components::achievements::Achievements;
use crate::components::browser_info::BrowserInfo;
use crate::components::confetti::ConfettiCanvas;
use crate::components::live_clock::LiveClock;
use crate::components::rgb_mixer::RgbMixer;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::skill_list::SkillList;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::tilt_card::TiltCard;

/// Home page layout. Sections are independent; removing one never
/// affects the others.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ScrollProgress/>

        <main class="page">
            <header class="page__header">
                <h1>"Hi, I build small things"</h1>
                <LiveClock/>
                <ThemeToggle/>
            </header>

            <section class="page__section">
                <h2>"Accent"</h2>
                <AccentPicker/>
            </section>

            <section class="page__section">
                <h2>"Skills"</h2>
                <SkillList/>
            </section>

            <section class="page__section">
                <h2>"Achievements"</h2>
                <Achievements/>
            </section>

            <section class="page__section">
                <h2>"Confetti"</h2>
                <ConfettiCanvas/>
            </section>

            <section class="page__section">
                <h2>"Color mixer"</h2>
                <RgbMixer/>
            </section>

            <section class="page__section">
                <h2>"Tilt"</h2>
                <TiltCard/>
            </section>

            <section class="page__section">
                <h2>"About this browser"</h2>
                <BrowserInfo/>
            </section>
        </main>
    }
}
