//! One component per widget.
//!
//! Components read shared state from Leptos context where the spec calls
//! for it (theme flag, accent cycler) and otherwise keep their state
//! local. Pure behavior comes from the `widgets` crate; only DOM wiring
//! lives here.

pub mod accent_picker;
pub mod achievements;
pub mod browser_info;
pub mod confetti;
pub mod live_clock;
pub mod rgb_mixer;
pub mod scroll_progress;
pub mod skill_list;
pub mod theme_toggle;
pub mod tilt_card;
