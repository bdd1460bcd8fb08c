//! Pure widget logic for the personal homepage.
//!
//! Every module here is free of browser dependencies: no DOM, no timers,
//! no `web-sys`. Randomness and time are injected by the caller, so the
//! full behavior of each widget is unit-testable on the host. The
//! `homepage` crate wires these modules to DOM elements and events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Dark-mode flag parsing and persistence values |
//! | [`scroll`] | Scroll progress percentage math |
//! | [`browser`] | Browser info summary line formatting |
//! | [`accent`] | Accent palette and explicit-index cycler |
//! | [`confetti`] | Particle burst simulation with a fixed frame budget |
//! | [`clock`] | Zero-padded `HH:MM:SS` formatting |
//! | [`filter`] | Tech-keyword matching for the achievement list |
//! | [`mixer`] | RGB channel parsing and `rgb(...)` formatting |
//! | [`tilt`] | Pointer-fraction to rotation mapping |
//! | [`skills`] | Order-preserving list deduplication |
//! | [`consts`] | Shared numeric constants (frame budget, gravity, etc.) |

pub mod accent;
pub mod browser;
pub mod clock;
pub mod confetti;
pub mod consts;
pub mod filter;
pub mod mixer;
pub mod scroll;
pub mod skills;
pub mod theme;
pub mod tilt;
