//! # homepage
//!
//! Leptos + WASM rendition of a static personal page: a flat set of
//! independent visual widgets (theme toggle, scroll progress, accent
//! cycler, confetti, live clock, and friends) wired up by one startup
//! routine. Pure widget logic lives in the sibling `widgets` crate; this
//! crate owns the DOM glue.

use leptos::mount::mount_to_body;

mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Readable panics and a console logger before anything mounts.
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(app::App);
}
