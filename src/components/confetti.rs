//! Confetti canvas host.
//!
//! The pure [`Burst`] owns the particle simulation; this component feeds
//! it `Math.random`, drives one `step` per animation frame, and draws the
//! squares. Each click spawns a fully independent burst — overlapping
//! loops are intentional and each stops on its own after the frame
//! budget runs out.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use widgets::confetti::{Burst, fill_style};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw(ctx: &CanvasRenderingContext2d, burst: &Burst, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in burst.particles() {
        ctx.set_fill_style_str(&fill_style(p.hue));
        ctx.fill_rect(p.x, p.y, p.size, p.size);
    }
}

/// Size the backing store to the rendered element, spawn a burst, and run
/// its frame loop to completion.
fn run_burst(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    let Some(ctx) = context_2d(canvas) else {
        log::debug!("confetti: no 2d context, skipping burst");
        return;
    };

    let burst = Rc::new(RefCell::new(Burst::spawn(width, height, js_sys::Math::random)));

    // Self-referential holder: the closure re-schedules itself until the
    // burst reports it is out of frames, then drops itself.
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let more = {
            let mut burst = burst.borrow_mut();
            let more = burst.step();
            draw(&ctx, &burst, width, height);
            more
        };
        if more {
            let rescheduled = match (web_sys::window(), holder_for_cb.borrow().as_ref()) {
                (Some(window), Some(cb)) => window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .is_ok(),
                _ => false,
            };
            if rescheduled {
                return;
            }
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    }
}

/// Canvas plus the button that fires a burst over it.
#[component]
pub fn ConfettiCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let on_burst = move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            run_burst(&canvas);
        }
    };

    view! {
        <button class="btn" on:click=on_burst>
            "Celebrate"
        </button>
        <canvas node_ref=canvas_ref class="confetti-canvas">
            "Your browser does not support canvas."
        </canvas>
    }
}
