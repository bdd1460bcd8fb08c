//! Pointer-tracking tilt card.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use widgets::tilt::{RESET_TRANSFORM, angles, transform_css};

/// Card whose inner element rotates toward the pointer, 1:1 per event
/// with no smoothing. Leaving the card resets the rotation.
#[component]
pub fn TiltCard() -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let transform = RwSignal::new(RESET_TRANSFORM.to_owned());

    let on_move = move |ev: MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let frac_x = (f64::from(ev.client_x()) - rect.left()) / rect.width();
        let frac_y = (f64::from(ev.client_y()) - rect.top()) / rect.height();
        transform.set(transform_css(&angles(frac_x, frac_y)));
    };

    let on_leave = move |_| transform.set(RESET_TRANSFORM.to_owned());

    view! {
        <div class="tilt-card" node_ref=card_ref on:mousemove=on_move on:mouseleave=on_leave>
            <div class="tilt-card__inner" style:transform=move || transform.get()>
                <h3>"Current project"</h3>
                <p>"A garden sensor grid logging to a Raspberry Pi."</p>
            </div>
        </div>
    }
}
