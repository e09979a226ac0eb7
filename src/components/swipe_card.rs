//! Swipe Card Component
//!
//! A single listing card. Only the topmost, non-preview card reacts to
//! drags; every other card is a static layer of the stack.

use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, make_on_pointerdown, make_on_pointermove, make_on_pointerup, CardFrame,
    StackPlacement, SwipeDirection,
};

use crate::components::SpecGrid;
use crate::context::use_app_config;
use crate::format::format_price;
use crate::models::CardItem;

/// Draggable listing card
///
/// # Arguments
/// * `item` - Listing to display
/// * `on_swipe_right` / `on_swipe_left` - Fired once when a drag commits;
///   the owner removes the card
/// * `is_top` - Whether this is the topmost card of the stack
/// * `depth` - Stack depth, 0 = top
/// * `preview` - Render without drag capability and with a neutral transform
/// * `preview_side` - Which side a preview card is shown on
#[component]
pub fn SwipeCard(
    item: CardItem,
    #[prop(into)] on_swipe_right: Callback<()>,
    #[prop(into)] on_swipe_left: Callback<()>,
    #[prop(into)] is_top: Signal<bool>,
    #[prop(into, default = Signal::stored(0))] depth: Signal<usize>,
    #[prop(optional)] preview: bool,
    #[prop(optional)] preview_side: Option<SwipeDirection>,
) -> impl IntoView {
    let config = StoredValue::new(use_app_config().gesture);
    let swipe = create_swipe_signals();

    let interactive = Signal::derive(move || is_top.get() && !preview);

    let style = move || {
        let placement = StackPlacement {
            depth: depth.get(),
            is_top: is_top.get(),
            preview,
        };
        let offset = swipe.offset_read.get();
        let phase = swipe.phase_read.get();
        config.with_value(|c| CardFrame::resolve(offset, phase, placement, c).to_style())
    };

    let class = move || {
        let mut class = String::from("swipe-card");
        if interactive.get() {
            class.push_str(" interactive");
        }
        if preview {
            class.push_str(" preview");
        }
        if let Some(side) = preview_side {
            class.push_str(" preview-");
            class.push_str(side.as_str());
        }
        class
    };

    let title = item.title();
    let subtitle = item.subtitle();
    let price = item.price.as_ref().map(format_price);
    let image = item.image_url.clone();
    let chips = item.specs.clone();

    let content = view! {
        <Show when=move || swipe.pending_read.get() == Some(SwipeDirection::Right)>
            <div class="swipe-badge like">"LIKE"</div>
        </Show>
        <Show when=move || swipe.pending_read.get() == Some(SwipeDirection::Left)>
            <div class="swipe-badge nope">"NOPE"</div>
        </Show>

        {image.map(|src| view! {
            <img class="card-image" src=src alt=title.clone() draggable="false" />
        })}

        <div class="card-body">
            <div class="card-heading">
                <h2 class="card-title">{title.clone()}</h2>
                {subtitle.map(|year| view! { <span class="card-year">{year}</span> })}
            </div>
            {price.map(|p| view! { <div class="card-price">{p}</div> })}

            <SpecGrid item=item.clone() />

            {(!chips.is_empty()).then(|| view! {
                <div class="card-chips">
                    {chips.into_iter().map(|chip| view! { <span class="chip">{chip}</span> }).collect_view()}
                </div>
            })}
        </div>
    };

    // Preview cards get no drag input at all
    if preview {
        return view! { <div class=class style=style>{content}</div> }.into_any();
    }

    let on_down = make_on_pointerdown(swipe, interactive, config);
    let on_move = make_on_pointermove(swipe, config);
    let on_up = make_on_pointerup(swipe, config, on_swipe_right, on_swipe_left);

    view! {
        <div
            class=class
            style=style
            on:pointerdown=on_down
            on:pointermove=on_move
            on:pointerup=on_up
            on:pointercancel=on_up
        >
            {content}
        </div>
    }
    .into_any()
}
