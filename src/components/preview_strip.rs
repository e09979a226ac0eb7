//! Preview Strip Component
//!
//! Read-only previews of the most recent decisions.

use leptos::prelude::*;
use leptos_swipe::SwipeDirection;

use crate::components::SwipeCard;
use crate::models::CardItem;
use crate::store::{use_deck_store, DeckStateStoreFields};

/// Last liked and last skipped cards, shown beside the stack
#[component]
pub fn PreviewStrip() -> impl IntoView {
    let store = use_deck_store();

    let preview = move |card: Option<CardItem>, side: SwipeDirection| {
        card.map(|item| view! {
            <SwipeCard
                item=item
                is_top=false
                preview=true
                preview_side=side
                on_swipe_right=|_| ()
                on_swipe_left=|_| ()
            />
        })
    };

    view! {
        <aside class="preview-strip">
            <div class="preview-slot preview-slot-left">
                <h3>"Last skipped"</h3>
                {move || preview(store.skipped().read().last().cloned(), SwipeDirection::Left)}
            </div>
            <div class="preview-slot preview-slot-right">
                <h3>"Last liked"</h3>
                {move || preview(store.liked().read().last().cloned(), SwipeDirection::Right)}
            </div>
        </aside>
    }
}
