//! Card Stack Component
//!
//! Renders the top of the deck and applies swipe decisions to the store.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_swipe::SwipeDirection;

use crate::components::SwipeCard;
use crate::context::use_app_config;
use crate::deck::visible_stack;
use crate::store::{store_commit, store_remove_card, use_deck_store, DeckStateStoreFields};

#[component]
pub fn CardStack() -> impl IntoView {
    let store = use_deck_store();
    let config = use_app_config();
    let max_visible = config.deck.max_visible;
    let exit_ms = config.gesture.exit_duration_ms;

    let stack = Memo::new(move |_| {
        visible_stack(&store.cards().read(), &store.leaving().read(), max_visible)
    });

    // Commit now, remove after the exit transition
    let decide = move |card_id: String, direction: SwipeDirection| {
        log::info!("listing {} swiped {}", card_id, direction.as_str());
        if let Some(generation) = store_commit(&store, &card_id, direction) {
            Timeout::new(exit_ms, move || store_remove_card(&store, &card_id, generation)).forget();
        }
    };

    view! {
        <div class="card-stack">
            <For
                each=move || {
                    let generation = store.generation().get();
                    stack.get().into_iter().map(|slot| (generation, slot)).collect::<Vec<_>>()
                }
                key=|(generation, slot)| (*generation, slot.item.id.clone())
                children=move |(_, slot)| {
                    let id = slot.item.id.clone();
                    let placement = {
                        let id = id.clone();
                        Memo::new(move |_| {
                            stack.with(|s| s.iter().find(|x| x.item.id == id).map(|x| x.placement))
                        })
                    };
                    let is_top = Signal::derive(move || placement.get().map(|p| p.is_top).unwrap_or(false));
                    let depth = Signal::derive(move || placement.get().map(|p| p.depth).unwrap_or(0));
                    let right_id = id.clone();
                    let left_id = id;
                    view! {
                        <SwipeCard
                            item=slot.item
                            is_top=is_top
                            depth=depth
                            on_swipe_right=move |_| decide(right_id.clone(), SwipeDirection::Right)
                            on_swipe_left=move |_| decide(left_id.clone(), SwipeDirection::Left)
                        />
                    }
                }
            />
            <Show when=move || store.cards().read().is_empty()>
                <div class="stack-empty">"No more listings"</div>
            </Show>
        </div>
    }
}
