//! Car Swipe App
//!
//! Deck shell: counters, the card stack and the decision previews.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CardStack, PreviewStrip};
use crate::context::AppConfig;
use crate::listings::load_listings;
use crate::store::{store_reset, DeckState, DeckStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Provide configuration and deck state to all children
    AppConfig::default().provide();
    let store = Store::new(DeckState::new(load_listings()));
    provide_context(store);

    let reset = move |_| {
        log::info!("deck reset");
        store_reset(&store, load_listings());
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Car Swipe"</h1>
                <p class="deck-count">
                    {move || format!(
                        "{} left · {} liked · {} skipped",
                        store.cards().read().len().saturating_sub(store.leaving().read().len()),
                        store.liked().read().len(),
                        store.skipped().read().len(),
                    )}
                </p>
                <button class="reset-btn" on:click=reset>"Reset"</button>
            </header>

            <main class="main-content">
                <CardStack />
                <PreviewStrip />
            </main>
        </div>
    }
}
