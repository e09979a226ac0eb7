//! Deck State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_swipe::SwipeDirection;
use reactive_stores::Store;

use crate::models::CardItem;

/// Caller-owned deck state
#[derive(Clone, Debug, Default, Store)]
pub struct DeckState {
    /// Cards not yet removed, top first
    pub cards: Vec<CardItem>,
    /// Ids playing their exit transition
    pub leaving: Vec<String>,
    /// Swiped right, oldest first
    pub liked: Vec<CardItem>,
    /// Swiped left, oldest first
    pub skipped: Vec<CardItem>,
    /// Bumped on reset so reloaded cards mount fresh
    pub generation: u32,
}

impl DeckState {
    pub fn new(cards: Vec<CardItem>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    /// Record a decision and mark the card as leaving.
    /// Returns the deck generation the removal must match, or None when the
    /// card is unknown or already leaving.
    pub fn commit(&mut self, card_id: &str, direction: SwipeDirection) -> Option<u32> {
        if self.leaving.iter().any(|id| id == card_id) {
            return None;
        }
        let card = self.cards.iter().find(|c| c.id == card_id).cloned()?;
        self.leaving.push(card_id.to_string());
        match direction {
            SwipeDirection::Right => self.liked.push(card),
            SwipeDirection::Left => self.skipped.push(card),
        }
        Some(self.generation)
    }

    /// Drop a leaving card. Ignored when the deck was reset since `generation`.
    pub fn finish_exit(&mut self, card_id: &str, generation: u32) -> bool {
        if generation != self.generation || !self.leaving.iter().any(|id| id == card_id) {
            return false;
        }
        self.cards.retain(|c| c.id != card_id);
        self.leaving.retain(|id| id != card_id);
        true
    }

    /// Replace the deck, clear history and start a new generation
    pub fn reset(&mut self, cards: Vec<CardItem>) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::new(cards)
        };
    }
}

/// Type alias for the store
pub type DeckStore = Store<DeckState>;

/// Get the deck store from context
pub fn use_deck_store() -> DeckStore {
    expect_context::<DeckStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a decision and start the card's exit.
/// Returns the token to pass to `store_remove_card`.
pub fn store_commit(store: &DeckStore, card_id: &str, direction: SwipeDirection) -> Option<u32> {
    store.write().commit(card_id, direction)
}

/// Drop a card once its exit transition finished
pub fn store_remove_card(store: &DeckStore, card_id: &str, generation: u32) {
    store.write().finish_exit(card_id, generation);
}

/// Replace the deck and clear history
pub fn store_reset(store: &DeckStore, cards: Vec<CardItem>) {
    store.write().reset(cards);
}
