//! Deck Utilities
//!
//! The deck owns which cards remain; cards only know their own slot.

use leptos_swipe::StackPlacement;

use crate::models::CardItem;

/// A card to render and where it sits
#[derive(Debug, Clone, PartialEq)]
pub struct StackSlot {
    pub item: CardItem,
    pub placement: StackPlacement,
    /// Playing its exit transition, no longer part of the stack
    pub leaving: bool,
}

/// Cards to render in back-to-front order.
///
/// At most `max_visible` settled cards get depths 0.. (0 = top). Leaving
/// cards keep rendering until removed but never count as top.
pub fn visible_stack(cards: &[CardItem], leaving: &[String], max_visible: usize) -> Vec<StackSlot> {
    let mut settled = Vec::new();
    let mut exiting = Vec::new();

    for item in cards {
        if leaving.contains(&item.id) {
            exiting.push(StackSlot {
                item: item.clone(),
                placement: StackPlacement { depth: 0, is_top: false, preview: false },
                leaving: true,
            });
        } else if settled.len() < max_visible {
            let depth = settled.len();
            settled.push(StackSlot {
                item: item.clone(),
                placement: StackPlacement { depth, is_top: depth == 0, preview: false },
                leaving: false,
            });
        }
    }

    // Deepest first so later siblings paint above
    settled.reverse();
    settled.extend(exiting);
    settled
}
