//! UI Components
//!
//! Reusable Leptos components.

mod card_stack;
mod preview_strip;
mod spec_grid;
mod swipe_card;

pub use card_stack::CardStack;
pub use preview_strip::PreviewStrip;
pub use spec_grid::SpecGrid;
pub use swipe_card::SwipeCard;
