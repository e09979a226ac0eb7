//! Leptos Swipe Utilities
//!
//! Drag-to-decide gestures for stacked cards.
//! The gesture model is plain Rust; `signals` wires it to pointer events
//! and animation frames.

pub mod gesture;
pub mod haptics;
pub mod interpolate;
pub mod signals;
pub mod spring;

pub use gesture::{
    dispatch_release, evaluate, opacity, pending_direction, rotation, CardFrame, Decision, GestureConfig,
    StackPlacement, SwipeDirection, SwipePhase, SwipeTracker,
};
pub use haptics::{HapticPattern, Haptics, NavigatorHaptics, NoHaptics};
pub use signals::{create_swipe_signals, make_on_pointerdown, make_on_pointermove, make_on_pointerup, PointerGate, SwipeSignals};
pub use spring::{SpringConfig, SpringState};
