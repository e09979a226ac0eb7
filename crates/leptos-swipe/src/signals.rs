//! Reactive wiring for a swipe card.
//!
//! The tracker lives in a `StoredValue`; after each event its offset,
//! phase and pending direction are mirrored into signals the view reads.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::gesture::{dispatch_release, GestureConfig, SwipeDirection, SwipePhase, SwipeTracker};
use crate::haptics::NavigatorHaptics;

/// The pointer that owns the current gesture; other pointers are ignored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerGate {
    active: Option<i32>,
}

impl PointerGate {
    /// Take ownership for `pointer_id`. Fails while another pointer holds it.
    pub fn claim(&mut self, pointer_id: i32) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(pointer_id);
        true
    }

    pub fn owns(&self, pointer_id: i32) -> bool {
        self.active == Some(pointer_id)
    }

    /// Give up ownership. Returns false for a pointer that never owned it.
    pub fn release(&mut self, pointer_id: i32) -> bool {
        if !self.owns(pointer_id) {
            return false;
        }
        self.active = None;
        true
    }
}

/// Swipe state signals for one card
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    tracker: StoredValue<SwipeTracker>,
    pub offset_read: ReadSignal<f64>,
    pub offset_write: WriteSignal<f64>,
    pub phase_read: ReadSignal<SwipePhase>,
    pub phase_write: WriteSignal<SwipePhase>,
    pub pending_read: ReadSignal<Option<SwipeDirection>>,
    pub pending_write: WriteSignal<Option<SwipeDirection>>,
    /// Pointer x and card offset when the gesture began
    start_x: StoredValue<f64>,
    start_offset: StoredValue<f64>,
    /// Active pointer, so extra touches are ignored
    pointer: StoredValue<PointerGate>,
    /// Bumped to stop a running return animation
    animation_gen: StoredValue<u32>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (offset_read, offset_write) = signal(0.0f64);
    let (phase_read, phase_write) = signal(SwipePhase::Idle);
    let (pending_read, pending_write) = signal(None::<SwipeDirection>);
    SwipeSignals {
        tracker: StoredValue::new(SwipeTracker::new()),
        offset_read,
        offset_write,
        phase_read,
        phase_write,
        pending_read,
        pending_write,
        start_x: StoredValue::new(0.0),
        start_offset: StoredValue::new(0.0),
        pointer: StoredValue::new(PointerGate::default()),
        animation_gen: StoredValue::new(0),
    }
}

impl SwipeSignals {
    /// Push tracker state into the signals
    fn sync(&self, config: &GestureConfig) {
        let tracker = self.tracker.get_value();
        self.offset_write.set(tracker.offset());
        self.phase_write.set(tracker.phase());
        self.pending_write.set(tracker.pending(config));
    }
}

/// Create pointerdown handler for the card.
/// `interactive` is read at event time; inert cards never start a gesture.
pub fn make_on_pointerdown(
    swipe: SwipeSignals,
    interactive: Signal<bool>,
    config: StoredValue<GestureConfig>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || swipe.pointer.with_value(|p| p.active.is_some()) {
            return;
        }
        let mut started = false;
        swipe.tracker.update_value(|t| started = t.begin(interactive.get_untracked()));
        if !started {
            return;
        }

        swipe.animation_gen.update_value(|g| *g = g.wrapping_add(1));
        swipe.pointer.update_value(|p| {
            p.claim(ev.pointer_id());
        });
        swipe.start_x.set_value(ev.client_x() as f64);
        swipe.start_offset.set_value(swipe.tracker.with_value(|t| t.offset()));

        // Keep receiving moves after the pointer leaves the card
        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        config.with_value(|c| swipe.sync(c));
    }
}

/// Create pointermove handler for the card
pub fn make_on_pointermove(
    swipe: SwipeSignals,
    config: StoredValue<GestureConfig>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !swipe.pointer.with_value(|p| p.owns(ev.pointer_id())) {
            return;
        }
        let dx = ev.client_x() as f64 - swipe.start_x.get_value();
        let origin = swipe.start_offset.get_value();
        config.with_value(|c| {
            swipe.tracker.update_value(|t| t.drag(origin, dx, c));
            swipe.sync(c);
        });
    }
}

/// Create pointerup / pointercancel handler for the card.
/// Fires `on_right` or `on_left` on commit, otherwise springs back to origin.
pub fn make_on_pointerup(
    swipe: SwipeSignals,
    config: StoredValue<GestureConfig>,
    on_right: Callback<()>,
    on_left: Callback<()>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let mut released = false;
        swipe.pointer.update_value(|p| released = p.release(ev.pointer_id()));
        if !released {
            return;
        }

        let cfg = config.get_value();
        let mut tracker = swipe.tracker.get_value();
        let decision = tracker.release(&cfg, &NavigatorHaptics);
        // Store state before the owner's callback runs
        swipe.tracker.set_value(tracker);
        swipe.sync(&cfg);

        let needs_return = dispatch_release(decision, tracker.phase(), || on_right.run(()), || on_left.run(()));
        if needs_return {
            start_return_animation(swipe, config);
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Drive the tracker's spring on animation frames until it settles
/// or a newer gesture bumps the generation.
fn start_return_animation(swipe: SwipeSignals, config: StoredValue<GestureConfig>) {
    let Some(win) = web_sys::window() else {
        // No frame scheduler: settle immediately
        swipe.tracker.set_value(SwipeTracker::new());
        config.with_value(|c| swipe.sync(c));
        return;
    };

    let generation = swipe.animation_gen.get_value();
    let last = Rc::new(RefCell::new(now_ms()));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_handle = frame.clone();

    *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        // Card unmounted or a new drag started
        let Some(current) = swipe.animation_gen.try_get_value() else {
            frame_handle.borrow_mut().take();
            return;
        };
        if current != generation {
            frame_handle.borrow_mut().take();
            return;
        }

        let now = now_ms();
        let dt = (now - *last.borrow()) / 1000.0;
        *last.borrow_mut() = now;

        let mut running = false;
        config.with_value(|c| {
            swipe.tracker.update_value(|t| running = t.tick(dt, c));
            swipe.sync(c);
        });

        if !running {
            frame_handle.borrow_mut().take();
            return;
        }
        if let (Some(win), Some(cb)) = (web_sys::window(), frame_handle.borrow().as_ref()) {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
