//! Swipe Gesture Model
//!
//! A card tracks one scalar, the horizontal drag offset. Rotation, opacity
//! and the pending direction are derived from it. On release the offset is
//! classified into a committed decision or a spring return to origin.
//!
//! Two thresholds are in play: `feedback_threshold` (50) only drives the
//! live direction hint, `commit_threshold` (150) decides the outcome.

use serde::Deserialize;

use crate::haptics::{HapticPattern, Haptics};
use crate::interpolate::{elastic_clamp, interpolate};
use crate::spring::{SpringConfig, SpringState};

/// Horizontal swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Outcome of a released drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    AcceptRight,
    AcceptLeft,
    Cancel,
}

impl Decision {
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            Self::AcceptRight => Some(SwipeDirection::Right),
            Self::AcceptLeft => Some(SwipeDirection::Left),
            Self::Cancel => None,
        }
    }
}

/// Lifecycle of one card instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    Dragging,
    /// Released under the commit threshold, springing back to 0
    Returning,
    /// Terminal; the owner is expected to remove the card
    Committed(SwipeDirection),
}

/// Gesture constants
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// |offset| above which the pending direction hint shows
    pub feedback_threshold: f64,
    /// |offset| above which a release commits
    pub commit_threshold: f64,
    /// Drag constraint on either side of the origin
    pub drag_bound: f64,
    /// Fraction of motion kept past `drag_bound`
    pub drag_elastic: f64,
    pub rotation_input: Vec<f64>,
    pub rotation_output: Vec<f64>,
    pub opacity_input: Vec<f64>,
    pub opacity_output: Vec<f64>,
    /// Scale lost per level of stack depth
    pub depth_scale_step: f64,
    /// Vertical shift per level of stack depth (px)
    pub depth_offset_px: f64,
    pub exit_offset: f64,
    pub exit_scale: f64,
    pub exit_rotation_deg: f64,
    pub exit_duration_ms: u32,
    pub return_spring: SpringConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            feedback_threshold: 50.0,
            commit_threshold: 150.0,
            drag_bound: 400.0,
            drag_elastic: 0.1,
            rotation_input: vec![-300.0, 300.0],
            rotation_output: vec![-15.0, 15.0],
            opacity_input: vec![-300.0, -50.0, 0.0, 50.0, 300.0],
            opacity_output: vec![0.0, 1.0, 1.0, 1.0, 0.0],
            depth_scale_step: 0.05,
            depth_offset_px: 8.0,
            exit_offset: 500.0,
            exit_scale: 0.8,
            exit_rotation_deg: 15.0,
            exit_duration_ms: 400,
            return_spring: SpringConfig::RETURN,
        }
    }
}

/// Card tilt in degrees
pub fn rotation(offset: f64, config: &GestureConfig) -> f64 {
    interpolate(offset, &config.rotation_input, &config.rotation_output)
}

/// Card opacity in [0, 1]
pub fn opacity(offset: f64, config: &GestureConfig) -> f64 {
    interpolate(offset, &config.opacity_input, &config.opacity_output)
}

/// Live direction hint; the threshold itself yields none
pub fn pending_direction(offset: f64, config: &GestureConfig) -> Option<SwipeDirection> {
    if offset > config.feedback_threshold {
        Some(SwipeDirection::Right)
    } else if offset < -config.feedback_threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Classify a release offset; the threshold itself cancels
pub fn evaluate(offset: f64, config: &GestureConfig) -> Decision {
    if offset > config.commit_threshold {
        Decision::AcceptRight
    } else if offset < -config.commit_threshold {
        Decision::AcceptLeft
    } else {
        Decision::Cancel
    }
}

/// Act on the result of `SwipeTracker::release`: run the matching owner
/// callback on commit. Returns true when a return animation must be driven.
pub fn dispatch_release<R, L>(decision: Option<Decision>, phase: SwipePhase, on_right: R, on_left: L) -> bool
where
    R: FnOnce(),
    L: FnOnce(),
{
    match decision {
        Some(Decision::AcceptRight) => {
            on_right();
            false
        }
        Some(Decision::AcceptLeft) => {
            on_left();
            false
        }
        Some(Decision::Cancel) => phase == SwipePhase::Returning,
        None => false,
    }
}

/// Per-card gesture state machine.
///
/// Inert trackers (not top of the stack, or preview) ignore all input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    offset: f64,
    phase: SwipePhase,
    spring: Option<SpringState>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            phase: SwipePhase::Idle,
            spring: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn pending(&self, config: &GestureConfig) -> Option<SwipeDirection> {
        match self.phase {
            SwipePhase::Dragging => pending_direction(self.offset, config),
            SwipePhase::Committed(dir) => Some(dir),
            SwipePhase::Idle | SwipePhase::Returning => None,
        }
    }

    /// Pointer went down. Interrupts a running return animation.
    /// Returns false when the gesture is refused.
    pub fn begin(&mut self, interactive: bool) -> bool {
        if !interactive {
            return false;
        }
        match self.phase {
            SwipePhase::Committed(_) | SwipePhase::Dragging => false,
            SwipePhase::Idle | SwipePhase::Returning => {
                self.phase = SwipePhase::Dragging;
                self.spring = None;
                true
            }
        }
    }

    /// New sample: `dx` is cumulative horizontal displacement since the gesture began.
    /// `origin` is the offset the card had when the gesture began.
    pub fn drag(&mut self, origin: f64, dx: f64, config: &GestureConfig) {
        if self.phase != SwipePhase::Dragging {
            return;
        }
        self.offset = elastic_clamp(origin + dx, config.drag_bound, config.drag_elastic);
    }

    /// Pointer released. Classifies the offset at most once per gesture;
    /// haptics are attempted on commit and never block the outcome.
    pub fn release(&mut self, config: &GestureConfig, haptics: &dyn Haptics) -> Option<Decision> {
        if self.phase != SwipePhase::Dragging {
            return None;
        }

        let decision = evaluate(self.offset, config);
        match decision {
            Decision::AcceptRight => {
                self.phase = SwipePhase::Committed(SwipeDirection::Right);
                let _ = haptics.vibrate(HapticPattern::Tap);
                log::debug!("swipe committed right at {:.1}", self.offset);
            }
            Decision::AcceptLeft => {
                self.phase = SwipePhase::Committed(SwipeDirection::Left);
                let _ = haptics.vibrate(HapticPattern::Triple);
                log::debug!("swipe committed left at {:.1}", self.offset);
            }
            Decision::Cancel => {
                log::debug!("swipe cancelled at {:.1}", self.offset);
                if self.offset == 0.0 {
                    self.phase = SwipePhase::Idle;
                } else {
                    self.phase = SwipePhase::Returning;
                    self.spring = Some(SpringState::new(self.offset));
                }
            }
        }
        Some(decision)
    }

    /// Advance the return animation by `dt` seconds.
    /// Returns true while more frames are needed.
    pub fn tick(&mut self, dt: f64, config: &GestureConfig) -> bool {
        let Some(mut spring) = self.spring else {
            return false;
        };
        if self.phase != SwipePhase::Returning {
            self.spring = None;
            return false;
        }

        let settled = spring.step(&config.return_spring, dt);
        self.offset = spring.position;
        if settled {
            self.offset = 0.0;
            self.spring = None;
            self.phase = SwipePhase::Idle;
            false
        } else {
            self.spring = Some(spring);
            true
        }
    }
}

/// Where a card sits in its stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StackPlacement {
    /// 0 = topmost
    pub depth: usize,
    pub is_top: bool,
    pub preview: bool,
}

impl StackPlacement {
    /// Only the topmost non-preview card takes drag input
    pub fn interactive(&self) -> bool {
        self.is_top && !self.preview
    }
}

/// Resolved visual transform for one card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    /// Eased transition in ms, or 0 when the frame follows the pointer
    pub transition_ms: u32,
}

impl CardFrame {
    pub fn resolve(offset: f64, phase: SwipePhase, placement: StackPlacement, config: &GestureConfig) -> Self {
        let z_index = 100 - placement.depth.min(100) as i32;

        if let SwipePhase::Committed(dir) = phase {
            return Self {
                translate_x: dir.sign() * config.exit_offset,
                translate_y: 0.0,
                rotate_deg: dir.sign() * config.exit_rotation_deg,
                scale: config.exit_scale,
                opacity: 0.0,
                z_index: 101,
                transition_ms: config.exit_duration_ms,
            };
        }

        if placement.preview {
            return Self {
                translate_x: 0.0,
                translate_y: 0.0,
                rotate_deg: 0.0,
                scale: 1.0,
                opacity: 1.0,
                z_index,
                transition_ms: 0,
            };
        }

        let depth = placement.depth as f64;
        let scale = 1.0 - config.depth_scale_step * depth;
        let translate_y = config.depth_offset_px * depth;

        if placement.interactive() {
            Self {
                translate_x: offset,
                translate_y,
                rotate_deg: rotation(offset, config),
                scale,
                opacity: opacity(offset, config),
                z_index,
                transition_ms: 0,
            }
        } else {
            Self {
                translate_x: 0.0,
                translate_y,
                rotate_deg: 0.0,
                scale,
                opacity: 1.0,
                z_index,
                transition_ms: 0,
            }
        }
    }

    /// Inline CSS for the card element
    pub fn to_style(&self) -> String {
        let transition = if self.transition_ms > 0 {
            format!("transition: transform {ms}ms ease, opacity {ms}ms ease;", ms = self.transition_ms)
        } else {
            String::new()
        };
        format!(
            "transform: translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3}); opacity: {:.3}; z-index: {};{}",
            self.translate_x, self.translate_y, self.rotate_deg, self.scale, self.opacity, self.z_index, transition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::NoHaptics;
    use std::cell::{Cell, RefCell};

    /// Records every pattern it is asked to play
    #[derive(Default)]
    struct RecordingHaptics {
        played: RefCell<Vec<HapticPattern>>,
    }

    impl Haptics for RecordingHaptics {
        fn vibrate(&self, pattern: HapticPattern) -> bool {
            self.played.borrow_mut().push(pattern);
            true
        }
    }

    /// Drag to `offset`, release and dispatch like a card does.
    /// Returns (decision, right calls, left calls, spring needed, tracker).
    fn release_at(offset: f64) -> (Option<Decision>, usize, usize, bool, SwipeTracker) {
        let config = GestureConfig::default();
        let right = Cell::new(0);
        let left = Cell::new(0);
        let mut tracker = SwipeTracker::new();
        assert!(tracker.begin(true));
        tracker.drag(0.0, offset, &config);
        let decision = tracker.release(&config, &NoHaptics);
        let spring = dispatch_release(
            decision,
            tracker.phase(),
            || right.set(right.get() + 1),
            || left.set(left.get() + 1),
        );
        (decision, right.get(), left.get(), spring, tracker)
    }

    #[test]
    fn test_rotation_endpoints() {
        let config = GestureConfig::default();
        assert_eq!(rotation(0.0, &config), 0.0);
        assert_eq!(rotation(300.0, &config), 15.0);
        assert_eq!(rotation(-300.0, &config), -15.0);
    }

    #[test]
    fn test_rotation_monotonic() {
        let config = GestureConfig::default();
        let mut last = f64::NEG_INFINITY;
        for step in -100..=100 {
            let r = rotation(step as f64 * 5.0, &config);
            assert!(r >= last, "rotation decreased at {}", step * 5);
            last = r;
        }
    }

    #[test]
    fn test_opacity_bands() {
        let config = GestureConfig::default();
        for o in [-50.0, -25.0, 0.0, 25.0, 50.0] {
            assert_eq!(opacity(o, &config), 1.0);
        }
        for o in [300.0, 350.0, -300.0, -1000.0] {
            assert_eq!(opacity(o, &config), 0.0);
        }
        let mid = opacity(175.0, &config);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_pending_direction_boundaries() {
        let config = GestureConfig::default();
        assert_eq!(pending_direction(50.0, &config), None);
        assert_eq!(pending_direction(-50.0, &config), None);
        assert_eq!(pending_direction(50.5, &config), Some(SwipeDirection::Right));
        assert_eq!(pending_direction(-51.0, &config), Some(SwipeDirection::Left));
        assert_eq!(pending_direction(0.0, &config), None);
    }

    #[test]
    fn test_release_right_fires_once() {
        let (decision, right, left, spring, tracker) = release_at(151.0);
        assert_eq!(decision, Some(Decision::AcceptRight));
        assert_eq!((right, left), (1, 0));
        assert!(!spring);
        assert_eq!(tracker.phase(), SwipePhase::Committed(SwipeDirection::Right));
    }

    #[test]
    fn test_release_left_fires_once() {
        let (decision, right, left, spring, tracker) = release_at(-151.0);
        assert_eq!(decision, Some(Decision::AcceptLeft));
        assert_eq!((right, left), (0, 1));
        assert!(!spring);
        assert_eq!(tracker.phase(), SwipePhase::Committed(SwipeDirection::Left));
    }

    #[test]
    fn test_release_on_threshold_cancels() {
        for offset in [150.0, -150.0, 80.0] {
            let (decision, right, left, spring, _) = release_at(offset);
            assert_eq!(decision, Some(Decision::Cancel));
            assert_eq!((right, left), (0, 0));
            assert!(spring, "release at {} should spring back", offset);
        }
        // Already at the origin: nothing to animate
        let (decision, right, left, spring, tracker) = release_at(0.0);
        assert_eq!(decision, Some(Decision::Cancel));
        assert_eq!((right, left), (0, 0));
        assert!(!spring);
        assert_eq!(tracker, SwipeTracker::new());
    }

    #[test]
    fn test_cancel_returns_to_initial_state() {
        let config = GestureConfig::default();
        let (_, _, _, _, mut tracker) = release_at(120.0);
        assert_eq!(tracker.phase(), SwipePhase::Returning);
        assert_eq!(tracker.pending(&config), None);

        let mut frames = 0;
        while tracker.tick(1.0 / 60.0, &config) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(tracker, SwipeTracker::new());
    }

    #[test]
    fn test_committed_is_terminal() {
        let config = GestureConfig::default();
        let (_, _, _, _, mut tracker) = release_at(200.0);
        assert!(!tracker.begin(true));
        tracker.drag(0.0, -300.0, &config);
        assert_eq!(tracker.offset(), 200.0);

        let fired = Cell::new(false);
        let again = tracker.release(&config, &NoHaptics);
        assert_eq!(again, None);
        assert!(!dispatch_release(again, tracker.phase(), || fired.set(true), || fired.set(true)));
        assert!(!fired.get());
    }

    #[test]
    fn test_inert_tracker_ignores_input() {
        let config = GestureConfig::default();
        let mut tracker = SwipeTracker::new();
        assert!(!tracker.begin(false));
        tracker.drag(0.0, 300.0, &config);
        assert_eq!(tracker.offset(), 0.0);

        let fired = Cell::new(false);
        let decision = tracker.release(&config, &NoHaptics);
        assert_eq!(decision, None);
        assert!(!dispatch_release(decision, tracker.phase(), || fired.set(true), || fired.set(true)));
        assert!(!fired.get());
    }

    #[test]
    fn test_drag_is_elastic_past_bound() {
        let config = GestureConfig::default();
        let mut tracker = SwipeTracker::new();
        tracker.begin(true);
        tracker.drag(0.0, 600.0, &config);
        assert_eq!(tracker.offset(), 420.0);
        tracker.drag(0.0, -450.0, &config);
        assert_eq!(tracker.offset(), -405.0);
    }

    #[test]
    fn test_haptic_patterns_per_direction() {
        let config = GestureConfig::default();
        let haptics = RecordingHaptics::default();

        let mut right = SwipeTracker::new();
        right.begin(true);
        right.drag(0.0, 220.0, &config);
        right.release(&config, &haptics);

        let mut left = SwipeTracker::new();
        left.begin(true);
        left.drag(0.0, -220.0, &config);
        left.release(&config, &haptics);

        let mut cancel = SwipeTracker::new();
        cancel.begin(true);
        cancel.drag(0.0, 20.0, &config);
        cancel.release(&config, &haptics);

        assert_eq!(*haptics.played.borrow(), vec![HapticPattern::Tap, HapticPattern::Triple]);
    }

    #[test]
    fn test_callback_fires_without_haptics() {
        let (decision, right, _, _, _) = release_at(400.0);
        assert_eq!(decision, Some(Decision::AcceptRight));
        assert_eq!(right, 1);
    }

    #[test]
    fn test_drag_interrupts_return() {
        let config = GestureConfig::default();
        let (_, _, _, _, mut tracker) = release_at(100.0);
        tracker.tick(1.0 / 60.0, &config);
        let origin = tracker.offset();
        assert!(tracker.begin(true));
        assert_eq!(tracker.phase(), SwipePhase::Dragging);
        assert!(!tracker.tick(1.0 / 60.0, &config));
        tracker.drag(origin, 10.0, &config);
        assert_eq!(tracker.offset(), origin + 10.0);
    }

    #[test]
    fn test_frame_for_stacked_cards() {
        let config = GestureConfig::default();
        let placement = StackPlacement { depth: 2, is_top: false, preview: false };
        let frame = CardFrame::resolve(250.0, SwipePhase::Idle, placement, &config);
        assert_eq!(frame.translate_x, 0.0);
        assert_eq!(frame.rotate_deg, 0.0);
        assert_eq!(frame.opacity, 1.0);
        assert!((frame.scale - 0.9).abs() < 1e-9);
        assert_eq!(frame.translate_y, 16.0);
        assert_eq!(frame.z_index, 98);
    }

    #[test]
    fn test_frame_for_preview_is_neutral() {
        let config = GestureConfig::default();
        let placement = StackPlacement { depth: 3, is_top: true, preview: true };
        let frame = CardFrame::resolve(0.0, SwipePhase::Idle, placement, &config);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.translate_y, 0.0);
        assert!(!placement.interactive());
    }

    #[test]
    fn test_frame_for_top_card_follows_offset() {
        let config = GestureConfig::default();
        let placement = StackPlacement { depth: 0, is_top: true, preview: false };
        let frame = CardFrame::resolve(300.0, SwipePhase::Dragging, placement, &config);
        assert_eq!(frame.translate_x, 300.0);
        assert_eq!(frame.rotate_deg, 15.0);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.transition_ms, 0);
    }

    #[test]
    fn test_exit_frame_mirrors_direction() {
        let config = GestureConfig::default();
        let placement = StackPlacement { depth: 0, is_top: true, preview: false };
        let left = CardFrame::resolve(-180.0, SwipePhase::Committed(SwipeDirection::Left), placement, &config);
        assert_eq!(left.translate_x, -500.0);
        assert_eq!(left.rotate_deg, -15.0);
        assert_eq!(left.scale, 0.8);
        assert_eq!(left.opacity, 0.0);
        assert_eq!(left.transition_ms, 400);
        assert!(left.to_style().contains("transition: transform 400ms ease"));
    }

    #[test]
    fn test_config_partial_override() {
        let config: GestureConfig = serde_json::from_str(r#"{ "commit_threshold": 200.0 }"#).unwrap();
        assert_eq!(config.commit_threshold, 200.0);
        assert_eq!(config.feedback_threshold, 50.0);
        assert_eq!(config.return_spring, SpringConfig::RETURN);
    }
}
