//! Haptic feedback capability.
//!
//! Vibration is best-effort: hosts without it are tolerated silently.

use wasm_bindgen::JsValue;

/// Fixed vibration patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticPattern {
    /// One short pulse (accept right)
    Tap,
    /// Three short pulses (accept left)
    Triple,
}

impl HapticPattern {
    /// Alternating on/off durations in milliseconds
    pub fn durations_ms(self) -> &'static [u32] {
        match self {
            Self::Tap => &[50],
            Self::Triple => &[50, 50, 50, 50, 50],
        }
    }
}

/// Something that can buzz the device.
pub trait Haptics {
    /// Play `pattern`. Returns whether the host accepted it.
    fn vibrate(&self, pattern: HapticPattern) -> bool;
}

/// No vibration available
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _pattern: HapticPattern) -> bool {
        false
    }
}

/// `navigator.vibrate`, feature-detected on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorHaptics;

impl Haptics for NavigatorHaptics {
    fn vibrate(&self, pattern: HapticPattern) -> bool {
        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return false;
        };
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
        if !supported {
            log::warn!("vibration not supported by host");
            return false;
        }

        match pattern.durations_ms() {
            [single] => navigator.vibrate_with_duration(*single),
            many => {
                let array = js_sys::Array::new();
                for ms in many {
                    array.push(&JsValue::from(*ms));
                }
                navigator.vibrate_with_pattern(&array)
            }
        }
    }
}
