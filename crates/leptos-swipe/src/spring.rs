//! Damped spring used to return a cancelled card to its origin.

use serde::Deserialize;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Position below which the spring may come to rest (px)
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest (px/s)
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Card return spring: stiff and close to critically damped
    pub const RETURN: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.5,
        rest_speed: 0.5,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::RETURN
    }
}

/// Largest integration step; frames longer than this are subdivided
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

/// Frame gaps above this (tab in background) are treated as one long frame
const MAX_FRAME_SECS: f64 = 0.1;

/// Position and velocity of a spring pulling toward 0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn new(position: f64) -> Self {
        Self { position, velocity: 0.0 }
    }

    /// Advance by `dt` seconds. Returns true once the spring has settled,
    /// in which case position and velocity are exactly 0.
    pub fn step(&mut self, config: &SpringConfig, dt: f64) -> bool {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            // Semi-implicit Euler
            let force = -config.stiffness * self.position - config.damping * self.velocity;
            self.velocity += force / config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled(config) {
            self.position = 0.0;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    pub fn is_settled(&self, config: &SpringConfig) -> bool {
        self.position.abs() < config.rest_delta && self.velocity.abs() < config.rest_speed
    }
}
