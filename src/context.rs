//! Application Context
//!
//! Configuration provided via Leptos Context API.

use leptos::prelude::*;
use leptos_swipe::GestureConfig;
use serde::Deserialize;

/// Deck layout settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Settled cards rendered at once
    pub max_visible: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self { max_visible: 3 }
    }
}

/// App-wide configuration provided via context
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gesture: GestureConfig,
    pub deck: DeckConfig,
}

impl AppConfig {
    pub fn provide(self) {
        provide_context(self);
    }
}

/// Configuration from context, or the defaults when none was provided
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
