//! Frontend Models
//!
//! Listing data as supplied by the caller. Nothing here is computed by
//! the card; every field is display pass-through.

use serde::{Deserialize, Serialize};

/// Price as given: a number to format, or text shown verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

/// One car listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub id: String,
    pub name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub price: Option<Price>,
    pub year: Option<u32>,
    pub mileage: Option<u64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub specs: Vec<String>,
}

impl CardItem {
    /// Display name, falling back to make / model / trim
    pub fn title(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        let parts: Vec<&str> = [&self.make, &self.model, &self.trim]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            "Untitled listing".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn subtitle(&self) -> Option<String> {
        self.year.map(|y| y.to_string())
    }
}
