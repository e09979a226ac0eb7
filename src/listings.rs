//! Listing Data
//!
//! The demo deck ships embedded in the binary.

use crate::models::CardItem;

const LISTINGS_JSON: &str = include_str!("../assets/listings.json");

/// Parse a JSON array of listings
pub fn parse_listings(json: &str) -> Result<Vec<CardItem>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Load the embedded listings, logging and returning an empty deck on failure
pub fn load_listings() -> Vec<CardItem> {
    match parse_listings(LISTINGS_JSON) {
        Ok(cards) => {
            log::info!("loaded {} listings", cards.len());
            cards
        }
        Err(e) => {
            log::error!("failed to parse listings: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    #[test]
    fn test_embedded_listings_parse() {
        let cards = parse_listings(LISTINGS_JSON).expect("embedded listings are valid");
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().any(|c| matches!(c.price, Some(Price::Label(_)))));
        assert!(cards.iter().all(|c| !c.id.is_empty()));
    }

    #[test]
    fn test_malformed_listings() {
        assert!(parse_listings("{ not json").is_err());
        assert!(parse_listings(r#"[{ "name": "no id" }]"#).is_err());
    }
}
