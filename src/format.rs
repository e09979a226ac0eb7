//! Display Formatting
//!
//! Price, mileage and the specs grid rows.

use crate::models::{CardItem, Price};

/// Group an integer string with commas: "25000" -> "25,000"
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Numbers become "$25,000" (up to two decimals); text is kept verbatim
pub fn format_price(price: &Price) -> String {
    match price {
        Price::Label(text) => text.clone(),
        Price::Amount(amount) => {
            let sign = if *amount < 0.0 { "-" } else { "" };
            let cents = (amount.abs() * 100.0).round();
            let whole = group_thousands(&format!("{:.0}", (cents / 100.0).trunc()));
            let frac = (cents % 100.0) as u64;
            if frac == 0 {
                format!("{}${}", sign, whole)
            } else {
                let frac = format!("{:02}", frac);
                format!("{}${}.{}", sign, whole, frac.trim_end_matches('0'))
            }
        }
    }
}

pub fn format_mileage(miles: u64) -> String {
    format!("{} mi", group_thousands(&miles.to_string()))
}

/// One row in the specs grid
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Rows for the fields present on the listing; absent fields get no row
pub fn spec_rows(item: &CardItem) -> Vec<SpecRow> {
    let mut rows = Vec::new();
    if let Some(miles) = item.mileage {
        rows.push(SpecRow { icon: "⏱", label: "Mileage", value: format_mileage(miles) });
    }
    let text_fields = [
        ("⛽", "Fuel", &item.fuel_type),
        ("⚙", "Transmission", &item.transmission),
        ("📍", "Location", &item.location),
    ];
    for (icon, label, value) in text_fields {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            rows.push(SpecRow { icon, label, value: value.to_string() });
        }
    }
    rows
}
