//! Spec Grid Component

use leptos::prelude::*;

use crate::format::spec_rows;
use crate::models::CardItem;

/// Indicator rows for mileage, fuel, transmission and location.
/// Missing fields get no row; the grid itself is always present.
#[component]
pub fn SpecGrid(item: CardItem) -> impl IntoView {
    let rows = spec_rows(&item);

    view! {
        <div class="spec-grid">
            {rows.into_iter().map(|row| view! {
                <div class="spec-row">
                    <span class="spec-icon">{row.icon}</span>
                    <span class="spec-label">{row.label}</span>
                    <span class="spec-value">{row.value}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
