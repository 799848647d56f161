use crate::models::{FilterState, RatingFilter, Selected};
use serde::Serialize;

/// Facet a chip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Locations,
    Types,
    Difficulties,
    Lengths,
    Rating,
}

/// One removable "active filter" pill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub facet: Facet,
    /// Value as stored in the filter state
    pub value: String,
    pub label: String,
}

/// Chips for every selected value, in facet order
pub fn active_chips(filters: &FilterState) -> Vec<FilterChip> {
    let mut chips = Vec::with_capacity(filters.active_count());

    for key in &filters.locations {
        chips.push(chip(Facet::Locations, key.to_string(), key.to_string()));
    }

    for route_type in &filters.types {
        chips.push(chip(Facet::Types, route_type.to_string(), route_type.to_string()));
    }

    for tier in &filters.difficulties {
        let value = tier.to_string();
        chips.push(chip(Facet::Difficulties, value.clone(), capitalize(&value)));
    }

    for bucket in &filters.lengths {
        let label = match bucket {
            Selected::Known(bucket) => bucket.label().to_string(),
            Selected::Unrecognized(label) => label.clone(),
        };
        chips.push(chip(Facet::Lengths, bucket.to_string(), label));
    }

    if !filters.rating.is_any() {
        let value = filters.rating.to_string();
        chips.push(chip(Facet::Rating, value.clone(), value));
    }

    chips
}

/// Drop the value a chip stands for. Returns false if it was not selected.
pub fn remove_chip(filters: &mut FilterState, chip: &FilterChip) -> bool {
    match chip.facet {
        Facet::Locations => remove_by_label(&mut filters.locations, &chip.value),
        Facet::Types => remove_by_label(&mut filters.types, &chip.value),
        Facet::Difficulties => remove_by_label(&mut filters.difficulties, &chip.value),
        Facet::Lengths => remove_by_label(&mut filters.lengths, &chip.value),
        Facet::Rating => {
            if filters.rating.is_any() || filters.rating.to_string() != chip.value {
                return false;
            }
            filters.rating = RatingFilter::Any;
            true
        }
    }
}

fn remove_by_label<T: ToString>(values: &mut Vec<T>, label: &str) -> bool {
    let before = values.len();
    values.retain(|v| v.to_string() != label);
    values.len() != before
}

fn chip(facet: Facet, value: String, label: String) -> FilterChip {
    FilterChip {
        facet,
        value,
        label,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
