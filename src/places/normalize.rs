//! Validation and reshaping of raw geocoder records.
//!
//! The upstream shape is untrusted: a record missing its name or either
//! coordinate, or whose coordinates do not parse as numbers, is dropped
//! without failing the batch. Order of the surviving records is kept.

use crate::models::place::{PlaceCandidate, RawPlace};

pub fn normalize_places(raw: Vec<RawPlace>) -> Vec<PlaceCandidate> {
    raw.into_iter().filter_map(candidate_from_raw).collect()
}

fn candidate_from_raw(raw: RawPlace) -> Option<PlaceCandidate> {
    let name = raw.place_name.trim();
    if name.is_empty() {
        return None;
    }

    let lng: f64 = raw.x.as_deref()?.trim().parse().ok()?;
    let lat: f64 = raw.y.as_deref()?.trim().parse().ok()?;

    // Road-form address is preferred over the general form; with neither,
    // the label is just the name.
    let best_address = raw
        .road_address_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            raw.address_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        });

    let label = match best_address {
        Some(addr) => format!("{} — {}", name, addr),
        None => name.to_string(),
    };

    Some(PlaceCandidate {
        label,
        name: name.to_string(),
        lat,
        lng,
    })
}
