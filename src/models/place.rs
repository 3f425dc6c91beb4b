use serde::{Deserialize, Serialize};

/// One raw record as returned by the geocoder. Untrusted shape: every
/// field except the name may be absent, and coordinates arrive as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub road_address_name: Option<String>,
    #[serde(default)]
    pub address_name: Option<String>,
    /// Longitude, as text.
    #[serde(default)]
    pub x: Option<String>,
    /// Latitude, as text.
    #[serde(default)]
    pub y: Option<String>,
}

/// A normalized place-search candidate, safe to present and to persist
/// onto an event.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceCandidate {
    pub label: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}
