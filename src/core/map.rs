//! Map payload projection for the external map renderer.

use serde::Serialize;

use crate::core::period::format_period;
use crate::models::event::OpenEvent;

/// Initial view anchor used when there is nothing to center on: the
/// service's home region.
pub const DEFAULT_CENTER_LAT: f64 = 36.019;
pub const DEFAULT_CENTER_LNG: f64 = 129.343;

#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    pub id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub address_detail: String,
    pub period: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPayload {
    pub points: Vec<MapPoint>,
    pub center: MapCenter,
}

/// Project active events into marker points plus an arithmetic-mean
/// centroid. With zero points the centroid falls back to the given
/// anchor instead of dividing by zero.
pub fn build_payload(active: &[OpenEvent], fallback: MapCenter) -> MapPayload {
    let points: Vec<MapPoint> = active
        .iter()
        .map(|ev| MapPoint {
            id: ev.id.clone(),
            title: ev.title.clone(),
            lat: ev.lat,
            lng: ev.lng,
            address: ev.address.clone(),
            address_detail: ev.address_detail.clone(),
            period: format_period(&ev.start, &ev.end),
        })
        .collect();

    let center = if points.is_empty() {
        fallback
    } else {
        let n = points.len() as f64;
        MapCenter {
            lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
            lng: points.iter().map(|p| p.lng).sum::<f64>() / n,
        }
    };

    MapPayload { points, center }
}

impl Default for MapCenter {
    fn default() -> Self {
        MapCenter {
            lat: DEFAULT_CENTER_LAT,
            lng: DEFAULT_CENTER_LNG,
        }
    }
}
