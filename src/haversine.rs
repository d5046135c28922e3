//! Haversine travel-time model.
//!
//! Uses great-circle distance and a constant courier speed to estimate
//! how long each leg of a delivery route takes. Ignores roads and traffic.

use crate::model::Coordinate;
use crate::traits::TravelTimeProvider;

/// Courier speed used when nothing else is configured.
pub const DEFAULT_SPEED_KMH: f64 = 20.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Identical points give exactly `0.0`.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers where an absent endpoint counts as zero.
pub fn distance_km(from: Option<Coordinate>, to: Option<Coordinate>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) => haversine_km(from, to),
        _ => 0.0,
    }
}

/// Minutes needed to cover `distance_km` at `speed_kmh`, rounded to two decimals.
pub fn travel_time_minutes(distance_km: f64, speed_kmh: f64) -> f64 {
    round2(distance_km / speed_kmh * 60.0)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Haversine-based travel-time provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineModel {
    /// Constant courier speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineModel {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }
}

impl TravelTimeProvider for HaversineModel {
    fn travel_minutes(&self, from: Coordinate, to: Coordinate) -> f64 {
        travel_time_minutes(haversine_km(from, to), self.speed_kmh)
    }
}
