//! Bengaluru locations for realistic test fixtures.
//!
//! Coordinates are approximate, clustered around Indiranagar and Domlur so
//! that legs are a few minutes long at courier speed.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Courier start used throughout the scenario tests.
pub const HUB: Location = Location::new("Domlur Hub", 12.9611, 77.6387);

// ============================================================================
// Restaurants
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("R1", 12.9616, 77.6389),
    Location::new("R2", 12.9600, 77.6390),
    Location::new("Toit", 12.9791, 77.6408),
    Location::new("Truffles", 12.9718, 77.6412),
    Location::new("Chinita", 12.9784, 77.6386),
    Location::new("Brahmin's Thatte Idli", 12.9698, 77.6445),
    Location::new("Meghana Foods", 12.9745, 77.6411),
    Location::new("Glen's Bakehouse", 12.9709, 77.6385),
];

// ============================================================================
// Customers
// ============================================================================

pub const CUSTOMERS: &[Location] = &[
    Location::new("C1", 12.9645, 77.6400),
    Location::new("C2", 12.9590, 77.6375),
    Location::new("HAL 2nd Stage", 12.9760, 77.6480),
    Location::new("Defence Colony", 12.9735, 77.6360),
    Location::new("Jeevan Bima Nagar", 12.9660, 77.6570),
    Location::new("Domlur Layout", 12.9610, 77.6350),
    Location::new("Kodihalli", 12.9620, 77.6490),
    Location::new("Ulsoor", 12.9820, 77.6250),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_bengaluru_area() {
        for loc in RESTAURANTS.iter().chain(CUSTOMERS).chain([&HUB]) {
            assert!(loc.lat > 12.9 && loc.lat < 13.0, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(loc.lng > 77.6 && loc.lng < 77.7, "{} lng out of range: {}", loc.name, loc.lng);
        }
    }
}
