//! Istanbul route endpoints for realistic test fixtures.

use route_sketch::GeoPoint;

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

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ============================================================================
// Route start / end points
// ============================================================================

pub const KADIKOY_START: Location = Location::new("Kadikoy center", 40.9909, 29.0233);
pub const KADIKOY_END: Location = Location::new("Kadikoy east", 40.9909, 29.0333);
pub const USKUDAR_START: Location = Location::new("Uskudar shore south", 41.0234, 29.0152);
pub const USKUDAR_END: Location = Location::new("Uskudar shore north", 41.0334, 29.0152);
pub const TUYAP_START: Location = Location::new("TUYAP hall entrance", 41.0016, 28.8093);
pub const TUYAP_END: Location = Location::new("TUYAP hall exit", 41.0020, 28.8100);

pub const ROUTES: &[(Location, Location)] = &[
    (KADIKOY_START, KADIKOY_END),
    (USKUDAR_START, USKUDAR_END),
    (TUYAP_START, TUYAP_END),
];
