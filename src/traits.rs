//! Seams between the route geometry core and its callers.
//!
//! Kept minimal: hosts that want a different earth model (ellipsoidal,
//! platform-provided) implement [`DistanceProvider`] themselves.

use crate::geo_point::GeoPoint;

/// Real-world distance in metres between two points on the earth's surface.
///
/// Implementations must be symmetric and return exactly `0.0` for
/// identical points. Used for path-length accumulation, never for the
/// degree-space ranking done during simplification.
pub trait DistanceProvider {
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64;

    /// Sum of consecutive-pair distances. Zero for fewer than two points.
    fn path_length(&self, points: &[GeoPoint]) -> f64 {
        points
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }
}
