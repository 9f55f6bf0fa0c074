//! Ordered point sequences with a cached total length.
//!
//! A [`Path`] is a drawn or recorded trace. Its total distance is derived
//! from the points and kept in step with every mutation; it is never read
//! from outside input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo_point::GeoPoint;
use crate::haversine::{self, HaversineDistance};
use crate::simplify::{self, SimplifyOptions};
use crate::traits::DistanceProvider;

/// Total length in metres of the polyline through `points`.
///
/// Sums great-circle distances of consecutive pairs. Zero for fewer than
/// two points.
pub fn total_distance(points: &[GeoPoint]) -> f64 {
    total_distance_with(points, &HaversineDistance)
}

/// [`total_distance`] with a caller-supplied earth model.
pub fn total_distance_with<M: DistanceProvider>(points: &[GeoPoint], metric: &M) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    metric.path_length(points)
}

/// A route trace as decoded coordinates plus its cached length.
///
/// Serializes as a bare array of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<GeoPoint>", into = "Vec<GeoPoint>")]
pub struct Path {
    points: Vec<GeoPoint>,
    total_distance: f64,
}

impl Path {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        let total_distance = total_distance(&points);
        Self {
            points,
            total_distance,
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start_point(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn end_point(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// Length in metres (great-circle, summed over consecutive points).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Append a point, extending the cached length by the new leg only.
    pub fn push(&mut self, point: GeoPoint) {
        if let Some(last) = self.points.last() {
            self.total_distance += haversine::distance(*last, point);
        }
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.total_distance = 0.0;
    }

    /// A new path holding the Douglas-Peucker simplification of this one,
    /// with its length recomputed from the surviving points.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouteError::InvalidEpsilon`] unless `epsilon > 0`.
    pub fn simplified(&self, epsilon: f64) -> Result<Self> {
        self.simplified_with(&SimplifyOptions::with_epsilon(epsilon))
    }

    pub fn simplified_with(&self, options: &SimplifyOptions) -> Result<Self> {
        Ok(Self::new(simplify::simplify_with(&self.points, options)?))
    }

    /// [`Path::simplified`] with the default 20 m threshold.
    pub fn optimized(&self) -> Result<Self> {
        self.simplified_with(&SimplifyOptions::default())
    }
}

impl From<Vec<GeoPoint>> for Path {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

impl From<Path> for Vec<GeoPoint> {
    fn from(path: Path) -> Self {
        path.points
    }
}

impl FromIterator<GeoPoint> for Path {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
