//! Route simplification using the Douglas-Peucker algorithm.
//!
//! Candidate points are ranked by an approximate metric distance computed
//! in degree space (latitude and longitude treated as planar x/y) and then
//! scaled by a flat-earth metres-per-degree constant. This is only valid
//! for the short segments of a drawn or walked route: it ignores that a
//! degree of longitude shrinks with latitude, so east-west deviations are
//! overestimated away from the equator. Swapping in a latitude-corrected
//! scale changes which points survive, so the constant is kept as is.
//!
//! Path length is never measured with this heuristic; see
//! [`crate::path::total_distance`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::geo_point::GeoPoint;

/// Flat-earth metres per degree used by the deviation heuristic.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Default simplification threshold in metres.
pub const DEFAULT_EPSILON_M: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    /// Maximum deviation, in metres, of a dropped point from the
    /// simplified line. Must be > 0.
    pub epsilon_m: f64,
    /// Degree-to-metre scale for the deviation heuristic.
    pub meters_per_degree: f64,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            epsilon_m: DEFAULT_EPSILON_M,
            meters_per_degree: METERS_PER_DEGREE,
        }
    }
}

impl SimplifyOptions {
    pub fn with_epsilon(epsilon_m: f64) -> Self {
        Self {
            epsilon_m,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        // Written as negated comparisons so NaN is rejected too.
        if !(self.epsilon_m > 0.0) {
            return Err(RouteError::InvalidEpsilon(self.epsilon_m));
        }
        if !(self.meters_per_degree > 0.0) || !self.meters_per_degree.is_finite() {
            return Err(RouteError::InvalidScale(self.meters_per_degree));
        }
        Ok(())
    }
}

/// Approximate distance in metres from `point` to the segment
/// `[line_start, line_end]`, using [`METERS_PER_DEGREE`].
///
/// The projection is clamped to the segment, so points beyond either end
/// are measured to that endpoint. A zero-length segment degrades to the
/// scaled degree-space distance from `point` to `line_start`.
pub fn perpendicular_distance(point: GeoPoint, line_start: GeoPoint, line_end: GeoPoint) -> f64 {
    scaled_segment_distance(point, line_start, line_end, METERS_PER_DEGREE)
}

fn scaled_segment_distance(
    point: GeoPoint,
    line_start: GeoPoint,
    line_end: GeoPoint,
    meters_per_degree: f64,
) -> f64 {
    let ap_lat = point.latitude - line_start.latitude;
    let ap_lng = point.longitude - line_start.longitude;
    let ab_lat = line_end.latitude - line_start.latitude;
    let ab_lng = line_end.longitude - line_start.longitude;

    let length_sq = ab_lat * ab_lat + ab_lng * ab_lng;
    if length_sq == 0.0 {
        return ap_lat.hypot(ap_lng) * meters_per_degree;
    }

    let t = (ap_lat * ab_lat + ap_lng * ab_lng) / length_sq;
    let (closest_lat, closest_lng) = if t < 0.0 {
        (line_start.latitude, line_start.longitude)
    } else if t > 1.0 {
        (line_end.latitude, line_end.longitude)
    } else {
        (
            line_start.latitude + t * ab_lat,
            line_start.longitude + t * ab_lng,
        )
    };

    let dx = point.latitude - closest_lat;
    let dy = point.longitude - closest_lng;
    (dx * dx + dy * dy).sqrt() * meters_per_degree
}

/// Simplify a point sequence with threshold `epsilon` metres.
///
/// Sequences of two or fewer points come back unchanged. Otherwise the
/// result keeps the first and last point and is a subsequence of the
/// input; every dropped point lies within `epsilon` of the segment joining
/// the two kept points around it.
///
/// # Errors
///
/// Returns [`RouteError::InvalidEpsilon`] unless `epsilon > 0`.
pub fn simplify(points: &[GeoPoint], epsilon: f64) -> Result<Vec<GeoPoint>> {
    simplify_with(points, &SimplifyOptions::with_epsilon(epsilon))
}

/// [`simplify`] with an explicit degree-to-metre scale.
pub fn simplify_with(points: &[GeoPoint], options: &SimplifyOptions) -> Result<Vec<GeoPoint>> {
    options.validate()?;

    if points.len() <= 2 {
        return Ok(points.to_vec());
    }

    let kept = kept_mask(points, options);
    let simplified: Vec<GeoPoint> = points
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect();

    tracing::debug!(
        input = points.len(),
        output = simplified.len(),
        epsilon_m = options.epsilon_m,
        "simplified route"
    );

    Ok(simplified)
}

/// Simplify independent paths in parallel. Output order matches input.
pub fn simplify_batch(
    paths: &[Vec<GeoPoint>],
    options: &SimplifyOptions,
) -> Result<Vec<Vec<GeoPoint>>> {
    options.validate()?;
    paths
        .par_iter()
        .map(|points| simplify_with(points, options))
        .collect()
}

/// Marks which points survive simplification.
///
/// Works on index ranges into the one backing slice with an explicit
/// stack, so deep splits on pathological input cannot overflow the call
/// stack. Each range `[lo, hi]` has both endpoints already kept.
fn kept_mask(points: &[GeoPoint], options: &SimplifyOptions) -> Vec<bool> {
    let last = points.len() - 1;
    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((lo, hi)) = stack.pop() {
        if hi <= lo + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut max_idx = lo;
        for i in (lo + 1)..hi {
            let d = scaled_segment_distance(
                points[i],
                points[lo],
                points[hi],
                options.meters_per_degree,
            );
            // Strict comparison: the lowest index wins a tie.
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }

        if max_dist > options.epsilon_m {
            tracing::trace!(lo, hi, split = max_idx, max_dist, "split segment");
            kept[max_idx] = true;
            stack.push((max_idx, hi));
            stack.push((lo, max_idx));
        }
    }

    kept
}
