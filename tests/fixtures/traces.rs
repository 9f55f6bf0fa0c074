//! Deterministic generated traces.
//!
//! No randomness: a small linear congruential generator stands in for GPS
//! noise so every run sees the same points.

use route_sketch::GeoPoint;

/// Straight interpolation from `from` to `to` with `count` points
/// (both ends included).
pub fn straight(from: GeoPoint, to: GeoPoint, count: usize) -> Vec<GeoPoint> {
    let last = (count.max(2) - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            GeoPoint::new(
                from.latitude + (to.latitude - from.latitude) * t,
                from.longitude + (to.longitude - from.longitude) * t,
            )
        })
        .collect()
}

/// A sine wiggle along the segment, `amplitude_deg` perpendicular in
/// latitude, `waves` full periods.
pub fn wiggle(from: GeoPoint, to: GeoPoint, count: usize, amplitude_deg: f64, waves: f64) -> Vec<GeoPoint> {
    straight(from, to, count)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let t = i as f64 / (count.max(2) - 1) as f64;
            let offset = (t * waves * std::f64::consts::TAU).sin() * amplitude_deg;
            GeoPoint::new(p.latitude + offset, p.longitude)
        })
        .collect()
}

/// Outward spiral around `center`: points drift steadily away from every
/// chord, a bad case for the split recursion.
pub fn spiral(center: GeoPoint, count: usize, step_deg: f64) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * 0.35;
            let radius = i as f64 * step_deg;
            GeoPoint::new(
                center.latitude + radius * angle.sin(),
                center.longitude + radius * angle.cos(),
            )
        })
        .collect()
}

/// A walk of `count` fixes with jitter up to `jitter_deg` in each axis.
pub fn noisy_walk(start: GeoPoint, count: usize, step_deg: f64, jitter_deg: f64, seed: u64) -> Vec<GeoPoint> {
    let mut state = seed;
    let mut next_unit = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    };

    (0..count)
        .map(|i| {
            GeoPoint::new(
                start.latitude + i as f64 * step_deg * 0.3 + next_unit() * jitter_deg,
                start.longitude + i as f64 * step_deg + next_unit() * jitter_deg,
            )
        })
        .collect()
}

/// A varied set of traces for property checks.
pub fn sample_traces() -> Vec<Vec<GeoPoint>> {
    let a = GeoPoint::new(40.9909, 29.0233);
    let b = GeoPoint::new(40.9909, 29.0333);
    vec![
        Vec::new(),
        vec![a],
        vec![a, b],
        straight(a, b, 25),
        wiggle(a, b, 60, 0.0004, 3.0),
        wiggle(a, b, 200, 0.00015, 11.0),
        spiral(a, 150, 0.00002),
        noisy_walk(a, 120, 0.0002, 0.00008, 7),
        noisy_walk(GeoPoint::new(41.0234, 29.0152), 300, 0.0001, 0.0002, 42),
    ]
}
