//! Recording a walked route from a stream of location fixes.
//!
//! The platform location service is the caller's concern: it feeds fixes
//! into [`TrackRecorder::record`], which keeps the accepted trace and its
//! running length.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::geo_point::GeoPoint;
use crate::haversine;
use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingOptions {
    /// Fixes closer than this to the last accepted fix are dropped (metres).
    pub distance_filter_m: f64,
    /// Default radius for [`TrackRecorder::is_near`] (metres).
    pub proximity_radius_m: f64,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            distance_filter_m: 10.0,
            proximity_radius_m: 50.0,
        }
    }
}

impl TrackingOptions {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("distance_filter_m", self.distance_filter_m),
            ("proximity_radius_m", self.proximity_radius_m),
        ] {
            if !(value >= 0.0) {
                return Err(RouteError::NegativeDistance { field, value });
            }
        }
        Ok(())
    }
}

/// What happened to a fix passed to [`TrackRecorder::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    /// Tracking is stopped or was never started.
    NotTracking,
    Paused,
    /// Within the distance filter of the previous fix.
    Filtered,
}

#[derive(Debug, Clone, Default)]
pub struct TrackRecorder {
    options: TrackingOptions,
    tracking: bool,
    paused: bool,
    track: Path,
}

impl TrackRecorder {
    pub fn new(options: TrackingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    pub fn start(&mut self) {
        tracing::debug!("tracking started");
        self.tracking = true;
        self.paused = false;
    }

    /// Stop accepting fixes. The recorded track is kept.
    pub fn stop(&mut self) {
        tracing::debug!(
            points = self.track.len(),
            distance_m = self.track.total_distance(),
            "tracking stopped"
        );
        self.tracking = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking && !self.paused
    }

    /// Offer a location fix to the recorder.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidCoordinate`] for out-of-range or
    /// non-finite coordinates, regardless of the tracking state.
    pub fn record(&mut self, fix: GeoPoint) -> Result<RecordOutcome> {
        let fix = fix.validated().inspect_err(|err| {
            tracing::warn!(%err, "rejected location fix");
        })?;

        if !self.tracking {
            return Ok(RecordOutcome::NotTracking);
        }
        if self.paused {
            return Ok(RecordOutcome::Paused);
        }
        if let Some(last) = self.track.end_point() {
            let moved = haversine::distance(last, fix);
            if moved < self.options.distance_filter_m {
                tracing::trace!(moved_m = moved, "fix inside distance filter");
                return Ok(RecordOutcome::Filtered);
            }
        }

        self.track.push(fix);
        Ok(RecordOutcome::Recorded)
    }

    pub fn current_location(&self) -> Option<GeoPoint> {
        self.track.end_point()
    }

    pub fn track(&self) -> &Path {
        &self.track
    }

    /// Running length of the accepted fixes in metres.
    pub fn total_distance(&self) -> f64 {
        self.track.total_distance()
    }

    /// Whether the current location is within `max_distance` metres of
    /// `target`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::LocationUnavailable`] before the first fix.
    pub fn is_within(&self, target: GeoPoint, max_distance: f64) -> Result<bool> {
        let current = self
            .current_location()
            .ok_or(RouteError::LocationUnavailable)?;
        Ok(haversine::distance(current, target) <= max_distance)
    }

    /// [`TrackRecorder::is_within`] using the configured proximity radius.
    pub fn is_near(&self, target: GeoPoint) -> Result<bool> {
        self.is_within(target, self.options.proximity_radius_m)
    }

    /// Clear the recorded track without changing the tracking state.
    pub fn reset(&mut self) {
        self.track.clear();
    }
}
