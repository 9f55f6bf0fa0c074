//! Finger-drawn route sessions.
//!
//! A session collects points while the user drags across the map and, on
//! finish, stores the simplified route alongside the raw trace.

use crate::error::{Result, RouteError};
use crate::geo_point::GeoPoint;
use crate::path::Path;
use crate::simplify::SimplifyOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    #[default]
    NotStarted,
    Drawing,
    Finished,
}

impl DrawingState {
    fn name(self) -> &'static str {
        match self {
            DrawingState::NotStarted => "not started",
            DrawingState::Drawing => "drawing",
            DrawingState::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: DrawingState,
    options: SimplifyOptions,
    raw: Path,
    optimized: Option<Path>,
}

impl DrawingSession {
    pub fn new(options: SimplifyOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// Points drawn so far, unsimplified.
    pub fn raw(&self) -> &Path {
        &self.raw
    }

    /// The simplified route, once the session has finished.
    pub fn optimized(&self) -> Option<&Path> {
        self.optimized.as_ref()
    }

    /// Start a fresh drawing. Allowed before the first drawing and after
    /// a finished one.
    pub fn begin(&mut self) -> Result<()> {
        if self.state == DrawingState::Drawing {
            return Err(self.invalid("begin"));
        }
        self.raw.clear();
        self.optimized = None;
        self.transition(DrawingState::Drawing);
        Ok(())
    }

    pub fn add_point(&mut self, point: GeoPoint) -> Result<()> {
        if self.state != DrawingState::Drawing {
            return Err(self.invalid("add a point"));
        }
        self.raw.push(point.validated()?);
        Ok(())
    }

    /// Stop drawing and simplify what was drawn.
    pub fn finish(&mut self) -> Result<&Path> {
        if self.state != DrawingState::Drawing {
            return Err(self.invalid("finish"));
        }
        let optimized = self.raw.simplified_with(&self.options)?;
        tracing::debug!(
            raw_points = self.raw.len(),
            optimized_points = optimized.len(),
            distance_m = optimized.total_distance(),
            "finished drawing"
        );
        self.transition(DrawingState::Finished);
        Ok(&*self.optimized.insert(optimized))
    }

    pub fn reset(&mut self) {
        self.raw.clear();
        self.optimized = None;
        self.transition(DrawingState::NotStarted);
    }

    fn transition(&mut self, next: DrawingState) {
        tracing::trace!(from = self.state.name(), to = next.name(), "drawing state");
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> RouteError {
        RouteError::InvalidState {
            action,
            state: self.state.name(),
        }
    }
}
