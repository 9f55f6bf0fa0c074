//! Error type shared by the route geometry modules.

use thiserror::Error;

/// Errors raised by route simplification, drawing and tracking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Simplification threshold must be a positive number of metres.
    #[error("simplification epsilon must be > 0 metres, got {0}")]
    InvalidEpsilon(f64),

    /// Degree-to-metre scale must be finite and positive.
    #[error("metres-per-degree scale must be finite and > 0, got {0}")]
    InvalidScale(f64),

    /// A distance setting that must not be negative.
    #[error("{field} must be >= 0 metres, got {value}")]
    NegativeDistance { field: &'static str, value: f64 },

    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// An action was attempted in a state that does not allow it.
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    /// No location fix has been recorded yet.
    #[error("current location is not available")]
    LocationUnavailable,
}

pub type Result<T> = std::result::Result<T, RouteError>;
