//! Comparing a drawn route against a suggested alternative.

use crate::path::Path;

/// A shorter (or longer) alternative proposed for a drawn route, e.g. by a
/// road-network router.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSuggestion {
    pub original: Path,
    /// Length of the suggested route in metres.
    pub suggested_distance_m: f64,
    pub reason: String,
}

impl RouteSuggestion {
    pub fn new(original: Path, suggested_distance_m: f64, reason: impl Into<String>) -> Self {
        Self {
            original,
            suggested_distance_m,
            reason: reason.into(),
        }
    }

    /// Metres saved by taking the suggestion. Negative when it is longer.
    pub fn distance_difference(&self) -> f64 {
        self.original.total_distance() - self.suggested_distance_m
    }

    /// Saving as a percentage of the original length, or `None` when the
    /// original route has zero length.
    pub fn improvement_percentage(&self) -> Option<f64> {
        let original = self.original.total_distance();
        if original == 0.0 {
            return None;
        }
        Some(self.distance_difference() / original * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_point::GeoPoint;

    #[test]
    fn test_improvement() {
        let original = Path::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)]);
        let length = original.total_distance();
        let suggestion = RouteSuggestion::new(original, length * 0.75, "shorter street route");

        assert!((suggestion.distance_difference() - length * 0.25).abs() < 1e-6);
        let pct = suggestion.improvement_percentage().unwrap();
        assert!((pct - 25.0).abs() < 1e-9, "got {}", pct);
    }

    #[test]
    fn test_longer_suggestion_is_negative() {
        let original = Path::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)]);
        let length = original.total_distance();
        let suggestion = RouteSuggestion::new(original, length * 2.0, "avoids stairs");
        assert!(suggestion.improvement_percentage().unwrap() < 0.0);
    }

    #[test]
    fn test_zero_length_original() {
        let suggestion = RouteSuggestion::new(Path::default(), 120.0, "n/a");
        assert_eq!(suggestion.distance_difference(), -120.0);
        assert_eq!(suggestion.improvement_percentage(), None);
    }
}
