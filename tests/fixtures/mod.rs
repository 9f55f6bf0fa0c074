//! Test fixtures for route-sketch.
//!
//! Provides:
//! - Real Istanbul locations used by the walking-advertisement routes
//! - Deterministic generated traces (wiggles, spirals, GPS-like noise)

// Each test binary uses a different subset.
#![allow(dead_code)]

pub mod istanbul_locations;
pub mod traces;

pub use istanbul_locations::*;
pub use traces::*;
