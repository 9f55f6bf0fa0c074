//! route-sketch: geometry core for drawn and recorded walking routes.
//!
//! Simplifies point traces with Douglas-Peucker and measures their length
//! along the earth's surface. Rendering, sensors and persistence belong to
//! the host application.

pub mod drawing;
pub mod error;
pub mod geo_point;
pub mod haversine;
pub mod path;
pub mod simplify;
pub mod suggestion;
pub mod tracking;
pub mod traits;

pub use error::{Result, RouteError};
pub use geo_point::GeoPoint;
pub use haversine::distance;
pub use path::{total_distance, Path};
pub use simplify::{perpendicular_distance, simplify, SimplifyOptions};
