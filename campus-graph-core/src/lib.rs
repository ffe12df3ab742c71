//! Splits a GeoJSON map into semantic layers (roads, footpaths, buildings,
//! others) and derives a weighted road/footpath graph suitable for routing.

pub mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Dense node identifier, assigned in first-seen order starting at 0
pub type NodeId = usize;

/// Planar Euclidean length of an edge, in raw coordinate units
pub type Weight = f64;
