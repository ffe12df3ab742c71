//! Consumers of the graph tables: nearest node lookup and shortest paths
//! over the road and footpath network.

mod network;
mod to_geojson;

pub use network::{IndexedPoint, NetworkNode, RoutePath, StreetNetwork};
