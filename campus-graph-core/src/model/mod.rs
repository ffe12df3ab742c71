//! Data model produced by a single pass over a map document
//!
//! Contains the layer partition of the input features and the graph tables
//! derived from its road and footpath geometries.

pub mod graph;
pub mod layers;

pub use graph::{CoordKey, Edge, GraphTables, NodeEntry, NodeTable, Vertex};
pub use layers::{Layer, LayerSet};
