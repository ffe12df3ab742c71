//! This module is responsible for reading a map document, classifying its
//! features into layers and building the road graph in a single pass.

mod builder;
mod classifier;
pub mod config;
mod document;
mod graph_builder;

pub use builder::{PipelineOutput, process_features, run_pipeline};
pub use classifier::{Classification, FOOTPATH_HIGHWAYS, ROAD_HIGHWAYS, classify};
pub use config::{GraphScope, PipelineConfig};
pub use document::{features_of, read_features};
pub use graph_builder::{GraphBuilder, euclidean_distance, line_string_coordinates};
