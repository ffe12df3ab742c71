pub use crate::Error;

// Pipeline entry points
pub use crate::export::write_outputs;
pub use crate::loading::{
    GraphScope, PipelineConfig, PipelineOutput, process_features, read_features, run_pipeline,
};

// Layers and graph tables
pub use crate::model::{Edge, GraphTables, Layer, LayerSet, NodeEntry};

// Consumers of the graph tables
pub use crate::routing::{RoutePath, StreetNetwork};

pub use crate::NodeId;
pub use crate::Weight;
