use std::path::{Path, PathBuf};

use crate::model::Layer;

pub const INPUT_FILE: &str = "map.geojson";

pub const ROADS_FILE: &str = "roads.geojson";
pub const FOOTPATHS_FILE: &str = "footpaths.geojson";
pub const BUILDINGS_FILE: &str = "buildings.geojson";
pub const OTHERS_FILE: &str = "others.geojson";

pub const NODES_FILE: &str = "nodes.json";
pub const EDGES_FILE: &str = "edges.json";
pub const WEIGHTS_FILE: &str = "weights.json";

/// Which `highway` tagged features contribute their LineStrings to the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphScope {
    /// Only features classified as roads or footpaths
    #[default]
    RoadsAndFootpaths,
    /// Every `highway` tagged feature, including those routed to `others`
    /// (e.g. `highway=service`)
    AllHighways,
}

impl GraphScope {
    /// Whether a `highway` tagged feature in `layer` feeds the graph
    pub fn admits(self, layer: Layer) -> bool {
        match self {
            GraphScope::RoadsAndFootpaths => matches!(layer, Layer::Roads | Layer::Footpaths),
            GraphScope::AllHighways => true,
        }
    }
}

/// Pipeline configuration.
///
/// The defaults read `map.geojson` and write every output into the current
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub graph_scope: GraphScope,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl PipelineConfig {
    /// Reads `map.geojson` from `dir` and writes the outputs next to it
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_path: dir.join(INPUT_FILE),
            output_dir: dir.to_path_buf(),
            graph_scope: GraphScope::default(),
        }
    }
}
