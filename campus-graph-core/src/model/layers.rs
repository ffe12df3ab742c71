//! Semantic layers a map feature can be routed into

use std::fmt;

use serde_json::Value;

use crate::loading::config::{BUILDINGS_FILE, FOOTPATHS_FILE, OTHERS_FILE, ROADS_FILE};

/// Output partition of the input features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Roads,
    Footpaths,
    Buildings,
    Others,
}

impl Layer {
    /// All layers, in the order they are written out
    pub const ALL: [Layer; 4] = [
        Layer::Roads,
        Layer::Footpaths,
        Layer::Buildings,
        Layer::Others,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Roads => "roads",
            Layer::Footpaths => "footpaths",
            Layer::Buildings => "buildings",
            Layer::Others => "others",
        }
    }

    /// Name of the `FeatureCollection` file this layer is written to
    pub fn file_name(self) -> &'static str {
        match self {
            Layer::Roads => ROADS_FILE,
            Layer::Footpaths => FOOTPATHS_FILE,
            Layer::Buildings => BUILDINGS_FILE,
            Layer::Others => OTHERS_FILE,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Features of one input document, partitioned by layer.
///
/// Features are kept exactly as parsed and in input order within each layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSet {
    pub roads: Vec<Value>,
    pub footpaths: Vec<Value>,
    pub buildings: Vec<Value>,
    pub others: Vec<Value>,
}

impl LayerSet {
    pub fn push(&mut self, layer: Layer, feature: Value) {
        self.layer_mut(layer).push(feature);
    }

    pub fn get(&self, layer: Layer) -> &[Value] {
        match layer {
            Layer::Roads => &self.roads,
            Layer::Footpaths => &self.footpaths,
            Layer::Buildings => &self.buildings,
            Layer::Others => &self.others,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Value> {
        match layer {
            Layer::Roads => &mut self.roads,
            Layer::Footpaths => &mut self.footpaths,
            Layer::Buildings => &mut self.buildings,
            Layer::Others => &mut self.others,
        }
    }

    /// Total number of features across all layers
    pub fn len(&self) -> usize {
        Layer::ALL.iter().map(|&layer| self.get(layer).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
