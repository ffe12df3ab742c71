use log::{debug, info, trace};
use serde_json::Value;

use super::classifier::classify;
use super::config::{GraphScope, PipelineConfig};
use super::document::read_features;
use super::graph_builder::{GraphBuilder, line_string_coordinates};
use crate::{
    Error,
    export::write_outputs,
    model::{GraphTables, Layer, LayerSet},
};

/// Everything produced by one pass over a map document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    pub layers: LayerSet,
    pub graph: GraphTables,
    /// Features dropped because their geometry had no `coordinates`
    pub skipped: usize,
}

/// Reads the input document, processes it and writes every output file.
///
/// Outputs are only written once the whole pass has succeeded. Files left
/// over from an earlier run are overwritten one by one; a failed write is
/// not rolled back.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, if a road
/// geometry holds an unusable vertex, or if an output cannot be written.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput, Error> {
    info!("Reading map features: {}", config.input_path.display());
    let features = read_features(&config.input_path)?;

    let output = process_features(features, config.graph_scope)?;

    info!("Writing outputs to {}", config.output_dir.display());
    write_outputs(&config.output_dir, &output)?;

    Ok(output)
}

/// Classifies every feature into its layer and feeds qualifying `highway`
/// LineStrings to the graph builder, in input order.
pub fn process_features(
    features: Vec<Value>,
    scope: GraphScope,
) -> Result<PipelineOutput, Error> {
    let total = features.len();
    let mut layers = LayerSet::default();
    let mut graph = GraphBuilder::new();
    let mut skipped = 0;

    for (index, feature) in features.into_iter().enumerate() {
        let Some(classification) = classify(&feature).map_err(|e| at_feature(index, e))? else {
            debug!("Skipping feature #{index}: geometry has no coordinates");
            skipped += 1;
            continue;
        };
        let layer = classification.layer;
        trace!("Feature #{index} -> {layer}");

        if classification.highway && scope.admits(layer) {
            match line_string_coordinates(&feature) {
                Some(coordinates) => {
                    graph
                        .add_line_string(coordinates)
                        .map_err(|e| at_feature(index, e))?;
                }
                None => debug!(
                    "Feature #{index} ({layer}) is not a LineString, left out of the graph"
                ),
            }
        }

        layers.push(layer, feature);
    }

    info!(
        "Classified {} of {total} features ({skipped} without coordinates)",
        layers.len()
    );
    for layer in Layer::ALL {
        info!("  {layer}: {}", layers.get(layer).len());
    }
    if graph.is_empty() {
        info!("No road or footpath LineStrings found, the graph is empty");
    } else {
        info!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }

    Ok(PipelineOutput {
        layers,
        graph: graph.finish(),
        skipped,
    })
}

fn at_feature(index: usize, error: Error) -> Error {
    match error {
        Error::InvalidData(msg) => Error::InvalidData(format!("feature #{index}: {msg}")),
        other => other,
    }
}
