use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::write_pretty;
use crate::{
    Error, Weight,
    loading::config::{EDGES_FILE, NODES_FILE, WEIGHTS_FILE},
    model::{Edge, GraphTables, NodeEntry},
};

/// Writes `nodes.json`, `edges.json` and `weights.json` into `dir`
pub fn write_graph(dir: &Path, tables: &GraphTables) -> Result<(), Error> {
    write_pretty(&dir.join(NODES_FILE), &tables.nodes_map())?;
    write_pretty(&dir.join(EDGES_FILE), &tables.edges)?;
    write_pretty(&dir.join(WEIGHTS_FILE), &tables.weights)
}

impl GraphTables {
    /// `"lon,lat"` to node id mapping in id order.
    ///
    /// Two nodes that differ only beyond their second component share a
    /// key; the later id replaces the earlier one in place.
    pub fn nodes_map(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(self.nodes.len());
        for node in &self.nodes {
            map.insert(node.key.clone(), Value::from(node.id));
        }
        map
    }

    /// Reads the three graph tables back from `dir`.
    ///
    /// Node ids may have gaps where a `lon,lat` key was taken over by a
    /// later node; edges are kept as written.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` if a node key is not a `lon,lat` pair or
    /// if `edges.json` and `weights.json` differ in length.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let raw_nodes: Map<String, Value> = read_json(&dir.join(NODES_FILE))?;
        let edges: Vec<Edge> = read_json(&dir.join(EDGES_FILE))?;
        let weights: Vec<Weight> = read_json(&dir.join(WEIGHTS_FILE))?;

        let mut nodes = raw_nodes
            .into_iter()
            .map(|(key, id)| parse_node(key, &id))
            .collect::<Result<Vec<_>, _>>()?;
        nodes.sort_by_key(|node| node.id);

        if edges.len() != weights.len() {
            return Err(Error::InvalidData(format!(
                "{} edges but {} weights",
                edges.len(),
                weights.len()
            )));
        }

        Ok(Self {
            nodes,
            edges,
            weights,
        })
    }
}

fn parse_node(key: String, id: &Value) -> Result<NodeEntry, Error> {
    let id = id
        .as_u64()
        .and_then(|id| usize::try_from(id).ok())
        .ok_or_else(|| Error::InvalidData(format!("Node '{key}' has an invalid id: {id}")))?;

    let position = key
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| Error::InvalidData(format!("Invalid node key '{key}': {e}")))?;

    if position.len() != 2 {
        return Err(Error::InvalidData(format!(
            "Node key '{key}' is not a lon,lat pair"
        )));
    }

    Ok(NodeEntry { id, key, position })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
