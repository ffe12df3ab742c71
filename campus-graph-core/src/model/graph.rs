//! Graph tables: deduplicated coordinate nodes, directed edges and the
//! weight of every edge

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, NodeId, Weight};

/// Exact-value identity of a coordinate vector.
///
/// Components compare by numeric value, so `0`, `0.0` and `-0.0` are the
/// same key. No tolerance or snapping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordKey(Vec<u64>);

impl CoordKey {
    pub fn new(components: &[f64]) -> Self {
        Self(
            components
                .iter()
                .map(|&c| if c == 0.0 { 0.0_f64.to_bits() } else { c.to_bits() })
                .collect(),
        )
    }
}

/// One LineString vertex as parsed from the input document
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Every numeric component, usually `[lon, lat]`
    pub components: Vec<f64>,
    /// `"lon,lat"` in the textual form the numbers were parsed with
    pub label: String,
}

impl Vertex {
    /// Parses a GeoJSON position. At least two numeric components are
    /// required.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        let Some(items) = value.as_array() else {
            return Err(Error::InvalidData(format!(
                "LineString vertex is not an array: {value}"
            )));
        };

        let numbers = items
            .iter()
            .map(|item| match item {
                Value::Number(number) => Ok(number),
                other => Err(Error::InvalidData(format!(
                    "LineString vertex component is not a number: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if numbers.len() < 2 {
            return Err(Error::InvalidData(format!(
                "LineString vertex needs at least 2 components, got {value}"
            )));
        }

        let components = numbers
            .iter()
            .map(|number| {
                number.as_f64().ok_or_else(|| {
                    Error::InvalidData(format!("Coordinate {number} is not representable"))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        Ok(Self {
            components,
            label: format!("{},{}", numbers[0], numbers[1]),
        })
    }

    pub fn key(&self) -> CoordKey {
        CoordKey::new(&self.components)
    }
}

/// A graph node as written to `nodes.json`
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    pub id: NodeId,
    /// `"lon,lat"` key of the node
    pub key: String,
    /// Coordinate components of the first vertex seen at this node
    pub position: Vec<f64>,
}

impl NodeEntry {
    /// First two components, treated as a planar point
    pub fn planar_position(&self) -> [f64; 2] {
        [self.position[0], self.position[1]]
    }
}

/// Coordinate to node id mapping. Ids are dense and handed out in
/// first-seen order.
#[derive(Debug, Default)]
pub struct NodeTable {
    ids: HashMap<CoordKey, NodeId>,
    entries: Vec<NodeEntry>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the vertex's node, creating the node on first sight
    pub fn resolve(&mut self, vertex: &Vertex) -> NodeId {
        let next_id = self.entries.len();
        let id = *self.ids.entry(vertex.key()).or_insert(next_id);
        if id == next_id {
            self.entries.push(NodeEntry {
                id,
                key: vertex.label.clone(),
                position: vertex.components.clone(),
            });
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<NodeEntry> {
        self.entries
    }
}

/// Directed edge between two consecutive LineString vertices, serialised as
/// a two element array `[source, target]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    pub fn source(&self) -> NodeId {
        self.0
    }

    pub fn target(&self) -> NodeId {
        self.1
    }
}

/// The three graph tables. `edges` and `weights` are parallel: index `i` of
/// both describes the same edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphTables {
    /// Nodes ordered by id
    pub nodes: Vec<NodeEntry>,
    pub edges: Vec<Edge>,
    pub weights: Vec<Weight>,
}

impl GraphTables {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeEntry> {
        self.nodes.get(id)
    }

    /// Looks a node up by its `"lon,lat"` key
    pub fn node_by_key(&self, key: &str) -> Option<&NodeEntry> {
        self.nodes.iter().rev().find(|node| node.key == key)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn vertex(value: Value) -> Vertex {
        Vertex::from_json(&value).unwrap()
    }

    #[test]
    fn test_vertex_label_keeps_parsed_form() {
        assert_eq!(vertex(json!([0, 0])).label, "0,0");
        assert_eq!(vertex(json!([80.0211, 23.1765])).label, "80.0211,23.1765");
        assert_eq!(vertex(json!([1.0, -2])).label, "1.0,-2");
        assert_eq!(vertex(json!([1, 2, 300])).components, vec![1.0, 2.0, 300.0]);
    }

    #[test]
    fn test_vertex_rejects_short_or_non_numeric() {
        assert!(matches!(
            Vertex::from_json(&json!([1.5])),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            Vertex::from_json(&json!(["1", 2])),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            Vertex::from_json(&json!({"lon": 1, "lat": 2})),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_coord_key_is_value_equality() {
        assert_eq!(CoordKey::new(&[0.0, 1.0]), CoordKey::new(&[-0.0, 1.0]));
        assert_ne!(CoordKey::new(&[0.0, 1.0]), CoordKey::new(&[1.0, 0.0]));
        assert_ne!(CoordKey::new(&[0.1, 0.2]), CoordKey::new(&[0.1, 0.2000001]));
    }

    #[test]
    fn test_node_table_dedup_in_first_seen_order() {
        let mut table = NodeTable::new();

        assert_eq!(table.resolve(&vertex(json!([5, 5]))), 0);
        assert_eq!(table.resolve(&vertex(json!([1, 1]))), 1);
        assert_eq!(table.resolve(&vertex(json!([5.0, 5.0]))), 0);
        assert_eq!(table.resolve(&vertex(json!([2, 2]))), 2);

        assert_eq!(table.len(), 3);
        // The first spelling of a coordinate wins
        assert_eq!(table.get(0).map(|n| n.key.as_str()), Some("5,5"));
    }

    #[test]
    fn test_edge_serialises_as_pair() {
        let text = serde_json::to_string(&vec![Edge(0, 1), Edge(1, 2)]).unwrap();
        assert_eq!(text, "[[0,1],[1,2]]");

        let edges: Vec<Edge> = serde_json::from_str("[[3,4]]").unwrap();
        assert_eq!(edges[0].source(), 3);
        assert_eq!(edges[0].target(), 4);
    }
}
