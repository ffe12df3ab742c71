use serde_json::Value;

use crate::{
    Error, Weight,
    model::{Edge, GraphTables, NodeTable, Vertex},
};

/// Incrementally builds the graph tables from LineString vertex sequences.
///
/// Every consecutive vertex pair becomes one directed edge, following the
/// vertex order of the geometry. Edges are never deduplicated: a segment
/// shared by two ways, or walked in reverse, is stored once per occurrence.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: NodeTable,
    edges: Vec<Edge>,
    weights: Vec<Weight>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the segments of one LineString `coordinates` payload and
    /// returns the number of edges added.
    ///
    /// A payload that is not an array, or holds fewer than two vertices,
    /// adds nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` if a vertex is not an array of at least
    /// two numbers, or if the two vertices of a segment differ in dimension.
    pub fn add_line_string(&mut self, coordinates: &Value) -> Result<usize, Error> {
        let Some(positions) = coordinates.as_array() else {
            return Ok(0);
        };
        if positions.len() < 2 {
            return Ok(0);
        }

        let vertices = positions
            .iter()
            .map(Vertex::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        for pair in vertices.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let distance = euclidean_distance(&from.components, &to.components)?;

            let source = self.nodes.resolve(from);
            let target = self.nodes.resolve(to);
            self.edges.push(Edge(source, target));
            self.weights.push(distance);
        }

        Ok(vertices.len() - 1)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// No LineString has contributed a segment yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self) -> GraphTables {
        GraphTables {
            nodes: self.nodes.into_entries(),
            edges: self.edges,
            weights: self.weights,
        }
    }
}

/// Returns the `coordinates` of a feature whose geometry type is exactly
/// `LineString`
pub fn line_string_coordinates(feature: &Value) -> Option<&Value> {
    let geometry = feature.get("geometry")?;
    match geometry.get("type").and_then(Value::as_str) {
        Some("LineString") => geometry.get("coordinates"),
        _ => None,
    }
}

/// Planar Euclidean distance over every component of two positions.
///
/// Coordinates are treated as a flat Cartesian vector; this is not a
/// geodesic distance.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, Error> {
    if a.len() != b.len() {
        return Err(Error::InvalidData(format!(
            "Cannot measure between positions of {} and {} components",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter()
        .zip(b)
        .fold(0.0_f64, |acc, (x, y)| acc.hypot(x - y)))
}
