use hashbrown::HashMap;
use log::warn;
use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use rstar::{RTree, primitives::GeomWithData};

use crate::{Error, NodeId, Weight, model::GraphTables};

/// Node position in the spatial index, carrying its node id
pub type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

/// Node weight stored in the routing graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkNode {
    pub id: NodeId,
    pub position: [f64; 2],
}

/// Routable view of the graph tables.
///
/// Every edge can be walked in both directions at its stored weight. Node
/// ids need not be dense: a `nodes.json` key collision leaves gaps.
pub struct StreetNetwork {
    graph: UnGraph<NetworkNode, Weight>,
    node_id_inx_map: HashMap<NodeId, NodeIndex>,
    rtree: RTree<IndexedPoint>,
}

/// Node sequence of a shortest path and its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    pub nodes: Vec<NodeId>,
    pub cost: Weight,
}

impl StreetNetwork {
    /// Edges touching a node id that has no entry in the tables are left
    /// out of the network.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` if a node id appears twice or if edges
    /// and weights differ in length.
    pub fn new(tables: &GraphTables) -> Result<Self, Error> {
        if tables.edges.len() != tables.weights.len() {
            return Err(Error::InvalidData(format!(
                "{} edges but {} weights",
                tables.edges.len(),
                tables.weights.len()
            )));
        }

        let mut graph = UnGraph::with_capacity(tables.node_count(), tables.edge_count());
        let mut node_id_inx_map = HashMap::with_capacity(tables.node_count());

        for node in &tables.nodes {
            let inx = graph.add_node(NetworkNode {
                id: node.id,
                position: node.planar_position(),
            });
            if node_id_inx_map.insert(node.id, inx).is_some() {
                return Err(Error::InvalidData(format!(
                    "Node id {} appears more than once",
                    node.id
                )));
            }
        }

        let mut dropped = 0;
        for (edge, &weight) in tables.edges.iter().zip(&tables.weights) {
            let (Some(&src_inx), Some(&dst_inx)) = (
                node_id_inx_map.get(&edge.source()),
                node_id_inx_map.get(&edge.target()),
            ) else {
                dropped += 1;
                continue;
            };
            graph.add_edge(src_inx, dst_inx, weight);
        }
        if dropped > 0 {
            warn!("{dropped} edges refer to nodes missing from the node table and were skipped");
        }

        let points: Vec<IndexedPoint> = graph
            .node_weights()
            .map(|node| IndexedPoint::new(node.position, node.id))
            .collect();

        Ok(Self {
            graph,
            node_id_inx_map,
            rtree: RTree::bulk_load(points),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// `[lon, lat]` of a node
    pub fn position(&self, id: NodeId) -> Option<[f64; 2]> {
        let inx = self.node_id_inx_map.get(&id)?;
        self.graph.node_weight(*inx).map(|node| node.position)
    }

    /// Closest node to a point by planar distance, `None` for an empty
    /// network
    pub fn nearest_node(&self, lon: f64, lat: f64) -> Option<NodeId> {
        self.rtree.nearest_neighbor(&[lon, lat]).map(|n| n.data)
    }

    /// Minimum weight path between two nodes.
    ///
    /// Returns `Ok(None)` if `end` cannot be reached from `start`.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<RoutePath>, Error> {
        let start_inx = self.node_index(start)?;
        let goal = self.node_index(end)?;

        let path = astar(
            &self.graph,
            start_inx,
            |node| node == goal,
            |edge| *edge.weight(),
            |_| 0.0,
        );

        Ok(path.map(|(cost, nodes)| RoutePath {
            nodes: nodes.into_iter().map(|inx| self.graph[inx].id).collect(),
            cost,
        }))
    }

    fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.node_id_inx_map
            .get(&id)
            .copied()
            .ok_or(Error::UnknownNode(id))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::model::{Edge, NodeEntry};

    fn node(id: NodeId, x: f64, y: f64) -> NodeEntry {
        NodeEntry {
            id,
            key: format!("{x},{y}"),
            position: vec![x, y],
        }
    }

    /// Square 0-1-2-3 with a long diagonal 0-2 and a detached node 4
    fn square() -> StreetNetwork {
        let tables = GraphTables {
            nodes: vec![
                node(0, 0.0, 0.0),
                node(1, 1.0, 0.0),
                node(2, 1.0, 1.0),
                node(3, 0.0, 1.0),
                node(4, 10.0, 10.0),
            ],
            edges: vec![Edge(0, 1), Edge(1, 2), Edge(3, 2), Edge(0, 2)],
            weights: vec![1.0, 1.0, 1.0, 5.0],
        };
        StreetNetwork::new(&tables).unwrap()
    }

    #[test]
    fn test_nearest_node() {
        let network = square();

        assert_eq!(network.nearest_node(0.9, 0.1), Some(1));
        assert_eq!(network.nearest_node(8.0, 9.0), Some(4));
    }

    #[test]
    fn test_nearest_node_empty_network() {
        let network = StreetNetwork::new(&GraphTables::default()).unwrap();
        assert_eq!(network.nearest_node(0.0, 0.0), None);
    }

    #[test]
    fn test_shortest_path_prefers_lower_weight() {
        let network = square();

        let path = network.shortest_path(0, 2).unwrap().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert_abs_diff_eq!(path.cost, 2.0);
    }

    #[test]
    fn test_edges_are_walkable_both_ways() {
        let network = square();

        // Edge(3, 2) is stored as 3 -> 2 but walked 2 -> 3 here
        let path = network.shortest_path(0, 3).unwrap().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_abs_diff_eq!(path.cost, 3.0);
    }

    #[test]
    fn test_shortest_path_edge_cases() {
        let network = square();

        let same = network.shortest_path(2, 2).unwrap().unwrap();
        assert_eq!(same.nodes, vec![2]);
        assert_abs_diff_eq!(same.cost, 0.0);

        assert_eq!(network.shortest_path(0, 4).unwrap(), None);
        assert!(matches!(
            network.shortest_path(0, 99),
            Err(Error::UnknownNode(99))
        ));
    }

    /// Ids 0 and 3 are missing, as after a `lon,lat` key collision
    #[test]
    fn test_sparse_ids_and_dangling_edges() {
        let tables = GraphTables {
            nodes: vec![node(1, 1.0, 0.0), node(2, 1.0, 1.0), node(4, 2.0, 1.0)],
            edges: vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4)],
            weights: vec![1.0, 1.0, 1.0, 1.0],
        };
        let network = StreetNetwork::new(&tables).unwrap();

        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.position(4), Some([2.0, 1.0]));
        assert_eq!(network.position(0), None);
        assert_eq!(network.nearest_node(2.1, 1.0), Some(4));

        let path = network.shortest_path(1, 4).unwrap().unwrap();
        assert_eq!(path.nodes, vec![1, 2, 4]);
        assert_abs_diff_eq!(path.cost, 2.0);

        assert!(matches!(
            network.shortest_path(0, 4),
            Err(Error::UnknownNode(0))
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let tables = GraphTables {
            nodes: vec![node(0, 0.0, 0.0), node(0, 1.0, 1.0)],
            edges: vec![],
            weights: vec![],
        };
        assert!(matches!(
            StreetNetwork::new(&tables),
            Err(Error::InvalidData(_))
        ));
    }
}
