//! A minimal in-memory [`Network`] implementation.
//!
//! Not a general-purpose graph library — just the node/edge attribute
//! store spec.md §6.2 requires. Useful directly for small networks and
//! as the reference implementation exercised by this crate's own tests.

use std::collections::HashMap;

use crate::attributes::{EdgeAttributes, NodeAttributes};
use crate::network::Network;

#[derive(Debug, Clone, Default)]
pub struct SimpleNetwork {
    nodes: Vec<NodeAttributes>,
    edges: Vec<(usize, usize)>,
    edge_attrs: Vec<EdgeAttributes>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl SimpleNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its key.
    pub fn add_node(&mut self, attrs: NodeAttributes) -> usize {
        self.nodes.push(attrs);
        self.nodes.len() - 1
    }

    /// Add an edge `(u, v)`, returning its key. Panics if either node
    /// key is out of range or the edge already exists in either
    /// orientation.
    pub fn add_edge(&mut self, u: usize, v: usize, attrs: EdgeAttributes) -> (usize, usize) {
        assert!(u < self.nodes.len() && v < self.nodes.len(), "unknown node");
        assert!(
            !self.edge_index.contains_key(&(u, v)) && !self.edge_index.contains_key(&(v, u)),
            "duplicate edge ({u}, {v})"
        );
        let index = self.edges.len();
        self.edges.push((u, v));
        self.edge_attrs.push(attrs);
        self.edge_index.insert((u, v), index);
        (u, v)
    }

    fn edge_index_of(&self, edge: &(usize, usize)) -> usize {
        self.edge_index
            .get(edge)
            .or_else(|| self.edge_index.get(&(edge.1, edge.0)))
            .copied()
            .unwrap_or_else(|| panic!("unknown edge {edge:?}"))
    }
}

impl Network for SimpleNetwork {
    type NodeKey = usize;

    fn node_keys(&self) -> Vec<usize> {
        (0..self.nodes.len()).collect()
    }

    fn edge_keys(&self) -> Vec<(usize, usize)> {
        self.edges.clone()
    }

    fn has_edge(&self, u: &usize, v: &usize) -> bool {
        self.edge_index.contains_key(&(*u, *v)) || self.edge_index.contains_key(&(*v, *u))
    }

    fn node_attributes(&self, node: &usize) -> NodeAttributes {
        self.nodes[*node]
    }

    fn set_node_attributes(&mut self, node: &usize, attrs: NodeAttributes) {
        self.nodes[*node] = attrs;
    }

    fn edge_attributes(&self, edge: &(usize, usize)) -> EdgeAttributes {
        self.edge_attrs[self.edge_index_of(edge)]
    }

    fn set_edge_attributes(&mut self, edge: &(usize, usize), attrs: EdgeAttributes) {
        let index = self.edge_index_of(edge);
        self.edge_attrs[index] = attrs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_read_back() {
        let mut net = SimpleNetwork::new();
        let a = net.add_node(NodeAttributes::anchor(0.0, 0.0, 0.0));
        let b = net.add_node(NodeAttributes::at(1.0, 0.0, 0.0));
        net.add_edge(a, b, EdgeAttributes::default());

        assert_eq!(net.node_keys(), vec![a, b]);
        assert!(net.has_edge(&a, &b));
        assert!(net.has_edge(&b, &a));
        assert!(!net.has_edge(&a, &a));
        assert_eq!(net.anchors(), vec![a]);
    }

    #[test]
    fn edge_attributes_lookup_either_orientation() {
        let mut net = SimpleNetwork::new();
        let a = net.add_node(NodeAttributes::at(0.0, 0.0, 0.0));
        let b = net.add_node(NodeAttributes::at(1.0, 0.0, 0.0));
        net.add_edge(a, b, EdgeAttributes { qpre: 3.0, ..Default::default() });

        assert_eq!(net.edge_attributes(&(a, b)).qpre, 3.0);
        assert_eq!(net.edge_attributes(&(b, a)).qpre, 3.0);
    }

    #[test]
    #[should_panic(expected = "duplicate edge")]
    fn rejects_duplicate_edges() {
        let mut net = SimpleNetwork::new();
        let a = net.add_node(NodeAttributes::default());
        let b = net.add_node(NodeAttributes::default());
        net.add_edge(a, b, EdgeAttributes::default());
        net.add_edge(b, a, EdgeAttributes::default());
    }
}
