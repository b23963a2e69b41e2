//! Topology builder (spec.md §4.1).

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use bender_model::Network;

use crate::error::{Result, SolverError};
use crate::incidence::Incidence;

/// Compact-index view of a network: node/edge indexing, free/fixed
/// partition, and the incidence structure built from it. Stable for the
/// duration of one solve (spec.md §3's edge-to-index invariant).
pub struct Topology<K> {
    pub key_index: HashMap<K, usize>,
    pub index_key: Vec<K>,
    pub edges: Vec<(usize, usize)>,
    /// `(u, v) -> edge index`, populated in both orientations so lookups
    /// by a cable/spline record (which may declare either direction)
    /// always succeed.
    pub uv_index: HashMap<(usize, usize), usize>,
    pub fixed: Vec<usize>,
    pub free: Vec<usize>,
    pub incidence: Incidence,
}

impl<K> Topology<K>
where
    K: Eq + Hash + Clone + Ord + Debug,
{
    pub fn build<N: Network<NodeKey = K>>(network: &N) -> Result<Self> {
        let index_key = network.node_keys();
        let key_index: HashMap<K, usize> = index_key
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();
        let num_v = index_key.len();

        let mut edges = Vec::new();
        let mut uv_index = HashMap::new();
        for (u, v) in network.edge_keys() {
            let ui = *key_index
                .get(&u)
                .ok_or_else(|| SolverError::topology(format!("edge references unknown node {u:?}")))?;
            let vi = *key_index
                .get(&v)
                .ok_or_else(|| SolverError::topology(format!("edge references unknown node {v:?}")))?;
            let e = edges.len();
            edges.push((ui, vi));
            uv_index.insert((ui, vi), e);
            uv_index.insert((vi, ui), e);
        }

        let fixed: Vec<usize> = network.anchors().iter().map(|k| key_index[k]).collect();
        let is_fixed: Vec<bool> = {
            let mut flags = vec![false; num_v];
            for &i in &fixed {
                flags[i] = true;
            }
            flags
        };
        let free: Vec<usize> = (0..num_v).filter(|&i| !is_fixed[i]).collect();

        let incidence = Incidence::new(edges.clone(), num_v);

        Ok(Self {
            key_index,
            index_key,
            edges,
            uv_index,
            fixed,
            free,
            incidence,
        })
    }

    /// Resolve a `(u, v)` pair declared by a cable or spline record to
    /// an edge index, in either orientation.
    pub fn edge_index(&self, u: &K, v: &K) -> Result<usize> {
        let ui = *self
            .key_index
            .get(u)
            .ok_or_else(|| SolverError::topology(format!("unknown node {u:?}")))?;
        let vi = *self
            .key_index
            .get(v)
            .ok_or_else(|| SolverError::topology(format!("unknown node {v:?}")))?;
        self.uv_index
            .get(&(ui, vi))
            .copied()
            .ok_or_else(|| SolverError::topology(format!("no edge between {u:?} and {v:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bender_model::{EdgeAttributes, NodeAttributes, SimpleNetwork};

    fn triangle() -> SimpleNetwork {
        let mut net = SimpleNetwork::new();
        let a = net.add_node(NodeAttributes::anchor(0.0, 0.0, 0.0));
        let b = net.add_node(NodeAttributes::anchor(1.0, 0.0, 0.0));
        let c = net.add_node(NodeAttributes::at(0.0, 1.0, 0.0));
        net.add_edge(a, c, EdgeAttributes::default());
        net.add_edge(b, c, EdgeAttributes::default());
        net.add_edge(a, b, EdgeAttributes::default());
        net
    }

    #[test]
    fn free_and_fixed_partition_all_nodes() {
        let net = triangle();
        let topo = Topology::build(&net).unwrap();
        assert_eq!(topo.fixed.len(), 2);
        assert_eq!(topo.free.len(), 1);
        assert_eq!(topo.fixed.len() + topo.free.len(), topo.index_key.len());
    }

    #[test]
    fn edge_index_resolves_either_orientation() {
        let net = triangle();
        let topo = Topology::build(&net).unwrap();
        let e1 = topo.edge_index(&0, &2).unwrap();
        let e2 = topo.edge_index(&2, &0).unwrap();
        assert_eq!(e1, e2);
    }

    #[test]
    fn edge_index_rejects_missing_edge() {
        let mut net = SimpleNetwork::new();
        let a = net.add_node(NodeAttributes::anchor(0.0, 0.0, 0.0));
        let b = net.add_node(NodeAttributes::at(1.0, 0.0, 0.0));
        let c = net.add_node(NodeAttributes::at(0.0, 1.0, 0.0));
        net.add_edge(a, b, EdgeAttributes::default());
        let topo = Topology::build(&net).unwrap();
        assert!(topo.edge_index(&a, &b).is_ok());
        assert!(topo.edge_index(&a, &c).is_err());
    }
}
