//! The network contract (spec.md §6.2).
//!
//! `bend_splines` never constructs a graph itself; it only requires a
//! host type implementing [`Network`]. Everything beyond node/edge
//! attribute read-write, existence tests, and anchor filtering — JSON
//! persistence, CAD import, rendering — is someone else's problem.

use std::fmt::Debug;
use std::hash::Hash;

use nalgebra::Vector3;

use crate::attributes::{EdgeAttributes, NodeAttributes};

/// Minimal node/edge attribute store a bending-active network must
/// expose for the solver to run against it.
///
/// Node identifiers are opaque hashable keys; edge identifiers are
/// ordered pairs of node identifiers. A type implementing `Network` owns
/// its own storage; the solver only ever borrows it, mutating through
/// the setters below and never outliving a single `bend_splines` call.
pub trait Network {
    /// Opaque node identifier type.
    type NodeKey: Eq + Hash + Clone + Ord + Debug;

    /// All node keys, in an implementation-defined but stable order for
    /// the duration of one solve.
    fn node_keys(&self) -> Vec<Self::NodeKey>;

    /// All edge keys as ordered `(u, v)` pairs.
    fn edge_keys(&self) -> Vec<(Self::NodeKey, Self::NodeKey)>;

    /// Whether an edge exists between `u` and `v` in either orientation.
    fn has_edge(&self, u: &Self::NodeKey, v: &Self::NodeKey) -> bool;

    /// Read a node's attributes.
    fn node_attributes(&self, node: &Self::NodeKey) -> NodeAttributes;

    /// Overwrite a node's attributes.
    fn set_node_attributes(&mut self, node: &Self::NodeKey, attrs: NodeAttributes);

    /// Read an edge's attributes. `edge` must be one of `edge_keys()`.
    fn edge_attributes(&self, edge: &(Self::NodeKey, Self::NodeKey)) -> EdgeAttributes;

    /// Overwrite an edge's attributes.
    fn set_edge_attributes(
        &mut self,
        edge: &(Self::NodeKey, Self::NodeKey),
        attrs: EdgeAttributes,
    );

    /// Node keys with `is_anchor == true`.
    fn anchors(&self) -> Vec<Self::NodeKey> {
        self.node_keys()
            .into_iter()
            .filter(|key| self.node_attributes(key).is_anchor)
            .collect()
    }

    /// Residual force at a node, `r = (rx, ry, rz)`.
    fn node_residual(&self, node: &Self::NodeKey) -> Vector3<f64> {
        self.node_attributes(node).residual()
    }

    /// Reaction at an anchor node, `-r`. `None` for free nodes.
    fn node_reaction(&self, node: &Self::NodeKey) -> Option<Vector3<f64>> {
        let attrs = self.node_attributes(node);
        if attrs.is_anchor {
            Some(-attrs.residual())
        } else {
            None
        }
    }
}
