//! Element preprocessor (spec.md §4.2).

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use bender_model::{Cable, Network, Spline};

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::geometry::Vec3;
use crate::topology::Topology;

/// A spline reduced to compact indices and the bending stiffness it
/// contributes to its own edges, ready for `bending::compute_shear`.
#[derive(Debug, Clone)]
pub struct SplineData {
    /// Node sequence `v_0..v_n` walked head-to-tail along the path.
    pub vi: Vec<usize>,
    /// Edge index (into the topology's global edge list) for each
    /// consecutive pair in `vi`, i.e. `edge_indices[i]` connects
    /// `vi[i]` and `vi[i + 1]`.
    pub edge_indices: Vec<usize>,
    pub ei: f64,
}

/// Per-edge property arrays plus the derived spline/node partitions, the
/// element preprocessor's full output.
pub struct PreprocessedElements {
    pub qpre: Vec<f64>,
    pub fpre: Vec<f64>,
    pub lpre: Vec<f64>,
    pub linit: Vec<f64>,
    pub ea: Vec<f64>,
    pub ei: Vec<f64>,
    pub splines: Vec<SplineData>,
    pub spline_nodes: Vec<usize>,
    pub membrane_nodes: Vec<usize>,
}

fn sectional_ea_ei(e: f64, radius: f64, thickness: f64) -> (f64, f64) {
    let r = radius;
    let t = thickness;
    let inner = r - t;
    let area = std::f64::consts::PI * (r * r - inner * inner);
    let second_moment = std::f64::consts::PI * (r.powi(4) - inner.powi(4)) / 4.0;
    (e * area, e * second_moment)
}

impl PreprocessedElements {
    pub fn run<K, N>(
        topology: &Topology<K>,
        network: &N,
        xyz: &[Vec3],
        cables: &[Cable<K>],
        splines: &[Spline<K>],
        config: &SolverConfig,
    ) -> Result<Self>
    where
        K: Eq + Hash + Clone + Ord + Debug,
        N: Network<NodeKey = K>,
    {
        let num_e = topology.edges.len();
        let mut qpre = vec![0.0; num_e];
        let mut fpre = vec![0.0; num_e];
        let mut lpre = vec![0.0; num_e];
        let mut linit = vec![0.0; num_e];
        let mut ea = vec![0.0; num_e];
        let mut ei = vec![0.0; num_e];

        for (e, &(ui, vi)) in topology.edges.iter().enumerate() {
            let key = (topology.index_key[ui].clone(), topology.index_key[vi].clone());
            let attrs = network.edge_attributes(&key);
            qpre[e] = attrs.qpre;
            fpre[e] = attrs.fpre;
            lpre[e] = attrs.lpre;
            linit[e] = attrs.linit;
            let (edge_ea, edge_ei) = sectional_ea_ei(
                attrs.e * config.unit_e,
                attrs.radius * config.unit_radius,
                attrs.thickness * config.unit_thickness,
            );
            ea[e] = edge_ea;
            ei[e] = edge_ei;
        }

        for cable in cables {
            for (u, v) in &cable.edges {
                let e = topology.edge_index(u, v)?;
                qpre[e] = cable.qpre;
            }
        }

        let mut spline_data = Vec::with_capacity(splines.len());
        let mut all_spline_nodes: HashSet<usize> = HashSet::new();

        for spline in splines {
            let (spline_ea, spline_ei) = sectional_ea_ei(
                spline.e * config.unit_e,
                spline.radius * config.unit_radius,
                spline.thickness * config.unit_thickness,
            );

            let start = *topology
                .key_index
                .get(&spline.start)
                .ok_or_else(|| SolverError::topology(format!("spline start node {:?} is unknown", spline.start)))?;

            let mut vi = vec![start];
            let mut edge_indices = Vec::with_capacity(spline.edges.len());
            for (u, v) in &spline.edges {
                let e = topology.edge_index(u, v).map_err(|_| {
                    SolverError::topology(format!("spline references edge ({u:?}, {v:?}) absent from the network"))
                })?;
                let (ui, vi_) = topology.edges[e];
                let &tail = vi.last().expect("vi always has at least the start node");
                let next = if tail == ui {
                    vi_
                } else if tail == vi_ {
                    ui
                } else {
                    return Err(SolverError::topology(format!(
                        "spline path is not connected at edge {e} (expected to continue from node index {tail})"
                    )));
                };
                vi.push(next);
                edge_indices.push(e);

                qpre[e] = 0.0;
                fpre[e] = 0.0;
                lpre[e] = 0.0;
                ea[e] = spline_ea;
                ei[e] = spline_ei;
            }

            all_spline_nodes.extend(vi.iter().copied());
            spline_data.push(SplineData {
                vi,
                edge_indices,
                ei: spline_ei,
            });
        }

        if linit.iter().all(|&l| l == 0.0) {
            linit = topology.incidence.edge_lengths(xyz);
        }

        let spline_nodes: Vec<usize> = topology
            .free
            .iter()
            .copied()
            .filter(|i| all_spline_nodes.contains(i))
            .collect();
        let membrane_nodes: Vec<usize> = topology
            .free
            .iter()
            .copied()
            .filter(|i| !all_spline_nodes.contains(i))
            .collect();

        Ok(Self {
            qpre,
            fpre,
            lpre,
            linit,
            ea,
            ei,
            splines: spline_data,
            spline_nodes,
            membrane_nodes,
        })
    }
}
