//! The solver entry point (spec.md §4.7, §4.8, §6.1).

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use bender_model::{Cable, Network, Spline};

use crate::bending::compute_shear;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::force_density::{fdensity, lumped_mass};
use crate::geometry::Vec3;
use crate::integrator::{rk4_step, DampingConstants};
use crate::preprocess::PreprocessedElements;
use crate::topology::Topology;

/// Convergence history: three parallel time-indexed maps keyed by the
/// global inner-step counter at the end of the batch that produced
/// them (spec.md §4.8).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverHistory {
    pub membrane: BTreeMap<usize, f64>,
    pub spline: BTreeMap<usize, f64>,
    pub displacements: BTreeMap<usize, f64>,
}

impl SolverHistory {
    pub fn len(&self) -> usize {
        self.membrane.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membrane.is_empty()
    }
}

fn norm_over(values: &[Vec3], indices: &[usize]) -> f64 {
    indices.iter().map(|&i| values[i].norm_squared()).sum::<f64>().sqrt()
}

/// Run the dynamic-relaxation solver to equilibrium (or until `kmax`
/// inner steps are exhausted) and write the result back into `network`.
///
/// `progress`, if present, is invoked once per completed outer batch
/// with `(k, crit1, crit2, crit3)` — the structured replacement for a
/// per-step debug print.
pub fn bend_splines<K, N>(
    network: &mut N,
    cables: &[Cable<K>],
    splines: &[Spline<K>],
    config: &SolverConfig,
    mut progress: Option<&mut dyn FnMut(usize, f64, f64, f64)>,
) -> Result<SolverHistory>
where
    K: Eq + Hash + Clone + Ord + Debug,
    N: Network<NodeKey = K>,
{
    config.validate()?;

    let topology = Topology::build(network)?;
    let num_v = topology.index_key.len();
    let num_e = topology.edges.len();

    let mut xyz: Vec<Vec3> = topology
        .index_key
        .iter()
        .map(|k| network.node_attributes(k).xyz())
        .collect();
    let p: Vec<Vec3> = topology
        .index_key
        .iter()
        .map(|k| network.node_attributes(k).load())
        .collect();

    let pre = PreprocessedElements::run(&topology, network, &xyz, cables, splines, config)?;

    let damping = DampingConstants::default();
    let dt = 1.0_f64;

    let mut alpha = config.alpha;
    let mut q = vec![1.0_f64; num_e];
    let mut l = topology.incidence.edge_lengths(&xyz);
    let mut f: Vec<f64> = q.iter().zip(&l).map(|(qi, li)| qi * li).collect();

    let mut v = vec![Vec3::zeros(); num_v];
    let mut r = vec![Vec3::zeros(); num_v];
    let mut s = vec![Vec3::zeros(); num_v];
    let mut m = vec![Vec3::zeros(); num_v];
    let mut dx = vec![Vec3::zeros(); num_v];

    let mut crit1 = f64::INFINITY;
    let mut crit2 = f64::INFINITY;
    let mut crit3 = f64::INFINITY;

    let outer_batches = ((config.kmax as f64) / (config.kdiv as f64)).ceil().max(1.0) as usize;

    let mut history = SolverHistory::default();
    let mut k = 0usize;

    for _ in 0..outer_batches {
        if (crit1 < config.tol1 && crit2 < config.tol2) || crit3 < config.tol3 {
            if alpha <= 1.0 {
                break;
            }
            alpha = (alpha / 2.0).ceil().max(1.0);
        }

        for _ in 0..config.kdiv {
            let (q_fpre, q_lpre, q_ea) = fdensity(&pre.fpre, &pre.lpre, &pre.linit, &pre.ea, &l, &f);
            for e in 0..num_e {
                q[e] = pre.qpre[e] + q_fpre[e] + q_lpre[e] + q_ea[e];
            }

            let mass = lumped_mass(
                &topology.incidence,
                &pre.qpre,
                &q_fpre,
                &q_lpre,
                &pre.ea,
                &pre.linit,
                &pre.ei,
                &l,
                dt,
            );

            let xyz0 = xyz.clone();
            let v0: Vec<Vec3> = v.iter().map(|vi| *vi * damping.ca).collect();
            let dv = rk4_step(&xyz0, &v0, &topology.free, &p, &s, &mass, &q, &topology.incidence, damping.cb, dt);

            for i in 0..num_v {
                v[i] = v0[i] + dv[i];
            }
            for &i in &topology.free {
                dx[i] = v[i] * dt;
                xyz[i] = xyz0[i] + dx[i];
            }

            l = topology.incidence.edge_lengths(&xyz);
            for e in 0..num_e {
                f[e] = q[e] * l[e];
            }

            let (s_new, m_new) = compute_shear(&pre.splines, &xyz, &l, alpha, num_v);
            s = s_new;
            m = m_new;

            let d = topology.incidence.weighted_laplacian(&q, &xyz);
            for i in 0..num_v {
                r[i] = p[i] + s[i] - d[i];
            }

            k += 1;
        }

        crit1 = norm_over(&r, &pre.membrane_nodes);
        crit2 = norm_over(&r, &pre.spline_nodes);
        crit3 = norm_over(&dx, &topology.free);

        // `k` was incremented once per inner step, so the last step of
        // this batch landed on global step index `k - 1` (matching the
        // source's `k = i * kdiv + j`, recorded at `j = kdiv - 1`).
        let step = k - 1;
        history.membrane.insert(step, crit1);
        history.spline.insert(step, crit2);
        history.displacements.insert(step, crit3);

        if let Some(callback) = progress.as_deref_mut() {
            callback(step, crit1, crit2, crit3);
        }
    }

    for (idx, key) in topology.index_key.iter().enumerate() {
        let mut attrs = network.node_attributes(key);
        attrs.set_xyz(xyz[idx]);
        attrs.set_residual(r[idx]);
        attrs.set_shear(s[idx]);
        attrs.set_moment(m[idx]);
        network.set_node_attributes(key, attrs);
    }
    for (e, &(ui, vi)) in topology.edges.iter().enumerate() {
        let key = (topology.index_key[ui].clone(), topology.index_key[vi].clone());
        let mut attrs = network.edge_attributes(&key);
        attrs.q = q[e];
        attrs.f = f[e];
        attrs.l = l[e];
        attrs.linit = pre.linit[e];
        network.set_edge_attributes(&key, attrs);
    }

    Ok(history)
}
