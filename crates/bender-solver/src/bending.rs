//! Bending-moment and shear model (spec.md §4.4): the osculating-circle
//! curvature estimate at each interior spline node, and the shear force
//! that spatial variation of bending moment produces along the path.

use crate::geometry::Vec3;
use crate::preprocess::SplineData;

/// Recomputes `m` (per-node bending moment) and `s` (per-node shear)
/// from scratch for the current geometry. Endpoint nodes of every
/// spline keep `m = 0`: they are anchors and never receive a moment
/// assignment, matching spec.md §4.4.
pub fn compute_shear(splines: &[SplineData], xyz: &[Vec3], l: &[f64], alpha: f64, num_nodes: usize) -> (Vec<Vec3>, Vec<Vec3>) {
    let mut m = vec![Vec3::zeros(); num_nodes];
    let mut s = vec![Vec3::zeros(); num_nodes];

    for spline in splines {
        let vi = &spline.vi;
        if vi.len() < 3 {
            continue;
        }

        // a = xyz[v_{i-1}] - xyz[v_i] for the first pair, updated as we walk.
        let mut b = xyz[vi[1]] - xyz[vi[0]];
        let mut lb2 = b.norm_squared();

        for i in 0..vi.len() - 2 {
            let v1 = vi[i + 1];
            let v2 = vi[i + 2];

            let a = -b;
            let la2 = lb2;
            b = xyz[v2] - xyz[v1];
            lb2 = b.norm_squared();

            let axb = a.cross(&b);
            let axb2 = axb.norm_squared();
            let t = b * la2 - a * lb2;
            let o = 0.5 * t.cross(&axb) / axb2;
            let lo = o.norm();

            let bending = spline.ei / lo;
            if !lo.is_finite() || !bending.is_finite() {
                // Degenerate (collinear) triple: curvature is undefined
                // and contributes no moment, not a NaN-laden one.
                m[v1] = Vec3::zeros();
            } else {
                m[v1] = bending * (o / lo);
            }
        }

        let mut per_edge = vec![Vec3::zeros(); spline.edge_indices.len()];
        for (i, &e) in spline.edge_indices.iter().enumerate() {
            let u = vi[i];
            let v = vi[i + 1];
            let dm = m[u] - m[v];
            let edge_length = l[e];
            per_edge[i] = if edge_length != 0.0 { dm / edge_length } else { Vec3::zeros() };
        }

        for (i, &value) in per_edge.iter().enumerate() {
            let u = vi[i];
            let v = vi[i + 1];
            s[u] += alpha * value;
            s[v] -= alpha * value;
        }
    }

    (s, m)
}
