//! RK4 integrator with viscous damping (spec.md §4.6).

use crate::geometry::Vec3;
use crate::incidence::Incidence;

/// The fixed damping constants spec.md §4.6 derives from `cc = 0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingConstants {
    pub cc: f64,
    pub ca: f64,
    pub cb: f64,
}

impl Default for DampingConstants {
    fn default() -> Self {
        let cc = 0.1;
        let ca = (1.0 - cc / 2.0) / (1.0 + cc / 2.0);
        let cb = 0.5 * (1.0 + ca);
        Self { cc, ca, cb }
    }
}

/// One RK4 step. `v0` is the already-damped previous velocity
/// (`ca * v_prev`); `s` is the shear held fixed for the whole step — it
/// is computed once per inner iteration outside the integrator, never
/// recomputed inside a sub-step. Only `D·xyz` is refreshed as `xyz`
/// moves through the four stage evaluations. Returns `dv`, one entry
/// per node (entries outside `free` are always zero).
#[allow(clippy::too_many_arguments)]
pub fn rk4_step(
    xyz0: &[Vec3],
    v0: &[Vec3],
    free: &[usize],
    p: &[Vec3],
    s: &[Vec3],
    mass: &[f64],
    q: &[f64],
    incidence: &Incidence,
    cb: f64,
    dt: f64,
) -> Vec<Vec3> {
    let num_nodes = xyz0.len();

    let acceleration = |t: f64, v: &[Vec3]| -> Vec<Vec3> {
        let mut xyz = xyz0.to_vec();
        for &i in free {
            xyz[i] = xyz0[i] + v[i] * t;
        }
        let d = incidence.weighted_laplacian(q, &xyz);
        let mut a = vec![Vec3::zeros(); num_nodes];
        for &i in free {
            let r = p[i] + s[i] - d[i];
            a[i] = cb * r / mass[i];
        }
        a
    };

    let add_scaled = |base: &[Vec3], delta: &[Vec3], factor: f64| -> Vec<Vec3> {
        base.iter().zip(delta).map(|(b, d)| *b + *d * factor).collect()
    };
    let scale = |values: Vec<Vec3>, factor: f64| -> Vec<Vec3> { values.into_iter().map(|v| v * factor).collect() };

    let k0 = scale(acceleration(0.0, v0), dt);
    let v1 = add_scaled(v0, &k0, 0.5);
    let k1 = scale(acceleration(0.5 * dt, &v1), dt);
    let v2 = add_scaled(v0, &k1, 0.5);
    let k2 = scale(acceleration(0.5 * dt, &v2), dt);
    let v3 = add_scaled(v0, &k2, 1.0);
    let k3 = scale(acceleration(dt, &v3), dt);

    (0..num_nodes)
        .map(|i| (k0[i] + 2.0 * k1[i] + 2.0 * k2[i] + k3[i]) / 6.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_constants_match_formula() {
        let d = DampingConstants::default();
        assert_eq!(d.cc, 0.1);
        assert!((d.ca - (0.95 / 1.05)).abs() < 1e-12);
        assert!((d.cb - 0.5 * (1.0 + d.ca)).abs() < 1e-12);
    }

    #[test]
    fn fixed_node_never_accelerates() {
        let incidence = Incidence::new(vec![(0, 1)], 2);
        let xyz0 = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
        let v0 = vec![Vec3::zeros(); 2];
        let p = vec![Vec3::new(0.0, -1.0, 0.0); 2];
        let s = vec![Vec3::zeros(); 2];
        let mass = vec![1.0, 1.0];
        let q = vec![1.0];
        let dv = rk4_step(&xyz0, &v0, &[1], &p, &s, &mass, &q, &incidence, 1.0, 1.0);
        assert_eq!(dv[0], Vec3::zeros());
    }
}
