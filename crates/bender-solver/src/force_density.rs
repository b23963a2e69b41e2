//! Force-density model and mass lumping (spec.md §4.3, §4.5).

use crate::incidence::Incidence;

/// `fdensity`: per-edge force-density contributions from prescribed
/// force, prescribed rest length, and axial stiffness. `q_lpre` and
/// `q_ea` mask non-finite results (division by a zero `lpre`/`linit`)
/// to zero; `q_fpre` is left unmasked since `l` is never zero for a
/// real edge connecting two distinct nodes.
pub fn fdensity(fpre: &[f64], lpre: &[f64], linit: &[f64], ea: &[f64], l: &[f64], f: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let n = fpre.len();
    let mut q_fpre = vec![0.0; n];
    let mut q_lpre = vec![0.0; n];
    let mut q_ea = vec![0.0; n];
    for e in 0..n {
        q_fpre[e] = fpre[e] / l[e];

        let lpre_term = f[e] / lpre[e];
        q_lpre[e] = if lpre_term.is_finite() { lpre_term } else { 0.0 };

        let ea_term = ea[e] * (l[e] - linit[e]) / (linit[e] * l[e]);
        q_ea[e] = if ea_term.is_finite() { ea_term } else { 0.0 };
    }
    (q_fpre, q_lpre, q_ea)
}

/// Fictitious nodal mass for RK4 stability (spec.md §4.5). Each
/// per-edge term that can divide by zero (`EA/linit`, `4·EI/ℓ³`) is
/// masked to zero rather than propagating NaN/Inf into the scatter.
#[allow(clippy::too_many_arguments)]
pub fn lumped_mass(
    incidence: &Incidence,
    qpre: &[f64],
    q_fpre: &[f64],
    q_lpre: &[f64],
    ea: &[f64],
    linit: &[f64],
    ei: &[f64],
    l: &[f64],
    dt: f64,
) -> Vec<f64> {
    let n = qpre.len();
    let mut term = vec![0.0; n];
    for e in 0..n {
        let ea_term = ea[e] / linit[e];
        let ea_term = if ea_term.is_finite() { ea_term } else { 0.0 };

        let ei_term = 4.0 * ei[e] / l[e].powi(3);
        let ei_term = if ei_term.is_finite() { ei_term } else { 0.0 };

        term[e] = qpre[e] + q_fpre[e] + q_lpre[e] + ea_term + ei_term;
    }
    incidence
        .scatter_scalar_unsigned(&term)
        .into_iter()
        .map(|x| 0.5 * dt * dt * x)
        .collect()
}
