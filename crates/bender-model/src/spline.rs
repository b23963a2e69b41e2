//! Spline records (spec.md §3, §6.4).

/// An ordered path of edges behaving as a continuous elastic beam.
/// Edges may be listed in either orientation; the preprocessor
/// re-aligns them to read head-to-tail along the path starting at
/// `start`. `e`/`radius`/`thickness` override any per-edge material
/// values for every edge on this path.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline<K> {
    pub start: K,
    pub edges: Vec<(K, K)>,
    pub e: f64,
    pub radius: f64,
    pub thickness: f64,
}

impl<K> Spline<K> {
    pub fn new(start: K, edges: Vec<(K, K)>, e: f64, radius: f64, thickness: f64) -> Self {
        Self {
            start,
            edges,
            e,
            radius,
            thickness,
        }
    }
}
