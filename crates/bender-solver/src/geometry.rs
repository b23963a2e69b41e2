//! Geometry primitives (spec.md §2 layer 1): the shared 3-vector type
//! every layer above this one builds on.

use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;
