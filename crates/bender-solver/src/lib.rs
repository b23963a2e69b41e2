//! The dynamic-relaxation equilibrium solver for bending-active
//! networks: geometry primitives, the node-edge incidence structure,
//! topology builder, element preprocessor, force-density and
//! bending/shear models, an RK4 integrator, and the driver loop that
//! ties them together.

pub mod bending;
pub mod config;
pub mod driver;
pub mod error;
pub mod force_density;
pub mod geometry;
pub mod incidence;
pub mod integrator;
pub mod preprocess;
pub mod topology;

pub use config::{ConfigOptions, SolverConfig};
pub use driver::{bend_splines, SolverHistory};
pub use error::SolverError;
