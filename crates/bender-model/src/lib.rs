//! Domain types for bending-active equilibrium networks.
//!
//! This crate defines the boundary `bender-solver` computes against: the
//! node/edge attribute shapes, the [`Network`] contract, and the plain
//! `Cable`/`Spline` records a caller passes alongside a network. It owns
//! no solver logic and no persistence.

pub mod attributes;
pub mod cable;
pub mod network;
pub mod simple_network;
pub mod spline;

pub use attributes::{EdgeAttributes, NodeAttributes};
pub use cable::Cable;
pub use network::Network;
pub use simple_network::SimpleNetwork;
pub use spline::Spline;
