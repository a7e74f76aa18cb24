//! Mesh analysis algorithms.
//!
//! - **Symmetry**: bilateral symmetry propagation and side classification

pub mod symmetry;
