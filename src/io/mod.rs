//! Reading and writing meshes and symmetry results.
//!
//! Meshes enter the library as connectivity-only JSON documents and
//! results leave it the same way. See [`json::MeshFile`] for the input
//! shape and [`json::SymmetryFile`] for the output arrays.
//!
//! ```no_run
//! use polysym::io::json::MeshFile;
//! use polysym::topology::MeshTopology;
//!
//! let mesh = MeshFile::load("mesh.json").unwrap();
//! let topo: MeshTopology = mesh.build_topology().unwrap();
//! ```

pub mod json;

pub use json::{MeshFile, SymmetryFile};
