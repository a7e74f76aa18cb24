//! Error types for polysym.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`SymmetryError`].
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Errors that can occur while building topology or exchanging results.
///
/// The symmetry algorithms themselves never fail: malformed regions degrade
/// locally by leaving components unresolved. Errors only arise at the
/// boundaries of the library, when constructing a [`MeshTopology`] from raw
/// face lists or when reading and writing files.
///
/// [`MeshTopology`]: crate::topology::MeshTopology
#[derive(Error, Debug)]
pub enum SymmetryError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has fewer than three vertices or repeats a vertex.
    #[error("face {face} is degenerate")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge has more than two incident faces.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// A component index supplied by a caller is out of range for the mesh.
    #[error("{kind} index {index} out of range (mesh has {count})")]
    ComponentOutOfRange {
        /// Component kind ("vertex", "edge", or "face").
        kind: &'static str,
        /// The offending index.
        index: usize,
        /// Number of components of that kind in the mesh.
        count: usize,
    },

    /// A seed selection is inconsistent with the mesh topology.
    #[error("invalid seed selection: {0}")]
    InvalidSeed(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error loading data from a file.
    #[error("failed to load {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}
