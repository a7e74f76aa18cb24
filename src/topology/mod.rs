//! Mesh topology data structures.
//!
//! This module provides the read-only adjacency representation consumed by
//! the symmetry algorithms, along with the typed component indices and the
//! builders that derive the tables from raw polygon face lists.
//!
//! # Overview
//!
//! The primary type is [`MeshTopology`], a set of flat, index-addressed
//! adjacency tables: per-vertex connected vertices/edges and face-local
//! sibling vertices, per-edge vertices and faces, and per-face vertex and
//! edge loops. Components are identified by the type-safe wrappers
//! [`VertexId`], [`EdgeId`], and [`FaceId`], generic over the underlying
//! integer type ([`MeshIndex`]).
//!
//! # Construction
//!
//! ```
//! use polysym::topology::{build_from_quads, MeshTopology};
//!
//! // Two quads sharing the edge (1, 4)
//! let topo: MeshTopology = build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap();
//! assert_eq!(topo.num_faces(), 2);
//! ```

mod adjacency;
mod builder;
mod index;

pub use adjacency::{EdgeTopology, FaceTopology, MeshTopology, VertexTopology};
pub use builder::{build_from_polygons, build_from_quads, build_from_triangles};
pub use index::{EdgeId, FaceId, MeshIndex, VertexId};
