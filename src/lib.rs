//! # Polysym
//!
//! Topological bilateral symmetry for polygon meshes.
//!
//! Polysym determines, from connectivity alone, which components of a
//! mesh mirror which across a symmetry plane. The caller selects one
//! mirrored pair of edges, faces, and vertices near the plane; the
//! library propagates that correspondence face by face across the shell,
//! producing a partner index for every vertex, edge, and face, and then
//! labels each component LEFT, RIGHT, or CENTER relative to a chosen
//! left-side vertex. No vertex positions are involved at any point, so
//! the result is unaffected by deformation.
//!
//! ## Features
//!
//! - **Connectivity-only**: symmetry from adjacency, never from geometry
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit component indices
//! - **Partial results**: malformed or asymmetric regions degrade locally
//!   rather than failing the whole computation
//! - **JSON interchange**: plain mesh and result documents for pipelines
//!
//! ## Quick Start
//!
//! ```
//! use polysym::prelude::*;
//!
//! // Two quads mirrored across their shared vertex column (1, 4)
//! let topo: MeshTopology = build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap();
//!
//! // Select the mirrored seed pair straddling the symmetry line
//! let e0 = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
//! let e1 = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
//! let seed = SeedSelection {
//!     edges: [e0, e1],
//!     faces: [FaceId::new(0), FaceId::new(1)],
//!     vertices: [VertexId::new(1), VertexId::new(1)],
//!     left_vertex: Some(VertexId::new(0)),
//! };
//! seed.validate(&topo).unwrap();
//!
//! // Propagate the correspondence and classify sides
//! let table = propagate(&topo, &seed);
//! let sides = classify_sides(&topo, &table, &[VertexId::new(0)]);
//!
//! assert_eq!(table.vertex_partner(VertexId::new(0)), VertexId::new(2));
//! assert_eq!(sides.vertex_side(VertexId::new(0)), Side::Left);
//! assert_eq!(sides.vertex_side(VertexId::new(2)), Side::Right);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod topology;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use polysym::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::symmetry::{
        classify_sides, propagate, SeedSelection, Side, SideTable, SymmetryTable,
    };
    pub use crate::error::{Result, SymmetryError};
    pub use crate::topology::{
        build_from_polygons, build_from_quads, build_from_triangles, EdgeId, FaceId, MeshIndex,
        MeshTopology, VertexId,
    };
}
