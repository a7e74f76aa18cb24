//! Bilateral symmetry computation.
//!
//! Given a mesh topology and a seed pair of mirrored components, these
//! algorithms build a complete symmetry table for the seed's shell and
//! label every component LEFT, RIGHT, or CENTER:
//!
//! ```
//! use polysym::prelude::*;
//!
//! // Two quads mirrored across their shared edge column (1, 4)
//! let topo: MeshTopology = build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap();
//! let e0 = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
//! let e1 = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
//!
//! let seed = SeedSelection {
//!     edges: [e0, e1],
//!     faces: [FaceId::new(0), FaceId::new(1)],
//!     vertices: [VertexId::new(1), VertexId::new(1)],
//!     left_vertex: Some(VertexId::new(0)),
//! };
//! seed.validate(&topo).unwrap();
//!
//! let table = propagate(&topo, &seed);
//! let sides = classify_sides(&topo, &table, &[VertexId::new(0)]);
//! assert_eq!(sides.vertex_side(VertexId::new(5)), Side::Right);
//! ```

mod propagate;
mod sides;
mod table;

pub use propagate::{propagate, SeedSelection};
pub use sides::{classify_sides, Side, SideTable};
pub use table::SymmetryTable;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SeedSelection;
    use crate::topology::{build_from_quads, FaceId, MeshTopology, VertexId};

    /// Two quads mirrored across their shared edge column (1, 4).
    ///
    /// ```text
    /// 3 ----- 4 ----- 5
    /// |  f0   |  f1   |
    /// 0 ----- 1 ----- 2
    /// ```
    pub(crate) fn quad_strip() -> MeshTopology<u32> {
        build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap()
    }

    /// A tube of 8 quads: two segments of 4 quads around a square
    /// cross-section, mirrored across the middle vertex ring.
    ///
    /// End ring A: vertices 0..4, middle ring: 4..8, end ring B: 8..12.
    /// Faces 0..4 form the A-side segment, faces 4..8 the B-side.
    pub(crate) fn tube() -> MeshTopology<u32> {
        let faces = [
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [4, 5, 9, 8],
            [5, 6, 10, 9],
            [6, 7, 11, 10],
            [7, 4, 8, 11],
        ];
        build_from_quads(12, &faces).unwrap()
    }

    /// Seed for [`tube`]: the mirrored axial edges (1, 5) and (5, 9), the
    /// faces 0 and 4 adjacent across the middle ring, and the end-ring
    /// vertex pair (1, 9). Also returns the left-side seed vertex.
    pub(crate) fn tube_seed(topo: &MeshTopology<u32>) -> (SeedSelection<u32>, VertexId<u32>) {
        let e0 = topo
            .edge_between(VertexId::new(1), VertexId::new(5))
            .unwrap();
        let e1 = topo
            .edge_between(VertexId::new(5), VertexId::new(9))
            .unwrap();
        let seed = SeedSelection {
            edges: [e0, e1],
            faces: [FaceId::new(0), FaceId::new(4)],
            vertices: [VertexId::new(1), VertexId::new(9)],
            left_vertex: Some(VertexId::new(1)),
        };
        (seed, VertexId::new(1))
    }
}
