//! Left/right/center labeling on top of a symmetry table.
//!
//! Once a [`SymmetryTable`] is complete, a small set of vertices known to
//! be on the left is enough to partition the whole shell: a flood fill
//! claims the left half without crossing the mirror seam, a second fill
//! claims the right half starting from the left seeds' partners, and edge
//! and face sides are derived from their vertex sides.
//!
//! Three behaviors of the classification are deliberate and preserved:
//!
//! - An edge with one LEFT and one RIGHT endpoint resolves to RIGHT,
//!   because the RIGHT check precedes the LEFT check. Such edges should
//!   not occur when the symmetry table is correct.
//! - A face whose loop touches both sides has its left and right
//!   contributions cancel to CENTER. Callers that need to distinguish true
//!   center-line faces from straddling faces must inspect the vertex sides
//!   directly.
//! - A center-line vertex passed as a left seed ends up RIGHT: the left
//!   fill corrects the seed to CENTER, but the right fill then seeds the
//!   same vertex (its own partner) with an unconditional RIGHT write, and
//!   the visited flag prevents any later correction. This degenerate seed
//!   is the one case where a self-symmetric vertex is not labeled CENTER;
//!   callers should seed with off-center vertices.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::topology::{EdgeId, FaceId, MeshIndex, MeshTopology, VertexId};

use super::table::SymmetryTable;

/// Which side of the symmetry plane a component lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// The left half of the mesh.
    Left,
    /// On the center line, or not reached by any classification seed.
    #[default]
    Center,
    /// The right half of the mesh.
    Right,
}

impl Side {
    /// Numeric encoding: LEFT = 1, CENTER = 0, RIGHT = -1.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Center => 0,
            Side::Right => -1,
        }
    }

    /// Decode the numeric encoding produced by [`Side::signum`].
    pub fn from_signum(s: i8) -> Option<Side> {
        match s {
            1 => Some(Side::Left),
            0 => Some(Side::Center),
            -1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// Side labels for every vertex, edge, and face of a mesh.
///
/// Indexed identically to the topology the labels were computed from.
/// Components never reached by the classification keep the default
/// CENTER; combined with an unresolved symmetry partner this means
/// "unknown", not "center line".
#[derive(Debug, Clone)]
pub struct SideTable<I: MeshIndex = u32> {
    vertex_sides: Vec<Side>,
    edge_sides: Vec<Side>,
    face_sides: Vec<Side>,
    _index: PhantomData<I>,
}

impl<I: MeshIndex> SideTable<I> {
    /// The side of a vertex.
    #[inline]
    pub fn vertex_side(&self, v: VertexId<I>) -> Side {
        self.vertex_sides[v.index()]
    }

    /// The side of an edge.
    #[inline]
    pub fn edge_side(&self, e: EdgeId<I>) -> Side {
        self.edge_sides[e.index()]
    }

    /// The side of a face.
    #[inline]
    pub fn face_side(&self, f: FaceId<I>) -> Side {
        self.face_sides[f.index()]
    }

    /// Side per vertex, indexed like the topology's vertex list.
    #[inline]
    pub fn vertex_sides(&self) -> &[Side] {
        &self.vertex_sides
    }

    /// Side per edge.
    #[inline]
    pub fn edge_sides(&self) -> &[Side] {
        &self.edge_sides
    }

    /// Side per face.
    #[inline]
    pub fn face_sides(&self) -> &[Side] {
        &self.face_sides
    }
}

/// Label every component LEFT, RIGHT, or CENTER.
///
/// `left_seeds` are vertices the caller knows to be on the left side;
/// their symmetry partners seed the right side. Running the classification
/// twice with the same table and seeds yields identical results.
///
/// # Example
///
/// ```
/// use polysym::prelude::*;
///
/// let topo: MeshTopology = build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap();
/// let e0 = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
/// let e1 = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
/// let seed = SeedSelection {
///     edges: [e0, e1],
///     faces: [FaceId::new(0), FaceId::new(1)],
///     vertices: [VertexId::new(1), VertexId::new(1)],
///     left_vertex: Some(VertexId::new(0)),
/// };
/// let table = propagate(&topo, &seed);
///
/// let sides = classify_sides(&topo, &table, &[VertexId::new(0)]);
/// assert_eq!(sides.vertex_side(VertexId::new(0)), Side::Left);
/// assert_eq!(sides.vertex_side(VertexId::new(2)), Side::Right);
/// assert_eq!(sides.vertex_side(VertexId::new(1)), Side::Center);
/// ```
pub fn classify_sides<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    left_seeds: &[VertexId<I>],
) -> SideTable<I> {
    let vertex_sides = classify_vertices(topology, table, left_seeds);
    let edge_sides = derive_edge_sides(topology, &vertex_sides);
    let face_sides = derive_face_sides(topology, &vertex_sides);

    SideTable {
        vertex_sides,
        edge_sides,
        face_sides,
        _index: PhantomData,
    }
}

/// Two-phase vertex flood fill.
fn classify_vertices<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    left_seeds: &[VertexId<I>],
) -> Vec<Side> {
    let n = topology.num_vertices();
    let mut sides = vec![Side::Center; n];
    let mut visited = vec![false; n];
    let mut pending: VecDeque<VertexId<I>> = VecDeque::new();

    // Left fill. Neighbors whose partner is the current vertex sit just
    // across the seam and must not be claimed for the left.
    for &v in left_seeds {
        pending.push_back(v);
        sides[v.index()] = Side::Left;
    }

    while let Some(v) = pending.pop_front() {
        if visited[v.index()] {
            continue;
        }
        visited[v.index()] = true;

        if table.is_center_vertex(v) {
            // A center-line vertex cannot be LEFT, even if seeded as one.
            sides[v.index()] = Side::Center;
        } else {
            sides[v.index()] = Side::Left;
            for &next in topology.vertex_neighbors(v) {
                if !visited[next.index()] && table.vertex_partner(next) != v {
                    pending.push_back(next);
                }
            }
        }
    }

    // Right fill from the left seeds' partners. The left region is fully
    // claimed at this point, so no seam guard is needed.
    for &v in left_seeds {
        let partner = table.vertex_partner(v);
        if !partner.is_valid() {
            continue;
        }
        pending.push_back(partner);
        sides[partner.index()] = Side::Right;
    }

    while let Some(v) = pending.pop_front() {
        if visited[v.index()] {
            continue;
        }
        visited[v.index()] = true;

        if table.is_center_vertex(v) {
            sides[v.index()] = Side::Center;
        } else {
            sides[v.index()] = Side::Right;
            for &next in topology.vertex_neighbors(v) {
                if !visited[next.index()] {
                    pending.push_back(next);
                }
            }
        }
    }

    sides
}

/// Derive edge sides from endpoint vertex sides.
///
/// RIGHT is checked before LEFT; a mixed LEFT/RIGHT edge therefore
/// resolves to RIGHT (see the module docs).
fn derive_edge_sides<I: MeshIndex>(topology: &MeshTopology<I>, vertex_sides: &[Side]) -> Vec<Side> {
    topology
        .edge_ids()
        .map(|e| {
            let [a, b] = topology.edge_vertices(e);
            let sa = vertex_sides[a.index()];
            let sb = vertex_sides[b.index()];

            if sa == Side::Center && sb == Side::Center {
                Side::Center
            } else if sa == Side::Right || sb == Side::Right {
                Side::Right
            } else {
                Side::Left
            }
        })
        .collect()
}

/// Derive face sides from the vertex loop sides.
///
/// The left contribution (+1 if any loop vertex is LEFT) and the right
/// contribution (-1 if any is RIGHT) are summed; a face touching both
/// sides cancels to CENTER.
fn derive_face_sides<I: MeshIndex>(topology: &MeshTopology<I>, vertex_sides: &[Side]) -> Vec<Side> {
    topology
        .face_ids()
        .map(|f| {
            let mut has_left = false;
            let mut has_right = false;
            for v in topology.face_vertices(f) {
                match vertex_sides[v.index()] {
                    Side::Left => has_left = true,
                    Side::Right => has_right = true,
                    Side::Center => {}
                }
            }

            let sum = (has_left as i8) - (has_right as i8);
            Side::from_signum(sum).unwrap_or(Side::Center)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::symmetry::fixtures::{tube, tube_seed};
    use crate::algo::symmetry::propagate;
    use crate::topology::{build_from_quads, FaceId, MeshTopology};

    #[test]
    fn test_tube_sides() {
        let topo = tube();
        let (seed, left) = tube_seed(&topo);
        let table = propagate(&topo, &seed);
        let sides = classify_sides(&topo, &table, &[left]);

        // End ring A is left, end ring B is right, middle ring is center.
        for i in 0..4 {
            assert_eq!(sides.vertex_side(VertexId::new(i)), Side::Left);
            assert_eq!(sides.vertex_side(VertexId::new(i + 4)), Side::Center);
            assert_eq!(sides.vertex_side(VertexId::new(i + 8)), Side::Right);
        }

        // Faces of the first segment are left, second segment right.
        for i in 0..4 {
            assert_eq!(sides.face_side(FaceId::new(i)), Side::Left);
            assert_eq!(sides.face_side(FaceId::new(i + 4)), Side::Right);
        }

        // Middle-ring edges are center; axial edges inherit their ring side.
        let seam = topo.edge_between(VertexId::new(5), VertexId::new(6)).unwrap();
        assert_eq!(sides.edge_side(seam), Side::Center);
        let axial_left = topo.edge_between(VertexId::new(1), VertexId::new(5)).unwrap();
        assert_eq!(sides.edge_side(axial_left), Side::Left);
        let axial_right = topo.edge_between(VertexId::new(5), VertexId::new(9)).unwrap();
        assert_eq!(sides.edge_side(axial_right), Side::Right);
    }

    #[test]
    fn test_partner_opposite_sides() {
        let topo = tube();
        let (seed, left) = tube_seed(&topo);
        let table = propagate(&topo, &seed);
        let sides = classify_sides(&topo, &table, &[left]);

        for v in topo.vertex_ids() {
            let partner = table.vertex_partner(v);
            if !partner.is_valid() || partner == v {
                continue;
            }
            let sv = sides.vertex_side(v);
            let sp = sides.vertex_side(partner);
            assert_ne!(sv, Side::Center);
            assert_ne!(sp, Side::Center);
            assert_ne!(sv, sp);
        }
    }

    #[test]
    fn test_self_symmetric_is_center() {
        let topo = tube();
        let (seed, left) = tube_seed(&topo);
        let table = propagate(&topo, &seed);
        let sides = classify_sides(&topo, &table, &[left]);

        for v in topo.vertex_ids() {
            if table.is_center_vertex(v) {
                assert_eq!(sides.vertex_side(v), Side::Center);
            }
        }
    }

    #[test]
    fn test_center_seed_ends_right() {
        // A center-line vertex as the left seed is degenerate: the left
        // fill corrects it to CENTER and stops, but the right fill then
        // seeds the same vertex (its own partner) RIGHT, and the visited
        // flag blocks any correction. No side leaks to other vertices.
        let topo = tube();
        let (seed, _) = tube_seed(&topo);
        let table = propagate(&topo, &seed);

        let center = VertexId::new(4);
        assert!(table.is_center_vertex(center));
        let sides = classify_sides(&topo, &table, &[center]);

        assert_eq!(sides.vertex_side(center), Side::Right);
        for v in topo.vertex_ids() {
            if v != center {
                assert_eq!(sides.vertex_side(v), Side::Center);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let topo = tube();
        let (seed, left) = tube_seed(&topo);
        let table = propagate(&topo, &seed);

        let first = classify_sides(&topo, &table, &[left]);
        let second = classify_sides(&topo, &table, &[left]);

        assert_eq!(first.vertex_sides(), second.vertex_sides());
        assert_eq!(first.edge_sides(), second.edge_sides());
        assert_eq!(first.face_sides(), second.face_sides());
    }

    #[test]
    fn test_unreached_shell_defaults_to_center() {
        let faces = vec![
            [0, 1, 4, 3],
            [1, 2, 5, 4],
            [6, 7, 10, 9],
            [7, 8, 11, 10],
        ];
        let topo: MeshTopology = build_from_quads(12, &faces).unwrap();
        let table = SymmetryTable::new(&topo);
        let sides = classify_sides(&topo, &table, &[]);

        for v in topo.vertex_ids() {
            assert_eq!(sides.vertex_side(v), Side::Center);
        }
    }

    #[test]
    fn test_straddling_face_and_edge_tiebreak() {
        // A single quad with a hand-built table mapping 0-1 and 3-2
        // across a seam that runs through the face. The face touches both
        // sides and cancels to CENTER; the mixed edges resolve to RIGHT.
        let topo: MeshTopology = build_from_quads(4, &[[0, 1, 2, 3]]).unwrap();
        let mut table = SymmetryTable::new(&topo);
        table.mark_vertices_symmetric(VertexId::new(0), VertexId::new(1));
        table.mark_vertices_symmetric(VertexId::new(3), VertexId::new(2));
        table.mark_faces_symmetric(FaceId::new(0), FaceId::new(0));

        let sides = classify_sides(&topo, &table, &[VertexId::new(0), VertexId::new(3)]);

        assert_eq!(sides.vertex_side(VertexId::new(0)), Side::Left);
        assert_eq!(sides.vertex_side(VertexId::new(3)), Side::Left);
        assert_eq!(sides.vertex_side(VertexId::new(1)), Side::Right);
        assert_eq!(sides.vertex_side(VertexId::new(2)), Side::Right);

        // Mixed LEFT/RIGHT edges resolve to RIGHT (check ordering).
        let mixed = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        assert_eq!(sides.edge_side(mixed), Side::Right);
        let left = topo.edge_between(VertexId::new(3), VertexId::new(0)).unwrap();
        assert_eq!(sides.edge_side(left), Side::Left);

        // The straddling face cancels to CENTER despite having no center
        // vertex at all.
        assert_eq!(sides.face_side(FaceId::new(0)), Side::Center);
    }

    #[test]
    fn test_signum_roundtrip() {
        for side in [Side::Left, Side::Center, Side::Right] {
            assert_eq!(Side::from_signum(side.signum()), Some(side));
        }
        assert_eq!(Side::from_signum(3), None);
    }

    #[test]
    fn test_edge_sides_cover_all_edges() {
        let topo = tube();
        let (seed, left) = tube_seed(&topo);
        let table = propagate(&topo, &seed);
        let sides = classify_sides(&topo, &table, &[left]);

        assert_eq!(sides.edge_sides().len(), topo.num_edges());
        for e in topo.edge_ids() {
            let _: Side = sides.edge_side(e);
        }
    }
}
