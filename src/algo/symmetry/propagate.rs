//! Symmetry propagation over mesh topology.
//!
//! The propagation engine expands a minimal seed (one symmetric edge pair,
//! one symmetric face pair adjacent to those edges, and one symmetric
//! vertex pair on those edges) into a complete symmetry table for the
//! seed's connected shell.
//!
//! # Algorithm
//!
//! A FIFO worklist holds pairs of edges known to be symmetric. For each
//! pair, the engine locates the still-unexamined faces adjacent to the
//! edges: while the two edges still bound shared faces, the unexamined
//! members of the shared set are the candidates; once the traversal has
//! crossed past the shared region, each edge contributes its own
//! unexamined face. The face pair is marked symmetric, the face loops are
//! paired vertex-by-vertex by walking from already-resolved vertices to
//! their unexamined face-local siblings, and every edge of the first face
//! whose endpoints are both resolved is matched to the unique edge joining
//! the partner vertices on the second face. Newly matched edge pairs are
//! enqueued, advancing the frontier one ring of faces at a time.
//!
//! Dead ends (boundary edges, already-resolved faces, ambiguous edge
//! reconstruction in non-manifold regions) are skipped rather than
//! reported; affected components simply remain unresolved. Components
//! outside the seed's shell are never visited.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{Result, SymmetryError};
use crate::topology::{EdgeId, FaceId, MeshIndex, MeshTopology, VertexId};

use super::table::SymmetryTable;

/// The starting data for a symmetry computation.
///
/// The caller asserts that `edges[0]` mirrors `edges[1]`, `faces[0]`
/// mirrors `faces[1]`, and `vertices[0]` mirrors `vertices[1]`, with each
/// face adjacent to its edge and each vertex on its edge. A center-line
/// seed vertex may be given as the same index twice. The propagation
/// itself does not validate any of this (see [`SeedSelection::validate`]);
/// a geometrically wrong seed yields garbage symmetry, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSelection<I: MeshIndex = u32> {
    /// A pair of symmetric edges.
    pub edges: [EdgeId<I>; 2],

    /// A pair of symmetric faces, each adjacent to its respective edge.
    pub faces: [FaceId<I>; 2],

    /// A pair of symmetric vertices, each on its respective edge.
    pub vertices: [VertexId<I>; 2],

    /// A vertex known to be on the left side, used to orient the side
    /// classification. May be omitted when only the symmetry table is
    /// needed.
    pub left_vertex: Option<VertexId<I>>,
}

impl<I: MeshIndex> SeedSelection<I> {
    /// Check the structural consistency of the seed against a topology.
    ///
    /// Verifies index ranges, that each seed edge lies on its seed face,
    /// and that each seed vertex lies on its seed edge. Host layers should
    /// call this before [`propagate`]; the engine itself does not.
    ///
    /// This cannot detect a seed that is structurally sound but not
    /// geometrically mirrored; that remains the caller's responsibility.
    pub fn validate(&self, topology: &MeshTopology<I>) -> Result<()> {
        for e in self.edges {
            if e.index() >= topology.num_edges() {
                return Err(SymmetryError::ComponentOutOfRange {
                    kind: "edge",
                    index: e.index(),
                    count: topology.num_edges(),
                });
            }
        }
        for f in self.faces {
            if f.index() >= topology.num_faces() {
                return Err(SymmetryError::ComponentOutOfRange {
                    kind: "face",
                    index: f.index(),
                    count: topology.num_faces(),
                });
            }
        }
        let mut verts = self.vertices.to_vec();
        if let Some(left) = self.left_vertex {
            verts.push(left);
        }
        for v in verts {
            if v.index() >= topology.num_vertices() {
                return Err(SymmetryError::ComponentOutOfRange {
                    kind: "vertex",
                    index: v.index(),
                    count: topology.num_vertices(),
                });
            }
        }

        for i in 0..2 {
            if !topology.face_edges(self.faces[i]).contains(&self.edges[i]) {
                return Err(SymmetryError::InvalidSeed(format!(
                    "edge {} is not on face {}",
                    self.edges[i].index(),
                    self.faces[i].index()
                )));
            }
            if !topology.edge_vertices(self.edges[i]).contains(&self.vertices[i]) {
                return Err(SymmetryError::InvalidSeed(format!(
                    "vertex {} is not on edge {}",
                    self.vertices[i].index(),
                    self.edges[i].index()
                )));
            }
        }

        Ok(())
    }
}

/// Compute the symmetry table for the shell containing the seed.
///
/// Every vertex, edge, and face reachable from the seed by the propagation
/// rules is paired with its mirror partner (or itself, for center-line
/// components). Components the traversal cannot reach, including entire
/// disconnected shells, are left unresolved.
///
/// # Example
///
/// ```
/// use polysym::prelude::*;
///
/// // Two quads mirrored across their shared edge column (1, 4):
/// //   3 --- 4 --- 5
/// //   | f0  |  f1 |
/// //   0 --- 1 --- 2
/// let topo: MeshTopology = build_from_quads(6, &[[0, 1, 4, 3], [1, 2, 5, 4]]).unwrap();
///
/// let e0 = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
/// let e1 = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
/// let seed = SeedSelection {
///     edges: [e0, e1],
///     faces: [FaceId::new(0), FaceId::new(1)],
///     vertices: [VertexId::new(1), VertexId::new(1)],
///     left_vertex: Some(VertexId::new(0)),
/// };
///
/// let table = propagate(&topo, &seed);
/// assert_eq!(table.vertex_partner(VertexId::new(0)), VertexId::new(2));
/// assert!(table.is_center_vertex(VertexId::new(4)));
/// ```
pub fn propagate<I: MeshIndex>(
    topology: &MeshTopology<I>,
    seed: &SeedSelection<I>,
) -> SymmetryTable<I> {
    let mut table = SymmetryTable::new(topology);

    let mut pending: VecDeque<(EdgeId<I>, EdgeId<I>)> = VecDeque::new();
    pending.push_back((seed.edges[0], seed.edges[1]));

    resolve_seed(topology, &mut table, seed);

    let mut processed = 0usize;
    while let Some((e0, e1)) = pending.pop_front() {
        processed += 1;
        table.mark_edges_symmetric(e0, e1);

        let Some((f0, f1)) = unexamined_faces(topology, &table, e0, e1) else {
            trace!("edge pair ({:?}, {:?}) is a dead end", e0, e1);
            continue;
        };

        table.mark_faces_symmetric(f0, f1);

        pair_face_vertices(topology, &mut table, f0, f1);
        pair_face_edges(topology, &mut table, &mut pending, f0);
    }

    debug!(
        "propagation processed {} edge pairs: {}/{} vertices, {}/{} edges, {}/{} faces resolved",
        processed,
        table.resolved_vertex_count(),
        topology.num_vertices(),
        table.resolved_edge_count(),
        topology.num_edges(),
        table.resolved_face_count(),
        topology.num_faces(),
    );

    table
}

/// Resolve the seed components before the worklist runs.
///
/// Marks the seed vertex and face pairs, pairs the "other" endpoint of each
/// seed edge (the endpoint not yet examined), and walks the seed face
/// loops.
fn resolve_seed<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &mut SymmetryTable<I>,
    seed: &SeedSelection<I>,
) {
    table.mark_vertices_symmetric(seed.vertices[0], seed.vertices[1]);
    table.mark_faces_symmetric(seed.faces[0], seed.faces[1]);

    let other0 = other_endpoint(topology, table, seed.edges[0]);
    let other1 = other_endpoint(topology, table, seed.edges[1]);
    table.mark_vertices_symmetric(other0, other1);

    pair_face_vertices(topology, table, seed.faces[0], seed.faces[1]);
}

/// The endpoint of an edge that has not been examined yet, falling back to
/// the first endpoint if both have been.
fn other_endpoint<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    e: EdgeId<I>,
) -> VertexId<I> {
    let [v0, v1] = topology.edge_vertices(e);
    if table.is_vertex_examined(v0) {
        v1
    } else {
        v0
    }
}

/// Determine the pair of unexamined faces adjacent to a symmetric edge pair.
///
/// While the edges still share faces, the up-to-two unexamined members of
/// the shared set form the pair; otherwise each edge contributes its single
/// unexamined face independently. Returns `None` when either side has no
/// unexamined face left (a boundary or an already-resolved region).
fn unexamined_faces<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    e0: EdgeId<I>,
    e1: EdgeId<I>,
) -> Option<(FaceId<I>, FaceId<I>)> {
    let shared = topology.shared_faces(e0, e1);

    let mut f0 = None;
    let mut f1 = None;

    if !shared.is_empty() {
        for f in shared {
            if table.is_face_examined(f) {
                continue;
            }
            if f0.is_none() {
                f0 = Some(f);
            } else if f1.is_none() {
                f1 = Some(f);
            }
        }
    } else {
        f0 = unexamined_face(topology, table, e0);
        f1 = unexamined_face(topology, table, e1);
    }

    match (f0, f1) {
        (Some(f0), Some(f1)) => Some((f0, f1)),
        _ => None,
    }
}

/// The first unexamined face adjacent to an edge, if any.
fn unexamined_face<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    e: EdgeId<I>,
) -> Option<FaceId<I>> {
    topology
        .edge_faces(e)
        .iter()
        .copied()
        .find(|&f| !table.is_face_examined(f))
}

/// Pair the vertices of two symmetric faces by sibling walking.
///
/// Starting from every already-examined vertex on `f0`, repeatedly steps
/// to the unexamined face-local sibling on `f0` and the corresponding
/// sibling of the partner vertex on `f1`, marking each new pair symmetric.
/// Because a face loop is a closed cycle, this covers the whole loop.
fn pair_face_vertices<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &mut SymmetryTable<I>,
    f0: FaceId<I>,
    f1: FaceId<I>,
) {
    let mut pending: VecDeque<VertexId<I>> = topology
        .face_vertices(f0)
        .iter()
        .copied()
        .filter(|&v| table.is_vertex_examined(v))
        .collect();

    while let Some(v0) = pending.pop_front() {
        let v1 = table.vertex_partner(v0);

        let next0 = unexamined_sibling(topology, table, v0, f0);
        let next1 = unexamined_sibling(topology, table, v1, f1);

        let (Some(next0), Some(next1)) = (next0, next1) else {
            continue;
        };

        table.mark_vertices_symmetric(next0, next1);
        pending.push_back(next0);
    }
}

/// The unexamined face-local sibling of a vertex, if any.
fn unexamined_sibling<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &SymmetryTable<I>,
    v: VertexId<I>,
    f: FaceId<I>,
) -> Option<VertexId<I>> {
    topology
        .face_siblings(v, f)?
        .into_iter()
        .find(|&s| !table.is_vertex_examined(s))
}

/// Pair the unexamined edges of a face with their counterparts on the
/// partner face, enqueueing new pairs for the worklist.
///
/// An edge qualifies once both of its endpoints are resolved; its partner
/// is the unique edge joining the two partner vertices. Zero or multiple
/// candidates indicate a non-manifold region or a propagation error; the
/// edge is skipped and stays unresolved.
fn pair_face_edges<I: MeshIndex>(
    topology: &MeshTopology<I>,
    table: &mut SymmetryTable<I>,
    pending: &mut VecDeque<(EdgeId<I>, EdgeId<I>)>,
    f0: FaceId<I>,
) {
    for &e in topology.face_edges(f0) {
        if table.is_edge_examined(e) {
            continue;
        }

        let [a, b] = topology.edge_vertices(e);
        let pa = table.vertex_partner(a);
        let pb = table.vertex_partner(b);

        if !pa.is_valid() || !pb.is_valid() {
            continue;
        }

        let shared = topology.shared_edges(pa, pb);
        let [partner] = shared.as_slice() else {
            trace!(
                "no unique edge between {:?} and {:?} ({} candidates), skipping",
                pa,
                pb,
                shared.len()
            );
            continue;
        };

        if !table.is_edge_examined(*partner) {
            pending.push_back((e, *partner));
        }
        table.mark_edges_symmetric(e, *partner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::symmetry::fixtures::{quad_strip, tube, tube_seed};
    use crate::topology::build_from_quads;

    #[test]
    fn test_quad_strip_minimal_seed() {
        // Two quads mirrored across the shared column (1, 4). The seed
        // vertex pair is the center vertex given twice.
        let topo = quad_strip();
        let e_left = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        let e_right = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();

        let seed = SeedSelection {
            edges: [e_left, e_right],
            faces: [FaceId::new(0), FaceId::new(1)],
            vertices: [VertexId::new(1), VertexId::new(1)],
            left_vertex: Some(VertexId::new(0)),
        };
        let table = propagate(&topo, &seed);

        // All vertices resolve: 0-2, 3-5 mirrored, 1 and 4 center.
        assert_eq!(table.vertex_partner(VertexId::new(0)), VertexId::new(2));
        assert_eq!(table.vertex_partner(VertexId::new(3)), VertexId::new(5));
        assert!(table.is_center_vertex(VertexId::new(1)));
        assert!(table.is_center_vertex(VertexId::new(4)));
        assert_eq!(table.resolved_vertex_count(), 6);

        // Both faces resolve as a pair.
        assert_eq!(table.face_partner(FaceId::new(0)), FaceId::new(1));

        // Only the seed edges resolve: the remaining edges belong solely
        // to the seed faces, whose loops are never edge-scanned.
        assert_eq!(table.edge_partner(e_left), e_right);
        assert_eq!(table.resolved_edge_count(), 2);
    }

    #[test]
    fn test_tube_full_coverage() {
        let topo = tube();
        let (seed, _) = tube_seed(&topo);
        let table = propagate(&topo, &seed);

        // End rings mirror each other, the middle ring is the center line.
        for i in 0..4 {
            assert_eq!(
                table.vertex_partner(VertexId::new(i)),
                VertexId::new(i + 8),
                "end-ring vertex {} should pair across the tube",
                i
            );
            assert!(table.is_center_vertex(VertexId::new(i + 4)));
        }
        assert_eq!(table.resolved_vertex_count(), 12);

        // All four face pairs found.
        for i in 0..4 {
            assert_eq!(table.face_partner(FaceId::new(i)), FaceId::new(i + 4));
        }
        assert_eq!(table.resolved_face_count(), 8);

        // Middle-ring edges away from the seed faces are self-symmetric.
        let seam_56 = topo.edge_between(VertexId::new(5), VertexId::new(6)).unwrap();
        let seam_67 = topo.edge_between(VertexId::new(6), VertexId::new(7)).unwrap();
        let seam_74 = topo.edge_between(VertexId::new(7), VertexId::new(4)).unwrap();
        assert_eq!(table.edge_partner(seam_56), seam_56);
        assert_eq!(table.edge_partner(seam_67), seam_67);
        assert_eq!(table.edge_partner(seam_74), seam_74);

        // Axial pairs.
        let e_axial_l = topo.edge_between(VertexId::new(2), VertexId::new(6)).unwrap();
        let e_axial_r = topo.edge_between(VertexId::new(6), VertexId::new(10)).unwrap();
        assert_eq!(table.edge_partner(e_axial_l), e_axial_r);

        // Exactly three edges stay unresolved: both end-ring edges of the
        // seed face pair and the seam edge between the seed faces, none of
        // which lie on a face the scan ever visits.
        assert_eq!(table.resolved_edge_count(), topo.num_edges() - 3);
        let seed_seam = topo.edge_between(VertexId::new(4), VertexId::new(5)).unwrap();
        let seed_ring_a = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        let seed_ring_b = topo.edge_between(VertexId::new(8), VertexId::new(9)).unwrap();
        assert!(!table.is_edge_examined(seed_seam));
        assert!(!table.is_edge_examined(seed_ring_a));
        assert!(!table.is_edge_examined(seed_ring_b));
    }

    #[test]
    fn test_involution() {
        let topo = tube();
        let (seed, _) = tube_seed(&topo);
        let table = propagate(&topo, &seed);

        for v in topo.vertex_ids() {
            if table.is_vertex_examined(v) {
                assert_eq!(table.vertex_partner(table.vertex_partner(v)), v);
            } else {
                assert!(!table.vertex_partner(v).is_valid());
            }
        }
        for e in topo.edge_ids() {
            if table.is_edge_examined(e) {
                assert_eq!(table.edge_partner(table.edge_partner(e)), e);
            }
        }
        for f in topo.face_ids() {
            if table.is_face_examined(f) {
                assert_eq!(table.face_partner(table.face_partner(f)), f);
            }
        }
    }

    #[test]
    fn test_disconnected_shell_stays_unresolved() {
        // Two quad strips with no shared components; the seed sits in the
        // first shell (vertices 0..6), the second (6..12) is untouched.
        let faces = vec![
            [0, 1, 4, 3],
            [1, 2, 5, 4],
            [6, 7, 10, 9],
            [7, 8, 11, 10],
        ];
        let topo: MeshTopology = build_from_quads(12, &faces).unwrap();

        let e_left = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        let e_right = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
        let seed = SeedSelection {
            edges: [e_left, e_right],
            faces: [FaceId::new(0), FaceId::new(1)],
            vertices: [VertexId::new(1), VertexId::new(1)],
            left_vertex: None,
        };
        let table = propagate(&topo, &seed);

        for i in 6..12 {
            assert!(!table.is_vertex_examined(VertexId::new(i)));
            assert!(!table.vertex_partner(VertexId::new(i)).is_valid());
        }
        for f in [FaceId::new(2), FaceId::new(3)] {
            assert!(!table.is_face_examined(f));
        }
    }

    #[test]
    fn test_boundary_edge_dead_end() {
        // On the tube, the end-ring edge pairs discovered during
        // propagation are boundary edges whose only faces are already
        // examined when they are dequeued; they must resolve as a pair
        // but produce no further faces, without panicking.
        let topo = tube();
        let (seed, _) = tube_seed(&topo);
        let table = propagate(&topo, &seed);

        let ring_a = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();
        let ring_b = topo.edge_between(VertexId::new(9), VertexId::new(10)).unwrap();
        assert!(topo.is_boundary_edge(ring_a));
        assert_eq!(table.edge_partner(ring_a), ring_b);
    }

    #[test]
    fn test_seed_validate() {
        let topo = quad_strip();
        let e_left = topo.edge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        let e_right = topo.edge_between(VertexId::new(1), VertexId::new(2)).unwrap();

        let good = SeedSelection {
            edges: [e_left, e_right],
            faces: [FaceId::new(0), FaceId::new(1)],
            vertices: [VertexId::new(1), VertexId::new(1)],
            left_vertex: Some(VertexId::new(0)),
        };
        assert!(good.validate(&topo).is_ok());

        // Edge not on the stated face.
        let bad_face = SeedSelection {
            faces: [FaceId::new(1), FaceId::new(1)],
            ..good
        };
        assert!(matches!(
            bad_face.validate(&topo),
            Err(SymmetryError::InvalidSeed(_))
        ));

        // Vertex not on the stated edge.
        let bad_vertex = SeedSelection {
            vertices: [VertexId::new(5), VertexId::new(1)],
            ..good
        };
        assert!(matches!(
            bad_vertex.validate(&topo),
            Err(SymmetryError::InvalidSeed(_))
        ));

        // Out-of-range component.
        let bad_range = SeedSelection {
            vertices: [VertexId::new(99), VertexId::new(1)],
            ..good
        };
        assert!(matches!(
            bad_range.validate(&topo),
            Err(SymmetryError::ComponentOutOfRange { kind: "vertex", .. })
        ));
    }
}
