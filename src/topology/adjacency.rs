//! Indexed adjacency tables for polygon meshes.
//!
//! [`MeshTopology`] is the read-only input consumed by the symmetry
//! algorithms. It stores, per component, exactly the adjacency the
//! propagation needs:
//!
//! - per vertex: connected vertices, connected edges, and for each incident
//!   face the pair of face-local neighboring vertices ("siblings")
//! - per edge: its two vertices and its one or two faces
//! - per face: its vertex loop and the edge loop aligned with it
//!
//! The structure is built once per mesh (see [`build_from_polygons`]) and
//! never mutated afterwards, so concurrent computations over the same mesh
//! may share it freely.
//!
//! [`build_from_polygons`]: crate::topology::build_from_polygons

use std::collections::HashMap;

use super::index::{EdgeId, FaceId, MeshIndex, VertexId};

/// Adjacency record for a single vertex.
#[derive(Debug, Clone)]
pub struct VertexTopology<I: MeshIndex = u32> {
    /// Vertices connected to this vertex by an edge.
    pub(crate) connected_vertices: Vec<VertexId<I>>,

    /// Edges incident to this vertex.
    pub(crate) connected_edges: Vec<EdgeId<I>>,

    /// For each incident face, the two neighboring vertices on that face's
    /// loop reachable from this vertex by walking one edge.
    pub(crate) face_siblings: HashMap<FaceId<I>, [VertexId<I>; 2]>,
}

impl<I: MeshIndex> VertexTopology<I> {
    pub(crate) fn new() -> Self {
        Self {
            connected_vertices: Vec::new(),
            connected_edges: Vec::new(),
            face_siblings: HashMap::new(),
        }
    }
}

/// Adjacency record for a single edge.
#[derive(Debug, Clone)]
pub struct EdgeTopology<I: MeshIndex = u32> {
    /// The two endpoint vertices.
    pub(crate) vertices: [VertexId<I>; 2],

    /// The incident faces: two for interior edges, one for boundary edges.
    pub(crate) faces: Vec<FaceId<I>>,
}

/// Adjacency record for a single face.
#[derive(Debug, Clone)]
pub struct FaceTopology<I: MeshIndex = u32> {
    /// The vertex loop, in face order.
    pub(crate) vertices: Vec<VertexId<I>>,

    /// The edge loop, aligned with the vertex loop: `edges[i]` joins
    /// `vertices[i]` and `vertices[(i + 1) % n]`.
    pub(crate) edges: Vec<EdgeId<I>>,
}

/// Read-only indexed adjacency for a polygon mesh.
///
/// All relations are expressed as typed indices into flat arrays; the
/// symmetry tables produced by the algorithms are indexed identically, so a
/// host can zip the outputs directly onto its own component lists.
#[derive(Debug, Clone)]
pub struct MeshTopology<I: MeshIndex = u32> {
    pub(crate) vertices: Vec<VertexTopology<I>>,
    pub(crate) edges: Vec<EdgeTopology<I>>,
    pub(crate) faces: Vec<FaceTopology<I>>,
}

impl<I: MeshIndex> MeshTopology<I> {
    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertices connected to a vertex by an edge.
    #[inline]
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> &[VertexId<I>] {
        &self.vertices[v.index()].connected_vertices
    }

    /// Edges incident to a vertex.
    #[inline]
    pub fn vertex_edges(&self, v: VertexId<I>) -> &[EdgeId<I>] {
        &self.vertices[v.index()].connected_edges
    }

    /// The two face-local neighbors of `v` on face `f`, or `None` if `v` is
    /// not on that face.
    #[inline]
    pub fn face_siblings(&self, v: VertexId<I>, f: FaceId<I>) -> Option<[VertexId<I>; 2]> {
        self.vertices[v.index()].face_siblings.get(&f).copied()
    }

    /// The two endpoint vertices of an edge.
    #[inline]
    pub fn edge_vertices(&self, e: EdgeId<I>) -> [VertexId<I>; 2] {
        self.edges[e.index()].vertices
    }

    /// The faces incident to an edge (one for boundary edges, two otherwise).
    #[inline]
    pub fn edge_faces(&self, e: EdgeId<I>) -> &[FaceId<I>] {
        &self.edges[e.index()].faces
    }

    /// Check if an edge has only one incident face.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId<I>) -> bool {
        self.edges[e.index()].faces.len() == 1
    }

    /// The vertex loop of a face, in face order.
    #[inline]
    pub fn face_vertices(&self, f: FaceId<I>) -> &[VertexId<I>] {
        &self.faces[f.index()].vertices
    }

    /// The edge loop of a face, aligned with the vertex loop.
    #[inline]
    pub fn face_edges(&self, f: FaceId<I>) -> &[EdgeId<I>] {
        &self.faces[f.index()].edges
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    // ==================== Set queries ====================

    /// Faces incident to both edges.
    ///
    /// The result has at most two entries on a manifold mesh.
    pub fn shared_faces(&self, e0: EdgeId<I>, e1: EdgeId<I>) -> Vec<FaceId<I>> {
        self.edge_faces(e0)
            .iter()
            .filter(|f| self.edge_faces(e1).contains(f))
            .copied()
            .collect()
    }

    /// Edges incident to both vertices.
    ///
    /// On a manifold mesh two connected vertices share exactly one edge;
    /// any other count signals a non-manifold region.
    pub fn shared_edges(&self, v0: VertexId<I>, v1: VertexId<I>) -> Vec<EdgeId<I>> {
        self.vertex_edges(v0)
            .iter()
            .filter(|e| self.vertex_edges(v1).contains(e))
            .copied()
            .collect()
    }

    /// The edge joining two vertices, if there is exactly one.
    pub fn edge_between(&self, v0: VertexId<I>, v1: VertexId<I>) -> Option<EdgeId<I>> {
        let shared = self.shared_edges(v0, v1);
        match shared.as_slice() {
            [e] => Some(*e),
            _ => None,
        }
    }

    // ==================== Validation ====================

    /// Check that the adjacency tables are internally consistent.
    ///
    /// Verifies that every edge's vertices appear in each incident face's
    /// loop, that face edge loops align with their vertex loops, and that
    /// the sibling relation is symmetric with respect to edge adjacency.
    pub fn is_valid(&self) -> bool {
        for (ei, edge) in self.edges.iter().enumerate() {
            let e = EdgeId::new(ei);
            for &f in &edge.faces {
                let loop_verts = self.face_vertices(f);
                if !edge.vertices.iter().all(|v| loop_verts.contains(v)) {
                    return false;
                }
                if !self.face_edges(f).contains(&e) {
                    return false;
                }
            }
        }

        for (fi, face) in self.faces.iter().enumerate() {
            let f = FaceId::new(fi);
            let n = face.vertices.len();
            if face.edges.len() != n {
                return false;
            }
            for i in 0..n {
                let a = face.vertices[i];
                let b = face.vertices[(i + 1) % n];
                let ev = self.edge_vertices(face.edges[i]);
                if !(ev == [a, b] || ev == [b, a]) {
                    return false;
                }
            }
            // Sibling symmetry: if b is a sibling of a on f, then a is a
            // sibling of b on f.
            for &a in &face.vertices {
                let Some(sibs) = self.face_siblings(a, f) else {
                    return false;
                };
                for b in sibs {
                    match self.face_siblings(b, f) {
                        Some(back) => {
                            if !back.contains(&a) {
                                return false;
                            }
                        }
                        None => return false,
                    }
                }
            }
        }

        true
    }
}
