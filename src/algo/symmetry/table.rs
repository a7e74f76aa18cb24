//! Per-component symmetry state.
//!
//! [`SymmetryTable`] holds the mutable state built by the propagation
//! engine: for every vertex, edge, and face, the index of its symmetric
//! partner (or the unresolved sentinel) and an examined flag. The partner
//! mapping is a partial involution: whenever `partner[a] == b`, then
//! `partner[b] == a` and both components are examined. A component mapped
//! to itself is a center-line component.

use crate::topology::{EdgeId, FaceId, MeshIndex, MeshTopology, VertexId};

/// Symmetry partners and examined flags for every mesh component.
///
/// Created fresh per computation, sized to the topology's component counts.
/// Unresolved components read back as the invalid sentinel index; callers
/// must treat those as "symmetry unknown", not as symmetric-to-self.
#[derive(Debug, Clone)]
pub struct SymmetryTable<I: MeshIndex = u32> {
    vertex_partner: Vec<VertexId<I>>,
    edge_partner: Vec<EdgeId<I>>,
    face_partner: Vec<FaceId<I>>,

    vertex_examined: Vec<bool>,
    edge_examined: Vec<bool>,
    face_examined: Vec<bool>,
}

impl<I: MeshIndex> SymmetryTable<I> {
    /// Create an empty table sized to the given topology.
    pub fn new(topology: &MeshTopology<I>) -> Self {
        Self::with_counts(
            topology.num_vertices(),
            topology.num_edges(),
            topology.num_faces(),
        )
    }

    /// Create an empty table from raw component counts.
    pub fn with_counts(num_vertices: usize, num_edges: usize, num_faces: usize) -> Self {
        Self {
            vertex_partner: vec![VertexId::invalid(); num_vertices],
            edge_partner: vec![EdgeId::invalid(); num_edges],
            face_partner: vec![FaceId::invalid(); num_faces],
            vertex_examined: vec![false; num_vertices],
            edge_examined: vec![false; num_edges],
            face_examined: vec![false; num_faces],
        }
    }

    // ==================== Marking ====================

    /// Record that two vertices are symmetric partners.
    ///
    /// Sets the mutual mapping and examined flags in O(1). Idempotent when
    /// called again with the same pair. Passing the same vertex twice marks
    /// it as a center-line vertex.
    #[inline]
    pub fn mark_vertices_symmetric(&mut self, a: VertexId<I>, b: VertexId<I>) {
        self.vertex_partner[a.index()] = b;
        self.vertex_partner[b.index()] = a;
        self.vertex_examined[a.index()] = true;
        self.vertex_examined[b.index()] = true;
    }

    /// Record that two edges are symmetric partners.
    #[inline]
    pub fn mark_edges_symmetric(&mut self, a: EdgeId<I>, b: EdgeId<I>) {
        self.edge_partner[a.index()] = b;
        self.edge_partner[b.index()] = a;
        self.edge_examined[a.index()] = true;
        self.edge_examined[b.index()] = true;
    }

    /// Record that two faces are symmetric partners.
    #[inline]
    pub fn mark_faces_symmetric(&mut self, a: FaceId<I>, b: FaceId<I>) {
        self.face_partner[a.index()] = b;
        self.face_partner[b.index()] = a;
        self.face_examined[a.index()] = true;
        self.face_examined[b.index()] = true;
    }

    // ==================== Queries ====================

    /// The symmetric partner of a vertex, or the invalid sentinel if
    /// unresolved.
    #[inline]
    pub fn vertex_partner(&self, v: VertexId<I>) -> VertexId<I> {
        self.vertex_partner[v.index()]
    }

    /// The symmetric partner of an edge, or the invalid sentinel.
    #[inline]
    pub fn edge_partner(&self, e: EdgeId<I>) -> EdgeId<I> {
        self.edge_partner[e.index()]
    }

    /// The symmetric partner of a face, or the invalid sentinel.
    #[inline]
    pub fn face_partner(&self, f: FaceId<I>) -> FaceId<I> {
        self.face_partner[f.index()]
    }

    /// Whether a vertex's symmetry has been determined.
    #[inline]
    pub fn is_vertex_examined(&self, v: VertexId<I>) -> bool {
        self.vertex_examined[v.index()]
    }

    /// Whether an edge's symmetry has been determined.
    #[inline]
    pub fn is_edge_examined(&self, e: EdgeId<I>) -> bool {
        self.edge_examined[e.index()]
    }

    /// Whether a face's symmetry has been determined.
    #[inline]
    pub fn is_face_examined(&self, f: FaceId<I>) -> bool {
        self.face_examined[f.index()]
    }

    /// Whether a vertex is its own partner (a center-line vertex).
    #[inline]
    pub fn is_center_vertex(&self, v: VertexId<I>) -> bool {
        self.vertex_partner[v.index()] == v
    }

    // ==================== Bulk access ====================

    /// Partner index per vertex, indexed like the topology's vertex list.
    #[inline]
    pub fn vertex_partners(&self) -> &[VertexId<I>] {
        &self.vertex_partner
    }

    /// Partner index per edge.
    #[inline]
    pub fn edge_partners(&self) -> &[EdgeId<I>] {
        &self.edge_partner
    }

    /// Partner index per face.
    #[inline]
    pub fn face_partners(&self) -> &[FaceId<I>] {
        &self.face_partner
    }

    /// Examined flag per vertex.
    #[inline]
    pub fn vertex_examined_flags(&self) -> &[bool] {
        &self.vertex_examined
    }

    /// Examined flag per edge.
    #[inline]
    pub fn edge_examined_flags(&self) -> &[bool] {
        &self.edge_examined
    }

    /// Examined flag per face.
    #[inline]
    pub fn face_examined_flags(&self) -> &[bool] {
        &self.face_examined
    }

    /// Number of vertices whose symmetry has been determined.
    pub fn resolved_vertex_count(&self) -> usize {
        self.vertex_examined.iter().filter(|&&x| x).count()
    }

    /// Number of edges whose symmetry has been determined.
    pub fn resolved_edge_count(&self) -> usize {
        self.edge_examined.iter().filter(|&&x| x).count()
    }

    /// Number of faces whose symmetry has been determined.
    pub fn resolved_face_count(&self) -> usize {
        self.face_examined.iter().filter(|&&x| x).count()
    }
}
