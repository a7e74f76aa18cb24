//! Topology construction from polygon face lists.
//!
//! This module builds the adjacency tables consumed by the symmetry
//! algorithms from the face-vertex description commonly found in mesh file
//! formats and host applications. Vertex positions are irrelevant to the
//! symmetry computation, so only a vertex count is required.

use std::collections::HashMap;

use log::debug;

use super::adjacency::{EdgeTopology, FaceTopology, MeshTopology, VertexTopology};
use super::index::{EdgeId, FaceId, MeshIndex, VertexId};
use crate::error::{Result, SymmetryError};

/// Build mesh topology from arbitrary polygon faces.
///
/// # Arguments
/// * `num_vertices` - Number of vertices in the mesh
/// * `faces` - List of faces, each a vertex loop of three or more indices
///
/// # Returns
/// The adjacency tables, or an error if the input is invalid: a face index
/// out of range, a face with fewer than three or repeated vertices, or an
/// edge shared by more than two faces.
///
/// # Example
/// ```
/// use polysym::topology::{build_from_polygons, MeshTopology};
///
/// // Two quads sharing the edge (1, 4)
/// let faces = vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]];
/// let topo: MeshTopology = build_from_polygons(6, &faces).unwrap();
/// assert_eq!(topo.num_edges(), 7);
/// ```
pub fn build_from_polygons<I: MeshIndex>(
    num_vertices: usize,
    faces: &[Vec<usize>],
) -> Result<MeshTopology<I>> {
    if faces.is_empty() {
        return Err(SymmetryError::EmptyMesh);
    }

    // Validate vertex indices and face degeneracy
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(SymmetryError::DegenerateFace { face: fi });
        }
        for &vi in face {
            if vi >= num_vertices {
                return Err(SymmetryError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        for (i, &vi) in face.iter().enumerate() {
            if face[i + 1..].contains(&vi) {
                return Err(SymmetryError::DegenerateFace { face: fi });
            }
        }
    }

    let mut vertices: Vec<VertexTopology<I>> =
        (0..num_vertices).map(|_| VertexTopology::new()).collect();
    let mut edges: Vec<EdgeTopology<I>> = Vec::new();
    let mut face_tables: Vec<FaceTopology<I>> = Vec::with_capacity(faces.len());

    // Map from undirected vertex pair to edge ID
    let mut edge_map: HashMap<(usize, usize), EdgeId<I>> = HashMap::new();

    for (fi, face) in faces.iter().enumerate() {
        let face_id = FaceId::<I>::new(fi);
        let n = face.len();

        let loop_vertices: Vec<VertexId<I>> = face.iter().map(|&v| VertexId::new(v)).collect();
        let mut loop_edges: Vec<EdgeId<I>> = Vec::with_capacity(n);

        for i in 0..n {
            let a = face[i];
            let b = face[(i + 1) % n];
            let key = (a.min(b), a.max(b));

            let edge_id = match edge_map.get(&key) {
                Some(&e) => e,
                None => {
                    let e = EdgeId::<I>::new(edges.len());
                    edges.push(EdgeTopology {
                        vertices: [VertexId::new(a), VertexId::new(b)],
                        faces: Vec::with_capacity(2),
                    });
                    edge_map.insert(key, e);

                    // A new edge also establishes the vertex-vertex and
                    // vertex-edge adjacency for both endpoints.
                    vertices[a].connected_vertices.push(VertexId::new(b));
                    vertices[a].connected_edges.push(e);
                    vertices[b].connected_vertices.push(VertexId::new(a));
                    vertices[b].connected_edges.push(e);

                    e
                }
            };

            let edge = &mut edges[edge_id.index()];
            if edge.faces.len() == 2 {
                return Err(SymmetryError::NonManifoldEdge { v0: key.0, v1: key.1 });
            }
            edge.faces.push(face_id);
            loop_edges.push(edge_id);
        }

        // Face-vertex siblings: the loop neighbors on either side
        for i in 0..n {
            let prev = loop_vertices[(i + n - 1) % n];
            let next = loop_vertices[(i + 1) % n];
            vertices[face[i]]
                .face_siblings
                .insert(face_id, [prev, next]);
        }

        face_tables.push(FaceTopology {
            vertices: loop_vertices,
            edges: loop_edges,
        });
    }

    debug!(
        "built topology: {} vertices, {} edges, {} faces",
        num_vertices,
        edges.len(),
        face_tables.len()
    );

    Ok(MeshTopology {
        vertices,
        edges,
        faces: face_tables,
    })
}

/// Build mesh topology from quad faces.
///
/// Convenience wrapper over [`build_from_polygons`].
pub fn build_from_quads<I: MeshIndex>(
    num_vertices: usize,
    faces: &[[usize; 4]],
) -> Result<MeshTopology<I>> {
    let faces: Vec<Vec<usize>> = faces.iter().map(|f| f.to_vec()).collect();
    build_from_polygons(num_vertices, &faces)
}

/// Build mesh topology from triangle faces.
///
/// Convenience wrapper over [`build_from_polygons`].
pub fn build_from_triangles<I: MeshIndex>(
    num_vertices: usize,
    faces: &[[usize; 3]],
) -> Result<MeshTopology<I>> {
    let faces: Vec<Vec<usize>> = faces.iter().map(|f| f.to_vec()).collect();
    build_from_polygons(num_vertices, &faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quad() {
        let topo: MeshTopology = build_from_quads(4, &[[0, 1, 2, 3]]).unwrap();
        assert_eq!(topo.num_vertices(), 4);
        assert_eq!(topo.num_edges(), 4);
        assert_eq!(topo.num_faces(), 1);
        assert!(topo.is_valid());

        for e in topo.edge_ids() {
            assert!(topo.is_boundary_edge(e));
        }
    }

    #[test]
    fn test_two_triangles() {
        let topo: MeshTopology = build_from_triangles(4, &[[0, 1, 2], [1, 0, 3]]).unwrap();
        assert_eq!(topo.num_edges(), 5);
        assert!(topo.is_valid());

        let shared = topo
            .edge_between(VertexId::new(0), VertexId::new(1))
            .unwrap();
        assert_eq!(topo.edge_faces(shared).len(), 2);
    }

    #[test]
    fn test_mixed_polygons() {
        // A quad with a triangle attached along edge (1, 2)
        let faces = vec![vec![0, 1, 2, 3], vec![2, 1, 4]];
        let topo: MeshTopology = build_from_polygons(5, &faces).unwrap();
        assert_eq!(topo.num_faces(), 2);
        assert_eq!(topo.face_vertices(FaceId::new(1)).len(), 3);
        assert!(topo.is_valid());
    }

    #[test]
    fn test_edge_loop_alignment() {
        let topo: MeshTopology = build_from_quads(4, &[[0, 1, 2, 3]]).unwrap();
        let f = FaceId::new(0);
        let verts = topo.face_vertices(f);
        let edges = topo.face_edges(f);
        for i in 0..4 {
            let ev = topo.edge_vertices(edges[i]);
            assert!(ev.contains(&verts[i]));
            assert!(ev.contains(&verts[(i + 1) % 4]));
        }
    }

    #[test]
    fn test_empty_mesh() {
        let result: Result<MeshTopology> = build_from_polygons(0, &[]);
        assert!(matches!(result, Err(SymmetryError::EmptyMesh)));
    }

    #[test]
    fn test_invalid_vertex_index() {
        let result: Result<MeshTopology> = build_from_triangles(2, &[[0, 1, 2]]);
        assert!(matches!(
            result,
            Err(SymmetryError::InvalidVertexIndex { face: 0, vertex: 2 })
        ));
    }

    #[test]
    fn test_degenerate_face() {
        let result: Result<MeshTopology> = build_from_triangles(3, &[[0, 1, 0]]);
        assert!(matches!(result, Err(SymmetryError::DegenerateFace { face: 0 })));

        let result: Result<MeshTopology> = build_from_polygons(3, &[vec![0, 1]]);
        assert!(matches!(result, Err(SymmetryError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_non_manifold_edge() {
        // Three triangles fanning around the edge (0, 1)
        let faces = vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]];
        let result: Result<MeshTopology> = build_from_triangles(5, &faces);
        assert!(matches!(
            result,
            Err(SymmetryError::NonManifoldEdge { v0: 0, v1: 1 })
        ));
    }
}
