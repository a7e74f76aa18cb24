//! JSON mesh and result files.
//!
//! Two document shapes live here. [`MeshFile`] carries a bare polygon
//! soup (vertex count plus face vertex loops) and converts into a
//! [`MeshTopology`]. [`SymmetryFile`] carries the flat result arrays of a
//! symmetry computation: one partner index per component, with `-1` for
//! unresolved, and one side label per component encoded as `1` (left),
//! `-1` (right), or `0` (center).

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algo::symmetry::{SideTable, SymmetryTable};
use crate::error::{Result, SymmetryError};
use crate::topology::{build_from_polygons, MeshIndex, MeshTopology};

/// A mesh described purely by its polygon connectivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshFile {
    /// Number of vertices in the mesh.
    pub num_vertices: usize,
    /// Vertex loops, one per face, in winding order.
    pub faces: Vec<Vec<usize>>,
}

impl MeshFile {
    /// Read a mesh description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MeshFile> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SymmetryError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mesh = serde_json::from_reader(BufReader::new(file))?;
        Ok(mesh)
    }

    /// Write the mesh description to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Build the adjacency tables for this mesh.
    pub fn build_topology<I: MeshIndex>(&self) -> Result<MeshTopology<I>> {
        build_from_polygons(self.num_vertices, &self.faces)
    }
}

/// The flat result arrays of a symmetry computation.
///
/// Arrays are indexed by component index. Partner entries hold the
/// symmetric partner's index, or `-1` where propagation never reached the
/// component. Side entries hold `1` for left, `-1` for right, and `0` for
/// center or unclassified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryFile {
    /// Symmetric partner per vertex, `-1` if unresolved.
    pub vertex_partners: Vec<i64>,
    /// Symmetric partner per edge, `-1` if unresolved.
    pub edge_partners: Vec<i64>,
    /// Symmetric partner per face, `-1` if unresolved.
    pub face_partners: Vec<i64>,
    /// Side label per vertex.
    pub vertex_sides: Vec<i8>,
    /// Side label per edge.
    pub edge_sides: Vec<i8>,
    /// Side label per face.
    pub face_sides: Vec<i8>,
}

impl SymmetryFile {
    /// Flatten a symmetry table and its side labels into result arrays.
    pub fn from_results<I: MeshIndex>(
        table: &SymmetryTable<I>,
        sides: &SideTable<I>,
    ) -> SymmetryFile {
        SymmetryFile {
            vertex_partners: table
                .vertex_partners()
                .iter()
                .map(|p| if p.is_valid() { p.index() as i64 } else { -1 })
                .collect(),
            edge_partners: table
                .edge_partners()
                .iter()
                .map(|p| if p.is_valid() { p.index() as i64 } else { -1 })
                .collect(),
            face_partners: table
                .face_partners()
                .iter()
                .map(|p| if p.is_valid() { p.index() as i64 } else { -1 })
                .collect(),
            vertex_sides: sides.vertex_sides().iter().map(|s| s.signum()).collect(),
            edge_sides: sides.edge_sides().iter().map(|s| s.signum()).collect(),
            face_sides: sides.face_sides().iter().map(|s| s.signum()).collect(),
        }
    }

    /// Read result arrays from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SymmetryFile> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SymmetryError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let results = serde_json::from_reader(BufReader::new(file))?;
        Ok(results)
    }

    /// Write the result arrays to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
