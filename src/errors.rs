//! Mesh validation and slicing errors

use crate::float_types::Real;
use thiserror::Error;

/// Problems found while validating an input mesh
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A face does not reference exactly three vertices
    #[error("face {face} has {vertex_count} vertices, only triangular meshes are supported")]
    NonTriangularFace { face: usize, vertex_count: usize },
    /// A face references a vertex that does not exist
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// A vertex coordinate is NaN or infinite
    #[error("vertex {vertex} has a NaN or infinite coordinate")]
    InvalidCoordinate { vertex: usize },
}

/// Fatal slicer errors, raised before any slicing work is done
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlicerError {
    /// The mesh failed validation at construction
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
    /// The slicing mode name is not one of the known modes
    #[error("invalid slicing mode: `{0}`")]
    InvalidSlicingMode(String),
    /// The slicing mode is known but this crate has no implementation for it
    #[error("slicing mode `{0}` is not implemented")]
    UnsupportedSlicingMode(&'static str),
    /// Layer heights must be finite and strictly positive
    #[error("invalid layer height: {0} (must be > 0)")]
    InvalidLayerHeight(Real),
}

/// A layer whose through-segments could not all be linked into simple contours.
///
/// This never aborts slicing: the layer keeps the contours that were assembled
/// and carries this record instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "topological inconsistency at z = {z}: {branching_nodes} branching edge(s), {} unconsumed segment(s)",
    .unconsumed_faces.len()
)]
pub struct TopologyIssue {
    /// Height of the cutting plane
    pub z: Real,
    /// Crossed edges shared by more than two through-segments
    pub branching_nodes: usize,
    /// Faces whose through-segments were left out of every contour
    pub unconsumed_faces: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SlicerError::from(MeshError::NonTriangularFace {
            face: 3,
            vertex_count: 4,
        });
        assert_eq!(
            format!("{err}"),
            "invalid mesh: face 3 has 4 vertices, only triangular meshes are supported"
        );

        let err = SlicerError::InvalidLayerHeight(-0.1);
        assert!(format!("{err}").contains("-0.1"));

        let err = SlicerError::InvalidSlicingMode("spiral".to_string());
        assert_eq!(format!("{err}"), "invalid slicing mode: `spiral`");

        let issue = TopologyIssue {
            z: 0.5,
            branching_nodes: 1,
            unconsumed_faces: vec![4, 7],
        };
        assert_eq!(
            format!("{issue}"),
            "topological inconsistency at z = 0.5: 1 branching edge(s), 2 unconsumed segment(s)"
        );
    }
}
