//! `Mesh` struct, an indexed polygon mesh and the input to the slicer

use crate::errors::MeshError;
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::traits::{FaceMesh, bounds_of};
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

/// Primitive shapes built from triangles
pub mod shapes;

/// An indexed polygon mesh: shared vertex positions plus faces given as index lists.
///
/// Faces are stored with a variable number of indices so that polygonal input
/// can be represented and rejected by [`Mesh::validate`]; the slicer itself only
/// accepts triangles.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<Point3<Real>>,

    /// Faces as indices into `vertices`, in winding order
    pub faces: Vec<Vec<usize>>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<Real>>, faces: Vec<Vec<usize>>) -> Self {
        Mesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
        }
    }

    /// Build a mesh from triangle index triples.
    pub fn from_triangles(vertices: Vec<Point3<Real>>, triangles: &[[usize; 3]]) -> Self {
        let faces = triangles.iter().map(|t| t.to_vec()).collect();
        Self::new(vertices, faces)
    }

    /// Checks that every face is a triangle over existing, finite vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.check_triangular()
    }

    /// Returns a copy of this mesh moved by `offset`.
    pub fn translate_vector(&self, offset: Vector3<Real>) -> Mesh {
        let vertices = self.vertices.iter().map(|p| p + offset).collect();
        Mesh::new(vertices, self.faces.clone())
    }

    /// Returns a copy of this mesh moved by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Mesh {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Combine two meshes into one without welding any vertices.
    pub fn merge(&self, other: &Mesh) -> Mesh {
        let offset = self.vertices.len();
        let mut vertices = self.vertices.clone();
        vertices.extend_from_slice(&other.vertices);

        let mut faces = self.faces.clone();
        faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.iter().map(|&i| i + offset).collect()),
        );
        Mesh::new(vertices, faces)
    }
}

impl FaceMesh for Mesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertices(&self, face: usize) -> &[usize] {
        &self.faces[face]
    }

    fn position(&self, vertex: usize) -> Point3<Real> {
        self.vertices[vertex]
    }

    fn bounding_box(&self) -> Aabb {
        *self
            .bounding_box
            .get_or_init(|| bounds_of(self.vertices.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_quads() {
        let mesh = Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        );
        assert_eq!(
            mesh.validate(),
            Err(MeshError::NonTriangularFace {
                face: 0,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn validate_rejects_dangling_index() {
        let mesh = Mesh::from_triangles(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            &[[0, 1, 2]],
        );
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::VertexOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn merge_offsets_indices() {
        let a = Mesh::cube(1.0);
        let b = a.translate(3.0, 0.0, 0.0);
        let both = a.merge(&b);
        assert_eq!(both.vertices.len(), 16);
        assert_eq!(both.faces.len(), 24);
        assert_eq!(both.faces[12][0], a.faces[0][0] + 8);
        assert!(both.validate().is_ok());
        assert_eq!(both.bounding_box().maxs.x, 4.0);
    }

    #[test]
    fn cube_is_closed_manifold() {
        let stats = Mesh::cube(2.0).edge_stats();
        assert!(stats.is_closed_manifold());
        assert_eq!(stats.manifold_edges, 18);
    }
}
