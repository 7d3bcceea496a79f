use crate::errors::MeshError;
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::slicing::EdgeKey;
use hashbrown::HashMap;
use nalgebra::Point3;

/// Read access to an indexed polygon mesh, as consumed by the slicer.
///
/// Implementors only provide vertex and face accessors; validation, bounds and
/// edge adjacency are derived from them.
pub trait FaceMesh: Send + Sync {
    fn vertex_count(&self) -> usize;
    fn face_count(&self) -> usize;
    /// Vertex indices of `face`, in winding order.
    fn face_vertices(&self, face: usize) -> &[usize];
    fn position(&self, vertex: usize) -> Point3<Real>;

    /// Axis-aligned bounds of all vertices. An empty mesh yields a degenerate box at the origin.
    fn bounding_box(&self) -> Aabb {
        bounds_of((0..self.vertex_count()).map(|vertex| self.position(vertex)))
    }

    /// Checks that every face is a triangle over existing, finite vertices.
    fn check_triangular(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count();
        for vertex in 0..vertex_count {
            let p = self.position(vertex);
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                return Err(MeshError::InvalidCoordinate { vertex });
            }
        }
        for face in 0..self.face_count() {
            let indices = self.face_vertices(face);
            if indices.len() != 3 {
                return Err(MeshError::NonTriangularFace {
                    face,
                    vertex_count: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::VertexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Maps every undirected edge to the faces that contain it.
    fn edge_faces(&self) -> HashMap<EdgeKey, Vec<usize>> {
        let mut edge_face_map: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
        for face in 0..self.face_count() {
            let indices = self.face_vertices(face);
            for i in 0..indices.len() {
                let edge = EdgeKey::new(indices[i], indices[(i + 1) % indices.len()]);
                edge_face_map.entry(edge).or_default().push(face);
            }
        }
        edge_face_map
    }

    /// Classify every edge by the number of faces that use it.
    fn edge_stats(&self) -> EdgeStats {
        let mut stats = EdgeStats::default();
        for faces in self.edge_faces().values() {
            match faces.len() {
                1 => stats.boundary_edges += 1,
                2 => stats.manifold_edges += 1,
                _ => stats.non_manifold_edges += 1,
            }
        }
        stats
    }
}

/// Edge counts of a mesh, by number of incident faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeStats {
    /// Edges shared by exactly two faces
    pub manifold_edges: usize,
    /// Edges used by a single face (0 for closed meshes)
    pub boundary_edges: usize,
    /// Edges shared by more than two faces
    pub non_manifold_edges: usize,
}

impl EdgeStats {
    pub const fn is_closed_manifold(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }
}

/// Smallest AABB containing `points`, or a degenerate box at the origin when there are none.
pub(crate) fn bounds_of(points: impl IntoIterator<Item = Point3<Real>>) -> Aabb {
    let mut points = points.into_iter().peekable();
    if points.peek().is_none() {
        return Aabb::new(Point3::origin(), Point3::origin());
    }
    let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
    let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
    for p in points {
        mins = mins.inf(&p);
        maxs = maxs.sup(&p);
    }
    Aabb::new(mins, maxs)
}
