//! Intersection of a triangle mesh with a horizontal plane.
//!
//! Side rule: a vertex with `z >= plane` is above the plane, anything lower is
//! below. An edge is crossed when its endpoints are on different sides, so a
//! vertex lying exactly on the plane always belongs to the upper side and is
//! reached through the crossed edges that lead down from it. An edge lying in
//! the plane has both endpoints above and is never crossed.

use crate::float_types::Real;
use crate::slicing::EdgeKey;
use crate::traits::FaceMesh;
use nalgebra::Point3;

/// A crossed mesh edge and the point where the plane meets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCrossing {
    pub edge: EdgeKey,
    pub point: Point3<Real>,
}

/// The part of one triangle cut by the plane: its two crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughSegment {
    /// Index of the originating face
    pub face: usize,
    pub ends: [EdgeCrossing; 2],
}

#[inline]
fn is_above(z: Real, plane_z: Real) -> bool {
    z >= plane_z
}

/// Where the segment `a`-`b` meets the plane at `z`, if the endpoints lie on different sides.
///
/// The endpoints must be given in a fixed order for a given edge (canonical
/// index order) so that both faces sharing it compute the very same point.
pub fn edge_crossing(a: &Point3<Real>, b: &Point3<Real>, z: Real) -> Option<Point3<Real>> {
    if is_above(a.z, z) == is_above(b.z, z) {
        return None;
    }
    let t = (z - a.z) / (b.z - a.z);
    let mut point = a + (b - a) * t;
    point.z = z;
    Some(point)
}

/// All through-segments of `mesh` at height `z`, one per face cut by the plane.
///
/// Faces with fewer (or, for non-triangles, more) than two crossed edges are
/// skipped. Segments come out in face order.
pub fn intersect_plane<M: FaceMesh + ?Sized>(mesh: &M, z: Real) -> Vec<ThroughSegment> {
    let mut segments = Vec::new();

    for face in 0..mesh.face_count() {
        let indices = mesh.face_vertices(face);
        let mut crossings = [None; 2];
        let mut count = 0;

        for i in 0..indices.len() {
            let edge = EdgeKey::new(indices[i], indices[(i + 1) % indices.len()]);
            let a = mesh.position(edge.0);
            let b = mesh.position(edge.1);
            if let Some(point) = edge_crossing(&a, &b, z) {
                if count < 2 {
                    crossings[count] = Some(EdgeCrossing { edge, point });
                }
                count += 1;
            }
        }

        if let (2, [Some(first), Some(second)]) = (count, crossings) {
            segments.push(ThroughSegment {
                face,
                ends: [first, second],
            });
        }
    }

    segments
}
