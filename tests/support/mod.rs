//! Test support library
//! Provides meshes and comparison helpers shared by the integration tests.

#![allow(dead_code)]

use layerslicer::{Contour, Mesh, float_types::Real, slicing::ThroughSegment};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn points_close(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Two unit cubes side by side with a gap of one unit between them.
pub fn two_cubes() -> Mesh {
    let a = Mesh::cube(1.0);
    let b = a.translate(2.0, 0.0, 0.0);
    a.merge(&b)
}

/// Three triangular fins sharing the vertical edge from (0,0,0) to (0,0,1).
///
/// The shared edge is used by three faces, so any plane between z = 0 and
/// z = 0.5 crosses it as a branching node.
pub fn fins() -> Mesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 0.5),
        Point3::new(-0.5, 0.8, 0.5),
        Point3::new(-0.5, -0.8, 0.5),
    ];
    Mesh::from_triangles(vertices, &[[0, 1, 2], [0, 1, 3], [0, 1, 4]])
}

/// A single vertical wall: one open quad split into two triangles.
pub fn wall() -> Mesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    Mesh::from_triangles(vertices, &[[0, 1, 2], [0, 2, 3]])
}

/// Sorted copy of a contour's points, for comparing point sets.
pub fn sorted_points(contour: &Contour) -> Vec<[Real; 3]> {
    let mut points: Vec<[Real; 3]> = contour.points.iter().map(|p| [p.x, p.y, p.z]).collect();
    points.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
    points
}

/// Every crossing point of a set of through-segments.
pub fn crossing_points(segments: &[ThroughSegment]) -> Vec<Point3<Real>> {
    segments
        .iter()
        .flat_map(|s| s.ends.iter().map(|e| e.point))
        .collect()
}
