//! Closed triangle meshes for common primitives

use crate::float_types::{Real, TAU};
use crate::mesh::Mesh;
use nalgebra::Point3;

impl Mesh {
    /// Axis-aligned box with one corner at the origin, split into 12 triangles
    /// wound counter-clockwise when seen from outside.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Mesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),       // 0: origin
            Point3::new(width, 0.0, 0.0),     // 1: +X
            Point3::new(width, length, 0.0),  // 2: +X+Y
            Point3::new(0.0, length, 0.0),    // 3: +Y
            Point3::new(0.0, 0.0, height),    // 4: +Z
            Point3::new(width, 0.0, height),  // 5: +X+Z
            Point3::new(width, length, height), // 6: +X+Y+Z
            Point3::new(0.0, length, height), // 7: +Y+Z
        ];

        let quads = [
            [0, 3, 2, 1], // Bottom face
            [4, 5, 6, 7], // Top face
            [0, 1, 5, 4], // Front face
            [3, 7, 6, 2], // Back face
            [0, 4, 7, 3], // Left face
            [1, 2, 6, 5], // Right face
        ];

        let triangles: Vec<[usize; 3]> = quads
            .iter()
            .flat_map(|q| [[q[0], q[1], q[2]], [q[0], q[2], q[3]]])
            .collect();

        Mesh::from_triangles(vertices, &triangles)
    }

    pub fn cube(width: Real) -> Mesh {
        Self::cuboid(width, width, width)
    }

    /// Regular octahedron centered at the origin with its apexes on the Z axis.
    ///
    /// The four equator vertices lie exactly at z = 0, which makes it the
    /// reference shape for planes passing through vertices.
    pub fn octahedron(radius: Real) -> Mesh {
        let r = radius;
        let vertices = vec![
            Point3::new(r, 0.0, 0.0),
            Point3::new(0.0, r, 0.0),
            Point3::new(-r, 0.0, 0.0),
            Point3::new(0.0, -r, 0.0),
            Point3::new(0.0, 0.0, r),
            Point3::new(0.0, 0.0, -r),
        ];
        let triangles = [
            [0, 1, 4],
            [1, 2, 4],
            [2, 3, 4],
            [3, 0, 4],
            [1, 0, 5],
            [2, 1, 5],
            [3, 2, 5],
            [0, 3, 5],
        ];
        Mesh::from_triangles(vertices, &triangles)
    }

    /// Closed cylinder standing on z = 0, approximated by `segments` sides (at least 3).
    pub fn cylinder(radius: Real, height: Real, segments: usize) -> Mesh {
        let segments = segments.max(3);
        let mut vertices = Vec::with_capacity(2 * segments + 2);
        vertices.push(Point3::new(0.0, 0.0, 0.0));
        vertices.push(Point3::new(0.0, 0.0, height));
        for z in [0.0, height] {
            for i in 0..segments {
                let theta = TAU * (i as Real) / (segments as Real);
                vertices.push(Point3::new(radius * theta.cos(), radius * theta.sin(), z));
            }
        }

        let bottom = |i: usize| 2 + i % segments;
        let top = |i: usize| 2 + segments + i % segments;

        let mut triangles = Vec::with_capacity(4 * segments);
        for i in 0..segments {
            triangles.push([0, bottom(i + 1), bottom(i)]);
            triangles.push([1, top(i), top(i + 1)]);
            triangles.push([bottom(i), bottom(i + 1), top(i + 1)]);
            triangles.push([bottom(i), top(i + 1), top(i)]);
        }
        Mesh::from_triangles(vertices, &triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FaceMesh;

    #[test]
    fn primitives_are_closed_triangle_meshes() {
        for mesh in [
            Mesh::cube(1.0),
            Mesh::octahedron(1.0),
            Mesh::cylinder(1.0, 2.0, 16),
        ] {
            assert!(mesh.validate().is_ok());
            assert!(mesh.edge_stats().is_closed_manifold());
        }
    }

    #[test]
    fn cylinder_bounds() {
        let bb = Mesh::cylinder(2.0, 5.0, 32).bounding_box();
        approx::assert_relative_eq!(bb.mins.z, 0.0);
        approx::assert_relative_eq!(bb.maxs.z, 5.0);
        approx::assert_relative_eq!(bb.maxs.x, 2.0);
    }
}
