use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;
use std::io::{Read, Seek};

impl Mesh {
    /// Read an ASCII or binary STL into an indexed mesh.
    ///
    /// `stl_io` merges bit-identical vertices, so faces of a well-formed STL
    /// come out sharing edges and the result can be sliced directly.
    ///
    /// ```rust,no_run
    /// # use layerslicer::mesh::Mesh;
    /// # fn main() -> std::io::Result<()> {
    /// let mut file = std::fs::File::open("part.stl")?;
    /// let mesh = Mesh::from_stl(&mut file)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_stl<R: Read + Seek>(reader: &mut R) -> std::io::Result<Mesh> {
        let stl = stl_io::read_stl(reader)?;

        #[allow(clippy::unnecessary_cast)]
        let vertices = stl
            .vertices
            .iter()
            .map(|v| Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
            .collect();
        let faces = stl.faces.iter().map(|f| f.vertices.to_vec()).collect();

        Ok(Mesh::new(vertices, faces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FaceMesh;
    use std::io::Cursor;
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    #[test]
    fn binary_stl_cube_is_welded() {
        let cube = Mesh::cube(2.0);
        let triangles: Vec<Triangle> = cube
            .faces
            .iter()
            .map(|f| Triangle {
                normal: Normal::new([0.0, 0.0, 0.0]),
                vertices: [0, 1, 2].map(|k| {
                    let p = cube.vertices[f[k]];
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            })
            .collect();

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter()).expect("in-memory write");
        cursor.set_position(0);

        let mesh = Mesh::from_stl(&mut cursor).expect("valid stl");
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.validate().is_ok());
        assert!(mesh.edge_stats().is_closed_manifold());
    }
}
