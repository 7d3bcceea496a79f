//! Planar contour generation: plane/mesh intersection, contour assembly and
//! the bottom-to-top layer stack.

pub mod assemble;
pub mod intersect;
pub mod layers;

pub use assemble::{Assembly, assemble};
pub use intersect::{EdgeCrossing, ThroughSegment, intersect_plane};
pub use layers::{create_planar_layers, layer_heights, slice_at};

/// Canonical undirected mesh edge, smaller vertex index first.
///
/// Faces on either side of an edge produce the same key, which is what links
/// their through-segments during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub const fn new(a: usize, b: usize) -> Self {
        if a < b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }
}
