//! The stack of planar layers, bottom to top.

use crate::errors::TopologyIssue;
use crate::float_types::Real;
use crate::path::Layer;
use crate::slicing::{assemble, intersect_plane};
use crate::traits::FaceMesh;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cutting heights for a mesh spanning `min_z..max_z`.
///
/// Planes sit in the middle of each layer: `min_z + (i + 0.5) * layer_height`,
/// for as long as they stay strictly below `max_z`. A flat or empty range, or a
/// non-positive layer height, yields no planes.
pub fn layer_heights(min_z: Real, max_z: Real, layer_height: Real) -> Vec<Real> {
    let height = max_z - min_z;
    if !(layer_height > 0.0) || !(height > 0.0) {
        return Vec::new();
    }

    let count = (height / layer_height - 0.5).ceil().max(0.0) as usize;
    (0..count)
        .map(|i| min_z + (i as Real + 0.5) * layer_height)
        .filter(|&z| z > min_z && z < max_z)
        .collect()
}

/// Cut `mesh` at height `z` and assemble the result into layer number `index`.
///
/// Contours are cleaned with [`Contour::remove_collinear`](crate::path::Contour::remove_collinear)
/// and dropped when too short to mean anything. Non-manifold topology does not
/// fail the layer: the assembled contours are kept and the layer is flagged.
pub fn slice_at<M: FaceMesh + ?Sized>(mesh: &M, index: usize, z: Real, tolerance: Real) -> Layer {
    let segments = intersect_plane(mesh, z);
    let assembly = assemble(&segments);
    let consistent = assembly.is_consistent();

    let contours = assembly
        .contours
        .into_iter()
        .filter_map(|mut contour| {
            contour.remove_collinear(tolerance);
            (!contour.is_degenerate()).then_some(contour)
        })
        .collect();

    let mut layer = Layer::new(index, z, contours);
    debug!(
        index,
        z,
        segments = segments.len(),
        contours = layer.contours.len(),
        "Sliced layer"
    );

    if !consistent {
        let issue = TopologyIssue {
            z,
            branching_nodes: assembly.branching_nodes,
            unconsumed_faces: assembly.unconsumed.iter().map(|&i| segments[i].face).collect(),
        };
        warn!(index, z, "{issue}");
        layer.issue = Some(issue);
    }
    layer
}

/// Slice `mesh` into layers of `layer_height`, ordered bottom to top.
pub fn create_planar_layers<M: FaceMesh + ?Sized>(
    mesh: &M,
    layer_height: Real,
    tolerance: Real,
) -> Vec<Layer> {
    let bounds = mesh.bounding_box();
    let heights = layer_heights(bounds.mins.z, bounds.maxs.z, layer_height);

    #[cfg(not(feature = "parallel"))]
    let layers = heights
        .iter()
        .enumerate()
        .map(|(index, &z)| slice_at(mesh, index, z, tolerance))
        .collect();

    #[cfg(feature = "parallel")]
    let layers = heights
        .par_iter()
        .enumerate()
        .map(|(index, &z)| slice_at(mesh, index, z, tolerance))
        .collect();

    layers
}
