//! Consistent traversal direction for closed contours across the layer stack.
//!
//! Layers are processed bottom to top. The first contour of a layer follows the
//! first contour of the layer below; every other contour follows the first
//! contour of its own layer. The pass only reorders points, it never adds,
//! drops or moves any.

use crate::float_types::Real;
use crate::path::{Contour, Layer};
use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reorient every closed contour in `layers` to agree with its reference contour.
///
/// Returns the number of contours that were flipped.
pub fn unify_paths_orientation(layers: &mut [Layer]) -> usize {
    let mut flipped = 0;

    for i in 0..layers.len() {
        let (below, rest) = layers.split_at_mut(i);
        let layer = &mut rest[0];
        let Some((first, others)) = layer.contours.split_first_mut() else {
            continue;
        };

        if first.is_closed {
            let reference = below.last().and_then(|l| l.contours.first());
            if let Some(reference) = reference {
                if match_direction(first, &reference.points) {
                    flipped += 1;
                }
            }
        }

        let reference: &[Point3<Real>] = &first.points;

        #[cfg(not(feature = "parallel"))]
        let flipped_here = others
            .iter_mut()
            .filter(|c| c.is_closed)
            .map(|c| match_direction(c, reference))
            .filter(|&f| f)
            .count();

        #[cfg(feature = "parallel")]
        let flipped_here = others
            .par_iter_mut()
            .filter(|c| c.is_closed)
            .map(|c| match_direction(c, reference))
            .filter(|&f| f)
            .count();

        flipped += flipped_here;
    }

    debug!(flipped, layers = layers.len(), "Unified closed contour orientation");
    flipped
}

/// Reverse `contour` when it runs against `reference`, keeping its first point in front.
///
/// Directions are compared as `p[0] - p[2]` when both sequences have more than
/// two points and as `p[0] - p[1]` otherwise. A negative dot product counts as
/// opposite. Returns whether the contour was flipped; sequences with fewer than
/// two points are never touched.
pub fn match_direction(contour: &mut Contour, reference: &[Point3<Real>]) -> bool {
    let points = &contour.points;
    if points.len() < 2 || reference.len() < 2 {
        return false;
    }

    let step = if points.len() > 2 && reference.len() > 2 { 2 } else { 1 };
    let v1 = direction(points, step);
    let v2 = direction(reference, step);

    if v1.dot(&v2) < 0.0 {
        // seam heuristic: after reversing, bring the old first point back to the front
        contour.points.reverse();
        contour.points.rotate_right(1);
        true
    } else {
        false
    }
}

fn direction(points: &[Point3<Real>], step: usize) -> Vector3<Real> {
    points[0] - points[step]
}
