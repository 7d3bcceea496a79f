//! Ramer–Douglas–Peucker simplification of contours, delegated to `geo`.
//!
//! Contours are planar, so the reduction runs on their XY projection and the
//! retained indices are mapped back to the original 3D points.

use crate::float_types::Real;
use crate::path::Contour;
use geo::{Coord, LineString, SimplifyIdx};

impl Contour {
    /// Reduce the point count while keeping the shape within `threshold`.
    ///
    /// Open contours keep both endpoints. Closed contours are simplified as a
    /// ring that starts and ends on the seam point, which is always kept; the
    /// closing point is not repeated in the result. Non-positive thresholds and
    /// contours too short to reduce are left untouched.
    pub fn simplify(&mut self, threshold: Real) {
        if threshold <= 0.0 || self.points.len() <= self.min_points() {
            return;
        }

        let mut coords: Vec<Coord<Real>> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        if self.is_closed {
            coords.push(coords[0]);
        }

        let ring_end = self.points.len();
        let kept: Vec<usize> = LineString::new(coords)
            .simplify_idx(&threshold)
            .into_iter()
            .filter(|&i| i < ring_end)
            .collect();

        if kept.len() < self.min_points() {
            // collapsed below a meaningful shape, keep the original
            return;
        }
        self.points = kept.into_iter().map(|i| self.points[i]).collect();
    }
}
