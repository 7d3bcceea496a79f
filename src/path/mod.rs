//! Contours and layers produced by the slicer.
//!
//! A closed [`Contour`] never repeats its first point at the end: closure is
//! implied by [`Contour::is_closed`]. Cleanup, simplification, orientation and
//! export all rely on that representation.

use crate::errors::TopologyIssue;
use crate::float_types::Real;
use nalgebra::Point3;

pub mod orientation;
pub mod simplify;

/// Ordered point sequence of one loop or chain of a cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point3<Real>>,
    pub is_closed: bool,
}

impl Contour {
    pub const fn new(points: Vec<Point3<Real>>, is_closed: bool) -> Self {
        Contour { points, is_closed }
    }

    pub fn closed(points: Vec<Point3<Real>>) -> Self {
        Self::new(points, true)
    }

    pub fn open(points: Vec<Point3<Real>>) -> Self {
        Self::new(points, false)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum number of points for this kind of contour to enclose or span anything.
    pub const fn min_points(&self) -> usize {
        if self.is_closed { 3 } else { 2 }
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < self.min_points()
    }

    /// Consecutive point pairs, including the closing pair of a closed contour.
    pub fn segments(&self) -> impl Iterator<Item = (Point3<Real>, Point3<Real>)> + '_ {
        let closing = if self.is_closed && self.points.len() > 1 {
            Some((self.points[self.points.len() - 1], self.points[0]))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Total polyline length, including the closing segment of a closed contour.
    pub fn length(&self) -> Real {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Removes points that coincide with their predecessor or lie on the segment
    /// between their neighbours, within `tolerance`.
    ///
    /// For a closed contour the wrap-around neighbours are considered too, so the
    /// start point is dropped when it sits in the middle of a straight run.
    pub fn remove_collinear(&mut self, tolerance: Real) {
        let mut kept: Vec<Point3<Real>> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            while kept.len() >= 2 && is_between(&kept[kept.len() - 2], &kept[kept.len() - 1], &p, tolerance) {
                kept.pop();
            }
            if kept.len() == 1 && (p - kept[0]).norm() <= tolerance {
                continue;
            }
            kept.push(p);
        }

        if self.is_closed {
            loop {
                let n = kept.len();
                if n < 3 {
                    break;
                }
                if is_between(&kept[n - 2], &kept[n - 1], &kept[0], tolerance) {
                    kept.pop();
                } else if is_between(&kept[n - 1], &kept[0], &kept[1], tolerance) {
                    kept.remove(0);
                } else {
                    break;
                }
            }
            if kept.len() == 2 && (kept[1] - kept[0]).norm() <= tolerance {
                kept.pop();
            }
        }
        self.points = kept;
    }
}

/// True when `b` lies on the segment `a`-`c` (or coincides with `a`), within `tolerance`.
fn is_between(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>, tolerance: Real) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ac_len = ac.norm();
    if ab.norm() <= tolerance {
        return true;
    }
    if ac_len <= tolerance {
        // a spike that returns to its origin keeps its tip
        return false;
    }
    let distance = ab.cross(&ac).norm() / ac_len;
    let t = ab.dot(&ac);
    distance <= tolerance && t >= 0.0 && t <= ac_len * ac_len
}

/// All contours cut by one horizontal plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Position in the stack, 0 at the bottom
    pub index: usize,
    /// Height of the cutting plane
    pub z: Real,
    pub contours: Vec<Contour>,
    /// Set when assembly hit non-manifold topology at this height
    pub issue: Option<TopologyIssue>,
}

impl Layer {
    pub const fn new(index: usize, z: Real, contours: Vec<Contour>) -> Self {
        Layer {
            index,
            z,
            contours,
            issue: None,
        }
    }

    pub fn closed_contours(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter().filter(|c| c.is_closed)
    }

    pub fn open_contours(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter().filter(|c| !c.is_closed)
    }

    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: Real, y: Real) -> Point3<Real> {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn closed_segments_wrap_around() {
        let square = Contour::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
        assert_eq!(square.segments().count(), 4);
        approx::assert_relative_eq!(square.length(), 4.0);

        let open = Contour::open(square.points.clone());
        assert_eq!(open.segments().count(), 3);
        approx::assert_relative_eq!(open.length(), 3.0);
    }

    #[test]
    fn remove_collinear_drops_edge_midpoints_and_start() {
        // starts mid-edge, has a duplicate and a midpoint on the right edge
        let mut c = Contour::closed(vec![
            p(0.5, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.5),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ]);
        c.remove_collinear(1e-9);
        assert_eq!(c.points, vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)]);
    }

    #[test]
    fn remove_collinear_keeps_open_endpoints() {
        let mut c = Contour::open(vec![p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0)]);
        c.remove_collinear(1e-9);
        assert_eq!(c.points, vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert!(!c.is_degenerate());
    }

    #[test]
    fn coincident_ring_collapses() {
        let mut c = Contour::closed(vec![p(1.0, 1.0); 4]);
        c.remove_collinear(1e-9);
        assert_eq!(c.len(), 1);
        assert!(c.is_degenerate());
    }

    #[test]
    fn closing_duplicate_is_removed() {
        let mut c = Contour::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)]);
        c.remove_collinear(1e-9);
        assert_eq!(c.points, vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
    }
}
