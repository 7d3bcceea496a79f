//! The slicer context: one mesh, one slicing mode, and the layers built from them.

use crate::errors::{SlicerError, TopologyIssue};
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::path::orientation;
use crate::path::Layer;
use crate::slicing::create_planar_layers;
use crate::traits::FaceMesh;
use nalgebra::Point3;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, warn};

/// How the cutting surfaces are chosen. Each mode carries its own parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlicingMode {
    /// Horizontal planes spaced by `layer_height`
    Planar { layer_height: Real },
    /// Curved layers following the mesh surface
    Curved,
    /// Planar layers whose height varies between the two bounds
    Adaptive {
        min_layer_height: Real,
        max_layer_height: Real,
    },
}

impl SlicingMode {
    /// Parse a mode by name.
    ///
    /// `"planar"`, `"planar_numpy"` and `"planar_meshcut"` all select the planar
    /// slicer; `"curved"` and `"adaptive"` are recognized but not implemented.
    pub fn from_name(name: &str, layer_height: Real) -> Result<Self, SlicerError> {
        match name {
            "planar" | "planar_numpy" | "planar_meshcut" => Ok(SlicingMode::Planar { layer_height }),
            "curved" => Ok(SlicingMode::Curved),
            "adaptive" => Ok(SlicingMode::Adaptive {
                min_layer_height: layer_height,
                max_layer_height: layer_height,
            }),
            other => Err(SlicerError::InvalidSlicingMode(other.to_string())),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SlicingMode::Planar { .. } => "planar",
            SlicingMode::Curved => "curved",
            SlicingMode::Adaptive { .. } => "adaptive",
        }
    }

    /// Nominal layer height, where the mode has one.
    pub const fn layer_height(&self) -> Option<Real> {
        match self {
            SlicingMode::Planar { layer_height } => Some(*layer_height),
            SlicingMode::Curved => None,
            SlicingMode::Adaptive {
                max_layer_height, ..
            } => Some(*max_layer_height),
        }
    }

    fn validate(&self) -> Result<(), SlicerError> {
        let check = |h: Real| {
            if h.is_finite() && h > 0.0 {
                Ok(())
            } else {
                Err(SlicerError::InvalidLayerHeight(h))
            }
        };
        match *self {
            SlicingMode::Planar { layer_height } => check(layer_height),
            SlicingMode::Curved => Ok(()),
            SlicingMode::Adaptive {
                min_layer_height,
                max_layer_height,
            } => {
                check(min_layer_height)?;
                check(max_layer_height)
            },
        }
    }
}

/// Holds a mesh, its slicing mode and the layers generated from it.
///
/// The mesh is validated once, at construction; every later pass rewrites
/// `layers` in place.
#[derive(Debug, Clone)]
pub struct Slicer<M: FaceMesh = Mesh> {
    mesh: M,
    mode: SlicingMode,
    pub layers: Vec<Layer>,
}

impl<M: FaceMesh> Slicer<M> {
    /// Validate `mesh` and `mode` and create a slicer with no layers yet.
    ///
    /// Fails with [`SlicerError::InvalidMesh`] if any face is not a triangle (or
    /// references a missing vertex), before any slicing work happens.
    pub fn new(mesh: M, mode: SlicingMode) -> Result<Self, SlicerError> {
        mesh.check_triangular()?;
        mode.validate()?;

        let stats = mesh.edge_stats();
        if !stats.is_closed_manifold() {
            warn!(
                boundary_edges = stats.boundary_edges,
                non_manifold_edges = stats.non_manifold_edges,
                "Mesh is not a closed manifold, expect open contours"
            );
        }

        Ok(Slicer {
            mesh,
            mode,
            layers: Vec::new(),
        })
    }

    /// Create a slicer from a mode name, see [`SlicingMode::from_name`].
    pub fn from_name(mesh: M, name: &str, layer_height: Real) -> Result<Self, SlicerError> {
        let mode = SlicingMode::from_name(name, layer_height)?;
        Self::new(mesh, mode)
    }

    pub const fn mesh(&self) -> &M {
        &self.mesh
    }

    pub const fn mode(&self) -> SlicingMode {
        self.mode
    }

    /// Build the layer stack, replacing any previous layers.
    pub fn generate_contours(&mut self) -> Result<(), SlicerError> {
        match self.mode {
            SlicingMode::Planar { layer_height } => {
                info!(layer_height, "Planar contour slicing");
                self.layers = create_planar_layers(&self.mesh, layer_height, tolerance());
            },
            SlicingMode::Curved | SlicingMode::Adaptive { .. } => {
                return Err(SlicerError::UnsupportedSlicingMode(self.mode.name()));
            },
        }

        let flagged = self.issues().count();
        info!(layers = self.layers.len(), flagged, "Contour generation complete");
        Ok(())
    }

    /// Simplify every contour, see [`Contour::simplify`](crate::path::Contour::simplify).
    pub fn simplify_paths(&mut self, threshold: Real) {
        info!(threshold, "Paths simplification");
        for contour in self.layers.iter_mut().flat_map(|l| l.contours.iter_mut()) {
            contour.simplify(threshold);
        }
    }

    /// Give closed contours a consistent direction through the stack.
    ///
    /// Returns the number of contours that were reversed.
    pub fn unify_paths_orientation(&mut self) -> usize {
        info!("Unifying paths orientation");
        orientation::unify_paths_orientation(&mut self.layers)
    }

    /// Layers that hit non-manifold topology during assembly.
    pub fn issues(&self) -> impl Iterator<Item = &TopologyIssue> {
        self.layers.iter().filter_map(|l| l.issue.as_ref())
    }

    /// Counts of layers, contours and points.
    pub fn report(&self) -> SliceReport {
        let mut report = SliceReport {
            mode: self.mode.name(),
            layer_height: self.mode.layer_height(),
            ..SliceReport::default()
        };
        for layer in &self.layers {
            report.layers += 1;
            report.closed_contours += layer.closed_contours().count();
            report.open_contours += layer.open_contours().count();
            report.points += layer.point_count();
            if layer.issue.is_some() {
                report.flagged_layers += 1;
            }
        }
        report
    }

    /// Every contour as a numbered list of coordinate triples, bottom layer first.
    ///
    /// Closed contours do not repeat their first point. Ready to be written out
    /// by a JSON or G-code writer.
    pub fn to_path_record(&self) -> BTreeMap<usize, Vec<[Real; 3]>> {
        self.layers
            .iter()
            .flat_map(|l| l.contours.iter())
            .map(|c| c.points.iter().map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>())
            .enumerate()
            .collect()
    }

    /// Every contour as line segments, closing segments included, for plotting.
    pub fn contour_lines(&self) -> Vec<(Point3<Real>, Point3<Real>)> {
        self.layers
            .iter()
            .flat_map(|l| l.contours.iter())
            .flat_map(|c| c.segments())
            .collect()
    }
}

/// Summary of a slicing run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliceReport {
    pub mode: &'static str,
    pub layer_height: Option<Real>,
    pub layers: usize,
    pub open_contours: usize,
    pub closed_contours: usize,
    /// Sample points over all contours
    pub points: usize,
    /// Layers carrying a topology issue
    pub flagged_layers: usize,
}

impl SliceReport {
    pub const fn contours(&self) -> usize {
        self.open_contours + self.closed_contours
    }
}

impl fmt::Display for SliceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Slicer Info ----")?;
        writeln!(f, "Slicer type : {}", self.mode)?;
        if let Some(h) = self.layer_height {
            writeln!(f, "Layer height: {h} mm")?;
        }
        writeln!(f, "Number of layers: {}", self.layers)?;
        writeln!(
            f,
            "Number of contours: {}, open contours: {}, closed contours: {}",
            self.contours(),
            self.open_contours,
            self.closed_contours
        )?;
        writeln!(f, "Number of sampling points on contours: {}", self.points)?;
        if self.flagged_layers > 0 {
            writeln!(f, "Layers with topology issues: {}", self.flagged_layers)?;
        }
        Ok(())
    }
}
