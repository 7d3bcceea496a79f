//! Planar **slicing of triangle meshes** into ordered contour layers for
//! additive manufacturing.
//!
//! A [`Slicer`] cuts a mesh with a stack of horizontal planes, links the
//! per-triangle intersection segments into closed loops and open chains, and
//! can then simplify the contours and give closed contours a consistent
//! direction from one layer to the next.
//!
//! ```
//! use layerslicer::{Mesh, Slicer, SlicingMode};
//!
//! let mut slicer = Slicer::new(Mesh::cube(1.0), SlicingMode::Planar { layer_height: 0.25 })?;
//! slicer.generate_contours()?;
//! slicer.unify_paths_orientation();
//! assert_eq!(slicer.report().closed_contours, 4);
//! # Ok::<(), layerslicer::errors::SlicerError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to slice layers concurrently
//!
//! Progress and topology warnings are emitted through `tracing`; install a
//! subscriber to see them.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod path;
pub mod slicer;
pub mod slicing;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use mesh::Mesh;
pub use path::{Contour, Layer};
pub use slicer::{SliceReport, Slicer, SlicingMode};
pub use traits::FaceMesh;
