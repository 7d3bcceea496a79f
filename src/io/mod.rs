//! Mesh input formats, each behind its own cargo feature.

#[cfg(feature = "stl-io")]
mod stl;
