//! Warnings reach an installed `tracing` subscriber.

mod support;

use layerslicer::slicing::slice_at;
use layerslicer::{Mesh, Slicer, SlicingMode};
use std::io::Write;
use std::sync::{Arc, Mutex};
use support::*;

/// Shared in-memory log sink.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

/// Run `f` with a WARN-level subscriber on this thread and return what it logged.
fn warnings(f: impl FnOnce()) -> String {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.text()
}

#[test]
fn branching_layer_is_logged_with_its_height() {
    let log = warnings(|| {
        let layer = slice_at(&fins(), 3, 0.25, 1e-9);
        assert!(layer.issue.is_some());
    });
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("topological inconsistency at z = 0.25"), "{log}");
    assert!(log.contains("index=3"), "{log}");
}

#[test]
fn open_mesh_is_reported_at_construction() {
    let log = warnings(|| {
        Slicer::new(wall(), SlicingMode::Planar { layer_height: 0.5 }).expect("triangles only");
    });
    assert!(log.contains("Mesh is not a closed manifold"), "{log}");
    assert!(log.contains("boundary_edges=4"), "{log}");
}

#[test]
fn clean_slicing_stays_quiet() {
    let log = warnings(|| {
        let mut slicer =
            Slicer::new(Mesh::cube(1.0), SlicingMode::Planar { layer_height: 0.25 }).expect("valid cube");
        // keep the layer loop on this thread so the subscriber sees it
        for (index, z) in [0.125, 0.375].into_iter().enumerate() {
            let layer = slice_at(slicer.mesh(), index, z, 1e-9);
            slicer.layers.push(layer);
        }
        assert_eq!(slicer.issues().count(), 0);
    });
    assert!(log.is_empty(), "{log}");
}
