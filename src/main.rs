// main.rs
//
// Minimal walk through the slicer: build (or load) a mesh, cut it into layers,
// clean up the contours and print a summary.
//
// Usage: layerslicer [file.stl] [layer_height]
//
// Log verbosity follows RUST_LOG (default: info), e.g. RUST_LOG=debug for per-layer output.

use layerslicer::float_types::{MM, Real};
use layerslicer::{Mesh, Slicer, SlicingMode};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn load_mesh(path: Option<&str>) -> Result<Mesh, String> {
    match path {
        #[cfg(feature = "stl-io")]
        Some(path) => {
            let mut file = std::fs::File::open(path).map_err(|e| format!("{path}: {e}"))?;
            Mesh::from_stl(&mut file).map_err(|e| format!("{path}: {e}"))
        },
        #[cfg(not(feature = "stl-io"))]
        Some(path) => Err(format!("{path}: built without the `stl-io` feature")),
        // A 20mm x 10mm cylinder stands in when no file is given
        None => Ok(Mesh::cylinder(10.0 * MM, 10.0 * MM, 64)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let layer_height: Real = match args.get(1).map(|s| s.parse()) {
        Some(Ok(h)) => h,
        Some(Err(e)) => {
            eprintln!("invalid layer height: {e}");
            return ExitCode::FAILURE;
        },
        None => 0.2 * MM,
    };

    let mesh = match load_mesh(args.first().map(String::as_str)) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    // 1) validate the mesh and mode
    let mut slicer = match Slicer::new(mesh, SlicingMode::Planar { layer_height }) {
        Ok(slicer) => slicer,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    // 2) planar contours
    if let Err(e) = slicer.generate_contours() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // 3) drop points that do not change the shape by more than 0.05mm
    slicer.simplify_paths(0.05 * MM);

    // 4) consistent direction through the stack
    let flipped = slicer.unify_paths_orientation();

    println!("{}", slicer.report());
    println!("Reversed contours: {flipped}");

    ExitCode::SUCCESS
}
