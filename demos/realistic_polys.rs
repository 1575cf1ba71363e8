//! Show cell volumes for a few random periodic point clouds, as a quick
//! visual sanity check on typical cell shapes.
//!
//! Usage:
//!   cargo run --example realistic_polys -- 200
//!   cargo run --example realistic_polys -- 2000

use rand::{rngs::StdRng, Rng, SeedableRng};
use vorocell::{Container, ContainerConfig};

fn main() {
    let n: usize = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(200);
    let mut rng = StdRng::seed_from_u64(2025);
    let boxes_per_axis = ((n as f64).cbrt().ceil() as usize).max(1);
    let cfg = ContainerConfig::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0, boxes_per_axis, boxes_per_axis, boxes_per_axis)
        .with_periodicity(true, true, true);
    let mut container = Container::new(cfg);
    for id in 0..n as i64 {
        let x = rng.gen_range(0.0..10.0);
        let y = rng.gen_range(0.0..10.0);
        let z = rng.gen_range(0.0..10.0);
        container.put(id, x, y, z, None).unwrap();
    }

    let mut total_volume = 0.0;
    let mut min_faces = usize::MAX;
    let mut max_faces = 0usize;
    let mut count = 0usize;
    for cell in container.iter_cells() {
        let Some(cell) = cell.unwrap() else { continue };
        total_volume += cell.volume();
        let faces = cell.neighbors().len();
        min_faces = min_faces.min(faces);
        max_faces = max_faces.max(faces);
        count += 1;
    }

    println!("particles={n} cells={count}");
    println!("mean_volume={:.6} (domain volume / n = {:.6})", total_volume / count as f64, 1000.0 / n as f64);
    println!("face_count_range=[{min_faces}, {max_faces}]");
}
