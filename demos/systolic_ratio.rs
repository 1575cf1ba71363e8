//! Timing probe for a single cell compute against a fixed neighborhood.
//!
//! Purpose: give a reproducible, code-backed data point for "how long
//! does it take to clip one cell against its worklist neighbors?" on a
//! ~1000-particle periodic container.

use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};
use vorocell::{Container, ContainerConfig};

fn main() {
    let n = 1_000usize;
    let mut rng = StdRng::seed_from_u64(777);
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

    let ijk = (0..container.grid().num_boxes()).find(|&ijk| !container.grid().box_at(ijk).is_empty()).unwrap();

    let start = Instant::now();
    let cell = container.compute_cell(ijk, 0).unwrap().unwrap();
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    println!("particles={n}");
    println!("volume={:.9} faces={} vertices={}", cell.volume(), cell.neighbors().len(), cell.local_vertices().len());
    println!("compute_time_us={elapsed_us:.3}");
}
