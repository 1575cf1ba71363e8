//! vorocell: a 3D Voronoi / radical (power) diagram cell construction
//! kernel, built by incremental half-space clipping of a convex
//! polyhedron against a radius-ordered stream of neighbor candidates
//! drawn from a uniform spatial grid.
//!
//! The public surface is small and compositional:
//!
//! - [`config::ContainerConfig`] describes the domain: bounding box, grid
//!   shape, periodicity, and capacity ceilings.
//! - [`container::Container`] owns the particle grid and wall list, and
//!   drives a cell compute per particle via [`container::Container::compute_cell`]
//!   or [`container::Container::iter_cells`].
//! - [`cell::ComputedCell`] is the result: volume, centroid, surface
//!   area, and per-face (neighbor or wall) breakdowns.
//! - [`wall`] supplies optional boundary shapes (plane, sphere, cylinder,
//!   cone) applied once at cell initialization.
//! - [`import`] parses the `id x y z [r]` text format used to seed a
//!   container from a particle listing.
//!
//! No output formats (gnuplot, POV-Ray, ...) are implemented; callers
//! consume [`cell::ComputedCell`]'s accessors directly.

pub mod cell;
pub mod config;
pub mod container;
pub mod error;
pub mod grid;
pub mod import;
pub mod mesh;
pub mod wall;

pub use cell::{CellComputeDriver, ComputedCell};
pub use config::ContainerConfig;
pub use container::Container;
pub use error::{KernelError, Result};
pub use import::ParsedParticle;

/// The crate's version, as recorded in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
