//! Particle grid (PG): the uniform spatial index partitioning the
//! container into computational boxes.

mod insert;
mod neighbors;
mod types;
mod worklist;

pub use types::ParticleBox;
pub use worklist::{build as build_worklist, WorklistEntry};

use nalgebra::Vector3;

use crate::config::{ContainerConfig, PositionStride};
use crate::error::{Axis, Result};

/// Owns one box per grid cell; answers insertion, containment, and
/// neighbor-box queries.
#[derive(Clone, Debug)]
pub struct ParticleGrid {
    config: ContainerConfig,
    boxes: Vec<types::ParticleBox>,
}

impl ParticleGrid {
    pub fn new(config: ContainerConfig) -> Self {
        let boxes = (0..config.num_boxes())
            .map(|_| types::ParticleBox::with_capacity(config.init_mem))
            .collect();
        Self { config, boxes }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Insert one particle, remapping periodic coordinates into the
    /// canonical box and rejecting non-periodic out-of-range coordinates.
    /// Returns the `(box_index, slot)` the particle landed in.
    pub fn put(&mut self, id: i64, x: f64, y: f64, z: f64, r: Option<f64>) -> Result<(usize, usize)> {
        let cfg = &self.config;
        let (i, rx) = insert::remap_axis(x, cfg.ax, cfg.bx, cfg.nx, cfg.periodic.px, Axis::X)?;
        let (j, ry) = insert::remap_axis(y, cfg.ay, cfg.by, cfg.ny, cfg.periodic.py, Axis::Y)?;
        let (k, rz) = insert::remap_axis(z, cfg.az, cfg.bz, cfg.nz, cfg.periodic.pz, Axis::Z)?;
        let ijk = insert::linear_index(cfg, i, j, k);
        let max_mem = cfg.max_particle_memory;
        let stride = cfg.stride;
        let slot = self.boxes[ijk].push(id, rx, ry, rz, r, stride, max_mem)?;
        Ok((ijk, slot))
    }

    /// True iff `(x,y,z)` lies within the container's bounding box (after
    /// periodic remap). Wall containment is layered on top by the container.
    pub fn point_in_domain(&self, x: f64, y: f64, z: f64) -> bool {
        let cfg = &self.config;
        let in_axis = |v: f64, a: f64, b: f64, periodic: bool| periodic || (v >= a && v <= b);
        in_axis(x, cfg.ax, cfg.bx, cfg.periodic.px)
            && in_axis(y, cfg.ay, cfg.by, cfg.periodic.py)
            && in_axis(z, cfg.az, cfg.bz, cfg.periodic.pz)
    }

    /// Reset all box occupancy to empty; capacities (and hence allocations)
    /// are retained.
    pub fn clear(&mut self) {
        for b in &mut self.boxes {
            b.clear();
        }
    }

    #[inline]
    pub fn num_boxes(&self) -> usize {
        self.boxes.len()
    }

    pub fn box_at(&self, ijk: usize) -> &types::ParticleBox {
        &self.boxes[ijk]
    }

    /// 3D index of the box at flat index `ijk`.
    pub fn unflatten(&self, ijk: usize) -> (usize, usize, usize) {
        let cfg = &self.config;
        let i = ijk % cfg.nx;
        let j = (ijk / cfg.nx) % cfg.ny;
        let k = ijk / (cfg.nx * cfg.ny);
        (i, j, k)
    }

    /// Resolve a candidate block offset from box `base` to a flat box index
    /// plus the displacement to bring that box's raw positions into the
    /// source particle's local frame. `None` if a non-periodic axis would
    /// step outside the grid.
    pub fn region(&self, base: (usize, usize, usize), offset: (i64, i64, i64)) -> Option<(usize, Vector3<f64>)> {
        neighbors::region(&self.config, base, offset)
    }

    pub fn position_stride(&self) -> PositionStride {
        self.config.stride
    }
}

#[cfg(test)]
mod tests;
