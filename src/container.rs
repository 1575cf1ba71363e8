//! Container: owns the particle grid and wall list for one tessellation,
//! and drives a [`CellComputeDriver`] per particle via traversal iterators.
//!
//! Mirrors spec §2's composition: "a container owns PG and WL; a compute
//! request binds CCD to one particle... and hands CM to CCD."

use nalgebra::Vector3;

use crate::cell::{CellComputeDriver, ComputedCell};
use crate::config::ContainerConfig;
use crate::error::Result;
use crate::grid::{build_worklist, ParticleGrid, WorklistEntry};
use crate::wall::{Wall, WallList};

/// Owns the particle grid and wall list; exposes insertion, point-in-domain
/// queries, and the traversal iterators that compute one cell per particle.
#[derive(Debug)]
pub struct Container {
    config: ContainerConfig,
    grid: ParticleGrid,
    walls: WallList,
    worklist: Vec<WorklistEntry>,
    order: Option<Vec<(usize, usize)>>,
    max_radius: f64,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        // Built once from the box geometry (spec §4.3); a radius of the
        // largest grid dimension is enough to reach every box in the
        // container without enumerating multiple periodic wraps.
        let radius_boxes = config.nx.max(config.ny).max(config.nz).max(1) as i64;
        let worklist = build_worklist((config.box_side_x(), config.box_side_y(), config.box_side_z()), radius_boxes);
        let grid = ParticleGrid::new(config);
        Self {
            config,
            grid,
            walls: WallList::new(),
            worklist,
            order: None,
            max_radius: 0.0,
        }
    }

    /// Enable the insertion-order sidecar: traversal then yields cells in
    /// insertion order rather than grid-scan order (spec §3's "ordering
    /// sidecar (optional)").
    pub fn with_ordering(mut self) -> Self {
        self.order = Some(Vec::new());
        self
    }

    pub fn add_wall(&mut self, wall: impl Wall + 'static) {
        self.walls.push(wall);
    }

    /// Insert one particle. Rejects non-periodic out-of-range coordinates;
    /// remaps periodic ones into the canonical box.
    pub fn put(&mut self, id: i64, x: f64, y: f64, z: f64, r: Option<f64>) -> Result<()> {
        let (ijk, slot) = self.grid.put(id, x, y, z, r)?;
        if let Some(radius) = r {
            if radius > self.max_radius {
                self.max_radius = radius;
            }
        }
        if let Some(order) = &mut self.order {
            order.push((ijk, slot));
        }
        tracing::debug!(id, x, y, z, "particle inserted");
        Ok(())
    }

    /// True iff `(x,y,z)` lies within the bounding box (after periodic
    /// remap) and every wall's kept side.
    pub fn point_in_domain(&self, x: f64, y: f64, z: f64) -> bool {
        self.grid.point_in_domain(x, y, z) && self.walls.point_inside(Vector3::new(x, y, z))
    }

    /// Reset to empty; per-box storage capacities are retained.
    pub fn clear(&mut self) {
        self.grid.clear();
        if let Some(order) = &mut self.order {
            order.clear();
        }
        self.max_radius = 0.0;
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn grid(&self) -> &ParticleGrid {
        &self.grid
    }

    pub fn walls(&self) -> &WallList {
        &self.walls
    }

    pub fn walls_mut(&mut self) -> &mut WallList {
        &mut self.walls
    }

    pub(crate) fn worklist(&self) -> &[WorklistEntry] {
        &self.worklist
    }

    /// Largest radius among all inserted particles; `0.0` for a plain
    /// (unweighted) container. Feeds the radical variant's search-bound
    /// multiplier (spec §4.3).
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Compute the cell for the particle at box `ijk`, local slot `slot`.
    pub fn compute_cell(&self, ijk: usize, slot: usize) -> Result<Option<ComputedCell>> {
        CellComputeDriver::new().compute(self, ijk, slot)
    }

    /// Iterate over every particle's cell: in insertion order if
    /// [`Container::with_ordering`] was enabled, otherwise in grid-scan
    /// order.
    pub fn iter_cells(&self) -> CellIter<'_> {
        let slots: Vec<(usize, usize)> = match &self.order {
            Some(order) => order.clone(),
            None => (0..self.grid.num_boxes())
                .flat_map(|ijk| (0..self.grid.box_at(ijk).len()).map(move |slot| (ijk, slot)))
                .collect(),
        };
        CellIter {
            container: self,
            slots: slots.into_iter(),
        }
    }
}

/// Yields one `Result<Option<ComputedCell>>` per particle in the container.
pub struct CellIter<'a> {
    container: &'a Container,
    slots: std::vec::IntoIter<(usize, usize)>,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = Result<Option<ComputedCell>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (ijk, slot) = self.slots.next()?;
        Some(self.container.compute_cell(ijk, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_particle_unit_cube_fills_it_exactly() {
        let cfg = ContainerConfig::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 5, 5, 5);
        let mut container = Container::new(cfg);
        container.put(1, 0.5, 0.5, 0.5, None).unwrap();
        let ijk = (0..container.grid().num_boxes())
            .find(|&ijk| !container.grid().box_at(ijk).is_empty())
            .unwrap();
        let cell = container.compute_cell(ijk, 0).unwrap().unwrap();
        assert!((cell.volume() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_container_yields_no_cells() {
        let cfg = ContainerConfig::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 3, 3, 3);
        let container = Container::new(cfg);
        assert_eq!(container.iter_cells().count(), 0);
    }

    #[test]
    fn insertion_ordering_sidecar_preserves_put_order() {
        let cfg = ContainerConfig::new(0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 3, 3, 3);
        let mut container = Container::new(cfg).with_ordering();
        container.put(7, 1.5, 1.5, 1.5, None).unwrap();
        container.put(3, 0.5, 0.5, 0.5, None).unwrap();
        let ids: Vec<i64> = container.iter_cells().map(|c| c.unwrap().unwrap().id()).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    /// spec.md §8 scenario 2: two particles split the unit cube into equal
    /// halves sharing a face at x=0.5.
    #[test]
    fn two_particles_split_the_cube_with_a_shared_face() {
        let cfg = ContainerConfig::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 5, 5, 5);
        let mut container = Container::new(cfg).with_ordering();
        container.put(1, 0.25, 0.5, 0.5, None).unwrap();
        container.put(2, 0.75, 0.5, 0.5, None).unwrap();
        let cells: Vec<_> = container.iter_cells().map(|c| c.unwrap().unwrap()).collect();
        assert_eq!(cells.len(), 2);
        for cell in &cells {
            assert!((cell.volume() - 0.5).abs() < 1e-9);
            assert_eq!(cell.face_orders().len(), 6);
        }
        let areas: std::collections::HashMap<i64, f64> = cells[0].face_areas().into_iter().collect();
        assert!((areas[&2] - 1.0).abs() < 1e-9, "shared face with particle 2 has area 1");
    }

    /// spec.md §8 scenario 3: the BCC lattice (corner + body-centered point,
    /// periodic on all axes) tessellates into truncated-octahedron cells of
    /// volume 0.5 each.
    #[test]
    fn periodic_bcc_lattice_gives_half_volume_cells() {
        let cfg = ContainerConfig::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 3, 3, 3).with_periodicity(true, true, true);
        let mut container = Container::new(cfg);
        container.put(1, 0.0, 0.0, 0.0, None).unwrap();
        container.put(2, 0.5, 0.5, 0.5, None).unwrap();
        let mut total = 0.0;
        for cell in container.iter_cells() {
            let cell = cell.unwrap().unwrap();
            assert!((cell.volume() - 0.5).abs() < 1e-6);
            // A truncated octahedron has 14 faces: 8 hexagons + 6 squares.
            assert_eq!(cell.face_orders().len(), 14);
            total += cell.volume();
        }
        assert!((total - 1.0).abs() < 1e-9, "cells partition the periodic box exactly");
    }

    /// spec.md §8 scenario 4: the weighted (radical) variant places the
    /// dividing plane at `x = (r_s^2 + d^2 - r_t^2) / (2d)`, not at the
    /// unweighted midpoint.
    #[test]
    fn weighted_variant_moves_the_dividing_plane_by_radius() {
        let cfg = ContainerConfig::new(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0, 4, 4, 4).with_weighted();
        let mut container = Container::new(cfg).with_ordering();
        container.put(1, 0.0, 0.0, 0.0, Some(1.0)).unwrap();
        container.put(2, 3.0, 0.0, 0.0, Some(2.0)).unwrap();
        let cells: Vec<_> = container.iter_cells().map(|c| c.unwrap().unwrap()).collect();
        let verts = cells[0].vertices();
        let max_x = verts.iter().map(|v| v.x).fold(f64::MIN, f64::max);
        // The dividing plane sits at x=1 (per spec's worked example), so
        // particle 1's cell extends from x=-5 to x=1.
        assert!((max_x - 1.0).abs() < 1e-6, "got max_x={max_x}");
    }
}
