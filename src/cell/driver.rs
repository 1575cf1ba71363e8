//! Cell compute driver (CCD): for one source particle, walks the
//! radius-ordered worklist, clipping the mesh by each candidate's
//! bisecting plane, until no remaining candidate can alter the cell.

use nalgebra::Vector3;

use super::result::ComputedCell;
use crate::config::{ContainerConfig, PositionStride};
use crate::container::Container;
use crate::error::Result;
use crate::mesh::Mesh;

/// Computes one cell per invocation. Holds its own scratch state (current
/// source position, current block index) rather than the container, per
/// spec §9's design note — this is what lets independent drivers run
/// against one container concurrently, from disjoint regions.
#[derive(Debug, Default)]
pub struct CellComputeDriver {
    source: Vector3<f64>,
    base: (usize, usize, usize),
}

impl CellComputeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the cell for the particle stored at box `ijk`, local slot
    /// `slot`. `Ok(None)` means the cell was annihilated — by a wall, or
    /// by a neighbor's bisecting plane leaving no interior — which spec §7
    /// treats as routine output, not an error.
    pub fn compute(&mut self, container: &Container, ijk: usize, slot: usize) -> Result<Option<ComputedCell>> {
        let cfg = container.config();
        let grid = container.grid();
        let stride = cfg.stride;

        let source_box = grid.box_at(ijk);
        let id = source_box.id(slot);
        let pos = source_box.position(slot, stride);
        self.source = Vector3::new(pos[0], pos[1], pos[2]);
        self.base = grid.unflatten(ijk);
        let source_radius = if stride == PositionStride::Weighted { source_box.radius(slot) } else { 0.0 };

        let mut mesh = Mesh::new(cfg.track_neighbors, cfg.max_mesh_vertices);
        self.init_box_mesh(&mut mesh, cfg);

        if !container.walls().apply(&mut mesh, self.source, cfg.geom.eps_plane)? {
            tracing::debug!(id, "cell annihilated by wall at initialization");
            return Ok(None);
        }

        // Weighted (radical) search-bound multiplier, constant for this
        // compute: spec §4.3's `r_mul = 1 + (r_s^2 - M^2) / (M + r_s)^2`.
        let r_mul = if stride == PositionStride::Weighted {
            let m = container.max_radius();
            1.0 + (source_radius * source_radius - m * m) / (m + source_radius).powi(2)
        } else {
            1.0
        };

        let mut max_r_sq = mesh.max_radius_squared();
        let mut candidates_examined = 0usize;

        for entry in container.worklist() {
            // spec §4.3 step 3's literal cutoff: terminate once a
            // candidate block's minimum distance exceeds `r_mul * R`.
            if entry.min_dist_sq > r_mul * max_r_sq {
                break;
            }
            let Some((jjk, disp)) = grid.region(self.base, entry.offset) else {
                continue;
            };
            let candidate_box = grid.box_at(jjk);
            for s in 0..candidate_box.len() {
                if jjk == ijk && s == slot {
                    continue;
                }
                let p = candidate_box.position(s, stride);
                let offset = Vector3::new(
                    p[0] + disp.x - self.source.x,
                    p[1] + disp.y - self.source.y,
                    p[2] + disp.z - self.source.z,
                );
                let lrs = offset.norm_squared();
                let (rs, face_tag) = if stride == PositionStride::Weighted {
                    let candidate_radius = candidate_box.radius(s);
                    (lrs + source_radius * source_radius - candidate_radius * candidate_radius, candidate_box.id(s))
                } else {
                    (lrs, candidate_box.id(s))
                };
                candidates_examined += 1;
                let survived = mesh.cut(offset, rs / 2.0, face_tag, cfg.geom.eps_plane)?;
                if !survived {
                    tracing::debug!(id, candidates_examined, "cell annihilated by neighbor cut");
                    return Ok(None);
                }
            }
            max_r_sq = mesh.max_radius_squared();
        }

        tracing::debug!(id, candidates_examined, volume = mesh.volume(), "cell computed");
        Ok(Some(ComputedCell { id, source: self.source, mesh }))
    }

    /// Reset `mesh` to the axis-aligned half-extents around the source
    /// particle: `[a-source, b-source]` on a non-periodic axis, or
    /// `[-L/2, L/2]` on a periodic one, per spec §4.3's pre-initialization.
    fn init_box_mesh(&self, mesh: &mut Mesh, cfg: &ContainerConfig) {
        let (x1, x2) = Self::axis_extent(self.source.x, cfg.ax, cfg.bx, cfg.periodic.px);
        let (y1, y2) = Self::axis_extent(self.source.y, cfg.ay, cfg.by, cfg.periodic.py);
        let (z1, z2) = Self::axis_extent(self.source.z, cfg.az, cfg.bz, cfg.periodic.pz);
        mesh.init(x1, x2, y1, y2, z1, z2);
    }

    #[inline]
    fn axis_extent(source: f64, a: f64, b: f64, periodic: bool) -> (f64, f64) {
        if periodic {
            let half = (b - a) / 2.0;
            (-half, half)
        } else {
            (a - source, b - source)
        }
    }
}
