//! Tolerances and container configuration.
//!
//! Mirrors the teacher's `geom2::GeomCfg` / `geom4::cfg` split: a small,
//! `Copy` config struct carrying every epsilon the kernel needs, with a
//! `Default` that scales to typical container dimensions (relative
//! precision ~1e-11 per spec).

/// Geometric tolerances used by the cell mesh and driver.
///
/// Invariants: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug)]
pub struct GeomConfig {
    /// Absolute tolerance for classifying a vertex against a cut plane.
    /// Vertices within `±eps_plane` of the plane are treated as on-plane.
    pub eps_plane: f64,
    /// Feasibility slack used by emptiness/containment checks.
    pub eps_feas: f64,
    /// Tolerance for the debug-only Euler/pairing audit.
    pub eps_planar: f64,
}

impl GeomConfig {
    /// Scale the default tolerances to a container of the given diagonal length.
    ///
    /// Per spec §9: "defaults should scale with the container diagonal."
    pub fn for_diagonal(diagonal: f64) -> Self {
        let d = diagonal.max(1e-12);
        Self {
            eps_plane: d * 1e-11,
            eps_feas: d * 1e-11,
            eps_planar: d * 1e-9,
        }
    }
}

impl Default for GeomConfig {
    fn default() -> Self {
        Self::for_diagonal(1.0)
    }
}

/// Position stride: plain (x,y,z) or weighted (x,y,z,r).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionStride {
    Plain,
    Weighted,
}

impl PositionStride {
    #[inline]
    pub fn ps(self) -> usize {
        match self {
            PositionStride::Plain => 3,
            PositionStride::Weighted => 4,
        }
    }
}

/// Per-axis periodicity flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Periodicity {
    pub px: bool,
    pub py: bool,
    pub pz: bool,
}

/// Full container configuration: bounding box, grid shape, periodicity,
/// per-box capacity, and position stride.
#[derive(Clone, Copy, Debug)]
pub struct ContainerConfig {
    pub ax: f64,
    pub bx: f64,
    pub ay: f64,
    pub by: f64,
    pub az: f64,
    pub bz: f64,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub periodic: Periodicity,
    /// Initial per-box capacity; doubles on overflow up to `max_particle_memory`.
    pub init_mem: usize,
    /// Hard ceiling on per-box particle memory; exceeding it is fatal.
    pub max_particle_memory: usize,
    pub stride: PositionStride,
    pub geom: GeomConfig,
    /// Hard ceiling on a single cell mesh's vertex count; exceeding it is
    /// fatal (spec §5: "cell vertex and edge arrays similarly double on
    /// overflow", capped the same way per-box storage is).
    pub max_mesh_vertices: usize,
    /// Whether cell faces record which neighbor (or wall) produced them.
    /// Gates the neighbor-tracking sidecar per spec §9's "one mesh type,
    /// sidecar gated by a construction-time flag" design note.
    pub track_neighbors: bool,
}

impl ContainerConfig {
    /// New plain (unweighted), non-periodic container configuration.
    pub fn new(ax: f64, bx: f64, ay: f64, by: f64, az: f64, bz: f64, nx: usize, ny: usize, nz: usize) -> Self {
        let diagonal = ((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt();
        Self {
            ax,
            bx,
            ay,
            by,
            az,
            bz,
            nx: nx.max(1),
            ny: ny.max(1),
            nz: nz.max(1),
            periodic: Periodicity::default(),
            init_mem: 8,
            max_particle_memory: 1 << 24,
            stride: PositionStride::Plain,
            geom: GeomConfig::for_diagonal(diagonal),
            max_mesh_vertices: 1 << 16,
            track_neighbors: true,
        }
    }

    pub fn with_periodicity(mut self, px: bool, py: bool, pz: bool) -> Self {
        self.periodic = Periodicity { px, py, pz };
        self
    }

    pub fn with_weighted(mut self) -> Self {
        self.stride = PositionStride::Weighted;
        self
    }

    pub fn with_init_mem(mut self, init_mem: usize) -> Self {
        self.init_mem = init_mem.max(1);
        self
    }

    pub fn with_max_particle_memory(mut self, max: usize) -> Self {
        self.max_particle_memory = max;
        self
    }

    pub fn with_max_mesh_vertices(mut self, max: usize) -> Self {
        self.max_mesh_vertices = max;
        self
    }

    pub fn without_neighbor_tracking(mut self) -> Self {
        self.track_neighbors = false;
        self
    }

    #[inline]
    pub fn box_side_x(&self) -> f64 {
        (self.bx - self.ax) / self.nx as f64
    }
    #[inline]
    pub fn box_side_y(&self) -> f64 {
        (self.by - self.ay) / self.ny as f64
    }
    #[inline]
    pub fn box_side_z(&self) -> f64 {
        (self.bz - self.az) / self.nz as f64
    }

    #[inline]
    pub fn num_boxes(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    #[inline]
    pub fn side_length_x(&self) -> f64 {
        self.bx - self.ax
    }
    #[inline]
    pub fn side_length_y(&self) -> f64 {
        self.by - self.ay
    }
    #[inline]
    pub fn side_length_z(&self) -> f64 {
        self.bz - self.az
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scales_with_diagonal() {
        let small = GeomConfig::for_diagonal(1.0);
        let large = GeomConfig::for_diagonal(1000.0);
        assert!(large.eps_plane > small.eps_plane);
    }

    #[test]
    fn box_sides_divide_evenly() {
        let cfg = ContainerConfig::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 5, 5, 5);
        assert!((cfg.box_side_x() - 2.0).abs() < 1e-12);
        assert_eq!(cfg.num_boxes(), 125);
    }
}
