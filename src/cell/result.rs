//! The output of one cell compute: a finished mesh plus the metadata
//! needed to place it back in world coordinates.

use nalgebra::Vector3;

use crate::mesh::Mesh;

/// One computed Voronoi (or power) cell.
///
/// Owned by the caller once yielded by [`crate::cell::CellComputeDriver`]
/// or a [`crate::container::Container`] traversal; never shared between
/// compute requests, per spec §3's cell-mesh lifecycle.
#[derive(Clone, Debug)]
pub struct ComputedCell {
    pub(crate) id: i64,
    pub(crate) source: Vector3<f64>,
    pub(crate) mesh: Mesh,
}

impl ComputedCell {
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The generating particle's position in world coordinates.
    #[inline]
    pub fn source_position(&self) -> Vector3<f64> {
        self.source
    }

    pub fn volume(&self) -> f64 {
        self.mesh.volume()
    }

    /// Centroid in world coordinates.
    pub fn centroid(&self) -> Vector3<f64> {
        self.source + self.mesh.centroid()
    }

    pub fn surface_area(&self) -> f64 {
        self.mesh.surface_area()
    }

    /// Per-face area, keyed by face tag (neighbor particle id, or a
    /// box/wall sentinel from [`crate::mesh`]).
    pub fn face_areas(&self) -> Vec<(i64, f64)> {
        self.mesh.face_areas()
    }

    pub fn face_orders(&self) -> Vec<(i64, usize)> {
        self.mesh.face_orders()
    }

    pub fn face_vertices(&self) -> Vec<(i64, Vec<u32>)> {
        self.mesh.face_vertices()
    }

    /// The distinct face tags: neighbor particle ids and/or box/wall sentinels.
    pub fn neighbors(&self) -> Vec<i64> {
        self.mesh.neighbors()
    }

    /// Vertex positions in world coordinates.
    pub fn vertices(&self) -> Vec<Vector3<f64>> {
        self.mesh.vertices().iter().map(|v| self.source + v).collect()
    }

    /// Vertex positions in the cell's local frame (relative to the source particle).
    pub fn local_vertices(&self) -> &[Vector3<f64>] {
        self.mesh.vertices()
    }

    pub fn total_edge_distance(&self) -> f64 {
        self.mesh.total_edge_distance()
    }

    pub fn max_radius_squared(&self) -> f64 {
        self.mesh.max_radius_squared()
    }

    /// The underlying mesh, for callers that want the raw half-edge structure.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
