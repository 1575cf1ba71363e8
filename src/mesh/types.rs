//! Cell mesh entity: vertices plus an edge-paired adjacency structure.
//!
//! The literal spec layout (`ed[i]` split into neighbor ids, back-references,
//! and an own-identifier slot) is modeled here as one `HalfEdge` per
//! outgoing directed edge, grouped per vertex. The "own identifier" spec
//! mentions is simply the vertex's position in `vertices`/`edges`, so it
//! isn't duplicated as a field.

use nalgebra::Vector3;

/// Face id sentinel for the six axis-aligned container walls.
pub const FACE_BOX_X_MIN: i64 = -1;
pub const FACE_BOX_X_MAX: i64 = -2;
pub const FACE_BOX_Y_MIN: i64 = -3;
pub const FACE_BOX_Y_MAX: i64 = -4;
pub const FACE_BOX_Z_MIN: i64 = -5;
pub const FACE_BOX_Z_MAX: i64 = -6;
/// User walls are tagged `FACE_WALL_BASE - wall_index`.
pub const FACE_WALL_BASE: i64 = -1_000;

#[inline]
pub fn wall_face_tag(wall_index: usize) -> i64 {
    FACE_WALL_BASE - wall_index as i64
}

/// One directed edge out of a vertex.
///
/// `face` names the neighbor particle (or wall/box sentinel) whose cutting
/// plane produced the face to the left of this directed edge, per spec's
/// neighbor-tracking sidecar. `back` is the slot in `to`'s adjacency list
/// that points back to the edge's origin vertex.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdge {
    pub to: u32,
    pub back: u16,
    pub face: i64,
}

/// The convex polyhedron under construction for one source particle.
///
/// Invariants (checked by [`crate::mesh::audit::audit_pairing`] in debug
/// builds): the incidence is a closed, orientable, convex polyhedral
/// surface; `edges[to].back` always resolves to an edge pointing back.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vector3<f64>>,
    pub(crate) edges: Vec<Vec<HalfEdge>>,
    pub(crate) track_neighbors: bool,
    pub(crate) max_vertices: usize,
}

impl Mesh {
    /// Construct an empty mesh. Call [`Mesh::init`] before use.
    pub fn new(track_neighbors: bool, max_vertices: usize) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            track_neighbors,
            max_vertices,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.edges[i].len()
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vector3<f64> {
        self.vertices[i]
    }

    /// Vertex positions in the cell's local frame (relative to the source particle).
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    /// All outgoing half-edges of vertex `i`.
    pub fn edges_of(&self, i: usize) -> &[HalfEdge] {
        &self.edges[i]
    }
}
