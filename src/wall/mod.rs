//! Wall list (WL): half-space/implicit walls applied once at cell
//! initialization, consulted afterward for point-in-domain tests.
//!
//! Concrete shapes live in [`shapes`] — spec §4.4 is explicit that they are
//! not part of the core, only the capability set they implement is.

mod shapes;

pub use shapes::{ConeWall, CylinderWall, PlaneWall, SphereWall};

use nalgebra::Vector3;

use crate::error::Result;
use crate::mesh::{wall_face_tag, Mesh};

/// The two-capability wall interface: point containment, and a cut applied
/// to a cell mesh. Parameterizing `cut` over the mesh's plane-cut/neighbor
/// tag hook (rather than a dedicated cell type per wall) avoids baking the
/// cell's internal representation into the wall interface, per spec §9.
pub trait Wall: std::fmt::Debug {
    /// True iff the world-space point lies on this wall's kept side.
    fn point_inside(&self, p: Vector3<f64>) -> bool;

    /// Clip `mesh` (vertices in the cell's local frame around `source`) by
    /// this wall's surface, tagging the resulting face(s) with `face_tag`.
    fn cut(&self, mesh: &mut Mesh, source: Vector3<f64>, face_tag: i64, eps: f64) -> Result<bool>;
}

/// An ordered collection of walls, applied once at cell initialization.
///
/// `point_inside` is the conjunction over all walls; `apply` applies each
/// wall's cut in the list's order and short-circuits on annihilation, per
/// spec §4.4.
#[derive(Debug, Default)]
pub struct WallList {
    walls: Vec<Box<dyn Wall>>,
}

impl WallList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, wall: impl Wall + 'static) {
        self.walls.push(Box::new(wall));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn point_inside(&self, p: Vector3<f64>) -> bool {
        self.walls.iter().all(|w| w.point_inside(p))
    }

    /// Apply every wall's cut in order. Returns `Ok(false)` as soon as one
    /// wall annihilates the mesh, without applying the remaining walls.
    pub fn apply(&self, mesh: &mut Mesh, source: Vector3<f64>, eps: f64) -> Result<bool> {
        for (i, wall) in self.walls.iter().enumerate() {
            if !wall.cut(mesh, source, wall_face_tag(i), eps)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
