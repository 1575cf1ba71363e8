//! Concrete wall shapes: half-space (plane), sphere, cylinder, cone.
//!
//! Grounded in the pack's `mdt-re-vorothree` `geometries` module
//! (`PlaneGeometry`/`SphereGeometry`/`CylinderGeometry`/`ConeGeometry`,
//! exercised by its `tessellation_grid.rs` wall-clipping tests). Spec §4.4
//! models a wall's `cut` as one half-space clip per call
//! (`cut(cell, source_position)`); a curved surface has no single
//! half-space that bounds it exactly, so each curved shape here clips by a
//! small fixed family of *supporting* tangent planes (one per sampled
//! direction around the shape's axis, or around the full sphere) — each
//! individually a valid, exact half-space cut via [`Mesh::cut`], and
//! together a circumscribing polyhedral approximation of the curved
//! surface, in the same spirit as spec §8 scenario 5's "polygonal
//! approximation".

use nalgebra::Vector3;

use super::Wall;
use crate::error::Result;
use crate::mesh::Mesh;

/// Number of supporting planes used to approximate a curved wall's cross
/// section. Coarse by design (this is a boundary enrichment, not the
/// core); a caller wanting a tighter approximation can always add more
/// `PlaneWall`s by hand.
const DEFAULT_SEGMENTS: usize = 24;

/// Two unit vectors spanning the plane perpendicular to `axis`, chosen
/// deterministically from a fixed reference so sampling is reproducible.
fn perp_basis(axis: Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let reference = if axis.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
    let e_r = (reference - axis * reference.dot(&axis)).normalize();
    let e_theta = axis.cross(&e_r);
    (e_r, e_theta)
}

/// `n` evenly spaced unit directions in the plane spanned by `e_r`, `e_theta`.
fn ring_directions(e_r: Vector3<f64>, e_theta: Vector3<f64>, n: usize) -> impl Iterator<Item = Vector3<f64>> {
    (0..n).map(move |i| {
        let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
        e_r * theta.cos() + e_theta * theta.sin()
    })
}

/// Deterministic Fibonacci-lattice sampling of `n` unit directions over the
/// full sphere.
fn fibonacci_sphere(n: usize) -> impl Iterator<Item = Vector3<f64>> {
    let golden_angle = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    let denom = (n as f64 - 1.0).max(1.0);
    (0..n).map(move |i| {
        let y = 1.0 - 2.0 * (i as f64) / denom;
        let r = (1.0 - y * y).max(0.0).sqrt();
        let theta = golden_angle * i as f64;
        Vector3::new(theta.cos() * r, y, theta.sin() * r)
    })
}

/// Half-space wall: keeps the side `normal` points toward, through `point`.
#[derive(Clone, Copy, Debug)]
pub struct PlaneWall {
    point: Vector3<f64>,
    normal: Vector3<f64>,
}

impl PlaneWall {
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }
}

impl Wall for PlaneWall {
    fn point_inside(&self, p: Vector3<f64>) -> bool {
        self.normal.dot(&(p - self.point)) >= 0.0
    }

    fn cut(&self, mesh: &mut Mesh, source: Vector3<f64>, face_tag: i64, eps: f64) -> Result<bool> {
        let n = -self.normal;
        let r = self.normal.dot(&(self.point - source));
        mesh.cut(n, r, face_tag, eps)
    }
}

/// Spherical wall: keeps the interior of a ball of `radius` at `center`.
#[derive(Clone, Copy, Debug)]
pub struct SphereWall {
    center: Vector3<f64>,
    radius: f64,
    segments: usize,
}

impl SphereWall {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        Self {
            center,
            radius,
            segments: DEFAULT_SEGMENTS,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(4);
        self
    }
}

impl Wall for SphereWall {
    fn point_inside(&self, p: Vector3<f64>) -> bool {
        (p - self.center).norm() <= self.radius
    }

    fn cut(&self, mesh: &mut Mesh, source: Vector3<f64>, face_tag: i64, eps: f64) -> Result<bool> {
        // Supporting plane in direction `d`: d.(p - center) <= radius, i.e.
        // in local coordinates v = p - source: d.v <= radius - d.(source - center).
        for d in fibonacci_sphere(self.segments) {
            let r = self.radius - d.dot(&(source - self.center));
            if !mesh.cut(d, r, face_tag, eps)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Cylindrical wall: keeps points within `radius` of the infinite line
/// through `point` along unit `axis`.
#[derive(Clone, Copy, Debug)]
pub struct CylinderWall {
    point: Vector3<f64>,
    axis: Vector3<f64>,
    radius: f64,
    segments: usize,
}

impl CylinderWall {
    pub fn new(point: Vector3<f64>, axis: Vector3<f64>, radius: f64) -> Self {
        Self {
            point,
            axis: axis.normalize(),
            radius,
            segments: DEFAULT_SEGMENTS,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(4);
        self
    }

    #[inline]
    fn radial_dist(&self, p: Vector3<f64>) -> f64 {
        let rel = p - self.point;
        let perp = rel - rel.dot(&self.axis) * self.axis;
        perp.norm()
    }
}

impl Wall for CylinderWall {
    fn point_inside(&self, p: Vector3<f64>) -> bool {
        self.radial_dist(p) <= self.radius
    }

    fn cut(&self, mesh: &mut Mesh, source: Vector3<f64>, face_tag: i64, eps: f64) -> Result<bool> {
        // Supporting plane at azimuth `e_r`: e_r.(p - point) <= radius.
        let (e_r, e_theta) = perp_basis(self.axis);
        for d in ring_directions(e_r, e_theta, self.segments) {
            let r = self.radius - d.dot(&(source - self.point));
            if !mesh.cut(d, r, face_tag, eps)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Conical wall: keeps points within the nappe opening from `apex` along
/// unit `axis` at `half_angle` radians, on the side `axis` points toward.
#[derive(Clone, Copy, Debug)]
pub struct ConeWall {
    apex: Vector3<f64>,
    axis: Vector3<f64>,
    half_angle: f64,
    segments: usize,
}

impl ConeWall {
    pub fn new(apex: Vector3<f64>, axis: Vector3<f64>, half_angle: f64) -> Self {
        Self {
            apex,
            axis: axis.normalize(),
            half_angle,
            segments: DEFAULT_SEGMENTS,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(4);
        self
    }

    #[inline]
    fn signed_dist(&self, p: Vector3<f64>) -> f64 {
        let rel = p - self.apex;
        let h = rel.dot(&self.axis).max(0.0);
        let perp = rel - rel.dot(&self.axis) * self.axis;
        perp.norm() - h * self.half_angle.tan()
    }
}

impl Wall for ConeWall {
    fn point_inside(&self, p: Vector3<f64>) -> bool {
        self.signed_dist(p) <= 0.0
    }

    fn cut(&self, mesh: &mut Mesh, source: Vector3<f64>, face_tag: i64, eps: f64) -> Result<bool> {
        // Supporting plane at azimuth `e_r`: a ruling line of the cone's
        // surface, normal `e_r*cos(half_angle) - axis*sin(half_angle)`.
        let (e_r, e_theta) = perp_basis(self.axis);
        let (cos_a, sin_a) = (self.half_angle.cos(), self.half_angle.sin());
        for dir in ring_directions(e_r, e_theta, self.segments) {
            let n = dir * cos_a - self.axis * sin_a;
            let r = -n.dot(&(self.apex - source));
            if !mesh.cut(n, r, face_tag, eps)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
