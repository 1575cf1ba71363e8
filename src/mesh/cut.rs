//! Mesh initialization and the incremental half-space clipping algorithm.
//!
//! The clipping step (classify → seed edge → walk the boundary ring →
//! delete/compact) is grounded in the pack's `mdt-re-vorothree` cell-edge
//! clipper (`cell_edges.rs::clip_with_scratch`), which performs the same
//! "keep inside vertices, stitch a new ring via a face-cut map" rebuild in
//! flat-array form. We generalize it here to arbitrary vertex degree and an
//! explicit, audited back-reference per half-edge (spec §4.1's pairing
//! invariant), rather than rebuilding adjacency by linear search on every
//! query.

use nalgebra::Vector3;

use super::types::{HalfEdge, Mesh, FACE_BOX_X_MAX, FACE_BOX_X_MIN, FACE_BOX_Y_MAX, FACE_BOX_Y_MIN, FACE_BOX_Z_MAX, FACE_BOX_Z_MIN};
use crate::error::{CapacityKind, KernelError, Result};

/// One crossing vertex created while clipping a face.
struct CutInfo {
    p_idx: u32,
    u_idx: u32,
    f_left: i64,
    f_right: i64,
}

impl Mesh {
    /// Reset the mesh to the axis-aligned box `[x1,x2]×[y1,y2]×[z1,z2]`.
    ///
    /// Vertex numbering and adjacency mirror the canonical box layout used
    /// throughout the Voronoi-kernel literature: 8 vertices of degree 3,
    /// each outgoing edge tagged with the face (box wall) to its left.
    pub fn init(&mut self, x1: f64, x2: f64, y1: f64, y2: f64, z1: f64, z2: f64) {
        self.vertices.clear();
        self.edges.clear();
        self.vertices.extend_from_slice(&[
            Vector3::new(x1, y1, z1), // 0
            Vector3::new(x2, y1, z1), // 1
            Vector3::new(x2, y2, z1), // 2
            Vector3::new(x1, y2, z1), // 3
            Vector3::new(x1, y1, z2), // 4
            Vector3::new(x2, y1, z2), // 5
            Vector3::new(x2, y2, z2), // 6
            Vector3::new(x1, y2, z2), // 7
        ]);
        const XMIN: i64 = FACE_BOX_X_MIN;
        const XMAX: i64 = FACE_BOX_X_MAX;
        const YMIN: i64 = FACE_BOX_Y_MIN;
        const YMAX: i64 = FACE_BOX_Y_MAX;
        const ZMIN: i64 = FACE_BOX_Z_MIN;
        const ZMAX: i64 = FACE_BOX_Z_MAX;
        // (to, back, face) per vertex. `back` is the slot in `to`'s own
        // adjacency list that points back here; `face` is the face traced
        // by following `(back+1) % degree` at each hop (see
        // `measure::face_loops_tagged`) — both were derived by walking the
        // cube's 6 face rings explicitly rather than guessed per edge.
        let table: [[(u32, u16, i64); 3]; 8] = [
            [(1, 2, ZMIN), (4, 2, YMIN), (3, 0, XMIN)], // vertex 0
            [(2, 2, ZMIN), (5, 0, XMAX), (0, 0, YMIN)], // vertex 1
            [(3, 2, ZMIN), (6, 0, YMAX), (1, 0, XMAX)], // vertex 2
            [(0, 2, ZMIN), (7, 0, XMIN), (2, 0, YMAX)], // vertex 3
            [(5, 2, YMIN), (7, 1, ZMAX), (0, 1, XMIN)], // vertex 4
            [(1, 1, YMIN), (6, 2, XMAX), (4, 0, ZMAX)], // vertex 5
            [(2, 1, XMAX), (7, 2, YMAX), (5, 1, ZMAX)], // vertex 6
            [(3, 1, YMAX), (4, 1, XMIN), (6, 1, ZMAX)], // vertex 7
        ];
        for row in table.iter() {
            self.edges.push(
                row.iter()
                    .map(|&(to, back, face)| HalfEdge { to, back, face })
                    .collect(),
            );
        }
    }

    /// Clip the polyhedron by the half-space `⟨n,v⟩ ≤ r`, tagging the new
    /// face (if it survives) with `face_tag`.
    ///
    /// Returns `Ok(true)` if the cell survives (possibly unchanged),
    /// `Ok(false)` if the cell is fully removed, and `Err` only when the
    /// mesh's vertex ceiling would be exceeded.
    pub fn cut(&mut self, n: Vector3<f64>, r: f64, face_tag: i64, eps: f64) -> Result<bool> {
        let nv = self.vertices.len();
        if nv == 0 {
            return Ok(false);
        }
        let mut q = vec![0.0_f64; nv];
        let mut outside = vec![false; nv];
        let mut any_outside = false;
        let mut any_inside = false;
        for i in 0..nv {
            let qi = n.dot(&self.vertices[i]) - r;
            q[i] = qi;
            // Ties are biased toward INSIDE (spec §4.1 step 1): the plane
            // does not cut on ambiguous classification.
            if qi > eps {
                outside[i] = true;
                any_outside = true;
            } else {
                any_inside = true;
            }
        }
        if !any_outside {
            return Ok(true);
        }
        if !any_inside {
            self.vertices.clear();
            self.edges.clear();
            return Ok(false);
        }

        let mut new_vertices: Vec<Vector3<f64>> = Vec::with_capacity(nv);
        let mut old_to_new: Vec<Option<u32>> = vec![None; nv];
        for i in 0..nv {
            if !outside[i] {
                old_to_new[i] = Some(new_vertices.len() as u32);
                new_vertices.push(self.vertices[i]);
            }
        }
        let num_retained = new_vertices.len();

        let mut cut_infos: Vec<CutInfo> = Vec::new();
        let mut face_cut_map: Vec<(i64, u32, bool)> = Vec::new();
        let mut crossing_vertex: Vec<Vec<Option<u32>>> =
            self.edges.iter().map(|e| vec![None; e.len()]).collect();

        for i in 0..nv {
            if outside[i] {
                continue;
            }
            let deg = self.edges[i].len();
            for k in 0..deg {
                let he = self.edges[i][k];
                let j = he.to as usize;
                if !outside[j] {
                    continue;
                }
                let t = (q[i] / (q[i] - q[j])).clamp(0.0, 1.0);
                let p = self.vertices[i] + (self.vertices[j] - self.vertices[i]) * t;
                let p_idx = (num_retained + cut_infos.len()) as u32;
                new_vertices.push(p);
                // The two faces bordering edge i-j: `f_left` on the i->j
                // side, `f_right` on the j->i side (read off `j`'s own
                // adjacency before it's discarded below).
                let f_left = he.face;
                let f_right = self.edges[j][he.back as usize].face;
                cut_infos.push(CutInfo {
                    p_idx,
                    u_idx: old_to_new[i].expect("retained vertex has a new index"),
                    f_left,
                    f_right,
                });
                face_cut_map.push((f_left, p_idx, true));
                face_cut_map.push((f_right, p_idx, false));
                crossing_vertex[i][k] = Some(p_idx);
            }
        }

        if new_vertices.len() > self.max_vertices {
            return Err(KernelError::CapacityExceeded {
                kind: CapacityKind::MeshVertices,
                limit: self.max_vertices,
            });
        }

        let total = num_retained + cut_infos.len();
        let mut new_edges: Vec<Vec<HalfEdge>> = vec![Vec::new(); total];

        for i in 0..nv {
            if outside[i] {
                continue;
            }
            let new_i = old_to_new[i].unwrap() as usize;
            let deg = self.edges[i].len();
            let mut adj = Vec::with_capacity(deg);
            for k in 0..deg {
                let he = self.edges[i][k];
                let j = he.to as usize;
                let to = if !outside[j] {
                    old_to_new[j].unwrap()
                } else {
                    crossing_vertex[i][k].expect("crossing edge produced a cut vertex")
                };
                adj.push(HalfEdge {
                    to,
                    back: 0,
                    face: he.face,
                });
            }
            new_edges[new_i] = adj;
        }

        for ci in &cut_infos {
            let p = ci.p_idx as usize;
            let mut p_prev = None;
            let mut p_next = None;
            for &(f, idx, _) in &face_cut_map {
                if idx == ci.p_idx {
                    continue;
                }
                if f == ci.f_right && p_prev.is_none() {
                    p_prev = Some(idx);
                }
                if f == ci.f_left && p_next.is_none() {
                    p_next = Some(idx);
                }
            }
            let mut adj = Vec::with_capacity(3);
            adj.push(HalfEdge {
                to: ci.u_idx,
                back: 0,
                face: ci.f_right,
            });
            if let Some(pp) = p_prev {
                adj.push(HalfEdge {
                    to: pp,
                    back: 0,
                    face: face_tag,
                });
            }
            if let Some(pn) = p_next {
                adj.push(HalfEdge {
                    to: pn,
                    back: 0,
                    face: ci.f_left,
                });
            }
            new_edges[p] = adj;
        }

        // Resolve back-references: the critical pairing invariant.
        for i in 0..new_edges.len() {
            for k in 0..new_edges[i].len() {
                let j = new_edges[i][k].to as usize;
                let back = new_edges[j]
                    .iter()
                    .position(|he| he.to as usize == i)
                    .expect("closed mesh: every directed edge has a reciprocal");
                new_edges[i][k].back = back as u16;
            }
        }

        self.vertices = new_vertices;
        self.edges = new_edges;
        Ok(true)
    }
}
