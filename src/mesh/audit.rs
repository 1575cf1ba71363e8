//! Debug-only structural audit: edge pairing and Euler characteristic.
//!
//! Grounded in `oriented_edge.rs::build_graph`'s own pairing assertions; run
//! only under `debug_assertions` since it's O(E) extra bookkeeping per cut
//! and not part of the kernel's steady-state cost.

use super::types::Mesh;

/// Checks that every half-edge's `back` resolves to a reciprocal edge and
/// that Euler's formula `V - E + F = 2` holds for the current mesh.
///
/// Panics on violation; intended for `debug_assert!(mesh.audit_pairing())`
/// call sites in tests and in the driver's debug-build path.
pub fn audit_pairing(mesh: &Mesh) -> bool {
    if mesh.is_empty() {
        return true;
    }
    let n = mesh.num_vertices();
    for i in 0..n {
        for (k, he) in mesh.edges_of(i).iter().enumerate() {
            let j = he.to as usize;
            let back = mesh.edges_of(j).get(he.back as usize);
            match back {
                Some(reciprocal) if reciprocal.to as usize == i => {}
                _ => return false,
            }
            let _ = k;
        }
    }

    let num_edges: usize = (0..n).map(|i| mesh.degree(i)).sum::<usize>() / 2;
    let num_faces = count_faces(mesh);
    let euler = n as i64 - num_edges as i64 + num_faces as i64;
    euler == 2
}

fn count_faces(mesh: &Mesh) -> usize {
    let n = mesh.num_vertices();
    let mut visited: Vec<Vec<bool>> = (0..n).map(|i| vec![false; mesh.degree(i)]).collect();
    let mut count = 0;
    for i in 0..n {
        for k in 0..mesh.degree(i) {
            if visited[i][k] {
                continue;
            }
            count += 1;
            let (mut cur_v, mut cur_k) = (i, k);
            loop {
                if visited[cur_v][cur_k] {
                    break;
                }
                visited[cur_v][cur_k] = true;
                let he = mesh.edges_of(cur_v)[cur_k];
                let next_v = he.to as usize;
                let next_k = (he.back as usize + 1) % mesh.degree(next_v);
                cur_v = next_v;
                cur_k = next_k;
                if cur_v == i && cur_k == k {
                    break;
                }
            }
        }
    }
    count
}
