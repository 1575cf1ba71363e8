//! Neighbor-box resolution for the cell compute driver's radius-ordered walk.

use nalgebra::Vector3;

use super::insert::linear_index;
use crate::config::ContainerConfig;

/// Resolve box `(i,j,k) + (ei,ej,ek)` to a flat box index plus the
/// displacement to add to that box's raw positions so they land in the
/// source particle's local frame.
///
/// Periodic axes wrap and accumulate one `side_length` per wrap; a
/// non-periodic axis that would step outside `[0,n)` has no neighbor box at
/// all — the offset is skipped by the driver rather than clamped to an edge
/// box, which would otherwise revisit the same particles under multiple
/// offsets.
pub(crate) fn region(
    cfg: &ContainerConfig,
    base: (usize, usize, usize),
    offset: (i64, i64, i64),
) -> Option<(usize, Vector3<f64>)> {
    let (i, dx) = wrap_axis(base.0 as i64 + offset.0, cfg.nx as i64, cfg.periodic.px, cfg.side_length_x())?;
    let (j, dy) = wrap_axis(base.1 as i64 + offset.1, cfg.ny as i64, cfg.periodic.py, cfg.side_length_y())?;
    let (k, dz) = wrap_axis(base.2 as i64 + offset.2, cfg.nz as i64, cfg.periodic.pz, cfg.side_length_z())?;
    Some((linear_index(cfg, i, j, k), Vector3::new(dx, dy, dz)))
}

fn wrap_axis(raw: i64, n: i64, periodic: bool, side_length: f64) -> Option<(usize, f64)> {
    if periodic {
        let wrapped = raw.rem_euclid(n);
        let wraps = (raw - wrapped) / n;
        Some((wrapped as usize, wraps as f64 * side_length))
    } else if raw < 0 || raw >= n {
        None
    } else {
        Some((raw as usize, 0.0))
    }
}
