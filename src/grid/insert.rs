//! Insertion and point classification: domain checks, periodic remap, and
//! the floor-based box index (spec §4.2's `put`).

use crate::config::ContainerConfig;
use crate::error::{Axis, KernelError, Result};

/// Remap one coordinate into its canonical box index and in-domain value.
///
/// Boundary convention (spec §9's open question, resolved in DESIGN.md):
/// each axis is inclusive on the lower bound and exclusive on the upper
/// bound, except that a point landing exactly on the *outer* container
/// bound (`b·`) is still accepted and folds into the last box rather than
/// being rejected as one-past-the-end.
pub(crate) fn remap_axis(
    value: f64,
    a: f64,
    b: f64,
    n: usize,
    periodic: bool,
    axis: Axis,
) -> Result<(usize, f64)> {
    let side = (b - a) / n as f64;
    let remapped = if periodic {
        let len = b - a;
        a + (value - a).rem_euclid(len)
    } else {
        if value < a || value > b {
            return Err(KernelError::Domain {
                axis,
                value,
                lo: a,
                hi: b,
            });
        }
        value
    };
    let mut idx = ((remapped - a) / side).floor() as i64;
    if idx < 0 {
        idx = 0;
    }
    if idx as usize >= n {
        idx = n as i64 - 1;
    }
    Ok((idx as usize, remapped))
}

/// Linearize a 3D box index `(i,j,k)` into the flat box array index.
#[inline]
pub(crate) fn linear_index(cfg: &ContainerConfig, i: usize, j: usize, k: usize) -> usize {
    (k * cfg.ny + j) * cfg.nx + i
}
