use super::*;
use crate::config::ContainerConfig;

fn grid(periodic: bool) -> ParticleGrid {
    let cfg = ContainerConfig::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 5, 5, 5).with_periodicity(periodic, periodic, periodic);
    ParticleGrid::new(cfg)
}

#[test]
fn put_rejects_out_of_range_on_non_periodic_axis() {
    let mut g = grid(false);
    let err = g.put(1, 11.0, 5.0, 5.0, None).unwrap_err();
    assert!(matches!(err, crate::error::KernelError::Domain { .. }));
}

#[test]
fn put_wraps_on_periodic_axis() {
    let mut g = grid(true);
    let (ijk, _slot) = g.put(1, -1.0, 5.0, 5.0, None).unwrap();
    let (i, _, _) = g.unflatten(ijk);
    assert_eq!(i, 4, "x=-1 wraps to x=9, which falls in the last box of a 0..10 / 5 grid");
}

#[test]
fn outer_upper_bound_is_inclusive() {
    let mut g = grid(false);
    let (ijk, _) = g.put(1, 10.0, 5.0, 5.0, None).unwrap();
    let (i, _, _) = g.unflatten(ijk);
    assert_eq!(i, 4, "bx is accepted and folds into the last box");
}

#[test]
fn region_wraps_with_displacement_on_periodic_grid() {
    let g = grid(true);
    let (idx, disp) = g.region((0, 2, 2), (-1, 0, 0)).expect("periodic axis always resolves");
    let (i, _, _) = g.unflatten(idx);
    assert_eq!(i, 4);
    assert!((disp.x - (-10.0)).abs() < 1e-9);
}

#[test]
fn region_is_none_past_a_non_periodic_edge() {
    let g = grid(false);
    assert!(g.region((0, 2, 2), (-1, 0, 0)).is_none());
}

#[test]
fn box_storage_grows_past_initial_capacity() {
    let mut g = grid(false);
    for i in 0..20 {
        g.put(i, 1.0, 1.0, 1.0, None).unwrap();
    }
    let (idx, _) = g.region((0, 0, 0), (0, 0, 0)).unwrap();
    assert_eq!(g.box_at(idx).len(), 20);
}
