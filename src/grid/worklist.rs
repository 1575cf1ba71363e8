//! The radius-ordered block worklist shared between the particle grid's
//! box geometry and the cell compute driver's termination test.
//!
//! Built once from the computational box side lengths; immutable after
//! construction (spec §5: "the radius-ordered worklist is immutable after
//! construction").

/// One entry: a candidate block offset plus the minimum squared distance
/// from the source block to that offset block.
#[derive(Clone, Copy, Debug)]
pub struct WorklistEntry {
    pub offset: (i64, i64, i64),
    pub min_dist_sq: f64,
}

/// Build the offset table out to `radius_boxes` boxes in each direction,
/// sorted by ascending minimum squared distance.
///
/// The minimum distance from the source box to an offset box `(ei,ej,ek)`
/// is computed against the *nearest* face of that box: an offset of zero
/// boxes along an axis contributes 0 (the source box itself spans that
/// axis), while an offset of `|e|` boxes contributes `((|e|-1)*side)^2`
/// (the gap between the source box and the nearest edge of the target box).
pub fn build(box_side: (f64, f64, f64), radius_boxes: i64) -> Vec<WorklistEntry> {
    let mut entries = Vec::new();
    for ei in -radius_boxes..=radius_boxes {
        for ej in -radius_boxes..=radius_boxes {
            for ek in -radius_boxes..=radius_boxes {
                let dx = axis_gap(ei, box_side.0);
                let dy = axis_gap(ej, box_side.1);
                let dz = axis_gap(ek, box_side.2);
                entries.push(WorklistEntry {
                    offset: (ei, ej, ek),
                    min_dist_sq: dx * dx + dy * dy + dz * dz,
                });
            }
        }
    }
    entries.sort_by(|a, b| a.min_dist_sq.partial_cmp(&b.min_dist_sq).unwrap());
    entries
}

#[inline]
fn axis_gap(e: i64, side: f64) -> f64 {
    let steps = e.unsigned_abs() as i64 - 1;
    if steps <= 0 {
        0.0
    } else {
        steps as f64 * side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_has_zero_distance_and_sorts_first() {
        let table = build((1.0, 1.0, 1.0), 2);
        assert_eq!(table[0].offset, (0, 0, 0));
        assert_eq!(table[0].min_dist_sq, 0.0);
        for w in table.windows(2) {
            assert!(w[0].min_dist_sq <= w[1].min_dist_sq);
        }
    }
}
