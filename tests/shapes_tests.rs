//! Shape table tests

use std::collections::HashSet;

use blockfall::core::{cells_occupied, SHAPE_TABLE};
use blockfall::types::{Orientation, Variant, CELLS_PER_PIECE, SHAPE_BOX};

#[test]
fn test_every_mask_has_four_cells() {
    for v in Variant::ALL {
        for o in Orientation::ALL {
            let count = (0..SHAPE_BOX)
                .flat_map(|r| (0..SHAPE_BOX).map(move |c| (r, c)))
                .filter(|&(r, c)| cells_occupied(v, o, r, c))
                .count();
            assert_eq!(count, CELLS_PER_PIECE, "{v:?} {o:?}");
        }
    }
}

#[test]
fn test_query_outside_box_is_false() {
    for v in Variant::ALL {
        assert!(!cells_occupied(v, Orientation::North, SHAPE_BOX, 0));
        assert!(!cells_occupied(v, Orientation::North, 0, SHAPE_BOX));
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = SHAPE_TABLE[Variant::O.index()];
    assert!(o.iter().all(|m| *m == o[0]));
}

#[test]
fn test_other_variants_have_distinct_orientations() {
    for v in Variant::ALL.into_iter().filter(|v| *v != Variant::O) {
        let distinct: HashSet<_> = SHAPE_TABLE[v.index()].iter().collect();
        assert_eq!(distinct.len(), 4, "{v:?}");
    }
}

#[test]
fn test_north_shapes() {
    // I lies flat in local row 1.
    for c in 0..4 {
        assert!(cells_occupied(Variant::I, Orientation::North, 1, c));
    }
    // T points up.
    assert!(cells_occupied(Variant::T, Orientation::North, 1, 1));
    assert!(cells_occupied(Variant::T, Orientation::North, 2, 0));
    assert!(cells_occupied(Variant::T, Orientation::North, 2, 2));
    assert!(!cells_occupied(Variant::T, Orientation::North, 1, 0));
}

#[test]
fn test_four_rotations_return_to_start() {
    for o in Orientation::ALL {
        let back = o.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, o);
    }
}
