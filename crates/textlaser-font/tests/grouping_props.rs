use proptest::prelude::*;
use textlaser_font::{group_strokes, order_groups, GroupOrder, Segment, CONTINUITY_TOLERANCE};

fn coord() -> impl Strategy<Value = f64> {
    (-20i32..20).prop_map(|v| v as f64 / 2.0)
}

/// Strokes that are often, but not always, chained end to start.
fn stroke_list() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec((coord(), coord(), coord(), coord(), any::<bool>()), 0..24).prop_map(
        |raw| {
            let mut out: Vec<Segment> = Vec::new();
            for (x1, y1, x2, y2, chain) in raw {
                let start = match out.last() {
                    Some(prev) if chain => (prev.end().x, prev.end().y),
                    _ => (x1, y1),
                };
                out.push(Segment::from_coords(start.0, start.1, x2, y2));
            }
            out
        },
    )
}

proptest! {
    #[test]
    fn grouping_preserves_strokes_in_order(strokes in stroke_list()) {
        let groups = group_strokes(&strokes);
        let flat: Vec<Segment> = groups.iter().flat_map(|g| g.segments().iter().copied()).collect();
        prop_assert_eq!(flat, strokes);
    }

    #[test]
    fn grouping_boundaries_follow_tolerance(strokes in stroke_list()) {
        let groups = group_strokes(&strokes);
        for group in &groups {
            prop_assert!(!group.is_empty());
            for pair in group.segments().windows(2) {
                prop_assert!(pair[0].end().distance_to(&pair[1].start()) <= CONTINUITY_TOLERANCE);
            }
        }
        for pair in groups.windows(2) {
            let last = pair[0].segments()[pair[0].len() - 1];
            let first = pair[1].segments()[0];
            prop_assert!(last.end().distance_to(&first.start()) > CONTINUITY_TOLERANCE);
        }
    }

    #[test]
    fn ordering_is_a_permutation_of_groups(strokes in stroke_list(), corrected in any::<bool>()) {
        let order = if corrected { GroupOrder::Corrected } else { GroupOrder::Legacy };
        let original = group_strokes(&strokes);
        let mut ordered = original.clone();
        order_groups(&mut ordered, order);

        prop_assert_eq!(ordered.len(), original.len());
        for group in &original {
            prop_assert!(ordered.contains(group));
        }
        let total: usize = ordered.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, strokes.len());
    }

    #[test]
    fn ordering_is_deterministic(strokes in stroke_list()) {
        let mut a = group_strokes(&strokes);
        let mut b = a.clone();
        order_groups(&mut a, GroupOrder::Legacy);
        order_groups(&mut b, GroupOrder::Legacy);
        prop_assert_eq!(a, b);
    }
}
