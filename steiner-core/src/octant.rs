//! Octant-based nearest-neighbor sparsification (§4.6).
//!
//! The naive candidate-insertion approach connects a new vertex to every
//! existing vertex (see `connectPoints`/`connectNewPoint` in
//! `examples/original_source/Steiner.cpp`), which makes each trial O(n).
//! Keeping only the nearest neighbor in each of the 8 octants around the new
//! vertex bounds the fan-in to 8 without changing which Steiner points get
//! discovered, since an optimal connection to a far-away vertex in a given
//! direction is always dominated by a closer one in the same octant.

use crate::geometry::{Point, Unit, manhattan};
use crate::graph::EdgeRef;

/// Computes the octant index (0..=7) of `v` relative to `other`, per the
/// bit-formula: `base` from the signs of `dx`/`dy`, then a `top` bit
/// distinguishing the two octants that share a `base` quadrant by whether
/// `|dx|` or `|dy|` dominates.
fn octant_of(v: Point, other: Point) -> usize {
    let dx = v.x - other.x;
    let dy = v.y - other.y;
    let bit1 = usize::from(dx < 0);
    let bit0 = usize::from(dy < 0);
    let base = (bit1 << 1) | bit0;
    let top = if base == 0 || base == 2 {
        usize::from(dx < dy)
    } else {
        usize::from(dx >= dy)
    };
    (top << 2) | base
}

/// Returns at most 8 edges connecting the new vertex at index `new_idx`
/// (with position `v`) to the nearest existing vertex in each octant.
///
/// `existing` is the full slice of vertex positions, including `v` itself at
/// `new_idx`; `v` is not considered as its own neighbor.
pub(crate) fn connect_new_vertex(existing: &[Point], new_idx: usize, v: Point) -> Vec<EdgeRef> {
    let mut best: [Option<(usize, Unit)>; 8] = [None; 8];

    for (i, &candidate) in existing.iter().enumerate() {
        if i == new_idx {
            continue;
        }
        let oct = octant_of(v, candidate);
        let dist = manhattan(v, candidate);
        match best[oct] {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best[oct] = Some((i, dist)),
        }
    }

    best.into_iter()
        .flatten()
        .map(|(i, _)| EdgeRef::new(i, new_idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_at_most_eight_edges() {
        let v = Point::new(0, 0);
        let mut existing: Vec<Point> = (1..=20).map(|i| Point::new(i, i)).collect();
        existing.push(v);
        let new_idx = existing.len() - 1;
        let edges = connect_new_vertex(&existing, new_idx, v);
        assert!(edges.len() <= 8);
    }

    #[test]
    fn single_neighbor_produces_one_edge() {
        let existing = vec![Point::new(5, 5), Point::new(0, 0)];
        let edges = connect_new_vertex(&existing, 1, Point::new(0, 0));
        assert_eq!(edges, vec![EdgeRef::new(0, 1)]);
    }

    #[test]
    fn every_edge_touches_the_new_vertex() {
        let existing = vec![
            Point::new(1, 0),
            Point::new(-1, 0),
            Point::new(0, 1),
            Point::new(0, -1),
            Point::new(0, 0),
        ];
        let new_idx = 4;
        let edges = connect_new_vertex(&existing, new_idx, Point::new(0, 0));
        assert!(edges.iter().all(|e| e.to == new_idx));
    }

    #[test]
    fn keeps_the_nearer_of_two_same_octant_candidates() {
        let existing = vec![Point::new(10, 10), Point::new(1, 1), Point::new(0, 0)];
        let edges = connect_new_vertex(&existing, 2, Point::new(0, 0));
        // (1,1) and (10,10) share an octant relative to the origin; only the
        // nearer one, index 1, should survive.
        assert!(edges.contains(&EdgeRef::new(1, 2)));
        assert!(!edges.contains(&EdgeRef::new(0, 2)));
    }

    #[test]
    fn self_is_never_connected() {
        let existing = vec![Point::new(0, 0)];
        let edges = connect_new_vertex(&existing, 0, Point::new(0, 0));
        assert!(edges.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn connect_new_vertex_stays_within_the_octant_bound(
            v in (-50i64..50i64, -50i64..50i64),
            others in proptest::collection::vec((-50i64..50i64, -50i64..50i64), 1..=40),
        ) {
            let v = Point::new(v.0, v.1);
            let mut existing: Vec<Point> = others.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            existing.push(v);
            let new_idx = existing.len() - 1;

            let edges = connect_new_vertex(&existing, new_idx, v);

            proptest::prop_assert!(!edges.is_empty());
            proptest::prop_assert!(edges.len() <= 8);
            for edge in &edges {
                proptest::prop_assert_eq!(edge.to, new_idx);
                proptest::prop_assert_ne!(edge.from, new_idx);
            }
            let mut froms: Vec<_> = edges.iter().map(|edge| edge.from).collect();
            let before = froms.len();
            froms.sort_unstable();
            froms.dedup();
            proptest::prop_assert_eq!(froms.len(), before);
        }
    }
}
