//! Tree → two-layer wiring decomposition (§4.10), grounded on
//! `Net::addConnection`/`Net::finalizeNet` in
//! `examples/original_source/Net.cpp`: each tree edge becomes an L-shaped
//! route (horizontal on M2, then vertical on M3) with via transitions at the
//! corner and destination, and a finalization pass removes redundant stubs
//! and duplicate records.

use crate::geometry::Point;
use crate::graph::Graph;

/// A half-open horizontal or vertical wire segment between two points on one
/// metal layer.
pub type Segment = (Point, Point);

/// The routable output of decomposing a final Steiner tree: horizontal
/// segments on M2, vertical segments on M3, and via points where the layers
/// meet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Decomposition {
    pub(crate) hor_segs: Vec<Segment>,
    pub(crate) vert_segs: Vec<Segment>,
    pub(crate) vias: Vec<Point>,
}

/// Decomposes `graph`'s edges into horizontal/vertical segments and vias,
/// then finalizes the record per §4.10.
pub(crate) fn decompose(graph: &Graph) -> Decomposition {
    let mut hor_segs = Vec::new();
    let mut vert_segs = Vec::new();
    let mut vias = Vec::new();

    for edge in graph.edges() {
        let a = graph.vertex(edge.from);
        let b = graph.vertex(edge.to);

        if a.x != b.x {
            let lo = a.x.min(b.x);
            let hi = a.x.max(b.x);
            hor_segs.push((Point::new(lo, a.y), Point::new(hi, a.y)));
        } else {
            hor_segs.push((a, a));
            hor_segs.push((b, b));
        }

        if a.y != b.y {
            vert_segs.push((Point::new(b.x, a.y), Point::new(b.x, b.y)));
            vias.push(Point::new(b.x, a.y));
            vias.push(Point::new(b.x, b.y));
        }
    }

    finalize(Decomposition {
        hor_segs,
        vert_segs,
        vias,
    })
}

fn finalize(mut decomp: Decomposition) -> Decomposition {
    decomp.vias.sort_unstable();
    decomp.vias.dedup();

    decomp.hor_segs.sort_unstable();
    decomp.hor_segs.dedup();

    let (stubs, mut kept): (Vec<Segment>, Vec<Segment>) =
        decomp.hor_segs.into_iter().partition(|(lo, hi)| lo == hi);

    let stubs: Vec<Segment> = stubs
        .into_iter()
        .filter(|(point, _)| {
            !kept
                .iter()
                .any(|(lo, hi)| lo.y == point.y && lo.x <= point.x && point.x <= hi.x)
        })
        .collect();

    kept.extend(stubs);
    kept.sort_unstable();
    kept.dedup();
    decomp.hor_segs = kept;

    decomp
}
