//! The output record (C11): a finished, routable net, grounded on the field
//! layout of `Net` in `examples/original_source/Net.h` — bounds, pins, and
//! the decomposed wiring.

use crate::decompose::Segment;
use crate::geometry::{Bounds, Point};

/// The final output of the routing pipeline: a bounding box, the original
/// pins, and a two-layer wiring plan spanning them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    /// The declared bounding box of the net.
    pub bounds: Bounds,
    /// The original pin locations, in input order.
    pub pins: Vec<Point>,
    /// Horizontal segments on metal layer M2.
    pub hor_segs: Vec<Segment>,
    /// Vertical segments on metal layer M3.
    pub vert_segs: Vec<Segment>,
    /// Via transition points between M2 and M3.
    pub vias: Vec<Point>,
    /// Total Manhattan weight of the tree before decomposition.
    pub tree_weight: crate::geometry::Unit,
}
