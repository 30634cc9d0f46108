//! Hanan grid construction, grounded on `getHanansGrid` in
//! `examples/original_source/Steiner.cpp`: the only candidate Steiner points
//! an optimal rectilinear Steiner tree ever needs are the cross product of
//! the pins' distinct X and Y coordinates, less the pins themselves.

use crate::geometry::Point;

/// Returns the Hanan grid points for `pins`: every `(x, y)` pair drawn from
/// the pins' distinct X and Y coordinates, excluding points that are
/// themselves pins.
///
/// The result is sorted lexicographically (matching [`Point`]'s `Ord`), so
/// callers get a deterministic candidate order without needing to sort
/// again.
pub(crate) fn hanan_grid(pins: &[Point]) -> Vec<Point> {
    let mut xs: Vec<_> = pins.iter().map(|p| p.x).collect();
    let mut ys: Vec<_> = pins.iter().map(|p| p.y).collect();
    xs.sort_unstable();
    xs.dedup();
    ys.sort_unstable();
    ys.dedup();

    let mut pin_set: Vec<Point> = pins.to_vec();
    pin_set.sort_unstable();
    pin_set.dedup();

    let mut grid = Vec::with_capacity(xs.len() * ys.len());
    for &x in &xs {
        for &y in &ys {
            let candidate = Point::new(x, y);
            if pin_set.binary_search(&candidate).is_err() {
                grid.push(candidate);
            }
        }
    }
    grid.sort_unstable();
    grid
}
