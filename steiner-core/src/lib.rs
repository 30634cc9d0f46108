//! Rectilinear Steiner tree construction and two-layer net decomposition for
//! VLSI-style wiring.
//!
//! The public surface is deliberately small: build an [`Input`], hand it to
//! [`route`], get back a finished [`Net`]. Everything else — the Hanan grid,
//! the iterated-Steiner driver, the pruner, the MST/union-find machinery —
//! is an internal implementation detail, `pub(crate)`-scoped the way the
//! teacher library keeps its algorithmic internals private behind a small
//! `lib.rs` re-export surface.

mod decompose;
mod edge_maintenance;
mod error;
mod geometry;
mod graph;
mod hanan;
mod input;
mod mst;
mod net;
mod octant;
mod pruner;
mod steiner;
mod union_find;

pub use error::{Result, SteinerError, SteinerErrorCode};
pub use geometry::{Bounds, Point, Unit};
pub use input::Input;
pub use net::Net;

use tracing::instrument;

/// Computes a rectilinear Steiner tree approximation spanning `input`'s pins
/// and returns the finished, decomposed [`Net`].
///
/// Pipeline: Hanan grid construction → iterated 1-Steiner construction →
/// net decomposition, per the control flow described for the core.
///
/// # Errors
/// Propagates any [`SteinerError`] raised while constructing the tree. In
/// practice this should not happen for an `input` already produced by
/// [`Input::new`], since that constructor enforces the same domain
/// invariants the core relies on.
#[instrument(skip(input))]
pub fn route(input: &Input) -> Result<Net> {
    let grid = hanan::hanan_grid(&input.pins);
    let (graph, tree_weight) = steiner::iterated_steiner(&input.pins, grid)?;
    let decomp = decompose::decompose(&graph);

    Ok(Net {
        bounds: input.bounds,
        pins: input.pins.clone(),
        hor_segs: decomp.hor_segs,
        vert_segs: decomp.vert_segs,
        vias: decomp.vias,
        tree_weight,
    })
}
