//! Kruskal's minimum spanning tree, grounded on the historical `getMSTCommon`
//! template (`examples/original_source/MST.cpp`): sort a copy of the edges,
//! then walk them once through a union-find, accepting an edge whenever its
//! endpoints are in different components.
//!
//! Two entry points mirror the original's two instantiations: [`mst_len`]
//! only needs the total weight, [`mst_edges`] needs the edge list itself.
//! Both share [`sorted_by_length`] so their tie-breaking is identical.

use crate::error::{Result, SteinerError};
use crate::geometry::Unit;
use crate::graph::{EdgeRef, Graph};
use crate::union_find::UnionFind;

/// Returns a copy of `edges` sorted ascending by current length in `graph`.
///
/// The driver usually hands this function edges that are already sorted
/// (the edge-maintenance merge in [`crate::edge_maintenance`] keeps that
/// invariant), but per §4.4 this must not be assumed when called
/// standalone: a full stable sort is always performed.
fn sorted_by_length(graph: &Graph, edges: &[EdgeRef]) -> Vec<EdgeRef> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| graph.edge_len(*edge));
    sorted
}

/// Runs Kruskal's algorithm over `graph`'s current edges and returns the MST
/// edge list (`|V| - 1` edges when the graph is connected).
///
/// # Errors
/// Returns [`SteinerError::InvariantViolation`] if `graph` has no vertices;
/// the pipeline never constructs a graph in that state, so this indicates a
/// bug upstream rather than a malformed external input.
pub(crate) fn mst_edges(graph: &Graph) -> Result<Vec<EdgeRef>> {
    let n = graph.vertices_len();
    if n == 0 {
        return Err(SteinerError::InvariantViolation {
            detail: "mst_edges called on an empty graph",
        });
    }

    let candidates = sorted_by_length(graph, graph.edges());
    let mut uf = UnionFind::new(n);
    let max_edges = n - 1;
    let mut accepted = Vec::with_capacity(max_edges);

    for edge in candidates {
        if uf.union(edge.from, edge.to) {
            accepted.push(edge);
            if accepted.len() == max_edges {
                break;
            }
        }
    }

    Ok(accepted)
}

/// Returns the total weight of the MST of `graph`'s current edges.
///
/// # Errors
/// See [`mst_edges`].
pub(crate) fn mst_len(graph: &Graph) -> Result<Unit> {
    let edges = mst_edges(graph)?;
    Ok(edges.iter().map(|edge| graph.edge_len(*edge)).sum())
}
