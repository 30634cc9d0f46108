//! Degree-≤2 pruning pass (§4.9): a newly committed Steiner vertex that ends
//! up as a leaf (degree 1) or a collinear pass-through (degree 2) adds
//! nothing to the tree's shape and is removed, splicing its two neighbors
//! together in the degree-2 case. Pins (indices `< net_pts`) are never
//! touched.

use crate::graph::{EdgeRef, Graph};

/// Runs the degree-≤2 pruning pass over `graph`, treating vertex indices
/// `[0, net_pts)` as pins that must never be removed.
///
/// Candidate vertices are retired one at a time: a vertex's incident edges
/// are re-read fresh from the graph immediately before it is spliced out and
/// re-indexed, rather than from a snapshot taken before the pass started. A
/// chain of adjacent degree-≤2 Steiner points therefore never leaves a
/// dangling edge behind — splicing the first vertex in the chain produces a
/// direct edge to its (still-present) neighbor, which the next vertex's own
/// incident-edge lookup then sees correctly.
///
/// After this call, every surviving vertex at index `>= net_pts` has degree
/// `>= 3`, and the edge list contains no self-loops or duplicates (it is left
/// canonicalized and sorted by `(from, to)`; callers that need length order
/// must re-sort afterwards per §4.8 step 3d).
pub(crate) fn prune(graph: &mut Graph, net_pts: usize) {
    loop {
        let n = graph.vertices_len();
        if net_pts >= n {
            break;
        }

        let degrees = degrees_of_candidates(graph, net_pts, n);
        let Some(local) = degrees.iter().position(|&degree| degree <= 2) else {
            break;
        };

        splice_out(graph, net_pts + local);
    }

    let mut edges = graph.take_edges();
    for edge in &mut edges {
        *edge = edge.canonical();
    }
    edges.sort_by_key(|edge| (edge.from, edge.to));
    edges.dedup();
    graph.put_edges(edges);
}

/// Degree of each candidate vertex (`[net_pts, n)`), indexed from 0.
fn degrees_of_candidates(graph: &Graph, net_pts: usize, n: usize) -> Vec<usize> {
    let mut degrees = vec![0usize; n - net_pts];
    for edge in graph.edges() {
        if edge.from >= net_pts {
            degrees[edge.from - net_pts] += 1;
        }
        if edge.to >= net_pts {
            degrees[edge.to - net_pts] += 1;
        }
    }
    degrees
}

/// Removes vertex `v` (degree 0, 1, or 2), reconnecting its neighbors
/// directly when it had two distinct ones, then re-indexes every edge to
/// account for the vertex's removal.
fn splice_out(graph: &mut Graph, v: usize) {
    let neighbors: Vec<usize> = graph
        .edges()
        .iter()
        .filter_map(|edge| match (edge.from == v, edge.to == v) {
            (true, _) => Some(edge.to),
            (_, true) => Some(edge.from),
            _ => None,
        })
        .collect();

    graph.erase_edges_if(|edge| edge.from == v || edge.to == v);
    if let [a, b] = neighbors[..] {
        if a != b {
            graph.push_edge(EdgeRef::new(a, b));
        }
    }

    let removed = graph.erase_vertices_if_with_index(|_, idx| idx == v);
    let removed_idx = removed[0];
    let mut edges = graph.take_edges();
    for edge in &mut edges {
        if edge.from > removed_idx {
            edge.from -= 1;
        }
        if edge.to > removed_idx {
            edge.to -= 1;
        }
    }
    graph.put_edges(edges);
}
