//! Sequential disjoint-set forest used by Kruskal's algorithm.
//!
//! Union-by-size keeps trees shallow; `find` applies path compression so
//! repeated lookups on the same chain become effectively O(1). The routing
//! pipeline is single-threaded end to end, so unlike a concurrent union-find
//! this one needs no locks or atomics.

/// A disjoint-set forest over `0..n`.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the representative of the set containing `node`, compressing
    /// the path traversed.
    pub(crate) fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Unions the sets containing `a` and `b`. Returns `true` if they were
    /// previously distinct (and thus a union happened).
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (big, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}
