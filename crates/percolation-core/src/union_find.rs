//! Union-Find (disjoint set) structure backing grid connectivity.
//!
//! Path compression uses iterative path-halving: during [`UnionFind::find`] each
//! visited node is pointed directly at its grandparent, halving the path length
//! without needing a second pass or recursion. Union-by-size keeps every tree
//! at most `log2(n)` deep, which is what lets [`UnionFind::root`] answer
//! without mutating anything. When sizes are equal the **lower ordinal**
//! becomes the root, so the representative of a set depends only on which
//! unions happened, not on argument order.

/// A union-find (disjoint set) structure with path-halving and union-by-size.
///
/// Each element is identified by a `usize` ordinal in `[0, n)` where `n` is
/// the number of elements supplied at construction time.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Returns the representative of the set containing `x`, compressing the
    /// path on the way up.
    ///
    /// Out-of-range `x` is a caller logic error and panics on the `Vec` index.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Returns the representative of the set containing `x` without touching
    /// the parent links.
    pub fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The smaller tree is hung under the larger one; on a size tie the lower
    /// ordinal wins. Returns `false` when `a` and `b` were already in the same
    /// set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        let (root, child) = match self.size[ra].cmp(&self.size[rb]) {
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Equal => (ra.min(rb), ra.max(rb)),
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` share a representative.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&self, x: usize) -> usize {
        self.size[self.root(x)]
    }

    /// Number of disjoint sets currently tracked.
    pub fn count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
