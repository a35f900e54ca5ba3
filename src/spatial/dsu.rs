//! Disjoint-set union with path compression and union by rank

/// Tracks which grid cells already belong to the same connected passage network
///
/// Elements are addressed by linear cell index (`row * cols + col`). Both
/// operations run in near-constant amortized time, which keeps Kruskal
/// generation linear-ish at the largest accepted grid sizes.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Create `size` singleton sets
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `element`
    ///
    /// Every node on the walk is re-pointed at the root. Indices outside the
    /// structure are their own representative.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = element;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = std::mem::replace(slot, root);
        }

        root
    }

    /// Merge the sets containing `a` and `b`
    ///
    /// Returns `false` when both were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(root_b).copied().unwrap_or(0);

        let (child, parent) = if rank_a < rank_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if rank_a == rank_b {
            if let Some(rank) = self.rank.get_mut(parent) {
                *rank = rank.saturating_add(1);
            }
        }

        self.sets = self.sets.saturating_sub(1);
        true
    }

    /// Whether `a` and `b` are in the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
