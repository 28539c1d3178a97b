//! Union-find (disjoint set union) over a fixed universe of node indices.
//!
//! Sets are merged by rank and lookups compress the paths they walk, keeping
//! trees shallow enough that `find` and `union` are effectively constant time.
//! Both passes of `find` are plain loops, so chains of any length resolve
//! without growing the call stack.

use indexmap::IndexMap;

use crate::error::{GraphError, Result};

/// Partition of the indices `[0, size)` into disjoint sets.
///
/// # Examples
/// ```
/// use graphlink_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(10);
/// sets.union(1, 2)?;
/// sets.union(3, 4)?;
/// sets.union(2, 3)?;
/// assert!(sets.connected(1, 4)?);
/// assert!(!sets.connected(1, 5)?);
/// # Ok::<(), graphlink_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `size` singleton sets, one per index.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// Number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the universe has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at it.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the lower rank is attached beneath the other. On a tie
    /// the root of `left` becomes the parent and its rank grows by one.
    /// Returns `true` when two distinct sets were merged and `false` when the
    /// nodes were already connected.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when either index is outside
    /// the universe. Nothing is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;

        let mut left = self.find_root(left);
        let mut right = self.find_root(right);
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when either index is outside
    /// the universe.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Groups every index by its representative.
    ///
    /// Members are listed in ascending order and groups appear in the order
    /// of their smallest member. Resolving each index compresses its path as
    /// a side effect; membership is unchanged.
    ///
    /// # Examples
    /// ```
    /// use graphlink_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new(4);
    /// sets.union(3, 1)?;
    /// let groups: Vec<Vec<usize>> = sets.groups().into_values().collect();
    /// assert_eq!(groups, vec![vec![0], vec![1, 3], vec![2]]);
    /// # Ok::<(), graphlink_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn groups(&mut self) -> IndexMap<usize, Vec<usize>> {
        let mut groups: IndexMap<usize, Vec<usize>> = IndexMap::with_capacity(self.sets);
        for node in 0..self.parent.len() {
            let root = self.find_root(node);
            groups.entry(root).or_default().push(node);
        }
        groups
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: node,
                size: self.parent.len(),
            })
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}
