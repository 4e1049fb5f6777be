//! Disjoint-set forest with path halving and union by rank, used by Kruskal.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Union-find over elements `[0, n)`.
///
/// `find` shortens paths iteratively (each visited node is re-pointed at its
/// grandparent), so deep chains never recurse.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets, each of rank 0.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `x >= len()`.
    pub fn find(&mut self, mut x: usize) -> Result<usize> {
        Error::check_index(x, self.parent.len())?;
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        Ok(x)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The lower-rank root goes under the higher-rank one; on a tie `y`'s root
    /// goes under `x`'s root and that root's rank grows by one. Returns
    /// `false` when both were already in the same set.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either element is invalid.
    pub fn unite(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Returns true if `x` and `y` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either element is invalid.
    pub fn is_connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, x: usize) -> u32 {
        self.rank[x]
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }
}
