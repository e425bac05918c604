use hexroute_core::{Coord, local_bounds, to_coord, to_index};

/// Default bound on predecessor steps when reconstructing a path.
pub const BACKTRACK_LIMIT: usize = 64;

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) cost: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// ChunkSearch
// ---------------------------------------------------------------------------

/// Search state for paths inside one `dim × dim` chunk.
///
/// Cost-so-far and predecessor of every tile live in a dense array indexed
/// by [`to_index`]. A generation counter lazily invalidates the array, so
/// only tiles reached by the current search hold meaningful entries and a
/// `ChunkSearch` can be reused without clearing.
pub struct ChunkSearch {
    pub(crate) dim: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) backtrack_limit: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl ChunkSearch {
    /// Create search state for chunks of `dim` tiles per edge.
    pub fn new(dim: i32) -> Self {
        let len = local_bounds(dim).len();
        Self {
            dim,
            nodes: vec![Node::default(); len],
            generation: 0,
            backtrack_limit: BACKTRACK_LIMIT,
            nbuf: Vec::with_capacity(6),
        }
    }

    /// Set the bound on predecessor steps during path reconstruction.
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Tiles per chunk edge.
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// Dense index of chunk-local `p`, or `None` if it lies outside the chunk.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if local_bounds(self.dim).contains(p) {
            Some(to_index(p.x, p.y, self.dim) as usize)
        } else {
            None
        }
    }

    /// Chunk-local coordinate of dense index `i`.
    #[inline]
    pub(crate) fn point(&self, i: usize) -> Coord {
        to_coord(i as i32, self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_and_point_agree() {
        let cs = ChunkSearch::new(8);
        assert_eq!(cs.nodes.len(), 64);
        for p in local_bounds(8) {
            let i = cs.idx(p).unwrap();
            assert_eq!(cs.point(i), p);
        }
        assert_eq!(cs.idx(Coord::new(-1, 0)), None);
        assert_eq!(cs.idx(Coord::new(0, 8)), None);
    }

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, cost: 30 });
        heap.push(NodeRef { idx: 1, cost: 5 });
        heap.push(NodeRef { idx: 2, cost: 12 });
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop()).map(|n| n.cost).collect();
        assert_eq!(order, vec![5, 12, 30]);
    }
}
