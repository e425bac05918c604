use std::collections::BinaryHeap;

use hexroute_core::{Coord, is_edge_tile, local_bounds};
use rand::{Rng, RngExt};

use crate::neighbors::HexLayout;
use crate::search::{ChunkSearch, NO_PARENT, NodeRef};
use crate::traits::{Pather, WeightedPather};

/// Upper bound (inclusive) of the random weight of an interior step.
pub const MAX_STEP_WEIGHT: i32 = 100;

/// Weight of stepping onto a chunk border tile.
///
/// Large enough that any interior detour is cheaper, yet finite and far from
/// `i32::MAX`, so border tiles stay usable when nothing else connects.
pub const BORDER_WEIGHT: i32 = 1_000_000;

// ---------------------------------------------------------------------------
// RandomPather
// ---------------------------------------------------------------------------

/// Chunk-local pather with random, border-repelling edge weights.
///
/// Tiles are chunk-local, but hex parity follows the global tile
/// `origin + p`, so a path stays connected once moved to global
/// coordinates, whatever the chunk dimension.
///
/// Stepping onto `end` is free. Stepping onto any other border tile costs
/// the border weight. Every other step draws a fresh weight in
/// `0..=max_step_weight` from the random stream each time it is relaxed.
pub struct RandomPather<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    dim: i32,
    origin: Coord,
    end: Coord,
    layout: HexLayout,
    max_step_weight: i32,
    border_weight: i32,
}

impl<'r, R: Rng + ?Sized> RandomPather<'r, R> {
    /// Create a pather towards `end` in chunk `(0, 0)` of `dim` tiles per
    /// edge, using [`HexLayout::MAP`] and the default weights.
    pub fn new(rng: &'r mut R, dim: i32, end: Coord) -> Self {
        Self {
            rng,
            dim,
            origin: Coord::ZERO,
            end,
            layout: HexLayout::MAP,
            max_step_weight: MAX_STEP_WEIGHT,
            border_weight: BORDER_WEIGHT,
        }
    }

    pub fn with_layout(mut self, layout: HexLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Place the chunk: `origin` is the global tile at local `(0, 0)`.
    pub fn with_origin(mut self, origin: Coord) -> Self {
        self.origin = origin;
        self
    }

    /// Override the interior weight bound and the border weight. Both must
    /// be non-negative.
    pub fn with_weights(mut self, max_step_weight: i32, border_weight: i32) -> Self {
        debug_assert!(max_step_weight >= 0 && border_weight >= 0);
        self.max_step_weight = max_step_weight;
        self.border_weight = border_weight;
        self
    }
}

impl<R: Rng + ?Sized> Pather for RandomPather<'_, R> {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        let bounds = local_bounds(self.dim);
        buf.extend(
            self.layout
                .local_neighbors(self.origin, p)
                .into_iter()
                .filter(|&n| bounds.contains(n)),
        );
    }
}

impl<R: Rng + ?Sized> WeightedPather for RandomPather<'_, R> {
    fn cost(&mut self, _from: Coord, to: Coord) -> i32 {
        if to == self.end {
            0
        } else if is_edge_tile(to, self.dim) {
            self.border_weight
        } else {
            self.rng.random_range(0..=self.max_step_weight)
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

impl ChunkSearch {
    /// Compute a cheapest path from `start` to `end` inside the chunk.
    ///
    /// The result runs **backwards**: its first element is `end` and its last
    /// is `start`. A tile's cost is only replaced by a strictly lower one, at
    /// which point its predecessor is updated and it is re-queued. The search
    /// stops when the frontier is empty or `end` is popped.
    ///
    /// Degraded results instead of errors:
    /// - `start == end` gives `[start]`;
    /// - an out-of-bounds `start` or `end` gives an empty path;
    /// - if reconstruction exceeds the backtrack limit or meets a tile with
    ///   no predecessor, the partial path gathered so far is returned and a
    ///   warning is logged.
    pub fn shortest_path<P: WeightedPather>(
        &mut self,
        pather: &mut P,
        start: Coord,
        end: Coord,
    ) -> Vec<Coord> {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(end)) else {
            log::warn!("path {start} -> {end} leaves the {0}x{0} chunk", self.dim);
            return Vec::new();
        };

        if start_idx == goal_idx {
            return vec![start];
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.cost = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            cost: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            // Skip stale entries.
            if cn.generation != cur_gen || !cn.open || cn.cost != current.cost {
                continue;
            }
            if ci == goal_idx {
                break;
            }
            let current_cost = cn.cost;
            self.nodes[ci].open = false;
            expanded += 1;

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let step = pather.cost(cp, np);
                debug_assert!(step >= 0, "negative edge weight {step}");
                let tentative = current_cost.saturating_add(step);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative >= n.cost {
                    continue;
                }

                n.generation = cur_gen;
                n.cost = tentative;
                n.parent = ci;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        self.nbuf = nbuf;

        let path = self.backtrack(start_idx, goal_idx, cur_gen);
        log::debug!(
            "path {start} -> {end}: {} tiles, {expanded} tiles expanded",
            path.len()
        );
        path
    }

    /// Follow predecessors from `goal_idx` back to `start_idx`.
    fn backtrack(&self, start_idx: usize, goal_idx: usize, cur_gen: u32) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        loop {
            path.push(self.point(ci));
            if ci == start_idx {
                break;
            }
            if path.len() > self.backtrack_limit {
                log::warn!(
                    "backtracking from {} exceeded {} steps, returning partial path",
                    self.point(goal_idx),
                    self.backtrack_limit
                );
                break;
            }
            let node = &self.nodes[ci];
            if node.generation != cur_gen || node.parent == NO_PARENT {
                log::warn!(
                    "{} has no predecessor, returning partial path",
                    self.point(ci)
                );
                break;
            }
            ci = node.parent;
        }
        path
    }
}

/// Random winding path between two chunk-local tiles of a `dim × dim` chunk,
/// using [`HexLayout::MAP`] and the default weights.
///
/// The result runs from `end` back to `start`. See
/// [`ChunkSearch::shortest_path`] for the degraded cases.
pub fn random_path<R: Rng + ?Sized>(start: Coord, end: Coord, rng: &mut R, dim: i32) -> Vec<Coord> {
    let mut pather = RandomPather::new(rng, dim, end);
    ChunkSearch::new(dim).shortest_path(&mut pather, start, end)
}
