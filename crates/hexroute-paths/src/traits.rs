use hexroute_core::Coord;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (non-negative) edges.
///
/// `cost` takes `&mut self` so that implementations may draw edge weights
/// from a random stream at relaxation time.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&mut self, from: Coord, to: Coord) -> i32;
}
