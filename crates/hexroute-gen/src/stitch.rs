//! Joining paths across chunk boundaries.

use hexroute_core::{Coord, to_chunk_coord};
use hexroute_paths::{HexLayout, Neighbors};
use rand::{Rng, RngExt};

/// A random hex neighbor of the global tile `node` that lies in
/// `target_chunk`, under [`HexLayout::MAP`].
///
/// Returns `None` when no neighbor of `node` falls in `target_chunk`, e.g.
/// when the chunks are not adjacent or `node` is not on the shared border.
pub fn find_neighbor_in_next_chunk<R: Rng + ?Sized>(
    node: Coord,
    target_chunk: Coord,
    rng: &mut R,
    dim: i32,
) -> Option<Coord> {
    find_neighbor_in_next_chunk_with(HexLayout::MAP, node, target_chunk, rng, dim)
}

/// Same as [`find_neighbor_in_next_chunk`] under an explicit `layout`.
pub fn find_neighbor_in_next_chunk_with<R: Rng + ?Sized>(
    layout: HexLayout,
    node: Coord,
    target_chunk: Coord,
    rng: &mut R,
    dim: i32,
) -> Option<Coord> {
    log::trace!("looking for neighbors of {node} in chunk {target_chunk}");

    let mut nb = Neighbors::new(layout);
    let candidates = nb.hex(node, |n| to_chunk_coord(n, dim) == target_chunk);
    for c in candidates {
        log::trace!("  candidate {c}");
    }
    if candidates.is_empty() {
        log::debug!("{node} has no neighbor in chunk {target_chunk}");
        return None;
    }

    let pick = candidates[rng.random_range(0..=candidates.len() - 1)];
    log::trace!("  selected {pick}");
    Some(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexroute_core::{Side, to_global};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_tile_in_target_chunk() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let n = find_neighbor_in_next_chunk(Coord::new(7, 3), Coord::new(1, 0), &mut rng, 8)
                .unwrap();
            assert_eq!(to_chunk_coord(n, 8), Coord::new(1, 0));
            assert!(HexLayout::MAP.is_adjacent(Coord::new(7, 3), n));
        }
    }

    #[test]
    fn crosses_into_negative_chunks() {
        let mut rng = StdRng::seed_from_u64(4);
        let n = find_neighbor_in_next_chunk(Coord::new(0, 4), Coord::new(-1, 0), &mut rng, 8)
            .unwrap();
        assert_eq!(n.x, -1);
        let n = find_neighbor_in_next_chunk(Coord::new(3, 0), Coord::new(0, -1), &mut rng, 8)
            .unwrap();
        assert_eq!(to_chunk_coord(n, 8), Coord::new(0, -1));
    }

    #[test]
    fn none_when_not_adjacent() {
        let mut rng = StdRng::seed_from_u64(4);
        // Interior tile.
        assert_eq!(
            find_neighbor_in_next_chunk(Coord::new(3, 3), Coord::new(1, 0), &mut rng, 8),
            None
        );
        // Chunk two steps away.
        assert_eq!(
            find_neighbor_in_next_chunk(Coord::new(7, 3), Coord::new(2, 0), &mut rng, 8),
            None
        );
    }

    #[test]
    fn every_non_corner_edge_tile_reaches_the_facing_chunk() {
        let mut rng = StdRng::seed_from_u64(12);
        // Odd sizes put odd chunk rows and columns on odd global parity.
        for (dim, chunk) in [(8, Coord::new(-2, 3)), (9, Coord::new(1, 1)), (5, Coord::new(-1, 3))] {
            for layout in [HexLayout::OddR, HexLayout::EvenR, HexLayout::OddQ, HexLayout::EvenQ] {
                for side in Side::ALL {
                    let target = chunk + side.offset();
                    for local in side.edge_tiles(dim) {
                        let node = to_global(chunk, local, dim);
                        let n = find_neighbor_in_next_chunk_with(layout, node, target, &mut rng, dim);
                        let n = n.unwrap_or_else(|| panic!("{layout:?}: {node} cannot reach {target}"));
                        assert_eq!(to_chunk_coord(n, dim), target);
                        assert!(layout.is_adjacent(node, n));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let a = find_neighbor_in_next_chunk(
            Coord::new(7, 5),
            Coord::new(1, 0),
            &mut StdRng::seed_from_u64(99),
            8,
        );
        let b = find_neighbor_in_next_chunk(
            Coord::new(7, 5),
            Coord::new(1, 0),
            &mut StdRng::seed_from_u64(99),
            8,
        );
        assert_eq!(a, b);
    }
}
