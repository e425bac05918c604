//! Conversions between global tiles, chunk coordinates, chunk-local tiles
//! and dense array indices.
//!
//! A chunk is a `dim × dim` square of tiles. Chunk `(cx, cy)` covers the
//! global tiles `[cx * dim, (cx + 1) * dim) × [cy * dim, (cy + 1) * dim)`,
//! for negative chunk coordinates too: chunk boundaries are contiguous
//! across zero.
//!
//! Every function takes the chunk dimension explicitly. It must be `>= 1`.

use std::fmt;

use crate::geom::{Coord, Range};

/// Tiles per chunk edge of a standard map.
pub const DEFAULT_DIMENSION: i32 = 8;

/// Dense index of chunk-local tile `(x, y)`: `dim * x + y`.
///
/// No bounds checking is done; the result is only a valid index into a
/// `dim * dim` array when `0 <= x, y < dim`.
#[inline]
pub fn to_index(x: i32, y: i32, dim: i32) -> i32 {
    let index = dim * x + y;
    log::trace!("converted ({x}, {y}) to index {index}");
    index
}

/// Inverse of [`to_index`] for non-negative indices.
#[inline]
pub fn to_coord(index: i32, dim: i32) -> Coord {
    debug_assert!(dim > 0, "chunk dimension must be positive");
    let c = Coord::new(index / dim, index % dim);
    log::trace!("converted index {index} to {c}");
    c
}

/// Chunk containing the global tile `global`.
///
/// Floor division per axis, so `(-1, -1)` lies in chunk `(-1, -1)` rather
/// than in chunk `(0, 0)` as truncating division would give.
pub fn to_chunk_coord(global: Coord, dim: i32) -> Coord {
    debug_assert!(dim > 0, "chunk dimension must be positive");
    let c = Coord::new(global.x.div_euclid(dim), global.y.div_euclid(dim));
    log::trace!("global {global} is in chunk {c}");
    c
}

/// Position of the global tile `global` inside its own chunk, in `[0, dim)`.
pub fn to_chunk_local(global: Coord, dim: i32) -> Coord {
    debug_assert!(dim > 0, "chunk dimension must be positive");
    let c = Coord::new(global.x.rem_euclid(dim), global.y.rem_euclid(dim));
    log::trace!("global {global} is local {c}");
    c
}

/// Global tile for `local` inside `chunk`. Inverse of the pair
/// ([`to_chunk_coord`], [`to_chunk_local`]).
#[inline]
pub fn to_global(chunk: Coord, local: Coord, dim: i32) -> Coord {
    chunk * dim + local
}

/// Whether chunk-local `(x, y)` lies on exactly one border line.
///
/// Corners touch two borders and are excluded: they border two chunks
/// diagonally, which the stitcher does not connect.
pub fn is_non_corner_edge_tile(x: i32, y: i32, dim: i32) -> bool {
    let on_x = x == 0 || x == dim - 1;
    let on_y = y == 0 || y == dim - 1;
    on_x != on_y
}

/// Whether chunk-local `tile` lies on any border line of its chunk.
#[inline]
pub fn is_edge_tile(tile: Coord, dim: i32) -> bool {
    tile.x == 0 || tile.y == 0 || tile.x == dim - 1 || tile.y == dim - 1
}

/// The chunk-local bounds `[0, dim)²`.
#[inline]
pub fn local_bounds(dim: i32) -> Range {
    Range::new(0, 0, dim, dim)
}

/// The global tiles covered by `chunk`.
#[inline]
pub fn chunk_bounds(chunk: Coord, dim: i32) -> Range {
    local_bounds(dim) + chunk * dim
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the four borders of a chunk.
///
/// X grows east, Y grows south.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// `x == 0`.
    West,
    /// `x == dim - 1`.
    East,
    /// `y == 0`.
    North,
    /// `y == dim - 1`.
    South,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::West, Side::East, Side::North, Side::South];

    /// Offset from a chunk to the chunk across this side.
    pub const fn offset(self) -> Coord {
        match self {
            Self::West => Coord::new(-1, 0),
            Self::East => Coord::new(1, 0),
            Self::North => Coord::new(0, -1),
            Self::South => Coord::new(0, 1),
        }
    }

    /// Side facing the chunk at `offset`, if it is orthogonally adjacent.
    pub fn from_offset(offset: Coord) -> Option<Side> {
        Self::ALL.into_iter().find(|s| s.offset() == offset)
    }

    pub const fn opposite(self) -> Side {
        match self {
            Self::West => Self::East,
            Self::East => Self::West,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }

    /// Non-corner chunk-local tiles on this side, in increasing order.
    ///
    /// Empty when `dim < 3`.
    pub fn edge_tiles(self, dim: i32) -> impl Iterator<Item = Coord> {
        let last = dim - 1;
        (1..last).map(move |i| match self {
            Self::West => Coord::new(0, i),
            Self::East => Coord::new(last, i),
            Self::North => Coord::new(i, 0),
            Self::South => Coord::new(i, last),
        })
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::West => "west",
            Self::East => "east",
            Self::North => "north",
            Self::South => "south",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_inside_chunk() {
        for dim in 1..=9 {
            for p in local_bounds(dim) {
                let i = to_index(p.x, p.y, dim);
                assert!((0..dim * dim).contains(&i));
                assert_eq!(to_coord(i, dim), p);
            }
        }
    }

    #[test]
    fn index_layout() {
        assert_eq!(to_index(0, 0, 8), 0);
        assert_eq!(to_index(0, 7, 8), 7);
        assert_eq!(to_index(1, 0, 8), 8);
        assert_eq!(to_coord(63, 8), Coord::new(7, 7));
    }

    #[test]
    fn negative_globals_floor_into_chunks() {
        assert_eq!(to_chunk_local(Coord::new(-1, -1), 8), Coord::new(7, 7));
        assert_eq!(to_chunk_coord(Coord::new(-1, -1), 8), Coord::new(-1, -1));
        assert_eq!(to_chunk_coord(Coord::new(-8, -9), 8), Coord::new(-1, -2));
        assert_eq!(to_chunk_local(Coord::new(-8, -9), 8), Coord::new(0, 7));
        assert_eq!(to_chunk_coord(Coord::new(7, 8), 8), Coord::new(0, 1));
    }

    #[test]
    fn chunk_and_local_reconstruct_global() {
        for dim in [1, 2, 3, 8, 13] {
            for x in -30..30 {
                for y in [-17, -1, 0, 5, 29] {
                    let g = Coord::new(x, y);
                    let chunk = to_chunk_coord(g, dim);
                    let local = to_chunk_local(g, dim);
                    assert!(local_bounds(dim).contains(local), "{g} -> {local}");
                    assert_eq!(to_global(chunk, local, dim), g);
                    assert!(chunk_bounds(chunk, dim).contains(g));
                }
            }
        }
    }

    #[test]
    fn non_corner_edges() {
        assert!(!is_non_corner_edge_tile(0, 0, 8));
        assert!(!is_non_corner_edge_tile(7, 7, 8));
        assert!(!is_non_corner_edge_tile(0, 7, 8));
        assert!(is_non_corner_edge_tile(3, 0, 8));
        assert!(is_non_corner_edge_tile(0, 3, 8));
        assert!(is_non_corner_edge_tile(7, 1, 8));
        assert!(!is_non_corner_edge_tile(3, 3, 8));

        let count = local_bounds(8)
            .iter()
            .filter(|p| is_non_corner_edge_tile(p.x, p.y, 8))
            .count();
        assert_eq!(count, 4 * 6);
    }

    #[test]
    fn edge_tiles_include_corners() {
        assert!(is_edge_tile(Coord::new(0, 0), 8));
        assert!(is_edge_tile(Coord::new(4, 7), 8));
        assert!(!is_edge_tile(Coord::new(1, 6), 8));
    }

    #[test]
    fn side_geometry() {
        for side in Side::ALL {
            assert_eq!(Side::from_offset(side.offset()), Some(side));
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.offset() + side.opposite().offset(), Coord::ZERO);
            let tiles: Vec<Coord> = side.edge_tiles(8).collect();
            assert_eq!(tiles.len(), 6);
            assert!(tiles.iter().all(|t| is_non_corner_edge_tile(t.x, t.y, 8)));
        }
        assert_eq!(Side::from_offset(Coord::new(1, 1)), None);
        assert_eq!(Side::West.edge_tiles(2).count(), 0);
    }
}
