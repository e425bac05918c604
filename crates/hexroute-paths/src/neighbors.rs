//! Hex adjacency on a square array of offset coordinates.
//!
//! A hex grid stored in a square array shifts every other row (or column)
//! by half a tile, so the six neighbor offsets depend on the parity of the
//! tile's row (or column). Each [`HexLayout`] is a table of two offset sets
//! indexed by that parity.

use hexroute_core::Coord;

/// Offset convention of a hex grid stored in a square array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexLayout {
    /// Pointy-top rows; odd rows (by Y) shoved right.
    #[default]
    OddR,
    /// Pointy-top rows; even rows (by Y) shoved right.
    EvenR,
    /// Flat-top columns; odd columns (by X) shoved down.
    OddQ,
    /// Flat-top columns; even columns (by X) shoved down.
    EvenQ,
}

// Offsets for the parity class that is *not* shoved, then the shoved one.
const ROW_UNSHOVED: [Coord; 6] = [
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
];
const ROW_SHOVED: [Coord; 6] = [
    Coord::new(1, 0),
    Coord::new(1, -1),
    Coord::new(0, -1),
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 1),
];
const COL_UNSHOVED: [Coord; 6] = [
    Coord::new(1, 0),
    Coord::new(1, -1),
    Coord::new(0, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(0, 1),
];
const COL_SHOVED: [Coord; 6] = [
    Coord::new(1, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
];

impl HexLayout {
    /// The convention used by generated maps.
    pub const MAP: HexLayout = HexLayout::OddR;

    /// Offset table indexed by parity class (0 = even, 1 = odd).
    const fn offsets(self) -> [[Coord; 6]; 2] {
        match self {
            Self::OddR => [ROW_UNSHOVED, ROW_SHOVED],
            Self::EvenR => [ROW_SHOVED, ROW_UNSHOVED],
            Self::OddQ => [COL_UNSHOVED, COL_SHOVED],
            Self::EvenQ => [COL_SHOVED, COL_UNSHOVED],
        }
    }

    /// Parity class of `tile`: its row parity for row layouts, its column
    /// parity for column layouts. Correct for negative coordinates.
    #[inline]
    pub fn parity(self, tile: Coord) -> usize {
        let axis = match self {
            Self::OddR | Self::EvenR => tile.y,
            Self::OddQ | Self::EvenQ => tile.x,
        };
        axis.rem_euclid(2) as usize
    }

    /// The six neighbors of `tile`. No bounds filtering is done.
    pub fn neighbors(self, tile: Coord) -> [Coord; 6] {
        self.offsets()[self.parity(tile)].map(|d| tile + d)
    }

    /// The six neighbors of chunk-local `tile`, for a chunk whose local
    /// `(0, 0)` is the global tile `origin`.
    ///
    /// Parity is taken from the global row or column, so the result agrees
    /// with [`HexLayout::neighbors`] on global tiles for any chunk size.
    pub fn local_neighbors(self, origin: Coord, tile: Coord) -> [Coord; 6] {
        self.neighbors(origin + tile).map(|n| n - origin)
    }

    /// Whether `a` and `b` are hex neighbors.
    pub fn is_adjacent(self, a: Coord, b: Coord) -> bool {
        self.neighbors(a).contains(&b)
    }
}

/// The six neighbors of `tile` under [`HexLayout::MAP`].
#[inline]
pub fn neighbors(tile: Coord) -> [Coord; 6] {
    HexLayout::MAP.neighbors(tile)
}

/// Positions just outside the chunk next to a chunk-local border tile.
///
/// For each border line `tile` lies on, the axis-aligned step across it is
/// returned: one position for a tile on a single border, two for a corner,
/// none for an interior tile.
pub fn out_of_bounds_neighbors(tile: Coord, dim: i32) -> Vec<Coord> {
    let mut out = Vec::with_capacity(2);
    if tile.x == 0 {
        out.push(tile.shift(-1, 0));
    }
    if tile.x == dim - 1 {
        out.push(tile.shift(1, 0));
    }
    if tile.y == 0 {
        out.push(tile.shift(0, -1));
    }
    if tile.y == dim - 1 {
        out.push(tile.shift(0, 1));
    }
    out
}

/// Cached neighbor computation helper.
///
/// Enumerates the hex neighbors of a tile under one layout, filtered by a
/// predicate, reusing a single buffer.
pub struct Neighbors {
    layout: HexLayout,
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new(HexLayout::MAP)
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper for `layout`.
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            buf: Vec::with_capacity(6),
        }
    }

    /// Return the hex neighbors of `p`, keeping only those for which `keep`
    /// returns `true`.
    pub fn hex(&mut self, p: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in self.layout.neighbors(p) {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
