//! Geometry primitives: [`Coord`] and [`Range`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer tile coordinate. Used for global tiles, chunk-local tiles
/// and chunk identifiers alike.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four axis-aligned neighbours (east, south, west, north).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// Stable 32-bit hash of the coordinate.
    ///
    /// Each axis is multiplied by a distinct large odd constant and the
    /// products are XORed. The value does not depend on the hasher seed, so
    /// it can be stored or compared across runs.
    #[inline]
    pub const fn stable_hash(self) -> u32 {
        (self.x.wrapping_mul(402_653_189) ^ self.y.wrapping_mul(805_306_457)) as u32
    }
}

// --- trait impls for Coord ---

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.stable_hash());
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Lexicographic: X first, then Y.
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Coord::new(x0.min(x1), y0.min(y1)),
            max: Coord::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Total number of tiles in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let size = self.max - self.min;
        size.x as usize * size.y as usize
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl Add<Coord> for Range {
    type Output = Range;

    #[inline]
    fn add(self, p: Coord) -> Range {
        Range {
            min: self.min + p,
            max: self.max + p,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coord;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coord,
}

impl Iterator for RangeIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a * 8, Coord::new(8, 16));
        let mut c = a;
        c += b;
        assert_eq!(c, Coord::new(4, 6));
    }

    #[test]
    fn coord_orders_x_then_y() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
        assert!(Coord::new(-1, 5) < Coord::new(0, -5));

        let sorted: Vec<Coord> = [Coord::new(2, 0), Coord::new(0, 3), Coord::new(0, 1)]
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        assert_eq!(sorted, vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(2, 0)]);
    }

    #[test]
    fn stable_hash_matches_formula() {
        let c = Coord::new(3, -7);
        let expected = (3i32.wrapping_mul(402_653_189) ^ (-7i32).wrapping_mul(805_306_457)) as u32;
        assert_eq!(c.stable_hash(), expected);
        assert_eq!(Coord::ZERO.stable_hash(), 0);
    }

    #[test]
    fn coords_deduplicate_in_hash_set() {
        let set: HashSet<Coord> = [(0, 0), (1, 2), (0, 0), (-4, 2), (1, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Coord::new(-4, 2)));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(5, 5, 1, 2);
        assert_eq!(r.min, Coord::new(1, 2));
        assert_eq!(r.len(), 12);
        assert!(r.contains(Coord::new(1, 2)));
        assert!(!r.contains(Coord::new(5, 2)));
        assert!(Range::new(0, 0, 0, 4).is_empty());
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(0, 0, 2, 2);
        let all: Vec<Coord> = r.iter().collect();
        assert_eq!(
            all,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn range_translate() {
        let r = Range::new(0, 0, 8, 8) + Coord::new(-8, 16);
        assert_eq!(r, Range::new(-8, 16, 0, 24));
    }
}
