//! Chaining per-chunk paths into one continuous enemy route.
//!
//! The route crosses a self-avoiding sequence of orthogonally adjacent
//! chunks. Inside every chunk a random winding path runs from an entry tile
//! to a non-corner exit tile on the side facing the next chunk, and the
//! next chunk's entry tile is a hex neighbor of that exit.

use std::fmt;

use hexroute_core::{Coord, Side, chunk_bounds, to_chunk_local, to_global};
use rand::{Rng, RngExt};

use crate::config::{ConfigError, GenConfig};
use crate::stitch::find_neighbor_in_next_chunk_with;
use crate::walk::{WalkError, dimerization_walk_with};

/// The part of a route inside one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Chunk coordinate.
    pub chunk: Coord,
    /// Global tiles from the chunk's entry to its exit.
    pub tiles: Vec<Coord>,
}

/// A continuous route across several chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    segments: Vec<Segment>,
}

impl Route {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Chunks crossed, in order.
    pub fn chunks(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments.iter().map(|s| s.chunk)
    }

    /// Every global tile of the route, from the first entry to the last exit.
    pub fn tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments.iter().flat_map(|s| s.tiles.iter().copied())
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.tiles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plan a route across `chunk_steps + 1` chunks, starting in chunk `(0, 0)`.
///
/// The chunk sequence is a dimerization walk, so it never revisits a chunk.
/// The first entry lies on the side opposite the first exit and the last
/// exit on the side opposite the last entry.
pub fn plan_route<R: Rng + ?Sized>(
    chunk_steps: usize,
    config: &GenConfig,
    rng: &mut R,
) -> Result<Route, RouteError> {
    config.validate()?;
    let dim = config.dimension;

    let chunks = dimerization_walk_with(chunk_steps, config.walk_attempts, rng)?;
    log::debug!("route crosses {} chunks", chunks.len());

    let mut entry_side = match chunks.get(1) {
        Some(&next) => facing_side(chunks[0], next)?.opposite(),
        None => Side::ALL[rng.random_range(0..=Side::ALL.len() - 1)],
    };
    let mut entry = random_edge_tile(entry_side, dim, rng)?;

    let mut search = config.search();
    let mut segments = Vec::with_capacity(chunks.len());

    for (i, &chunk) in chunks.iter().enumerate() {
        let next = chunks.get(i + 1).copied();
        let exit_side = match next {
            Some(next) => facing_side(chunk, next)?,
            None => entry_side.opposite(),
        };
        let exit = random_edge_tile(exit_side, dim, rng)?;

        // The search returns exit first; flip it to run entry -> exit.
        let mut tiles = {
            let mut pather = config.pather(rng, chunk, exit);
            search.shortest_path(&mut pather, entry, exit)
        };
        tiles.reverse();
        if tiles.first() != Some(&entry) || tiles.last() != Some(&exit) {
            return Err(RouteError::IncompletePath { chunk });
        }
        log::debug!(
            "chunk {chunk} {}: {} tiles from {entry_side} {entry} to {exit_side} {exit}",
            chunk_bounds(chunk, dim),
            tiles.len()
        );

        segments.push(Segment {
            chunk,
            tiles: tiles.into_iter().map(|t| to_global(chunk, t, dim)).collect(),
        });

        if let Some(next) = next {
            let exit_global = to_global(chunk, exit, dim);
            let next_entry =
                find_neighbor_in_next_chunk_with(config.layout, exit_global, next, rng, dim)
                    .ok_or(RouteError::NoStitch {
                        from: chunk,
                        to: next,
                    })?;
            entry = to_chunk_local(next_entry, dim);
            entry_side = exit_side.opposite();
        }
    }

    Ok(Route { segments })
}

fn facing_side(from: Coord, to: Coord) -> Result<Side, RouteError> {
    Side::from_offset(to - from).ok_or(RouteError::NotAdjacent { from, to })
}

fn random_edge_tile<R: Rng + ?Sized>(side: Side, dim: i32, rng: &mut R) -> Result<Coord, RouteError> {
    let n = side.edge_tiles(dim).count();
    if n == 0 {
        return Err(ConfigError::DimensionTooSmall(dim).into());
    }
    side.edge_tiles(dim)
        .nth(rng.random_range(0..=n - 1))
        .ok_or(RouteError::Config(ConfigError::DimensionTooSmall(dim)))
}

/// Error returned by [`plan_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Config(ConfigError),
    Walk(WalkError),
    /// Two consecutive chunks of the chunk walk do not share a side.
    NotAdjacent { from: Coord, to: Coord },
    /// The path inside a chunk could not be reconstructed end to end.
    IncompletePath { chunk: Coord },
    /// No tile of the next chunk neighbors the exit tile.
    NoStitch { from: Coord, to: Coord },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Walk(e) => write!(f, "chunk walk failed: {e}"),
            Self::NotAdjacent { from, to } => write!(f, "chunks {from} and {to} are not adjacent"),
            Self::IncompletePath { chunk } => write!(f, "incomplete path in chunk {chunk}"),
            Self::NoStitch { from, to } => {
                write!(f, "cannot stitch chunk {from} to chunk {to}")
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Walk(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RouteError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<WalkError> for RouteError {
    fn from(e: WalkError) -> Self {
        Self::Walk(e)
    }
}
