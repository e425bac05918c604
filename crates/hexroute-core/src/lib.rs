//! **hexroute-core** — coordinate types for chunked hex maps.
//!
//! This crate provides the foundational types used across the *hexroute*
//! workspace: the [`Coord`] tile coordinate, the half-open [`Range`], and the
//! conversions between global tiles, chunks, chunk-local tiles and dense
//! array indices.

pub mod chunk;
pub mod geom;

pub use chunk::{
    DEFAULT_DIMENSION, Side, chunk_bounds, is_edge_tile, is_non_corner_edge_tile, local_bounds,
    to_chunk_coord, to_chunk_local, to_coord, to_global, to_index,
};
pub use geom::{Coord, Range};
