//! Hex adjacency and randomized pathfinding inside map chunks.
//!
//! - **Hex topology**: six-neighbor enumeration under an offset convention
//!   ([`HexLayout`], [`neighbors`]) and the positions just across a chunk
//!   border ([`out_of_bounds_neighbors`]).
//! - **Randomized weighted paths**: a cost-ordered shortest-path search
//!   ([`ChunkSearch::shortest_path`]) driven by a [`RandomPather`] whose
//!   random edge weights make every search produce a different winding
//!   path, while border tiles repel it ([`random_path`]).
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | [`ChunkSearch::shortest_path`] |

mod dijkstra;
mod neighbors;
mod search;
mod traits;

pub use dijkstra::{BORDER_WEIGHT, MAX_STEP_WEIGHT, RandomPather, random_path};
pub use neighbors::{HexLayout, Neighbors, neighbors, out_of_bounds_neighbors};
pub use search::{BACKTRACK_LIMIT, ChunkSearch};
pub use traits::{Pather, WeightedPather};
