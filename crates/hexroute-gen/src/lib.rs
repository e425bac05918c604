//! Enemy route generation for chunked hex maps: self-avoiding walks,
//! cross-chunk stitching and route planning.

pub mod config;
pub mod route;
pub mod stitch;
pub mod walk;

pub use config::{ConfigError, GenConfig};
pub use route::{Route, RouteError, Segment, plan_route};
pub use stitch::{find_neighbor_in_next_chunk, find_neighbor_in_next_chunk_with};
pub use walk::{
    DEFAULT_WALK_ATTEMPTS, WalkError, dimerization_walk, dimerization_walk_with, is_self_avoiding,
    short_walk,
};
