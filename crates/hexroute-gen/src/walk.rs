//! Self-avoiding random walks on the square lattice.
//!
//! Provides two generators:
//! - **Short walk**: greedy growth that never steps onto a visited tile and
//!   stops early when boxed in.
//! - **Dimerization**: builds a long walk from two half-length walks joined
//!   end to start, regenerating both halves until the join does not
//!   intersect itself.
//!
//! Every walk starts at `(0, 0)` and moves one axis-aligned step at a time.

use std::collections::HashSet;
use std::fmt;

use hexroute_core::Coord;
use rand::{Rng, RngExt};

/// Default bound on dimerization retries per recursion level.
pub const DEFAULT_WALK_ATTEMPTS: usize = 1000;

/// Greedy self-avoiding walk of up to `length` steps.
///
/// At each step the unvisited axis-aligned neighbors of the walk's end are
/// candidates and one is drawn uniformly. If none is left the walk stops,
/// so the result may hold fewer than `length + 1` tiles.
pub fn short_walk<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<Coord> {
    let mut walk = Vec::with_capacity(length + 1);
    let mut visited = HashSet::with_capacity(length + 1);
    walk.push(Coord::ZERO);
    visited.insert(Coord::ZERO);

    let mut feasible = Vec::with_capacity(4);
    let mut last = Coord::ZERO;
    for _ in 0..length {
        feasible.clear();
        feasible.extend(
            last.neighbors_4()
                .into_iter()
                .filter(|p| !visited.contains(p)),
        );
        if feasible.is_empty() {
            log::debug!("short walk boxed in after {} steps", walk.len() - 1);
            break;
        }
        last = feasible[rng.random_range(0..=feasible.len() - 1)];
        visited.insert(last);
        walk.push(last);
    }
    walk
}

/// Whether `walk` visits exactly `length + 1` distinct tiles.
pub fn is_self_avoiding(walk: &[Coord], length: usize) -> bool {
    walk.iter().collect::<HashSet<_>>().len() == length + 1
}

/// Self-avoiding walk of exactly `length` steps, using
/// [`DEFAULT_WALK_ATTEMPTS`].
pub fn dimerization_walk<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Vec<Coord>, WalkError> {
    dimerization_walk_with(length, DEFAULT_WALK_ATTEMPTS, rng)
}

/// Self-avoiding walk of exactly `length` steps by dimerization.
///
/// Walks of at most 3 steps come from [`short_walk`], which cannot box
/// itself in that early. Longer walks join a walk of `length / 2` steps and
/// one of `length - length / 2` steps; if the join revisits a tile both
/// halves are regenerated. Each recursion level gives up after
/// `max_attempts` joins.
pub fn dimerization_walk_with<R: Rng + ?Sized>(
    length: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Coord>, WalkError> {
    if length <= 3 {
        return Ok(short_walk(length, rng));
    }

    let half = length / 2;
    for _ in 0..max_attempts {
        let mut walk = dimerization_walk_with(half, max_attempts, rng)?;
        let tail = dimerization_walk_with(length - half, max_attempts, rng)?;

        let joint = walk.last().copied().unwrap_or_default();
        walk.extend(tail.into_iter().skip(1).map(|p| p + joint));

        if is_self_avoiding(&walk, length) {
            return Ok(walk);
        }
    }

    log::warn!("dimerization of {length} steps failed after {max_attempts} attempts");
    Err(WalkError::AttemptsExhausted {
        length,
        attempts: max_attempts,
    })
}

/// Error returned by [`dimerization_walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// No self-avoiding join was found within the attempt bound.
    AttemptsExhausted { length: usize, attempts: usize },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptsExhausted { length, attempts } => write!(
                f,
                "no self-avoiding walk of {length} steps after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for WalkError {}
