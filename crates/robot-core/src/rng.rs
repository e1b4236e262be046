//! Random Helpers
//!
//! Uniform picks and the seed layout shared by world generation and the
//! random robot.

use rand::Rng;

/// Uniform pick from a non-empty slice.
pub(crate) fn random_pick<'a, R: Rng>(items: &'a [String], rng: &mut R) -> &'a str {
    &items[rng.gen_range(0..items.len())]
}

/// Seed for the random robot on run `run` of a batch seeded with `seed`.
///
/// Worlds draw from `seed` itself, so robot streams start one past it and
/// never share a stream with world generation.
pub fn random_robot_seed(seed: u64, run: u64) -> u64 {
    seed.wrapping_add(1).wrapping_add(run)
}
