//! Tournament selection.
//!
//! Parents are chosen by k-way tournaments over the current population's
//! makespans: lower makespan wins (minimization convention).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Tournament selection over a makespan-scored population.
///
/// Samples `k` **distinct** individuals and returns the index of the one
/// with the lowest makespan. Ties keep the earliest-sampled contender, so
/// the outcome is a pure function of the RNG stream.
///
/// # Panics
/// Panics when `k` is zero or exceeds the population size;
/// [`GaConfig::validate`](super::GaConfig::validate) rules both out before
/// a run starts.
pub fn tournament<R: Rng>(makespans: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(
        k >= 1 && k <= makespans.len(),
        "tournament size must be within 1..=population size"
    );

    let mut best: Option<usize> = None;
    for idx in index::sample(rng, makespans.len(), k) {
        let wins = match best {
            Some(current) => makespans[idx] < makespans[current],
            None => true,
        };
        if wins {
            best = Some(idx);
        }
    }
    best.expect("tournament sampled at least one contender")
}
