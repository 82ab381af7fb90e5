use crate::{Error, IdGenerator, Result};
use std::collections::HashSet;

/// Outcome of one Monte Carlo collision run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimResult {
    /// Number of draws that matched a previously seen identifier.
    pub collisions: usize,
    /// Number of draws performed; always the full requested count.
    pub iterations: usize,
    /// Empirical collision probability, `collisions / iterations`.
    pub probability: f64,
}

/// Draws `iterations` identifiers from `generator` and counts duplicates.
///
/// Each draw is checked against the set of previously seen identifiers; a hit
/// increments the collision counter, a miss is inserted. There is no early
/// termination on the first collision: the loop always runs the full
/// iteration count, so the result estimates a multi-collision rate rather
/// than a first-collision hitting time. Expected O(iterations) time and
/// O(iterations) space for the membership set.
///
/// Fails with [`Error::Simulation`] when `iterations` is zero.
pub fn simulate(generator: &dyn IdGenerator, iterations: usize) -> Result<SimResult> {
    if iterations == 0 {
        return Err(Error::Simulation {
            reason: "iterations must be positive".into(),
        });
    }

    let mut seen = HashSet::with_capacity(iterations);
    let mut collisions = 0usize;

    for _ in 0..iterations {
        let id = generator.generate();
        if !seen.insert(id) {
            collisions += 1;
        }
    }

    let probability = collisions as f64 / iterations as f64;
    tracing::debug!(
        generator = generator.name(),
        iterations,
        collisions,
        "simulation complete"
    );

    Ok(SimResult {
        collisions,
        iterations,
        probability,
    })
}
