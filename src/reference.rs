//! Software reference model.
//!
//! Iterates [`step`] directly, independent of the clocked engine, so the
//! hardware model can be checked against it. Unlike the engine it accepts an
//! optional step cap and reports non-convergence instead of spinning forever.

use crate::engine::{step, CountingConvention};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Result of one trajectory computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub seed: u32,
    /// Step count under the chosen convention
    pub orbit_len: u64,
    /// Largest wrapped value visited, seed included
    pub path_record: u32,
}

/// Iterator over the values of a trajectory, from the seed up to and
/// including the terminal 1.
///
/// Never ends for a seed that does not reach 1 (seed 0 for instance).
#[derive(Debug, Clone)]
pub struct Orbit {
    next: Option<u32>,
}

impl Iterator for Orbit {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next?;
        self.next = if current == 1 { None } else { Some(step(current)) };
        Some(current)
    }
}

/// Orbit of `seed` under 32-bit wraparound.
pub fn orbit(seed: u32) -> Orbit {
    Orbit { next: Some(seed) }
}

/// Compute step count and path record for `seed`.
///
/// `max_steps` bounds the number of transitions; `None` iterates until 1 is
/// reached, however long that takes.
pub fn trajectory(
    seed: u32,
    counting: CountingConvention,
    max_steps: Option<u64>,
) -> Result<Trajectory> {
    let mut x = seed;
    let mut record = seed;
    let mut steps: u64 = 0;

    while x != 1 {
        if max_steps.is_some_and(|cap| steps >= cap) {
            return Err(Error::DidNotConverge { seed, steps });
        }
        x = step(x);
        record = record.max(x);
        steps += 1;
    }

    Ok(Trajectory {
        seed,
        orbit_len: steps + counting.initial_count() as u64,
        path_record: record,
    })
}
