//! Trajectory Engine
//!
//! The engine walks one Collatz trajectory, taking exactly one transition per
//! clock edge while it is running. All arithmetic is 32-bit and wraps
//! silently, so a trajectory that overflows continues from the truncated value.
//!
//! ## State Machine
//!
//! | From           | Event              | To      | Effect                              |
//! |:---------------|:-------------------|:--------|:------------------------------------|
//! | Idle / Done    | start              | Running | iterate, record := seed; counter := convention start |
//! | Running        | clock, iterate ≠ 1 | Running | one `step`, record := max, counter += 1 |
//! | Running        | clock, iterate = 1 | Done    | results latched                     |
//! | any            | reset              | Idle    | everything cleared to zero          |

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// One Collatz transition on a 32-bit value.
///
/// Even values are halved. Odd values map to `3x + 1` modulo 2^32.
#[inline(always)]
pub fn step(x: u32) -> u32 {
    if x & 1 == 0 {
        x >> 1
    } else {
        x.wrapping_mul(3).wrapping_add(1)
    }
}

/// How the step counter counts a trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingConvention {
    /// Number of transitions executed. Seed 1 counts 0.
    #[default]
    Transitions,
    /// Number of terms in the sequence, seed and final 1 included. Seed 1 counts 1.
    Terms,
}

impl CountingConvention {
    /// Counter value loaded when a run starts.
    pub fn initial_count(self) -> u32 {
        match self {
            CountingConvention::Transitions => 0,
            CountingConvention::Terms => 1,
        }
    }
}

/// Engine status as seen on the bus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    #[default]
    Idle,
    Running,
    Done,
}

/// Completed run results, as latched on the Running -> Done transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    /// Step counter at completion
    pub orbit_len: u32,
    /// Largest wrapped value visited, seed included
    pub path_record: u32,
}

/// Trajectory engine registers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub status: EngineStatus,
    /// Current trajectory point
    pub iterate: u32,
    /// Working step counter
    pub counter: u32,
    /// Working running maximum
    pub record: u32,
    /// Results of the last completed run; untouched while running
    pub results: Results,
    pub counting: CountingConvention,
}

impl Engine {
    pub fn new(counting: CountingConvention) -> Self {
        Self {
            counting,
            ..Self::default()
        }
    }

    /// Return to Idle with every register cleared. The counting convention is
    /// configuration, not state, and survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.counting);
    }

    pub fn is_busy(&self) -> bool {
        self.status == EngineStatus::Running
    }

    /// Start a run from `seed`.
    ///
    /// Returns false and leaves the in-flight run untouched when already
    /// running.
    pub fn start(&mut self, seed: u32) -> bool {
        if self.is_busy() {
            debug!("start ignored: engine running (iterate={:#010x})", self.iterate);
            return false;
        }

        self.iterate = seed;
        self.record = seed;
        self.counter = self.counting.initial_count();
        self.status = EngineStatus::Running;
        debug!("start: seed={:#010x} counting={:?}", seed, self.counting);
        true
    }

    /// Advance one clock edge.
    pub fn clock(&mut self) {
        if self.status != EngineStatus::Running {
            return;
        }

        if self.iterate == 1 {
            self.results = Results {
                orbit_len: self.counter,
                path_record: self.record,
            };
            self.status = EngineStatus::Done;
            debug!(
                "done: orbit_len={} path_record={:#010x}",
                self.counter, self.record
            );
            return;
        }

        let next = step(self.iterate);
        self.record = self.record.max(next);
        self.counter = self.counter.wrapping_add(1);
        self.iterate = next;
        trace!("step {}: {:#010x}", self.counter, next);
    }
}
