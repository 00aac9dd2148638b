//! Error types for the accelerator model.
//!
//! The bus protocol itself has no error channel. These errors only come from
//! the host-side layers: the reference model, the driver's wait loop, bus
//! scripts and configuration loading.

use thiserror::Error;

/// Errors raised by host-side operations on the accelerator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("trajectory of seed {seed} did not reach 1 within {steps} steps")]
    DidNotConverge { seed: u32, steps: u64 },

    #[error("engine still busy after {cycles} cycles")]
    Timeout { cycles: u64 },

    #[error("wait cancelled after {cycles} cycles")]
    Cancelled { cycles: u64 },

    #[error("byte lane {0} is out of range (0-3)")]
    InvalidLane(u8),

    #[error("bus script line {line}: {reason}")]
    Script { line: usize, reason: String },

    #[error("inconsistent state snapshot: {0}")]
    InvalidState(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
