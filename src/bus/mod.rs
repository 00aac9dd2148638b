//! Accelerator bus
//!
//! A narrow, half-duplex, clock-synchronous bus. Every clock edge samples one
//! data-in byte, one shared control/address byte and the active-low reset.
//! After the edge the core drives one data-out byte and one status byte.
//!
//! ## Status byte
//!
//! | Bit | Meaning                                          |
//! |:----|:-------------------------------------------------|
//! | 0   | Busy: a trajectory is running                    |
//! | 1   | Done: results of a completed run are latched     |

use serde::{Deserialize, Serialize};

pub mod byte_lanes;

pub mod decoder;
pub use decoder::{AddressEncoding, BusOp};

pub mod seed;
pub use seed::SeedRegister;

pub mod result_mux;
pub use result_mux::ResultMux;

pub const STATUS_BUSY: u8 = 0x01;
pub const STATUS_DONE: u8 = 0x02;

/// Pins sampled on a clock edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusInputs {
    pub data_in: u8,
    pub ctrl: u8,
    /// Active-low reset
    pub rst_n: bool,
}

impl BusInputs {
    pub fn new(ctrl: u8, data_in: u8) -> Self {
        Self {
            data_in,
            ctrl,
            rst_n: true,
        }
    }

    /// Reset asserted, everything else zero
    pub fn reset() -> Self {
        Self {
            data_in: 0,
            ctrl: 0,
            rst_n: false,
        }
    }
}

/// Pins driven after a clock edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusOutputs {
    pub data_out: u8,
    pub status: u8,
}

impl BusOutputs {
    pub fn busy(&self) -> bool {
        self.status & STATUS_BUSY != 0
    }

    pub fn done(&self) -> bool {
        self.status & STATUS_DONE != 0
    }
}

#[cfg(test)]
mod tests_decoder;
