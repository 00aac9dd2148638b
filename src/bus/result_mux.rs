//! Result byte mux.
//!
//! The output port is a register: the lane selected on one clock edge is what
//! the port shows until the next edge, giving one cycle of read latency.

use super::byte_lanes;
use super::decoder::BusOp;
use crate::engine::Results;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMux {
    data_out: u8,
}

impl ResultMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value currently driven on the output port
    pub fn data_out(&self) -> u8 {
        self.data_out
    }

    pub fn reset(&mut self) {
        self.data_out = 0;
    }

    /// Lane value `op` selects, or `None` if `op` is not a read
    pub fn select(op: BusOp, results: &Results) -> Option<u8> {
        match op {
            BusOp::ReadOrbitLen(lane) => Some(byte_lanes::lane(results.orbit_len, lane)),
            BusOp::ReadPathRecord(lane) => Some(byte_lanes::lane(results.path_record, lane)),
            _ => None,
        }
    }

    /// Clock edge. Non-read operations hold the previous output.
    pub fn clock(&mut self, op: BusOp, results: &Results) {
        if let Some(byte) = Self::select(op, results) {
            self.data_out = byte;
        }
    }
}
