//! Seed register, written one byte lane at a time.

use super::byte_lanes::{self, LANES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 32-bit seed register with four independent byte lanes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRegister {
    value: u32,
}

impl SeedRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Write one byte lane. Other lanes keep their contents.
    pub fn write_lane(&mut self, lane: u8, data: u8) -> Result<()> {
        if lane >= LANES {
            return Err(Error::InvalidLane(lane));
        }
        self.value = byte_lanes::with_lane(self.value, lane, data);
        Ok(())
    }

    pub fn read_lane(&self, lane: u8) -> Result<u8> {
        if lane >= LANES {
            return Err(Error::InvalidLane(lane));
        }
        Ok(byte_lanes::lane(self.value, lane))
    }
}
