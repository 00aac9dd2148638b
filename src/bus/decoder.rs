//! Control byte decoding.
//!
//! The control/address byte is shared between seed loading, the start command
//! and result read-back. It is decoded combinationally every cycle into one
//! [`BusOp`]. Two encodings exist; a core is built for exactly one of them.
//!
//! ## Strobed encoding
//!
//! | Control byte | Operation                              |
//! |:-------------|:---------------------------------------|
//! | 0x00-0x03    | Select seed lane (no write)            |
//! | 0x80-0x83    | Select seed lane with write strobe     |
//! | 0x10-0x13    | Read orbit length lane                 |
//! | 0x20-0x23    | Read path record lane                  |
//! | 0x40         | Start                                  |
//!
//! ## High-bit encoding
//!
//! | Control byte | Operation                              |
//! |:-------------|:---------------------------------------|
//! | 0x00-0x03    | Write seed lane (every cycle held)     |
//! | 0x80         | Start                                  |
//! | 0x90-0x93    | Read path record lane                  |
//! | 0xA0-0xA3    | Read orbit length lane                 |
//!
//! Every other value decodes to [`BusOp::Nop`].

use serde::{Deserialize, Serialize};

pub const LANE_MASK: u8 = 0x03;

// Strobed encoding
pub const STROBED_SELECT_BASE: u8 = 0x00;
pub const STROBED_WRITE_STROBE: u8 = 0x80;
pub const STROBED_READ_ORBIT_BASE: u8 = 0x10;
pub const STROBED_READ_PATH_BASE: u8 = 0x20;
pub const STROBED_START: u8 = 0x40;
pub const STROBED_IDLE: u8 = 0x00;

// High-bit encoding
pub const HIGHBIT_WRITE_BASE: u8 = 0x00;
pub const HIGHBIT_START: u8 = 0x80;
pub const HIGHBIT_READ_PATH_BASE: u8 = 0x90;
pub const HIGHBIT_READ_ORBIT_BASE: u8 = 0xA0;
pub const HIGHBIT_IDLE: u8 = 0x08;

/// Operation selected by one control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Nop,
    /// Lane addressed without a write strobe
    SelectLane(u8),
    /// Commit data-in to the seed lane
    WriteLane(u8),
    Start,
    ReadOrbitLen(u8),
    ReadPathRecord(u8),
}

impl BusOp {
    pub fn is_read(&self) -> bool {
        matches!(self, BusOp::ReadOrbitLen(_) | BusOp::ReadPathRecord(_))
    }
}

/// Address encoding variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressEncoding {
    /// Disjoint low ranges, explicit write strobe on bit 7
    #[default]
    Strobed,
    /// Load and read ranges distinguished by bit 7, writes level-sensitive
    HighBit,
}

impl AddressEncoding {
    /// Decode a control byte
    pub fn decode(self, ctrl: u8) -> BusOp {
        let lane = ctrl & LANE_MASK;
        match self {
            AddressEncoding::Strobed => match ctrl {
                0x00..=0x03 => BusOp::SelectLane(lane),
                0x80..=0x83 => BusOp::WriteLane(lane),
                0x10..=0x13 => BusOp::ReadOrbitLen(lane),
                0x20..=0x23 => BusOp::ReadPathRecord(lane),
                STROBED_START => BusOp::Start,
                _ => BusOp::Nop,
            },
            AddressEncoding::HighBit => match ctrl {
                0x00..=0x03 => BusOp::WriteLane(lane),
                HIGHBIT_START => BusOp::Start,
                0x90..=0x93 => BusOp::ReadPathRecord(lane),
                0xA0..=0xA3 => BusOp::ReadOrbitLen(lane),
                _ => BusOp::Nop,
            },
        }
    }

    /// Control byte with no side effect
    pub fn idle(self) -> u8 {
        match self {
            AddressEncoding::Strobed => STROBED_IDLE,
            AddressEncoding::HighBit => HIGHBIT_IDLE,
        }
    }

    pub fn start(self) -> u8 {
        match self {
            AddressEncoding::Strobed => STROBED_START,
            AddressEncoding::HighBit => HIGHBIT_START,
        }
    }

    /// Lane select presented before the write, if the encoding has one
    pub fn select_lane(self, lane: u8) -> Option<u8> {
        match self {
            AddressEncoding::Strobed => Some(STROBED_SELECT_BASE | (lane & LANE_MASK)),
            AddressEncoding::HighBit => None,
        }
    }

    /// Control byte that commits data-in to `lane`
    pub fn write_lane(self, lane: u8) -> u8 {
        match self {
            AddressEncoding::Strobed => {
                STROBED_WRITE_STROBE | STROBED_SELECT_BASE | (lane & LANE_MASK)
            }
            AddressEncoding::HighBit => HIGHBIT_WRITE_BASE | (lane & LANE_MASK),
        }
    }

    pub fn read_orbit_len(self, lane: u8) -> u8 {
        match self {
            AddressEncoding::Strobed => STROBED_READ_ORBIT_BASE | (lane & LANE_MASK),
            AddressEncoding::HighBit => HIGHBIT_READ_ORBIT_BASE | (lane & LANE_MASK),
        }
    }

    pub fn read_path_record(self, lane: u8) -> u8 {
        match self {
            AddressEncoding::Strobed => STROBED_READ_PATH_BASE | (lane & LANE_MASK),
            AddressEncoding::HighBit => HIGHBIT_READ_PATH_BASE | (lane & LANE_MASK),
        }
    }
}
