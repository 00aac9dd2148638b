//! Helper functions for byte-lane access.
//!
//! Every 32-bit register on the bus is split into four byte lanes. Lane 0 is
//! the least significant byte.

/// Number of byte lanes in a 32-bit register
pub const LANES: u8 = 4;

/// Extract byte lane `lane` (0-3) of `value`
#[inline(always)]
pub fn lane(value: u32, lane: u8) -> u8 {
    value.to_le_bytes()[(lane & 0x03) as usize]
}

/// Replace byte lane `lane` (0-3) of `value` with `byte`
#[inline(always)]
pub fn with_lane(value: u32, lane: u8, byte: u8) -> u32 {
    let mut bytes = value.to_le_bytes();
    bytes[(lane & 0x03) as usize] = byte;
    u32::from_le_bytes(bytes)
}

/// Join four lanes, lane 0 first
#[inline(always)]
pub fn join_lanes(lanes: [u8; 4]) -> u32 {
    u32::from_le_bytes(lanes)
}

/// Split into four lanes, lane 0 first
#[inline(always)]
pub fn split_lanes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}
