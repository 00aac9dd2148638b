//! Core configuration, fixed at construction.

use crate::bus::AddressEncoding;
use crate::engine::CountingConvention;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Protocol variant and counting convention of one accelerator instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub encoding: AddressEncoding,
    pub counting: CountingConvention,
}

impl CoreConfig {
    pub fn new(encoding: AddressEncoding, counting: CountingConvention) -> Self {
        Self { encoding, counting }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
