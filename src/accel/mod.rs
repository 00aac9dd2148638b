//! Trajectory Accelerator core
//!
//! Ties the decoder, seed register, engine and result mux to the bus pins.
//! One call to [`Accelerator::tick`] is one rising clock edge: every register
//! updates from its pre-edge value, then the new outputs are returned.
//!
//! Protocol policies for cases the bus cannot report:
//!
//! - A start while running is ignored; the in-flight run continues.
//! - A seed write while running is ignored.
//! - Reads while running return the previous run's results.
//! - Unwritten seed lanes are zero.
//! - Start is edge-triggered: holding the start byte fires once.
//!
//! The mux samples results before the edge, so a read held through the edge
//! that clears busy still returns the previous run's byte. Present the read
//! address again after busy has cleared to see the new result.

use crate::bus::{
    AddressEncoding, BusInputs, BusOp, BusOutputs, ResultMux, SeedRegister, STATUS_BUSY,
    STATUS_DONE,
};
use crate::config::CoreConfig;
use crate::debugger::Debuggable;
use crate::engine::{Engine, EngineStatus};
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trajectory Accelerator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accelerator {
    pub config: CoreConfig,
    pub seed: SeedRegister,
    pub engine: Engine,
    pub mux: ResultMux,
    /// Control byte sampled on the previous edge (start edge detection)
    pub last_ctrl: u8,
    /// Clock edges since construction. Not cleared by reset.
    pub cycles: u64,
}

impl Default for Accelerator {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

impl Accelerator {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            seed: SeedRegister::new(),
            engine: Engine::new(config.counting),
            mux: ResultMux::new(),
            last_ctrl: 0,
            cycles: 0,
        }
    }

    pub fn encoding(&self) -> AddressEncoding {
        self.config.encoding
    }

    /// Clear every register and return to Idle, discarding any run.
    pub fn reset(&mut self) {
        if self.engine.is_busy() {
            debug!("reset: discarding run at iterate {:#010x}", self.engine.iterate);
        }
        self.seed.reset();
        self.engine.reset();
        self.mux.reset();
        self.last_ctrl = 0;
    }

    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }

    pub fn status(&self) -> u8 {
        match self.engine.status {
            EngineStatus::Running => STATUS_BUSY,
            EngineStatus::Done => STATUS_DONE,
            EngineStatus::Idle => 0,
        }
    }

    /// Current output pins
    pub fn outputs(&self) -> BusOutputs {
        BusOutputs {
            data_out: self.mux.data_out(),
            status: self.status(),
        }
    }

    /// One rising clock edge
    pub fn tick(&mut self, inputs: BusInputs) -> BusOutputs {
        self.cycles += 1;

        if !inputs.rst_n {
            self.reset();
            return self.outputs();
        }

        let encoding = self.config.encoding;
        let op = encoding.decode(inputs.ctrl);
        let start_edge = op == BusOp::Start && encoding.decode(self.last_ctrl) != BusOp::Start;
        let was_busy = self.engine.is_busy();

        // The mux samples results as they were before this edge
        self.mux.clock(op, &self.engine.results);

        match op {
            BusOp::WriteLane(lane) if was_busy => {
                debug!("seed lane {} write ignored while running", lane);
            }
            BusOp::WriteLane(lane) => {
                if let Err(e) = self.seed.write_lane(lane, inputs.data_in) {
                    warn!("seed write dropped: {}", e);
                }
            }
            BusOp::Start if start_edge => {
                self.engine.start(self.seed.value());
            }
            _ => {}
        }

        if was_busy {
            self.engine.clock();
        }

        self.last_ctrl = inputs.ctrl;
        self.outputs()
    }

    /// Apply the same inputs for `n` edges and return the final outputs.
    pub fn tick_n(&mut self, inputs: BusInputs, n: u32) -> BusOutputs {
        for _ in 0..n {
            self.tick(inputs);
        }
        self.outputs()
    }
}

impl Debuggable for Accelerator {
    fn read_state(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    fn write_state(&mut self, state: &Value) -> Result<()> {
        let restored: Accelerator = serde_json::from_value(state.clone())?;
        if restored.engine.counting != restored.config.counting {
            return Err(Error::InvalidState(format!(
                "engine counts {:?} but config selects {:?}",
                restored.engine.counting, restored.config.counting
            )));
        }
        *self = restored;
        Ok(())
    }
}




#[cfg(test)]
mod tests_state;
