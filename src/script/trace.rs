//! Per-edge recording of bus pins.

use crate::bus::{BusInputs, BusOutputs};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Pins on one clock edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSample {
    /// Script step that drove this edge
    pub step: usize,
    pub cycle: u64,
    pub ctrl: u8,
    pub data_in: u8,
    pub rst_n: bool,
    pub data_out: u8,
    pub status: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusTrace {
    samples: Vec<CycleSample>,
}

impl BusTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: usize, cycle: u64, inputs: BusInputs, outputs: BusOutputs) {
        self.samples.push(CycleSample {
            step,
            cycle,
            ctrl: inputs.ctrl,
            data_in: inputs.data_in,
            rst_n: inputs.rst_n,
            data_out: outputs.data_out,
            status: outputs.status,
        });
    }

    pub fn samples(&self) -> &[CycleSample] {
        &self.samples
    }

    /// Last edge driven by script step `step`
    pub fn step_end(&self, step: usize) -> Option<&CycleSample> {
        self.samples.iter().rev().find(|s| s.step == step)
    }

    /// Edges with busy asserted
    pub fn busy_cycles(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| s.status & crate::bus::STATUS_BUSY != 0)
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "cycle,step,rst_n,ctrl,data_in,data_out,status")?;
        for s in &self.samples {
            writeln!(
                out,
                "{},{},{},{:#04x},{:#04x},{:#04x},{:#04x}",
                s.cycle,
                s.step,
                u8::from(s.rst_n),
                s.ctrl,
                s.data_in,
                s.data_out,
                s.status
            )?;
        }
        Ok(())
    }
}
