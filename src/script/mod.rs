//! Bus scripts for replaying harness transcripts.
//!
//! ## Script Format
//!
//! One transaction per line, held for a number of clock edges:
//! ```text
//! # cycles,ctrl,data_in[,rst_n]
//! 10,0x00,0x00,0    # reset
//! 10,0x00,0x34      # seed lane 0
//! 10,0x80,0x00      # start
//! ```
//! Bytes are decimal or `0x` hex. `rst_n` defaults to 1. Text after `#` is a
//! comment.

use crate::accel::Accelerator;
use crate::bus::BusInputs;
use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod trace;
pub use trace::{BusTrace, CycleSample};

/// Maximum script size in bytes (1MB)
const MAX_SCRIPT_SIZE: u64 = 1024 * 1024;

/// One scripted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusStep {
    /// Number of edges the inputs are held for
    pub cycles: u32,
    pub inputs: BusInputs,
}

/// A sequence of bus transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusScript {
    steps: Vec<BusStep>,
}

impl BusScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cycles: u32, inputs: BusInputs) -> &mut Self {
        self.steps.push(BusStep { cycles, inputs });
        self
    }

    pub fn steps(&self) -> &[BusStep] {
        &self.steps
    }

    pub fn total_cycles(&self) -> u64 {
        self.steps.iter().map(|s| s.cycles as u64).sum()
    }

    /// Load a script from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        let mut buffer = Vec::new();
        file.take(MAX_SCRIPT_SIZE + 1).read_to_end(&mut buffer)?;
        if buffer.len() as u64 > MAX_SCRIPT_SIZE {
            return Err(Error::Script {
                line: 0,
                reason: format!("script exceeds {} bytes", MAX_SCRIPT_SIZE),
            });
        }

        let content = String::from_utf8(buffer).map_err(|e| Error::Script {
            line: 0,
            reason: format!("not valid UTF-8: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a script from a string
    pub fn parse(content: &str) -> Result<Self> {
        let mut script = Self::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            let text = raw.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            let fields: Vec<&str> = text.split(',').map(str::trim).collect();
            if fields.len() < 3 || fields.len() > 4 {
                return Err(Error::Script {
                    line,
                    reason: format!("expected 3 or 4 fields, found {}", fields.len()),
                });
            }

            let cycles: u32 = fields[0].parse().map_err(|_| Error::Script {
                line,
                reason: format!("invalid cycle count '{}'", fields[0]),
            })?;
            let ctrl = parse_byte(fields[1], line)?;
            let data_in = parse_byte(fields[2], line)?;
            let rst_n = match fields.get(3) {
                None | Some(&"1") => true,
                Some(&"0") => false,
                Some(other) => {
                    return Err(Error::Script {
                        line,
                        reason: format!("rst_n must be 0 or 1, found '{}'", other),
                    })
                }
            };

            script.push(
                cycles,
                BusInputs {
                    data_in,
                    ctrl,
                    rst_n,
                },
            );
        }

        Ok(script)
    }

    /// Save the script to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Drive `acc` through every step, recording each edge
    pub fn replay(&self, acc: &mut Accelerator) -> BusTrace {
        let mut trace = BusTrace::new();
        for (step, s) in self.steps.iter().enumerate() {
            for _ in 0..s.cycles {
                let outputs = acc.tick(s.inputs);
                trace.record(step, acc.cycles, s.inputs, outputs);
            }
        }
        trace
    }
}

fn parse_byte(field: &str, line: usize) -> Result<u8> {
    let parsed = match field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => field.parse(),
    };
    parsed.map_err(|_| Error::Script {
        line,
        reason: format!("invalid byte '{}'", field),
    })
}

impl fmt::Display for BusScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# cycles,ctrl,data_in,rst_n")?;
        for s in &self.steps {
            writeln!(
                f,
                "{},{:#04x},{:#04x},{}",
                s.cycles,
                s.inputs.ctrl,
                s.inputs.data_in,
                u8::from(s.inputs.rst_n)
            )?;
        }
        Ok(())
    }
}
