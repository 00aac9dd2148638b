//! Host-side bus driver.
//!
//! Plays the harness role: wiggles the accelerator's pins to load a seed,
//! start a run, poll busy and read results back. Each transaction holds its
//! control byte for `hold_cycles` edges and then releases the bus to the
//! encoding's idle byte.
//!
//! The engine has no timeout of its own. [`WaitPolicy`] layers a cycle budget
//! and a cancellation flag on top of the busy poll; both default to off.

use crate::accel::Accelerator;
use crate::bus::{byte_lanes, AddressEncoding, BusInputs, BusOutputs};
use crate::error::{Error, Result};
use crate::reference::Trajectory;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bounds on a busy wait
#[derive(Debug, Clone, Default)]
pub struct WaitPolicy {
    /// Give up after this many edges
    pub max_cycles: Option<u64>,
    /// Checked once per edge; when raised the core is reset
    pub cancel: Option<Arc<AtomicBool>>,
}

impl WaitPolicy {
    /// Wait for as long as the run takes
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Bus driver borrowing one accelerator
#[derive(Debug)]
pub struct Driver<'a> {
    acc: &'a mut Accelerator,
    hold_cycles: u32,
}

impl<'a> Driver<'a> {
    pub fn new(acc: &'a mut Accelerator) -> Self {
        Self {
            acc,
            hold_cycles: 1,
        }
    }

    /// Hold every transaction for `cycles` edges (at least one)
    pub fn with_hold_cycles(mut self, cycles: u32) -> Self {
        self.hold_cycles = cycles.max(1);
        self
    }

    pub fn accelerator(&self) -> &Accelerator {
        &*self.acc
    }

    fn encoding(&self) -> AddressEncoding {
        self.acc.encoding()
    }

    fn present(&mut self, ctrl: u8, data_in: u8) -> BusOutputs {
        self.acc.tick_n(BusInputs::new(ctrl, data_in), self.hold_cycles)
    }

    fn release(&mut self) -> BusOutputs {
        let idle = self.encoding().idle();
        self.acc.tick(BusInputs::new(idle, 0))
    }

    /// Assert reset, then release the bus
    pub fn reset(&mut self) {
        self.acc.tick_n(BusInputs::reset(), self.hold_cycles);
        self.release();
    }

    /// Write all four seed lanes, lane 0 first
    pub fn load_seed(&mut self, seed: u32) {
        if self.acc.is_busy() {
            debug!("loading seed {:#010x} while busy; the core will drop it", seed);
        }
        let enc = self.encoding();
        for (lane, byte) in byte_lanes::split_lanes(seed).into_iter().enumerate() {
            let lane = lane as u8;
            if let Some(select) = enc.select_lane(lane) {
                self.present(select, byte);
            }
            self.present(enc.write_lane(lane), byte);
        }
        self.release();
    }

    /// Issue a start command. Returns false if the core was already running,
    /// in which case the command has no effect.
    pub fn start(&mut self) -> bool {
        let was_busy = self.acc.is_busy();
        let start = self.encoding().start();
        self.present(start, 0);
        self.release();
        !was_busy
    }

    /// Poll busy until it clears. Returns the edges spent waiting.
    pub fn wait_done(&mut self, policy: &WaitPolicy) -> Result<u64> {
        let mut cycles = 0;
        while self.acc.outputs().busy() {
            if policy.cancelled() {
                debug!("wait cancelled after {} cycles", cycles);
                self.reset();
                return Err(Error::Cancelled { cycles });
            }
            if policy.max_cycles.is_some_and(|max| cycles >= max) {
                return Err(Error::Timeout { cycles });
            }
            self.release();
            cycles += 1;
        }
        Ok(cycles)
    }

    fn read_u32(&mut self, addr: fn(AddressEncoding, u8) -> u8) -> u32 {
        let enc = self.encoding();
        let mut lanes = [0u8; 4];
        for (lane, byte) in lanes.iter_mut().enumerate() {
            *byte = self.present(addr(enc, lane as u8), 0).data_out;
        }
        byte_lanes::join_lanes(lanes)
    }

    pub fn read_orbit_len(&mut self) -> u32 {
        self.read_u32(AddressEncoding::read_orbit_len)
    }

    pub fn read_path_record(&mut self) -> u32 {
        self.read_u32(AddressEncoding::read_path_record)
    }

    /// Load, start, wait and read back one trajectory
    pub fn run(&mut self, seed: u32, policy: &WaitPolicy) -> Result<Trajectory> {
        self.load_seed(seed);
        self.start();
        let cycles = self.wait_done(policy)?;
        let orbit_len = self.read_orbit_len();
        let path_record = self.read_path_record();
        debug!(
            "seed {:#010x}: orbit_len={} path_record={:#010x} ({} cycles busy)",
            seed, orbit_len, path_record, cycles
        );
        Ok(Trajectory {
            seed,
            orbit_len: orbit_len as u64,
            path_record,
        })
    }
}
