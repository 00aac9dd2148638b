//! Trajaccel - A cycle-accurate model of the Trajectory Accelerator
//!
//! The accelerator computes the Collatz orbit length and path record of a
//! 32-bit seed behind a narrow multiplexed byte bus. This library provides the
//! core model, a software reference and a host-side driver for it.

pub mod error;
pub mod config;
pub mod engine;
pub mod bus;
pub mod accel;
pub mod reference;
pub mod driver;
pub mod script;
pub mod debugger;

pub use accel::Accelerator;
pub use config::CoreConfig;
pub use driver::{Driver, WaitPolicy};
pub use engine::{step, CountingConvention};
pub use error::{Error, Result};
pub use reference::Trajectory;
