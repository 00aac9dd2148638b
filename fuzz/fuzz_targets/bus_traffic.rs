#![no_main]

//! Random bus traffic against the accelerator.
//!
//! Invariants checked on every edge:
//! 1. Busy and done are never set together
//! 2. The path record stays at or above the running seed
//! 3. Seed and results never change while busy
//! 4. Reset always returns the core to all zeros

use libfuzzer_sys::fuzz_target;
use trajaccel::bus::{AddressEncoding, BusInputs, STATUS_BUSY, STATUS_DONE};
use trajaccel::{Accelerator, CoreConfig, CountingConvention};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let encoding = if data[0] & 1 == 0 {
        AddressEncoding::Strobed
    } else {
        AddressEncoding::HighBit
    };
    let counting = if data[0] & 2 == 0 {
        CountingConvention::Transitions
    } else {
        CountingConvention::Terms
    };
    let mut acc = Accelerator::new(CoreConfig::new(encoding, counting));
    let mut run_seed = 0u32;

    for chunk in data[1..].chunks_exact(3) {
        let inputs = BusInputs {
            ctrl: chunk[0],
            data_in: chunk[1],
            rst_n: chunk[2] != 0,
        };
        let was_busy = acc.is_busy();
        let seed_before = acc.seed.value();
        let results_before = acc.engine.results;

        let out = acc.tick(inputs);

        assert!(
            out.status & (STATUS_BUSY | STATUS_DONE) != (STATUS_BUSY | STATUS_DONE),
            "busy and done both set"
        );

        if !inputs.rst_n {
            assert_eq!(out.status, 0);
            assert_eq!(out.data_out, 0);
            assert_eq!(acc.seed.value(), 0);
            continue;
        }

        if !was_busy && acc.is_busy() {
            run_seed = acc.seed.value();
        }
        if acc.is_busy() {
            assert!(acc.engine.record >= run_seed);
        }
        if was_busy {
            assert_eq!(acc.seed.value(), seed_before);
            if acc.is_busy() {
                assert_eq!(acc.engine.results, results_before);
            }
        }
    }
});
