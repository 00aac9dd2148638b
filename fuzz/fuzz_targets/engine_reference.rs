#![no_main]

use libfuzzer_sys::fuzz_target;
use trajaccel::engine::{CountingConvention, Engine, EngineStatus};
use trajaccel::reference;

const MAX_STEPS: u64 = 4_096;

fuzz_target!(|seed: u32| {
    let mut engine = Engine::new(CountingConvention::Transitions);
    engine.start(seed);
    for _ in 0..=MAX_STEPS {
        engine.clock();
    }

    match reference::trajectory(seed, CountingConvention::Transitions, Some(MAX_STEPS)) {
        Ok(t) => {
            assert_eq!(engine.status, EngineStatus::Done);
            assert_eq!(engine.results.orbit_len as u64, t.orbit_len);
            assert_eq!(engine.results.path_record, t.path_record);
        }
        Err(_) => assert_eq!(engine.status, EngineStatus::Running),
    }
});
