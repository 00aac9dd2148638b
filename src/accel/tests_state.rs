use super::test_utils::*;
use super::Accelerator;
use crate::bus::AddressEncoding;
use crate::config::CoreConfig;
use crate::debugger::Debuggable;
use crate::engine::CountingConvention;
use crate::error::Error;
use serde_json::json;

#[test]
fn test_state_roundtrip_mid_run() {
    let mut acc = create_accel(AddressEncoding::HighBit);
    load_seed(&mut acc, 87_234_789);
    pulse_start(&mut acc);
    for _ in 0..40 {
        idle(&mut acc);
    }
    let state = acc.read_state();

    let mut restored = Accelerator::default();
    restored.write_state(&state).unwrap();
    assert_eq!(restored, acc);
    assert_eq!(restored.encoding(), AddressEncoding::HighBit);

    wait_idle(&mut acc, 1000);
    wait_idle(&mut restored, 1000);
    assert_eq!(read_orbit_len(&mut restored), 112);
    assert_eq!(read_path_record(&mut restored), 261_704_368);
    assert_eq!(restored.engine, acc.engine);
}

#[test]
fn test_state_keys() {
    let acc = create_accel(AddressEncoding::Strobed);
    let state = acc.read_state();
    assert!(state.get("seed").is_some());
    assert!(state.get("engine").is_some());
    assert!(state.get("mux").is_some());
    assert_eq!(state["config"]["encoding"], json!("strobed"));
    assert_eq!(state["engine"]["status"], json!("Idle"));
}

#[test]
fn test_bad_state_leaves_core_unchanged() {
    let mut acc = create_accel(AddressEncoding::Strobed);
    run_seed(&mut acc, 5);
    let before = acc.clone();

    assert!(matches!(acc.write_state(&json!({"engine": 42})), Err(Error::Json(_))));
    assert_eq!(acc, before);
}

#[test]
fn test_wrong_field_type_rejected() {
    let mut acc = create_accel(AddressEncoding::HighBit);
    run_seed(&mut acc, 57);
    let before = acc.clone();

    let mut state = acc.read_state();
    state["engine"]["iterate"] = json!("one");
    assert!(matches!(acc.write_state(&state), Err(Error::Json(_))));
    assert_eq!(acc, before);
}

#[test]
fn test_missing_seed_rejected() {
    let mut acc = create_accel(AddressEncoding::Strobed);
    run_seed(&mut acc, 8);
    let before = acc.clone();

    let mut state = acc.read_state();
    state.as_object_mut().unwrap().remove("seed");
    assert!(matches!(acc.write_state(&state), Err(Error::Json(_))));
    assert_eq!(acc, before);
}

#[test]
fn test_counting_mismatch_rejected() {
    let mut acc = create_accel(AddressEncoding::Strobed);
    run_seed(&mut acc, 5);
    let before = acc.clone();

    let mut state = acc.read_state();
    state["engine"]["counting"] = json!("terms");
    assert!(matches!(acc.write_state(&state), Err(Error::InvalidState(_))));
    assert_eq!(acc, before);

    // The core still counts with the configured convention
    acc.reset();
    assert_eq!(run_seed(&mut acc, 8), (3, 8));
}

#[test]
fn test_consistent_terms_state_accepted() {
    let config = CoreConfig::new(AddressEncoding::Strobed, CountingConvention::Terms);
    let mut source = Accelerator::new(config);
    run_seed(&mut source, 8);

    let mut acc = create_accel(AddressEncoding::Strobed);
    acc.write_state(&source.read_state()).unwrap();
    assert_eq!(acc.config.counting, CountingConvention::Terms);
    assert_eq!(run_seed(&mut acc, 8), (4, 8));
}
