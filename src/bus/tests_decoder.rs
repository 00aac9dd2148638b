use super::decoder::*;
use super::*;
use proptest::prelude::*;

#[test]
fn test_strobed_map() {
    let enc = AddressEncoding::Strobed;
    assert_eq!(enc.decode(0x00), BusOp::SelectLane(0));
    assert_eq!(enc.decode(0x03), BusOp::SelectLane(3));
    assert_eq!(enc.decode(0x80), BusOp::WriteLane(0));
    assert_eq!(enc.decode(0x83), BusOp::WriteLane(3));
    assert_eq!(enc.decode(0x10), BusOp::ReadOrbitLen(0));
    assert_eq!(enc.decode(0x13), BusOp::ReadOrbitLen(3));
    assert_eq!(enc.decode(0x20), BusOp::ReadPathRecord(0));
    assert_eq!(enc.decode(0x23), BusOp::ReadPathRecord(3));
    assert_eq!(enc.decode(0x40), BusOp::Start);
}

#[test]
fn test_strobed_gaps_are_nop() {
    let enc = AddressEncoding::Strobed;
    for ctrl in [0x04, 0x14, 0x24, 0x41, 0x84, 0x90, 0xC0, 0xFF] {
        assert_eq!(enc.decode(ctrl), BusOp::Nop, "ctrl {:#04x}", ctrl);
    }
}

#[test]
fn test_highbit_map() {
    let enc = AddressEncoding::HighBit;
    assert_eq!(enc.decode(0x00), BusOp::WriteLane(0));
    assert_eq!(enc.decode(0x03), BusOp::WriteLane(3));
    assert_eq!(enc.decode(0x80), BusOp::Start);
    assert_eq!(enc.decode(0x90), BusOp::ReadPathRecord(0));
    assert_eq!(enc.decode(0x93), BusOp::ReadPathRecord(3));
    assert_eq!(enc.decode(0xA0), BusOp::ReadOrbitLen(0));
    assert_eq!(enc.decode(0xA3), BusOp::ReadOrbitLen(3));
}

#[test]
fn test_highbit_gaps_are_nop() {
    let enc = AddressEncoding::HighBit;
    for ctrl in [0x04, 0x08, 0x40, 0x81, 0x83, 0x94, 0xA4, 0xFF] {
        assert_eq!(enc.decode(ctrl), BusOp::Nop, "ctrl {:#04x}", ctrl);
    }
}

#[test]
fn test_idle_has_no_side_effect() {
    for enc in [AddressEncoding::Strobed, AddressEncoding::HighBit] {
        let op = enc.decode(enc.idle());
        assert!(matches!(op, BusOp::Nop | BusOp::SelectLane(_)), "{:?}", enc);
    }
}

#[test]
fn test_encoders_roundtrip_through_decode() {
    for enc in [AddressEncoding::Strobed, AddressEncoding::HighBit] {
        assert_eq!(enc.decode(enc.start()), BusOp::Start);
        for lane in 0..4 {
            assert_eq!(enc.decode(enc.write_lane(lane)), BusOp::WriteLane(lane));
            assert_eq!(enc.decode(enc.read_orbit_len(lane)), BusOp::ReadOrbitLen(lane));
            assert_eq!(enc.decode(enc.read_path_record(lane)), BusOp::ReadPathRecord(lane));
        }
    }
    assert_eq!(AddressEncoding::Strobed.select_lane(2), Some(0x02));
    assert_eq!(AddressEncoding::HighBit.select_lane(2), None);
}

#[test]
fn test_encoding_serde_names() {
    let json = serde_json::to_string(&AddressEncoding::HighBit).unwrap();
    assert_eq!(json, "\"high_bit\"");
    let enc: AddressEncoding = serde_json::from_str("\"strobed\"").unwrap();
    assert_eq!(enc, AddressEncoding::Strobed);
}

#[test]
fn test_status_bits() {
    let out = BusOutputs {
        data_out: 0,
        status: STATUS_BUSY,
    };
    assert!(out.busy());
    assert!(!out.done());
    let out = BusOutputs {
        data_out: 0,
        status: STATUS_DONE,
    };
    assert!(!out.busy());
    assert!(out.done());
}

proptest! {
    // Ranges never overlap: at most one read or write per control byte,
    // and the lane always comes from the low two bits
    #[test]
    fn prop_decoded_lane_is_low_bits(ctrl in any::<u8>()) {
        for enc in [AddressEncoding::Strobed, AddressEncoding::HighBit] {
            match enc.decode(ctrl) {
                BusOp::SelectLane(l) | BusOp::WriteLane(l)
                | BusOp::ReadOrbitLen(l) | BusOp::ReadPathRecord(l) => {
                    prop_assert_eq!(l, ctrl & LANE_MASK);
                }
                BusOp::Start | BusOp::Nop => {}
            }
        }
    }
}

#[test]
fn test_single_start_byte() {
    for enc in [AddressEncoding::Strobed, AddressEncoding::HighBit] {
        let starts: Vec<u8> = (0..=255u8)
            .filter(|&c| enc.decode(c) == BusOp::Start)
            .collect();
        assert_eq!(starts, vec![enc.start()]);
    }
}

#[test]
fn test_range_sizes() {
    for enc in [AddressEncoding::Strobed, AddressEncoding::HighBit] {
        let ops: Vec<BusOp> = (0..=255u8).map(|c| enc.decode(c)).collect();
        assert_eq!(ops.iter().filter(|op| matches!(op, BusOp::WriteLane(_))).count(), 4);
        assert_eq!(ops.iter().filter(|op| matches!(op, BusOp::ReadOrbitLen(_))).count(), 4);
        assert_eq!(ops.iter().filter(|op| matches!(op, BusOp::ReadPathRecord(_))).count(), 4);
        assert_eq!(ops.iter().filter(|op| op.is_read()).count(), 8);
    }
}
