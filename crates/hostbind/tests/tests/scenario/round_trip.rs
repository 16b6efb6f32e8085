//! set-then-get through the property surface.

use hostbind_core::{FieldKind, HostValue};
use hostbind_tests::ThrustHost;
use hostbind_thrust::{
    DifferentialThrottleStatus, PropertyError, PropertyValue, THRUST_PROPERTIES,
};

#[test]
fn every_flag_round_trips() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();

    for spec in THRUST_PROPERTIES.iter().filter(|s| s.kind == FieldKind::Boolean) {
        for v in [true, false] {
            tc.surface().set(spec.name, PropertyValue::Bool(v)).unwrap();
            assert_eq!(
                tc.surface().get(spec.name).unwrap(),
                PropertyValue::Bool(v),
                "{}",
                spec.name
            );
            assert_eq!(host.field(spec.field).as_bool(), Some(v));
        }
    }
}

#[test]
fn every_number_round_trips() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();

    let numeric = THRUST_PROPERTIES
        .iter()
        .filter(|s| matches!(s.kind, FieldKind::Number | FieldKind::EditableNumber));
    for spec in numeric {
        for v in [0.0, 0.5, 1.0] {
            tc.surface().set(spec.name, PropertyValue::Double(v)).unwrap();
            assert_eq!(
                tc.surface().get(spec.name).unwrap(),
                PropertyValue::Double(v),
                "{}",
                spec.name
            );
        }
    }
}

#[test]
fn editable_write_updates_host_text() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();

    tc.set_max_dynamic_pressure(3.5).unwrap();
    assert_eq!(tc.max_dynamic_pressure().unwrap(), 3.5);
    assert_eq!(host.cell_text("maxDynamicPressure"), "3.5");

    tc.set_electric_throttle_hi(0.15).unwrap();
    assert_eq!(host.cell_text("electricThrottleHi"), "0.15");
}

#[test]
fn out_of_range_numbers_pass_through_unclamped() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();

    tc.set_max_throttle(1.5).unwrap();
    assert_eq!(tc.max_throttle().unwrap(), 1.5);
    tc.set_min_throttle(-0.25).unwrap();
    assert_eq!(tc.min_throttle().unwrap(), -0.25);
}

#[test]
fn status_write_is_rejected_and_leaves_ordinal() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();
    host.set_field("differentialThrottleSuccess", HostValue::Int(2));

    for value in [
        PropertyValue::Status(DifferentialThrottleStatus::Success),
        PropertyValue::Bool(true),
        PropertyValue::Double(0.0),
    ] {
        let err = tc.surface().set("DifferentialThrottleStatus", value).unwrap_err();
        assert!(matches!(
            err,
            PropertyError::ReadOnlyProperty { property } if property == "DifferentialThrottleStatus"
        ));
    }
    assert_eq!(host.field("differentialThrottleSuccess").as_int(), Some(2));
    assert_eq!(host.external_writes(), 0);
}

#[test]
fn gated_properties_are_independent_fields() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();

    // Setting the limit does not flip its flag; the host decides what a
    // disabled limit means.
    tc.set_limit_throttle(false).unwrap();
    tc.set_max_throttle(0.6).unwrap();
    assert!(!tc.limit_throttle().unwrap());
    assert_eq!(tc.max_throttle().unwrap(), 0.6);

    tc.set_limit_throttle(true).unwrap();
    assert_eq!(tc.max_throttle().unwrap(), 0.6);
}

#[test]
fn editable_writes_reach_the_host_through_its_cells() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();
    assert_eq!(host.external_writes(), 0);

    tc.set_max_throttle(0.7).unwrap();
    assert_eq!(host.cell_text("maxThrottle"), "0.7");
    // Payload and text are two writes on the cell.
    assert_eq!(host.external_writes(), 2);

    tc.surface().set("MinThrottle", PropertyValue::Double(0.1)).unwrap();
    assert_eq!(host.external_writes(), 4);
}
