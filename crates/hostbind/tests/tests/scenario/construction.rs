//! Module construction against conforming and drifted hosts.

use hostbind_core::{BindError, FieldKind, HostValue};
use hostbind_tests::{init_tracing, ThrustHost};
use hostbind_thrust::{bind_plan, ModuleError, THRUST_PROPERTIES};

fn field_of(err: ModuleError) -> (String, String) {
    match err {
        ModuleError::Bind(BindError::FieldNotFound { type_name, field }) => (type_name, field),
        other => panic!("expected FieldNotFound, got {other:?}"),
    }
}

#[test]
fn conforming_host_binds_every_property() {
    init_tracing();
    let host = ThrustHost::conforming();
    let tc = host.controller().expect("conforming host binds");

    assert_eq!(tc.surface().descriptors().len(), THRUST_PROPERTIES.len());
    for spec in THRUST_PROPERTIES {
        assert!(tc.surface().get(spec.name).is_ok(), "{} not readable", spec.name);
    }
}

#[test]
fn missing_electric_throttle_hi_aborts_construction() {
    init_tracing();
    let host = ThrustHost::without("electricThrottleHi");

    let err = host.controller().err().expect("construction must fail");
    let (type_name, field) = field_of(err);
    assert_eq!(field, "electricThrottleHi");
    assert_eq!(type_name, hostbind_tests::HOST_TYPE);

    // Nothing was written while binding the other eighteen fields.
    assert_eq!(host.external_writes(), 0);
}

#[test]
fn each_missing_field_is_named() {
    for (field, _) in bind_plan(THRUST_PROPERTIES).fields() {
        let host = ThrustHost::without(field);
        let (_, missing) = field_of(host.controller().err().expect("construction must fail"));
        assert_eq!(&missing, field);
        assert_eq!(host.external_writes(), 0);
    }
}

#[test]
fn flag_declared_as_number_is_a_kind_mismatch() {
    let plan = bind_plan(THRUST_PROPERTIES)
        .without("limitThrottle")
        .field("limitThrottle", FieldKind::Number);
    let host = ThrustHost::with_plan(&plan);

    match host.controller().err().expect("construction must fail") {
        ModuleError::Bind(BindError::KindMismatch {
            field,
            expected,
            found,
            ..
        }) => {
            assert_eq!(field, "limitThrottle");
            assert_eq!(expected, "Boolean");
            assert_eq!(found, "Number");
        }
        other => panic!("expected KindMismatch, got {other:?}"),
    }
}

#[test]
fn editable_field_declared_as_plain_number_is_a_kind_mismatch() {
    let plan = bind_plan(THRUST_PROPERTIES)
        .without("maxThrottle")
        .field("maxThrottle", FieldKind::Number);
    let host = ThrustHost::with_plan(&plan);

    assert!(matches!(
        host.controller().err().expect("construction must fail"),
        ModuleError::Bind(BindError::KindMismatch { field, .. }) if field == "maxThrottle"
    ));
}

#[test]
fn null_editable_cell_aborts_construction() {
    let host = ThrustHost::conforming();
    host.set_field("flameoutSafetyPct", HostValue::Null);

    assert!(matches!(
        host.controller().err().expect("construction must fail"),
        ModuleError::Bind(BindError::NullEditableCell { field, .. }) if field == "flameoutSafetyPct"
    ));
}
