//! What a remote-call transport sees: registration records and dispatch.

use hostbind_tests::ThrustHost;
use hostbind_thrust::{
    ModuleRegistry, PropertyError, PropertyKind, PropertyValue, RemoteModule, ThrustController,
};

fn registry(host: &ThrustHost) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    registry.register(Box::new(host.controller().unwrap())).unwrap();
    registry
}

#[test]
fn catalog_registration_records() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();
    let infos = tc.describe();

    let gate = |name: &str| {
        infos
            .iter()
            .find(|i| i.name == name)
            .unwrap_or_else(|| panic!("{name} missing"))
            .gated_by
            .clone()
    };
    assert_eq!(gate("MaxDynamicPressure").as_deref(), Some("LimitDynamicPressure"));
    assert_eq!(gate("MaxAcceleration").as_deref(), Some("LimitAcceleration"));
    assert_eq!(gate("MaxThrottle").as_deref(), Some("LimitThrottle"));
    assert_eq!(gate("MinThrottle").as_deref(), Some("LimiterMinThrottle"));
    assert_eq!(gate("ThrottleSmoothingTime").as_deref(), Some("SmoothThrottle"));
    assert_eq!(gate("FlameoutSafetyPct").as_deref(), Some("LimitToPreventFlameout"));
    assert_eq!(gate("ElectricThrottleLo").as_deref(), Some("ElectricThrottle"));
    assert_eq!(gate("ElectricThrottleHi").as_deref(), Some("ElectricThrottle"));
    assert_eq!(gate("LimitToPreventOverheats"), None);

    let status = infos.iter().find(|i| i.name == "DifferentialThrottleStatus").unwrap();
    assert_eq!(status.kind, PropertyKind::Enum);
    assert!(!status.writable);
    assert_eq!(infos.iter().filter(|i| !i.writable).count(), 1);
}

#[test]
fn registration_records_serialize_for_the_wire() {
    let host = ThrustHost::conforming();
    let tc = host.controller().unwrap();
    let json = serde_json::to_value(tc.describe()).unwrap();

    assert_eq!(json[1]["name"], "MaxDynamicPressure");
    assert_eq!(json[1]["kind"], "double");
    assert_eq!(json[1]["writable"], true);
    assert_eq!(json[1]["gated_by"], "LimitDynamicPressure");
}

#[test]
fn registry_dispatch_reaches_host() {
    let host = ThrustHost::conforming();
    let registry = registry(&host);

    registry
        .set(ThrustController::MODULE_NAME, "SmoothThrottle", PropertyValue::Bool(true))
        .unwrap();
    registry
        .set(ThrustController::MODULE_NAME, "ThrottleSmoothingTime", PropertyValue::Double(0.5))
        .unwrap();

    assert_eq!(host.field("smoothThrottle").as_bool(), Some(true));
    assert_eq!(host.field("throttleSmoothingTime").as_number(), Some(0.5));
}

#[test]
fn registry_rejects_bad_calls_without_side_effects() {
    let host = ThrustHost::conforming();
    let registry = registry(&host);

    assert!(matches!(
        registry.set(ThrustController::MODULE_NAME, "Warp", PropertyValue::Bool(true)),
        Err(PropertyError::UnknownProperty(_))
    ));
    assert!(matches!(
        registry.set(ThrustController::MODULE_NAME, "MaxThrottle", PropertyValue::Bool(true)),
        Err(PropertyError::ValueKindMismatch { .. })
    ));
    assert!(matches!(
        registry.get("Ascent", "MaxThrottle"),
        Err(PropertyError::UnknownModule(_))
    ));
    assert_eq!(host.external_writes(), 0);
}
