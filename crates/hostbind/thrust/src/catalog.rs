//! Property catalog of the thrust controller
//!
//! Each entry names the exposed property, the host field behind it, the kind
//! of that field and, for bounded numbers, the boolean property that gates
//! it. Gating is recorded here only; the host decides what a disabled limit
//! means.

use hostbind_core::{BindPlan, FieldKind};

use crate::config::OptionalFields;
use crate::value::PropertyKind;

/// Static description of one exposed property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
    pub gated_by: Option<&'static str>,
    /// Host field carrying a status computed for this property
    pub companion_status: Option<&'static str>,
}

impl PropertySpec {
    const fn flag(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            kind: FieldKind::Boolean,
            gated_by: None,
            companion_status: None,
        }
    }

    const fn editable(name: &'static str, field: &'static str, gated_by: &'static str) -> Self {
        Self {
            name,
            field,
            kind: FieldKind::EditableNumber,
            gated_by: Some(gated_by),
            companion_status: None,
        }
    }

    pub fn property_kind(&self) -> PropertyKind {
        match self.kind {
            FieldKind::Boolean => PropertyKind::Bool,
            FieldKind::Number | FieldKind::EditableNumber => PropertyKind::Double,
            FieldKind::EnumOrdinal => PropertyKind::Enum,
        }
    }

    /// Status properties are computed by the host.
    pub fn writable(&self) -> bool {
        self.kind != FieldKind::EnumOrdinal
    }
}

pub const LIMIT_DYNAMIC_PRESSURE: &str = "LimitDynamicPressure";
pub const MAX_DYNAMIC_PRESSURE: &str = "MaxDynamicPressure";
pub const LIMIT_TO_PREVENT_OVERHEATS: &str = "LimitToPreventOverheats";
pub const LIMIT_ACCELERATION: &str = "LimitAcceleration";
pub const MAX_ACCELERATION: &str = "MaxAcceleration";
pub const LIMIT_THROTTLE: &str = "LimitThrottle";
pub const MAX_THROTTLE: &str = "MaxThrottle";
pub const LIMITER_MIN_THROTTLE: &str = "LimiterMinThrottle";
pub const MIN_THROTTLE: &str = "MinThrottle";
pub const SMOOTH_THROTTLE: &str = "SmoothThrottle";
pub const THROTTLE_SMOOTHING_TIME: &str = "ThrottleSmoothingTime";
pub const LIMIT_TO_PREVENT_FLAMEOUT: &str = "LimitToPreventFlameout";
pub const FLAMEOUT_SAFETY_PCT: &str = "FlameoutSafetyPct";
pub const MANAGE_INTAKES: &str = "ManageIntakes";
pub const DIFFERENTIAL_THROTTLE: &str = "DifferentialThrottle";
pub const DIFFERENTIAL_THROTTLE_STATUS: &str = "DifferentialThrottleStatus";
pub const ELECTRIC_THROTTLE: &str = "ElectricThrottle";
pub const ELECTRIC_THROTTLE_LO: &str = "ElectricThrottleLo";
pub const ELECTRIC_THROTTLE_HI: &str = "ElectricThrottleHi";
pub const LIMIT_TO_PREVENT_UNSTABLE_IGNITION: &str = "LimitToPreventUnstableIgnition";
pub const AUTO_RCS_ULLAGING: &str = "AutoRcsUllaging";

/// Host field holding the differential-throttle solver status.
pub const DIFFERENTIAL_THROTTLE_SUCCESS_FIELD: &str = "differentialThrottleSuccess";

/// Properties every supported host version exposes, in transport order.
pub const THRUST_PROPERTIES: &[PropertySpec] = &[
    PropertySpec::flag(LIMIT_DYNAMIC_PRESSURE, "limitDynamicPressure"),
    PropertySpec::editable(MAX_DYNAMIC_PRESSURE, "maxDynamicPressure", LIMIT_DYNAMIC_PRESSURE),
    PropertySpec::flag(LIMIT_TO_PREVENT_OVERHEATS, "limitToPreventOverheats"),
    PropertySpec::flag(LIMIT_ACCELERATION, "limitAcceleration"),
    PropertySpec::editable(MAX_ACCELERATION, "maxAcceleration", LIMIT_ACCELERATION),
    PropertySpec::flag(LIMIT_THROTTLE, "limitThrottle"),
    PropertySpec::editable(MAX_THROTTLE, "maxThrottle", LIMIT_THROTTLE),
    PropertySpec::flag(LIMITER_MIN_THROTTLE, "limiterMinThrottle"),
    PropertySpec::editable(MIN_THROTTLE, "minThrottle", LIMITER_MIN_THROTTLE),
    PropertySpec::flag(SMOOTH_THROTTLE, "smoothThrottle"),
    PropertySpec {
        name: THROTTLE_SMOOTHING_TIME,
        field: "throttleSmoothingTime",
        kind: FieldKind::Number,
        gated_by: Some(SMOOTH_THROTTLE),
        companion_status: None,
    },
    PropertySpec::flag(LIMIT_TO_PREVENT_FLAMEOUT, "limitToPreventFlameout"),
    PropertySpec::editable(FLAMEOUT_SAFETY_PCT, "flameoutSafetyPct", LIMIT_TO_PREVENT_FLAMEOUT),
    PropertySpec::flag(MANAGE_INTAKES, "manageIntakes"),
    PropertySpec {
        name: DIFFERENTIAL_THROTTLE,
        field: "differentialThrottle",
        kind: FieldKind::Boolean,
        gated_by: None,
        companion_status: Some(DIFFERENTIAL_THROTTLE_SUCCESS_FIELD),
    },
    PropertySpec {
        name: DIFFERENTIAL_THROTTLE_STATUS,
        field: DIFFERENTIAL_THROTTLE_SUCCESS_FIELD,
        kind: FieldKind::EnumOrdinal,
        gated_by: None,
        companion_status: None,
    },
    PropertySpec::flag(ELECTRIC_THROTTLE, "electricThrottle"),
    PropertySpec::editable(ELECTRIC_THROTTLE_LO, "electricThrottleLo", ELECTRIC_THROTTLE),
    PropertySpec::editable(ELECTRIC_THROTTLE_HI, "electricThrottleHi", ELECTRIC_THROTTLE),
];

pub const UNSTABLE_IGNITION_PROPERTY: PropertySpec =
    PropertySpec::flag(LIMIT_TO_PREVENT_UNSTABLE_IGNITION, "limitToPreventUnstableIgnition");

pub const AUTO_RCS_ULLAGING_PROPERTY: PropertySpec =
    PropertySpec::flag(AUTO_RCS_ULLAGING, "autoRCSUllaging");

/// The full catalog for a configuration: the base properties plus whichever
/// optional host fields are enabled.
pub fn catalog(optional: &OptionalFields) -> Vec<PropertySpec> {
    let mut specs = THRUST_PROPERTIES.to_vec();
    if optional.limit_to_prevent_unstable_ignition {
        specs.push(UNSTABLE_IGNITION_PROPERTY);
    }
    if optional.auto_rcs_ullaging {
        specs.push(AUTO_RCS_ULLAGING_PROPERTY);
    }
    specs
}

/// Host fields `specs` need, companion status fields included, each listed
/// once.
pub fn bind_plan(specs: &[PropertySpec]) -> BindPlan {
    let mut plan = BindPlan::new();
    let fields = specs.iter().flat_map(|spec| {
        std::iter::once((spec.field, spec.kind))
            .chain(spec.companion_status.map(|f| (f, FieldKind::EnumOrdinal)))
    });
    for (field, kind) in fields {
        if !plan.fields().iter().any(|(f, _)| f == field) {
            plan = plan.field(field, kind);
        }
    }
    plan
}

/// The property gating `name`, if any.
pub fn gate_of(name: &str) -> Option<&'static str> {
    THRUST_PROPERTIES
        .iter()
        .find(|s| s.name == name)
        .and_then(|s| s.gated_by)
}
