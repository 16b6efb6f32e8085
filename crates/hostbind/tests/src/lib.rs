//! Shared fixtures for the hostbind scenario and property tests.

use std::sync::Arc;

use hostbind_core::{
    BindPlan, HostValue, InMemoryHost, InMemoryObject, EDITABLE_TEXT_MEMBER,
    EDITABLE_VALUE_MEMBER,
};
use hostbind_thrust::{bind_plan, BridgeConfig, ModuleError, ThrustController, THRUST_PROPERTIES};

/// Runtime type name of the host's thrust controller.
pub const HOST_TYPE: &str = "MechJebModuleThrustController";

/// An in-memory host carrying one thrust-controller subsystem.
pub struct ThrustHost {
    pub host: InMemoryHost,
    pub instance: Arc<InMemoryObject>,
}

impl ThrustHost {
    /// A host with every field the base catalog needs.
    pub fn conforming() -> Self {
        Self::with_plan(&bind_plan(THRUST_PROPERTIES))
    }

    /// A host that lacks `field`.
    pub fn without(field: &str) -> Self {
        Self::with_plan(&bind_plan(THRUST_PROPERTIES).without(field))
    }

    pub fn with_plan(plan: &BindPlan) -> Self {
        let instance = InMemoryObject::conforming(HOST_TYPE, plan);
        let host = InMemoryHost::new();
        host.insert(ThrustController::MODULE_NAME, instance.clone());
        Self { host, instance }
    }

    pub fn controller(&self) -> Result<ThrustController, ModuleError> {
        self.controller_with(&BridgeConfig::default())
    }

    pub fn controller_with(&self, config: &BridgeConfig) -> Result<ThrustController, ModuleError> {
        ThrustController::new(&self.host, config)
    }

    /// Host-side read of a field.
    pub fn field(&self, name: &str) -> HostValue {
        self.instance.get_by_name(name).expect("field exists")
    }

    /// Host-side write of a field, as the host's own control loop would.
    pub fn set_field(&self, name: &str, value: HostValue) {
        self.instance.set_by_name(name, value).expect("field accepts value");
    }

    /// The editable cell installed in `field`.
    pub fn cell(&self, field: &str) -> Arc<InMemoryObject> {
        self.instance.cell(field).expect("editable cell")
    }

    /// Host-side write of an editable cell's payload, bypassing the bridge.
    pub fn set_cell_value(&self, field: &str, value: f64) {
        self.cell(field)
            .set_by_name(EDITABLE_VALUE_MEMBER, HostValue::Number(value))
            .expect("number accepted");
    }

    /// Cached text of the editable cell stored in `field`.
    pub fn cell_text(&self, field: &str) -> String {
        self.cell(field)
            .get_by_name(EDITABLE_TEXT_MEMBER)
            .expect("text member")
            .as_text()
            .expect("text value")
            .to_string()
    }

    /// Writes that arrived from outside the host, editable cells included.
    pub fn external_writes(&self) -> u64 {
        self.instance.external_writes()
    }
}

/// Route tracing output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("hostbind_core=debug,hostbind_thrust=debug")
            }),
        )
        .with_test_writer()
        .try_init();
}
