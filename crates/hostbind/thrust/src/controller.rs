//! The thrust-controller module
//!
//! Binds the host's thrust controller subsystem and exposes it both through
//! the name-addressed [`PropertySurface`] and through typed accessors.
//!
//! Numeric limits only take effect while their gating flag is enabled
//! (`max_throttle` needs `limit_throttle`, and so on). That is host
//! behaviour; nothing here enforces it.

use hostbind_core::HandleProvider;
use tracing::info;

use crate::catalog::*;
use crate::config::BridgeConfig;
use crate::error::{ModuleError, Result};
use crate::registry::RemoteModule;
use crate::status::DifferentialThrottleStatus;
use crate::surface::PropertySurface;
use crate::value::{PropertyInfo, PropertyValue};

/// Remote-control view of the host thrust controller.
pub struct ThrustController {
    surface: PropertySurface,
}

impl ThrustController {
    /// Name under which the module is exposed to remote callers.
    pub const MODULE_NAME: &'static str = "ThrustController";

    /// Fetch the configured subsystem and bind every catalog field.
    ///
    /// Fails without touching host state if any field is missing or of the
    /// wrong kind.
    pub fn new(
        provider: &dyn HandleProvider,
        config: &BridgeConfig,
    ) -> std::result::Result<Self, ModuleError> {
        let handle = provider.handle(&config.module_name)?;
        let specs = catalog(&config.optional_fields);
        let surface = PropertySurface::bind(handle, &specs, config.trace_writes)?;

        info!(
            module = Self::MODULE_NAME,
            host_type = surface.handle().descriptor().name(),
            properties = surface.descriptors().len(),
            "Module bound"
        );
        Ok(Self { surface })
    }

    pub fn surface(&self) -> &PropertySurface {
        &self.surface
    }

    pub fn limit_dynamic_pressure(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_DYNAMIC_PRESSURE)
    }

    pub fn set_limit_dynamic_pressure(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_DYNAMIC_PRESSURE, value.into())
    }

    /// Maximum dynamic pressure in Pa.
    pub fn max_dynamic_pressure(&self) -> Result<f64> {
        self.surface.get_double(MAX_DYNAMIC_PRESSURE)
    }

    pub fn set_max_dynamic_pressure(&self, value: f64) -> Result<()> {
        self.surface.set(MAX_DYNAMIC_PRESSURE, value.into())
    }

    /// Throttle back to keep parts from overheating.
    pub fn limit_to_prevent_overheats(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_TO_PREVENT_OVERHEATS)
    }

    pub fn set_limit_to_prevent_overheats(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_TO_PREVENT_OVERHEATS, value.into())
    }

    pub fn limit_acceleration(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_ACCELERATION)
    }

    pub fn set_limit_acceleration(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_ACCELERATION, value.into())
    }

    /// Acceleration ceiling in m/s².
    pub fn max_acceleration(&self) -> Result<f64> {
        self.surface.get_double(MAX_ACCELERATION)
    }

    pub fn set_max_acceleration(&self, value: f64) -> Result<()> {
        self.surface.set(MAX_ACCELERATION, value.into())
    }

    pub fn limit_throttle(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_THROTTLE)
    }

    pub fn set_limit_throttle(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_THROTTLE, value.into())
    }

    /// Throttle ceiling, between 0 and 1.
    pub fn max_throttle(&self) -> Result<f64> {
        self.surface.get_double(MAX_THROTTLE)
    }

    pub fn set_max_throttle(&self, value: f64) -> Result<()> {
        self.surface.set(MAX_THROTTLE, value.into())
    }

    pub fn limiter_min_throttle(&self) -> Result<bool> {
        self.surface.get_bool(LIMITER_MIN_THROTTLE)
    }

    pub fn set_limiter_min_throttle(&self, value: bool) -> Result<()> {
        self.surface.set(LIMITER_MIN_THROTTLE, value.into())
    }

    /// Throttle floor, between 0 and 1.
    pub fn min_throttle(&self) -> Result<f64> {
        self.surface.get_double(MIN_THROTTLE)
    }

    pub fn set_min_throttle(&self, value: f64) -> Result<()> {
        self.surface.set(MIN_THROTTLE, value.into())
    }

    pub fn smooth_throttle(&self) -> Result<bool> {
        self.surface.get_bool(SMOOTH_THROTTLE)
    }

    pub fn set_smooth_throttle(&self, value: bool) -> Result<()> {
        self.surface.set(SMOOTH_THROTTLE, value.into())
    }

    pub fn throttle_smoothing_time(&self) -> Result<f64> {
        self.surface.get_double(THROTTLE_SMOOTHING_TIME)
    }

    pub fn set_throttle_smoothing_time(&self, value: f64) -> Result<()> {
        self.surface.set(THROTTLE_SMOOTHING_TIME, value.into())
    }

    pub fn limit_to_prevent_flameout(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_TO_PREVENT_FLAMEOUT)
    }

    pub fn set_limit_to_prevent_flameout(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_TO_PREVENT_FLAMEOUT, value.into())
    }

    /// Jet safety margin, between 0 and 1.
    pub fn flameout_safety_pct(&self) -> Result<f64> {
        self.surface.get_double(FLAMEOUT_SAFETY_PCT)
    }

    pub fn set_flameout_safety_pct(&self, value: f64) -> Result<()> {
        self.surface.set(FLAMEOUT_SAFETY_PCT, value.into())
    }

    pub fn manage_intakes(&self) -> Result<bool> {
        self.surface.get_bool(MANAGE_INTAKES)
    }

    pub fn set_manage_intakes(&self, value: bool) -> Result<()> {
        self.surface.set(MANAGE_INTAKES, value.into())
    }

    pub fn differential_throttle(&self) -> Result<bool> {
        self.surface.get_bool(DIFFERENTIAL_THROTTLE)
    }

    pub fn set_differential_throttle(&self, value: bool) -> Result<()> {
        self.surface.set(DIFFERENTIAL_THROTTLE, value.into())
    }

    /// Result of the host's last differential-throttle solve.
    pub fn differential_throttle_status(&self) -> Result<DifferentialThrottleStatus> {
        self.surface.get_status(DIFFERENTIAL_THROTTLE_STATUS)
    }

    pub fn electric_throttle(&self) -> Result<bool> {
        self.surface.get_bool(ELECTRIC_THROTTLE)
    }

    pub fn set_electric_throttle(&self, value: bool) -> Result<()> {
        self.surface.set(ELECTRIC_THROTTLE, value.into())
    }

    pub fn electric_throttle_lo(&self) -> Result<f64> {
        self.surface.get_double(ELECTRIC_THROTTLE_LO)
    }

    pub fn set_electric_throttle_lo(&self, value: f64) -> Result<()> {
        self.surface.set(ELECTRIC_THROTTLE_LO, value.into())
    }

    pub fn electric_throttle_hi(&self) -> Result<f64> {
        self.surface.get_double(ELECTRIC_THROTTLE_HI)
    }

    pub fn set_electric_throttle_hi(&self, value: f64) -> Result<()> {
        self.surface.set(ELECTRIC_THROTTLE_HI, value.into())
    }

    /// Only available when enabled in [`crate::config::OptionalFields`].
    pub fn limit_to_prevent_unstable_ignition(&self) -> Result<bool> {
        self.surface.get_bool(LIMIT_TO_PREVENT_UNSTABLE_IGNITION)
    }

    pub fn set_limit_to_prevent_unstable_ignition(&self, value: bool) -> Result<()> {
        self.surface.set(LIMIT_TO_PREVENT_UNSTABLE_IGNITION, value.into())
    }

    /// Only available when enabled in [`crate::config::OptionalFields`].
    pub fn auto_rcs_ullaging(&self) -> Result<bool> {
        self.surface.get_bool(AUTO_RCS_ULLAGING)
    }

    pub fn set_auto_rcs_ullaging(&self, value: bool) -> Result<()> {
        self.surface.set(AUTO_RCS_ULLAGING, value.into())
    }
}

impl RemoteModule for ThrustController {
    fn name(&self) -> &str {
        Self::MODULE_NAME
    }

    fn describe(&self) -> Vec<PropertyInfo> {
        self.surface.describe()
    }

    fn get(&self, property: &str) -> Result<PropertyValue> {
        self.surface.get(property)
    }

    fn set(&self, property: &str, value: PropertyValue) -> Result<()> {
        self.surface.set(property, value)
    }
}
