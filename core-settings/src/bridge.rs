//! The Settings Bridge Dispatcher
//!
//! Maps an operation name arriving over the platform channel to one of five
//! version-gated procedures, executing a fallback chain where a user-facing
//! redirect is required.

use std::sync::Arc;

use bridge_traits::{
    alarm::AlarmScheduler,
    device::DeviceInfo,
    power::PowerManager,
    settings::{SettingsAction, SettingsNavigator, SettingsTarget},
};
use tracing::debug;

use crate::capability::Capability;
use crate::fallback::{FallbackChain, FallbackTier};
use crate::operation::Operation;
use crate::outcome::Outcome;

/// Aggregated handle to all bridge dependencies the dispatcher requires.
pub struct BridgeDependencies {
    pub device: Arc<dyn DeviceInfo>,
    pub navigator: Arc<dyn SettingsNavigator>,
    pub alarm_scheduler: Arc<dyn AlarmScheduler>,
    pub power_manager: Arc<dyn PowerManager>,
}

impl BridgeDependencies {
    /// Construct a dependency bundle from explicit bridge handles.
    pub fn new(
        device: Arc<dyn DeviceInfo>,
        navigator: Arc<dyn SettingsNavigator>,
        alarm_scheduler: Arc<dyn AlarmScheduler>,
        power_manager: Arc<dyn PowerManager>,
    ) -> Self {
        Self {
            device,
            navigator,
            alarm_scheduler,
            power_manager,
        }
    }
}

/// The request dispatcher exposed to the host application's channel layer.
///
/// Stateless across calls: every [`handle`](Self::handle) invocation queries
/// the OS facilities fresh, runs to completion without awaiting user action,
/// and returns an [`Outcome`]. Concurrent calls are independent.
#[derive(Clone)]
pub struct SettingsBridge {
    deps: Arc<BridgeDependencies>,
}

impl SettingsBridge {
    /// Create a new bridge from the provided dependencies.
    pub fn new(deps: BridgeDependencies) -> Self {
        Self {
            deps: Arc::new(deps),
        }
    }

    /// Access the bridge dependencies being used by the dispatcher.
    pub fn dependencies(&self) -> Arc<BridgeDependencies> {
        Arc::clone(&self.deps)
    }

    /// Handle one named request.
    ///
    /// Names outside the fixed vocabulary yield
    /// [`Outcome::NotImplemented`]; collaborator failures are caught at the
    /// procedure boundary and converted to [`Outcome::Error`], never
    /// propagated raw.
    pub async fn handle(&self, operation_name: &str) -> Outcome {
        let Some(operation) = Operation::parse(operation_name) else {
            debug!(operation = operation_name, "unknown operation name");
            return Outcome::NotImplemented;
        };

        debug!(operation = operation.as_str(), "dispatching");
        match operation {
            Operation::OpenExactAlarmSettings => self.open_exact_alarm_settings().await,
            Operation::CanScheduleExactAlarms => self.can_schedule_exact_alarms().await,
            Operation::IsIgnoringBatteryOptimizations => {
                self.is_ignoring_battery_optimizations().await
            }
            Operation::RequestIgnoreBatteryOptimizations => {
                self.request_ignore_battery_optimizations().await
            }
            Operation::OpenBatteryOptimizationSettings => {
                self.open_battery_optimization_settings().await
            }
        }
    }

    /// Navigate to the per-app exact-alarm permission screen.
    ///
    /// Below the gate there is no such screen and the permission is
    /// implicitly available, so no navigation is attempted.
    async fn open_exact_alarm_settings(&self) -> Outcome {
        if !Capability::ExactAlarmScheduling.supported_on(self.deps.device.api_level()) {
            debug!("exact-alarm settings screen absent on this API level");
            return Outcome::Bool(false);
        }

        let action = SettingsAction::scoped(
            SettingsTarget::RequestScheduleExactAlarm,
            self.deps.device.package_name(),
        );
        match self.deps.navigator.launch(&action).await {
            Ok(()) => Outcome::Bool(true),
            Err(err) => Outcome::failure(format!("Failed to open settings: {err}")),
        }
    }

    /// Query the exact-alarm grant status. Below the gate no restriction
    /// applies and the permission is treated as granted.
    async fn can_schedule_exact_alarms(&self) -> Outcome {
        if !Capability::ExactAlarmScheduling.supported_on(self.deps.device.api_level()) {
            return Outcome::Bool(true);
        }

        match self.deps.alarm_scheduler.can_schedule_exact_alarms().await {
            Ok(granted) => Outcome::Bool(granted),
            Err(err) => Outcome::failure(format!("Failed to check permission: {err}")),
        }
    }

    /// Query the battery-optimization exemption. Below the gate no
    /// optimization regime applies and the app is treated as exempt.
    async fn is_ignoring_battery_optimizations(&self) -> Outcome {
        if !Capability::BatteryOptimizationExemption.supported_on(self.deps.device.api_level()) {
            return Outcome::Bool(true);
        }

        let package = self.deps.device.package_name();
        match self
            .deps
            .power_manager
            .is_ignoring_battery_optimizations(&package)
            .await
        {
            Ok(exempt) => Outcome::Bool(exempt),
            Err(err) => Outcome::failure(format!("Failed to check battery optimization: {err}")),
        }
    }

    /// Three-tier escalation: the scoped direct-request dialog where the OS
    /// resolves it, the general battery settings list otherwise, and the
    /// app's own detail screen as safety net when a tier errored. OEM skins
    /// do not all ship the direct-request dialog, so the chain must never
    /// leave the user without some reachable surface.
    async fn request_ignore_battery_optimizations(&self) -> Outcome {
        if !Capability::BatteryOptimizationExemption.supported_on(self.deps.device.api_level()) {
            debug!("battery-optimization exemption absent on this API level");
            return Outcome::Bool(false);
        }

        let package = self.deps.device.package_name();
        let chain = FallbackChain::new(vec![
            FallbackTier::resolvable(SettingsAction::scoped(
                SettingsTarget::RequestIgnoreBatteryOptimizations,
                package.clone(),
            )),
            FallbackTier::unconditional(SettingsAction::global(
                SettingsTarget::BatteryOptimizationSettings,
            )),
        ])
        .with_safety_net(SettingsAction::scoped(
            SettingsTarget::ApplicationDetails,
            package,
        ));

        match chain.execute(self.deps.navigator.as_ref()).await {
            Ok(()) => Outcome::Bool(true),
            Err(err) => Outcome::failure(format!("Failed to open any settings: {err}")),
        }
    }

    /// Two-tier escalation with no version gate: the general battery
    /// settings list where resolvable, the app's own detail screen
    /// otherwise.
    async fn open_battery_optimization_settings(&self) -> Outcome {
        let chain = FallbackChain::new(vec![
            FallbackTier::resolvable(SettingsAction::global(
                SettingsTarget::BatteryOptimizationSettings,
            )),
            FallbackTier::unconditional(SettingsAction::scoped(
                SettingsTarget::ApplicationDetails,
                self.deps.device.package_name(),
            )),
        ]);

        match chain.execute(self.deps.navigator.as_ref()).await {
            Ok(()) => Outcome::Bool(true),
            Err(err) => Outcome::failure(format!("Failed to open battery settings: {err}")),
        }
    }
}
