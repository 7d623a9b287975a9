//! End-to-end dispatch scenarios against the host bridge shims.
//!
//! These tests exercise the full path from a wire operation name through
//! the capability gate and fallback chains, simulating devices below and
//! above the gating API levels and OEM skins missing the preferred
//! settings surfaces.

use bridge_host::{HostAlarmScheduler, HostDevice, HostNavigator, HostPowerManager};
use bridge_traits::settings::SettingsTarget;
use core_settings::{BridgeDependencies, Outcome, SettingsBridge};
use std::sync::Arc;

struct Harness {
    bridge: SettingsBridge,
    navigator: Arc<HostNavigator>,
}

fn harness(api_level: u32, navigator: HostNavigator) -> Harness {
    let navigator = Arc::new(navigator);
    let bridge = SettingsBridge::new(BridgeDependencies::new(
        Arc::new(HostDevice::new(api_level, "com.example.app")),
        navigator.clone(),
        Arc::new(HostAlarmScheduler::new(true)),
        Arc::new(HostPowerManager::new(false)),
    ));
    Harness { bridge, navigator }
}

#[tokio::test]
async fn unrecognized_names_always_yield_not_implemented() {
    let h = harness(34, HostNavigator::new());

    for name in ["openNotificationSettings", "handle", "OPENEXACTALARMSETTINGS", ""] {
        assert_eq!(h.bridge.handle(name).await, Outcome::NotImplemented);
    }
    assert!(h.navigator.launched().is_empty());
}

#[tokio::test]
async fn queries_below_gate_report_granted_regardless_of_services() {
    // Both backing services would deny, and the power service would even
    // fail, but below the gates neither is consulted.
    let navigator = Arc::new(HostNavigator::new());
    let bridge = SettingsBridge::new(BridgeDependencies::new(
        Arc::new(HostDevice::new(21, "com.example.app")),
        navigator,
        Arc::new(HostAlarmScheduler::new(false)),
        Arc::new(HostPowerManager::failing()),
    ));

    assert_eq!(bridge.handle("canScheduleExactAlarms").await, Outcome::Bool(true));
    assert_eq!(
        bridge.handle("isIgnoringBatteryOptimizations").await,
        Outcome::Bool(true)
    );
}

#[tokio::test]
async fn open_exact_alarm_settings_below_gate_attempts_nothing() {
    let h = harness(30, HostNavigator::new());

    assert_eq!(h.bridge.handle("openExactAlarmSettings").await, Outcome::Bool(false));
    assert!(h.navigator.launched().is_empty());
}

#[tokio::test]
async fn open_exact_alarm_settings_at_gate_launches_scoped_surface() {
    let h = harness(31, HostNavigator::new());

    assert_eq!(h.bridge.handle("openExactAlarmSettings").await, Outcome::Bool(true));

    let launched = h.navigator.launched();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].target, SettingsTarget::RequestScheduleExactAlarm);
    assert_eq!(launched[0].package.as_deref(), Some("com.example.app"));
}

#[tokio::test]
async fn can_schedule_exact_alarms_reflects_grant_above_gate() {
    let navigator = Arc::new(HostNavigator::new());
    let scheduler = Arc::new(HostAlarmScheduler::new(true));
    let bridge = SettingsBridge::new(BridgeDependencies::new(
        Arc::new(HostDevice::new(33, "com.example.app")),
        navigator,
        scheduler.clone(),
        Arc::new(HostPowerManager::new(false)),
    ));

    assert_eq!(bridge.handle("canScheduleExactAlarms").await, Outcome::Bool(true));

    scheduler.set_granted(false);
    assert_eq!(bridge.handle("canScheduleExactAlarms").await, Outcome::Bool(false));
}

#[tokio::test]
async fn query_operations_are_idempotent() {
    let h = harness(33, HostNavigator::new());

    let first = h.bridge.handle("canScheduleExactAlarms").await;
    let second = h.bridge.handle("canScheduleExactAlarms").await;
    assert_eq!(first, second);

    let first = h.bridge.handle("isIgnoringBatteryOptimizations").await;
    let second = h.bridge.handle("isIgnoringBatteryOptimizations").await;
    assert_eq!(first, second);

    assert!(h.navigator.launched().is_empty());
}

#[tokio::test]
async fn request_exemption_falls_back_to_general_list_exactly_once() {
    let h = harness(
        29,
        HostNavigator::new().with_unresolvable(SettingsTarget::RequestIgnoreBatteryOptimizations),
    );

    assert_eq!(
        h.bridge.handle("requestIgnoreBatteryOptimizations").await,
        Outcome::Bool(true)
    );

    assert_eq!(
        h.navigator.launch_count(SettingsTarget::RequestIgnoreBatteryOptimizations),
        0
    );
    assert_eq!(
        h.navigator.launch_count(SettingsTarget::BatteryOptimizationSettings),
        1
    );
    assert_eq!(h.navigator.launch_count(SettingsTarget::ApplicationDetails), 0);
}

#[tokio::test]
async fn request_exemption_safety_net_catches_erroring_tiers() {
    // The direct request resolves but its launch blows up; the safety net
    // takes over without trying the general list.
    let h = harness(
        29,
        HostNavigator::new().with_launch_failure(SettingsTarget::RequestIgnoreBatteryOptimizations),
    );

    assert_eq!(
        h.bridge.handle("requestIgnoreBatteryOptimizations").await,
        Outcome::Bool(true)
    );

    assert_eq!(h.navigator.launch_count(SettingsTarget::ApplicationDetails), 1);
    assert_eq!(
        h.navigator.launch_count(SettingsTarget::BatteryOptimizationSettings),
        0
    );
}

#[tokio::test]
async fn request_exemption_fails_when_even_the_safety_net_fails() {
    let h = harness(
        29,
        HostNavigator::new()
            .with_launch_failure(SettingsTarget::RequestIgnoreBatteryOptimizations)
            .with_launch_failure(SettingsTarget::ApplicationDetails),
    );

    match h.bridge.handle("requestIgnoreBatteryOptimizations").await {
        Outcome::Error { code, message } => {
            assert_eq!(code, "ERROR");
            assert!(message.starts_with("Failed to open any settings: "));
        }
        other => panic!("expected error outcome, got {other:?}"),
    }
    assert!(h.navigator.launched().is_empty());
}

#[tokio::test]
async fn open_battery_settings_falls_back_to_app_details_unconditionally() {
    let h = harness(
        29,
        HostNavigator::new()
            .with_unresolvable(SettingsTarget::BatteryOptimizationSettings)
            // The fallback tier is never probed, so an unresolvable app
            // details surface must still be launched.
            .with_unresolvable(SettingsTarget::ApplicationDetails),
    );

    assert_eq!(
        h.bridge.handle("openBatteryOptimizationSettings").await,
        Outcome::Bool(true)
    );

    let launched = h.navigator.launched();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].target, SettingsTarget::ApplicationDetails);
    assert_eq!(launched[0].package.as_deref(), Some("com.example.app"));
}

#[tokio::test]
async fn open_battery_settings_reports_failure_without_a_safety_net() {
    let h = harness(
        29,
        HostNavigator::new().with_resolve_failure(SettingsTarget::BatteryOptimizationSettings),
    );

    match h.bridge.handle("openBatteryOptimizationSettings").await {
        Outcome::Error { code, message } => {
            assert_eq!(code, "ERROR");
            assert!(message.starts_with("Failed to open battery settings: "));
        }
        other => panic!("expected error outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let h = harness(33, HostNavigator::new());

    let (a, b) = tokio::join!(
        h.bridge.handle("canScheduleExactAlarms"),
        h.bridge.handle("isIgnoringBatteryOptimizations"),
    );

    assert_eq!(a, Outcome::Bool(true));
    assert_eq!(b, Outcome::Bool(false));
}
