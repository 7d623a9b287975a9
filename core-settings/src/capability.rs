//! Capability Gate
//!
//! Maps the host API level to the OS capabilities the dispatcher cares
//! about, so procedures consult a named gate instead of comparing raw
//! version numbers at call sites.

/// API level that introduced the exact-alarm scheduling restriction
/// (Android 12 / S).
pub const EXACT_ALARM_RESTRICTION_API: u32 = 31;

/// API level that introduced the battery-optimization exemption API
/// (Android 6 / M).
pub const BATTERY_OPTIMIZATION_API: u32 = 23;

/// An OS capability whose presence depends on the host API level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Scoped exact-alarm permission management exists.
    ExactAlarmScheduling,
    /// Battery-optimization regime and its exemption API exist.
    BatteryOptimizationExemption,
}

impl Capability {
    /// The lowest API level on which this capability exists.
    pub const fn min_api_level(self) -> u32 {
        match self {
            Self::ExactAlarmScheduling => EXACT_ALARM_RESTRICTION_API,
            Self::BatteryOptimizationExemption => BATTERY_OPTIMIZATION_API,
        }
    }

    /// Whether the capability exists on the given API level.
    pub const fn supported_on(self, api_level: u32) -> bool {
        api_level >= self.min_api_level()
    }
}
