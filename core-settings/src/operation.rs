//! Operation Vocabulary
//!
//! The closed set of named requests the dispatcher accepts from the
//! application side of the channel.

use serde::{Deserialize, Serialize};

/// A named request arriving over the platform channel.
///
/// The wire names are fixed; anything outside this set is answered with
/// [`Outcome::NotImplemented`](crate::Outcome::NotImplemented) rather than
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Navigate to the per-app exact-alarm permission screen.
    OpenExactAlarmSettings,
    /// Query the current exact-alarm grant status.
    CanScheduleExactAlarms,
    /// Query the current battery-optimization exemption.
    IsIgnoringBatteryOptimizations,
    /// Ask the OS to exempt this app from battery optimization.
    RequestIgnoreBatteryOptimizations,
    /// Navigate to the battery optimization settings list.
    OpenBatteryOptimizationSettings,
}

impl Operation {
    /// Every operation in the vocabulary, in dispatch-table order.
    pub const ALL: [Self; 5] = [
        Self::OpenExactAlarmSettings,
        Self::CanScheduleExactAlarms,
        Self::IsIgnoringBatteryOptimizations,
        Self::RequestIgnoreBatteryOptimizations,
        Self::OpenBatteryOptimizationSettings,
    ];

    /// Parse a wire name into an operation. Returns `None` for names
    /// outside the fixed vocabulary.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "openExactAlarmSettings" => Some(Self::OpenExactAlarmSettings),
            "canScheduleExactAlarms" => Some(Self::CanScheduleExactAlarms),
            "isIgnoringBatteryOptimizations" => Some(Self::IsIgnoringBatteryOptimizations),
            "requestIgnoreBatteryOptimizations" => Some(Self::RequestIgnoreBatteryOptimizations),
            "openBatteryOptimizationSettings" => Some(Self::OpenBatteryOptimizationSettings),
            _ => None,
        }
    }

    /// The wire name of this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenExactAlarmSettings => "openExactAlarmSettings",
            Self::CanScheduleExactAlarms => "canScheduleExactAlarms",
            Self::IsIgnoringBatteryOptimizations => "isIgnoringBatteryOptimizations",
            Self::RequestIgnoreBatteryOptimizations => "requestIgnoreBatteryOptimizations",
            Self::OpenBatteryOptimizationSettings => "openBatteryOptimizationSettings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::parse(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(Operation::parse("openWifiSettings"), None);
        assert_eq!(Operation::parse(""), None);
        // Wire names are case-sensitive
        assert_eq!(Operation::parse("OpenExactAlarmSettings"), None);
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.as_str()));
        }
    }
}
