//! Settings Navigation Abstraction
//!
//! Describes system-settings destinations and the facility that hands the
//! user off to them.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A system-settings surface the user can be navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsTarget {
    /// Per-app exact-alarm permission management screen.
    RequestScheduleExactAlarm,
    /// Per-app "exempt this app from battery optimization" request dialog.
    RequestIgnoreBatteryOptimizations,
    /// General battery optimization settings list (not app-specific).
    BatteryOptimizationSettings,
    /// This application's own detail-settings screen.
    ApplicationDetails,
}

/// A settings navigation request: a target surface, optionally scoped to a
/// specific application identity.
///
/// Scoping corresponds to attaching a `package:<name>` data URI on platforms
/// that support it; an unscoped action opens the general surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsAction {
    pub target: SettingsTarget,
    pub package: Option<String>,
}

impl SettingsAction {
    /// An action scoped to the given application identity.
    pub fn scoped(target: SettingsTarget, package: impl Into<String>) -> Self {
        Self {
            target,
            package: Some(package.into()),
        }
    }

    /// An action opening the general (app-agnostic) surface.
    pub fn global(target: SettingsTarget) -> Self {
        Self {
            target,
            package: None,
        }
    }

    /// Whether this action carries application scoping.
    pub fn is_scoped(&self) -> bool {
        self.package.is_some()
    }
}

/// Settings navigator trait
///
/// Hands the user off to a system-settings surface. Launching is
/// fire-and-forget: a successful [`launch`](SettingsNavigator::launch) means
/// the navigation was handed to the OS UI, never that the user completed (or
/// will complete) any settings change.
///
/// # Platform Support
///
/// - **Android**: `Intent.resolveActivity` / `startActivity` with
///   `FLAG_ACTIVITY_NEW_TASK`
/// - **Host/desktop shells**: simulated surfaces for development and tests
#[async_trait::async_trait]
pub trait SettingsNavigator: Send + Sync {
    /// Check whether the OS has a handler for this action, without
    /// launching it. Used to avoid dead-end navigation attempts.
    async fn can_resolve(&self, action: &SettingsAction) -> Result<bool>;

    /// Launch the navigation, handing control to the OS UI.
    async fn launch(&self, action: &SettingsAction) -> Result<()>;
}
