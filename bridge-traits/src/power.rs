//! Power Management Exemption Query
//!
//! Exposes the OS power service's view of the battery-optimization
//! exemption for a given application.

use crate::error::Result;

/// Power manager query trait
///
/// Reports whether the named application is currently exempt from
/// battery-optimization throttling. The result is produced fresh on every
/// call and is never cached by the dispatcher.
///
/// # Platform Support
///
/// - **Android**: `PowerManager.isIgnoringBatteryOptimizations(package)` (API 23+)
/// - **Host/desktop shells**: configured exemption state
#[async_trait::async_trait]
pub trait PowerManager: Send + Sync {
    /// Query the current battery-optimization exemption for `package`.
    async fn is_ignoring_battery_optimizations(&self, package: &str) -> Result<bool>;
}
