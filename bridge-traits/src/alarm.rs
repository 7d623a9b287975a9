//! Alarm Scheduling Permission Query
//!
//! Exposes the OS scheduling service's view of the exact-alarm permission.

use crate::error::Result;

/// Alarm scheduler query trait
///
/// Reports whether the application currently holds the exact-alarm
/// scheduling permission. The result is produced fresh on every call and is
/// never cached by the dispatcher.
///
/// # Platform Support
///
/// - **Android**: `AlarmManager.canScheduleExactAlarms()` (API 31+)
/// - **Host/desktop shells**: configured grant state
#[async_trait::async_trait]
pub trait AlarmScheduler: Send + Sync {
    /// Query the current exact-alarm grant status.
    async fn can_schedule_exact_alarms(&self) -> Result<bool>;
}
