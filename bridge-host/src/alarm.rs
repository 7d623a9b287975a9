//! Alarm Scheduler Shim

use async_trait::async_trait;
use bridge_traits::{
    alarm::AlarmScheduler,
    error::{BridgeError, Result},
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Simulated alarm scheduler with a settable grant state.
#[derive(Debug)]
pub struct HostAlarmScheduler {
    granted: AtomicBool,
    failing: bool,
}

impl HostAlarmScheduler {
    /// A scheduler reporting the given grant state.
    pub fn new(granted: bool) -> Self {
        Self {
            granted: AtomicBool::new(granted),
            failing: false,
        }
    }

    /// A scheduler whose queries error out, to simulate a dead service.
    pub fn failing() -> Self {
        Self {
            granted: AtomicBool::new(false),
            failing: true,
        }
    }

    /// Flip the simulated grant state.
    pub fn set_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }
}

#[async_trait]
impl AlarmScheduler for HostAlarmScheduler {
    async fn can_schedule_exact_alarms(&self) -> Result<bool> {
        if self.failing {
            return Err(BridgeError::OperationFailed(
                "alarm service unavailable".to_string(),
            ));
        }

        let granted = self.granted.load(Ordering::SeqCst);
        debug!(granted, "exact-alarm grant query");
        Ok(granted)
    }
}
