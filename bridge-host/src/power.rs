//! Power Manager Shim

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    power::PowerManager,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Simulated power manager with a settable exemption state.
#[derive(Debug)]
pub struct HostPowerManager {
    exempt: AtomicBool,
    failing: bool,
}

impl HostPowerManager {
    /// A power manager reporting the given exemption state.
    pub fn new(exempt: bool) -> Self {
        Self {
            exempt: AtomicBool::new(exempt),
            failing: false,
        }
    }

    /// A power manager whose queries error out, to simulate a dead service.
    pub fn failing() -> Self {
        Self {
            exempt: AtomicBool::new(false),
            failing: true,
        }
    }

    /// Flip the simulated exemption state.
    pub fn set_exempt(&self, exempt: bool) {
        self.exempt.store(exempt, Ordering::SeqCst);
    }
}

#[async_trait]
impl PowerManager for HostPowerManager {
    async fn is_ignoring_battery_optimizations(&self, package: &str) -> Result<bool> {
        if self.failing {
            return Err(BridgeError::OperationFailed(
                "power service unavailable".to_string(),
            ));
        }

        let exempt = self.exempt.load(Ordering::SeqCst);
        debug!(package, exempt, "battery-optimization exemption query");
        Ok(exempt)
    }
}
