//! Settings Navigator Shim
//!
//! Simulates the OS settings surfaces: which targets are resolvable, which
//! interactions fail, and which launches happened. Desktop shells use it as
//! a stand-in for real navigation; tests use it to script OEM variance.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    settings::{SettingsAction, SettingsNavigator, SettingsTarget},
};
use std::collections::HashSet;
use std::sync::Mutex;
use tracing::debug;

/// Simulated settings navigator.
///
/// Every target is resolvable by default; configure deviations with the
/// `with_*` builders. Launches are recorded and can be inspected afterward.
#[derive(Debug, Default)]
pub struct HostNavigator {
    unresolvable: HashSet<SettingsTarget>,
    resolve_failures: HashSet<SettingsTarget>,
    launch_failures: HashSet<SettingsTarget>,
    launched: Mutex<Vec<SettingsAction>>,
}

impl HostNavigator {
    /// A navigator on which every target resolves and launches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a target as having no handler: resolvability probes report
    /// `false`, cleanly.
    pub fn with_unresolvable(mut self, target: SettingsTarget) -> Self {
        self.unresolvable.insert(target);
        self
    }

    /// Make resolvability probes for a target error out.
    pub fn with_resolve_failure(mut self, target: SettingsTarget) -> Self {
        self.resolve_failures.insert(target);
        self
    }

    /// Make launches of a target error out.
    pub fn with_launch_failure(mut self, target: SettingsTarget) -> Self {
        self.launch_failures.insert(target);
        self
    }

    /// Snapshot of every action launched so far, in order.
    pub fn launched(&self) -> Vec<SettingsAction> {
        self.launched.lock().unwrap().clone()
    }

    /// How many launches targeted the given surface.
    pub fn launch_count(&self, target: SettingsTarget) -> usize {
        self.launched
            .lock()
            .unwrap()
            .iter()
            .filter(|action| action.target == target)
            .count()
    }
}

#[async_trait]
impl SettingsNavigator for HostNavigator {
    async fn can_resolve(&self, action: &SettingsAction) -> Result<bool> {
        if self.resolve_failures.contains(&action.target) {
            return Err(BridgeError::OperationFailed(format!(
                "package manager query failed for {:?}",
                action.target
            )));
        }

        let resolvable = !self.unresolvable.contains(&action.target);
        debug!(surface = ?action.target, resolvable, "resolvability probe");
        Ok(resolvable)
    }

    async fn launch(&self, action: &SettingsAction) -> Result<()> {
        if self.launch_failures.contains(&action.target) {
            return Err(BridgeError::OperationFailed(format!(
                "no activity handles {:?}",
                action.target
            )));
        }

        debug!(surface = ?action.target, package = ?action.package, "launching settings surface");
        self.launched.lock().unwrap().push(action.clone());
        Ok(())
    }
}
