//! Fallback Chain Execution
//!
//! Ordered escalation through decreasingly-preferred settings surfaces.
//! Each tier yields an explicit tri-state rather than signaling "try the
//! next one" through exception propagation: a tier either launched, was
//! cleanly unresolvable, or errored. Only an errored tier routes to the
//! safety-net action; a cleanly unresolvable tier falls through to the next
//! tier in order.

use bridge_traits::{
    error::{BridgeError, Result},
    settings::{SettingsAction, SettingsNavigator},
};
use tracing::{debug, warn};

/// One step of a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTier {
    pub action: SettingsAction,
    /// Probe the navigator for a handler before launching. Tiers without
    /// the probe launch unconditionally.
    pub check_resolvable: bool,
}

impl FallbackTier {
    /// A tier that is only launched if the OS reports a handler for it.
    pub fn resolvable(action: SettingsAction) -> Self {
        Self {
            action,
            check_resolvable: true,
        }
    }

    /// A tier launched without a resolvability probe.
    pub fn unconditional(action: SettingsAction) -> Self {
        Self {
            action,
            check_resolvable: false,
        }
    }
}

/// What happened when one tier was attempted.
#[derive(Debug)]
enum TierOutcome {
    /// The navigation was handed to the OS UI.
    Launched,
    /// The OS has no handler for this action; try the next tier.
    Unresolvable,
    /// An unexpected failure; escalate to the safety net, not the next tier.
    Errored(BridgeError),
}

/// An ordered sequence of settings actions, tried in order, where only the
/// ability to attempt the next action is checked before invocation. The
/// first attemptable action wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    tiers: Vec<FallbackTier>,
    safety_net: Option<SettingsAction>,
}

impl FallbackChain {
    pub fn new(tiers: Vec<FallbackTier>) -> Self {
        Self {
            tiers,
            safety_net: None,
        }
    }

    /// Attach a last-resort action, attempted only when a tier errored
    /// (never on clean fall-through).
    pub fn with_safety_net(mut self, action: SettingsAction) -> Self {
        self.safety_net = Some(action);
        self
    }

    /// Walk the tiers in order until one launches.
    ///
    /// Returns `Ok(())` once any tier (or the safety net) launched. Errors
    /// only when the safety net itself failed, when a tier errored and no
    /// safety net exists, or when every tier was cleanly unresolvable.
    pub async fn execute(&self, navigator: &dyn SettingsNavigator) -> Result<()> {
        for (index, tier) in self.tiers.iter().enumerate() {
            match Self::attempt(navigator, tier).await {
                TierOutcome::Launched => {
                    debug!(tier = index, surface = ?tier.action.target, "launched settings surface");
                    return Ok(());
                }
                TierOutcome::Unresolvable => {
                    debug!(tier = index, surface = ?tier.action.target, "unresolvable, falling through");
                }
                TierOutcome::Errored(err) => {
                    return self.launch_safety_net(navigator, err).await;
                }
            }
        }

        Err(BridgeError::NotAvailable(
            "no tier in the fallback chain was launchable".to_string(),
        ))
    }

    async fn attempt(navigator: &dyn SettingsNavigator, tier: &FallbackTier) -> TierOutcome {
        if tier.check_resolvable {
            match navigator.can_resolve(&tier.action).await {
                Ok(true) => {}
                Ok(false) => return TierOutcome::Unresolvable,
                Err(err) => return TierOutcome::Errored(err),
            }
        }

        match navigator.launch(&tier.action).await {
            Ok(()) => TierOutcome::Launched,
            Err(err) => TierOutcome::Errored(err),
        }
    }

    async fn launch_safety_net(
        &self,
        navigator: &dyn SettingsNavigator,
        cause: BridgeError,
    ) -> Result<()> {
        let Some(action) = &self.safety_net else {
            return Err(cause);
        };

        warn!(error = %cause, surface = ?action.target, "tier errored, launching safety net");
        navigator.launch(action).await
    }
}
