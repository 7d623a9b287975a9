//! Settings dispatcher core.
//!
//! This crate wires host-provided bridge implementations (device info,
//! settings navigation, alarm-scheduler and power-manager queries) into the
//! request dispatcher that answers the application's platform-channel
//! requests about the exact-alarm permission and the battery-optimization
//! exemption.
//!
//! The dispatcher is stateless: every call queries the OS facilities fresh,
//! applies the API-level capability gate, and where a user-facing redirect
//! is required walks an ordered fallback chain of settings surfaces.
//! Launching a settings surface is fire-and-forget; a `true` result records
//! a successful hand-off to the OS UI, not any user decision.
//!
//! ```ignore
//! use core_settings::{BridgeDependencies, SettingsBridge};
//! use std::sync::Arc;
//!
//! let bridge = SettingsBridge::new(BridgeDependencies::new(
//!     device, navigator, alarm_scheduler, power_manager,
//! ));
//! let outcome = bridge.handle("canScheduleExactAlarms").await;
//! ```

pub mod bridge;
pub mod capability;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod operation;
pub mod outcome;

pub use error::{Error, Result};

// Re-export commonly used types
pub use bridge::{BridgeDependencies, SettingsBridge};
pub use capability::Capability;
pub use fallback::{FallbackChain, FallbackTier};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use operation::Operation;
pub use outcome::Outcome;
