//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the settings dispatcher and the
//! platform it runs on. Each trait represents an OS facility the dispatcher
//! consumes but that must be implemented differently per host (Android
//! device, desktop shell, test harness).
//!
//! ## Traits
//!
//! - [`DeviceInfo`](device::DeviceInfo) - API level and application identity
//! - [`SettingsNavigator`](settings::SettingsNavigator) - Resolve and launch
//!   system-settings surfaces
//! - [`AlarmScheduler`](alarm::AlarmScheduler) - Exact-alarm permission query
//! - [`PowerManager`](power::PowerManager) - Battery-optimization exemption query
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Platform implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Never panic across the bridge boundary
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks. Implementations must ensure thread safety.

pub mod alarm;
pub mod device;
pub mod error;
pub mod power;
pub mod settings;

pub use error::BridgeError;

// Re-export commonly used types
pub use alarm::AlarmScheduler;
pub use device::DeviceInfo;
pub use power::PowerManager;
pub use settings::{SettingsAction, SettingsNavigator, SettingsTarget};
