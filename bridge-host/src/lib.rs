//! # Host Bridge Shims
//!
//! Simulated implementations of the bridge traits for desktop shells and
//! tests.
//!
//! ## Overview
//!
//! On a device the bridge traits are implemented against real OS services;
//! on a development host there are none. This crate provides configurable
//! stand-ins for all of them:
//! - `HostDevice` with a fixed API level and package identity
//! - `HostNavigator` simulating resolvable targets and recording launches
//! - `HostAlarmScheduler` / `HostPowerManager` with settable grant state
//!   and injectable failures
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_host::{HostAlarmScheduler, HostDevice, HostNavigator, HostPowerManager};
//! use std::sync::Arc;
//!
//! let device = Arc::new(HostDevice::new(33, "com.example.app"));
//! let navigator = Arc::new(HostNavigator::new());
//! // Wire into core_settings::BridgeDependencies
//! ```

mod alarm;
mod device;
mod navigator;
mod power;

pub use alarm::HostAlarmScheduler;
pub use device::HostDevice;
pub use navigator::HostNavigator;
pub use power::HostPowerManager;
