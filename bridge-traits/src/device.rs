//! Host Device Information
//!
//! Provides the static facts about the host device that gate dispatcher
//! behavior: the platform API level and the application's own identity.

/// Device information trait
///
/// Abstracts the host platform's build/version facts so the dispatcher can
/// apply OS-version-gated rules without touching platform APIs directly.
///
/// # Platform Support
///
/// - **Android**: `Build.VERSION.SDK_INT` and `Context.getPackageName()`
/// - **Host/desktop shells**: fixed values configured at construction
///
/// # Example
///
/// ```ignore
/// use bridge_traits::device::DeviceInfo;
///
/// fn supports_exact_alarm_gate(device: &dyn DeviceInfo) -> bool {
///     device.api_level() >= 31
/// }
/// ```
pub trait DeviceInfo: Send + Sync {
    /// Platform API level of the running OS build.
    fn api_level(&self) -> u32;

    /// The application's own package identity, used to scope settings
    /// navigation targets to this app specifically.
    fn package_name(&self) -> String;
}
