//! Host Device Shim

use bridge_traits::device::DeviceInfo;

/// Device info with fixed facts, configured at construction.
///
/// Desktop shells and tests use this to simulate any API level.
#[derive(Debug, Clone)]
pub struct HostDevice {
    api_level: u32,
    package_name: String,
}

impl HostDevice {
    /// Create a device reporting the given API level and package identity.
    pub fn new(api_level: u32, package_name: impl Into<String>) -> Self {
        Self {
            api_level,
            package_name: package_name.into(),
        }
    }
}

impl DeviceInfo for HostDevice {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn package_name(&self) -> String {
        self.package_name.clone()
    }
}
