//! Video controller discovery through the OS hardware inventory

mod analyzer;
mod scripted;
#[cfg(feature = "sysfs")]
mod sysfs;
#[cfg(all(windows, feature = "wmi"))]
mod win32;

pub use analyzer::{classify, VendorTally};
pub use scripted::ScriptedInventory;
#[cfg(feature = "sysfs")]
pub use sysfs::SysfsInventory;
#[cfg(all(windows, feature = "wmi"))]
pub use win32::WmiInventory;

use crate::error::{DetectError, DetectResult};
use crate::mappings::{identify_vendor, GpuVendor};
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

/// One video controller entry from the hardware inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoController {
    /// Adapter display name, if the backend exposes one
    pub name: Option<String>,
    /// Vendor string (`AdapterCompatibility`)
    pub adapter_compatibility: Option<String>,
    /// Backend-specific device identifier (PNP ID or sysfs path)
    pub device_id: Option<String>,
}

impl VideoController {
    /// Create a record carrying only a vendor string
    pub fn with_vendor(adapter_compatibility: impl Into<String>) -> Self {
        Self {
            adapter_compatibility: Some(adapter_compatibility.into()),
            ..Default::default()
        }
    }

    /// Look up a named property the way the inventory exposes it
    pub fn property(&self, name: &str) -> Option<&str> {
        match name {
            "AdapterCompatibility" => self.adapter_compatibility.as_deref(),
            "Name" => self.name.as_deref(),
            "PNPDeviceID" => self.device_id.as_deref(),
            _ => None,
        }
    }

    /// Vendor identified from `AdapterCompatibility`
    pub fn vendor(&self) -> GpuVendor {
        identify_vendor(self.property("AdapterCompatibility"))
    }

    /// Whether this is the fallback display driver Windows installs
    /// when no vendor driver is present
    pub fn is_basic_display(&self) -> bool {
        self.name
            .as_deref()
            .map(|n| n.contains("Basic Display"))
            .unwrap_or(false)
    }
}

/// Source of video controller records
///
/// Implementations run a single blocking query and release every
/// handle they open before returning.
#[cfg_attr(test, automock)]
pub trait DeviceInventory {
    /// Short backend name used in logs and reports
    fn name(&self) -> &'static str;

    /// Enumerate all video controllers, in the order the OS reports them
    fn video_controllers(&self) -> DetectResult<Vec<VideoController>>;
}

/// Backend for platforms without a supported hardware inventory
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedInventory;

impl DeviceInventory for UnsupportedInventory {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn video_controllers(&self) -> DetectResult<Vec<VideoController>> {
        Err(DetectError::Unsupported(std::env::consts::OS))
    }
}

/// The inventory backend for the running platform
#[cfg(all(windows, feature = "wmi"))]
pub fn system_inventory() -> Box<dyn DeviceInventory> {
    Box::new(WmiInventory::new())
}

/// The inventory backend for the running platform
#[cfg(all(target_os = "linux", feature = "sysfs"))]
pub fn system_inventory() -> Box<dyn DeviceInventory> {
    Box::new(SysfsInventory::new())
}

/// The inventory backend for the running platform
#[cfg(not(any(
    all(windows, feature = "wmi"),
    all(target_os = "linux", feature = "sysfs")
)))]
pub fn system_inventory() -> Box<dyn DeviceInventory> {
    Box::new(UnsupportedInventory)
}

/// Enumerate video controllers with the platform backend
pub fn find_video_controllers() -> DetectResult<Vec<VideoController>> {
    system_inventory().video_controllers()
}

/// How the detector walks the enumerated records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanStrategy {
    /// Inspect every record, then apply NVIDIA > AMD > UNKNOWN
    #[default]
    FullScan,
    /// Stop at the first NVIDIA or AMD record in enumeration order
    FirstMatch,
}

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Record walk strategy
    pub strategy: ScanStrategy,
    /// Ignore "Microsoft Basic Display Adapter" entries
    pub skip_basic_display: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl DetectorConfig {
    /// Order-independent full scan
    pub fn full() -> Self {
        Self {
            strategy: ScanStrategy::FullScan,
            skip_basic_display: false,
        }
    }

    /// First-match scan that trusts enumeration order
    pub fn legacy() -> Self {
        Self {
            strategy: ScanStrategy::FirstMatch,
            skip_basic_display: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let dev = VideoController {
            name: Some("NVIDIA GeForce RTX 3060".to_string()),
            adapter_compatibility: Some("NVIDIA".to_string()),
            device_id: Some("PCI\\VEN_10DE&DEV_2503".to_string()),
        };
        assert_eq!(dev.property("AdapterCompatibility"), Some("NVIDIA"));
        assert_eq!(dev.property("Name"), Some("NVIDIA GeForce RTX 3060"));
        assert_eq!(dev.property("PNPDeviceID"), Some("PCI\\VEN_10DE&DEV_2503"));
        assert_eq!(dev.property("adaptercompatibility"), None);
        assert_eq!(dev.vendor(), GpuVendor::Nvidia);
    }

    #[test]
    fn test_missing_vendor_is_other() {
        assert_eq!(VideoController::default().vendor(), GpuVendor::Other);
    }

    #[test]
    fn test_basic_display_detection() {
        let dev = VideoController {
            name: Some("Microsoft Basic Display Adapter".to_string()),
            adapter_compatibility: Some("(Standard display types)".to_string()),
            device_id: None,
        };
        assert!(dev.is_basic_display());
        assert!(!VideoController::with_vendor("NVIDIA").is_basic_display());
    }

    #[test]
    fn test_unsupported_inventory_fails() {
        let err = UnsupportedInventory.video_controllers().unwrap_err();
        assert!(matches!(err, DetectError::Unsupported(_)));
    }

    #[test]
    fn test_default_config_is_full_scan() {
        assert_eq!(DetectorConfig::default().strategy, ScanStrategy::FullScan);
        assert_eq!(DetectorConfig::legacy().strategy, ScanStrategy::FirstMatch);
    }
}
