//! Linux PCI bus inventory
//!
//! Every `/sys/bus/pci/devices/<address>` entry whose `class` is a
//! display controller (`0x03xxxx`) is one video controller, whether or
//! not a driver is bound to it. The PCI vendor ID is translated to the
//! vendor string Windows reports as `AdapterCompatibility`.

use crate::discovery::{DeviceInventory, VideoController};
use crate::error::DetectResult;
use crate::mappings::{adapter_compatibility_for_pci, parse_pci_vendor_id};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const PCI_DEVICES_ROOT: &str = "/sys/bus/pci/devices";

/// PCI base class for display controllers (VGA, 3D, XGA, other)
const DISPLAY_CLASS_PREFIX: &str = "0x03";

/// Inventory backed by the sysfs PCI device directory
#[derive(Debug, Clone)]
pub struct SysfsInventory {
    root: PathBuf,
}

impl Default for SysfsInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsInventory {
    /// Inventory over `/sys/bus/pci/devices`
    pub fn new() -> Self {
        Self::with_root(PCI_DEVICES_ROOT)
    }

    /// Inventory over an alternate PCI device directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn is_display_controller(device: &Path) -> bool {
    fs::read_to_string(device.join("class"))
        .map(|class| class.trim().to_ascii_lowercase().starts_with(DISPLAY_CLASS_PREFIX))
        .unwrap_or(false)
}

fn read_controller(address: &str, device: &Path) -> VideoController {
    let adapter_compatibility = fs::read_to_string(device.join("vendor"))
        .ok()
        .and_then(|raw| parse_pci_vendor_id(&raw))
        .map(|id| match adapter_compatibility_for_pci(id) {
            Some(vendor) => vendor.to_string(),
            None => format!("PCI vendor 0x{:04x}", id),
        });

    // Unbound devices have no driver link
    let name = fs::read_link(device.join("driver"))
        .ok()
        .and_then(|link| link.file_name().map(|n| n.to_string_lossy().into_owned()));

    VideoController {
        name,
        adapter_compatibility,
        device_id: Some(address.to_string()),
    }
}

impl DeviceInventory for SysfsInventory {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn video_controllers(&self) -> DetectResult<Vec<VideoController>> {
        let mut devices = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if is_display_controller(&path) {
                devices.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        devices.sort_by(|a, b| a.0.cmp(&b.0));

        let controllers: Vec<VideoController> = devices
            .iter()
            .map(|(address, path)| read_controller(address, path))
            .collect();

        for controller in &controllers {
            debug!(
                "sysfs controller {:?}: vendor={:?} driver={:?}",
                controller.device_id, controller.adapter_compatibility, controller.name
            );
        }

        Ok(controllers)
    }
}
