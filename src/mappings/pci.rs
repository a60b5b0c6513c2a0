//! PCI vendor ID table
//!
//! Translates the numeric vendor IDs exposed by sysfs into the vendor
//! strings Windows reports as `AdapterCompatibility`, so every backend
//! feeds the same signatures into classification.

use super::{AMD_SIGNATURE, INTEL_SIGNATURE, NVIDIA_SIGNATURE};

/// Known PCI graphics vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PciVendor {
    /// PCI-SIG assigned vendor ID
    pub id: u16,
    /// Equivalent `AdapterCompatibility` string
    pub adapter_compatibility: &'static str,
}

/// Vendors with a known `AdapterCompatibility` equivalent
pub const PCI_VENDORS: &[PciVendor] = &[
    PciVendor { id: 0x10de, adapter_compatibility: NVIDIA_SIGNATURE },
    // ATI's vendor ID, kept by AMD for Radeon parts
    PciVendor { id: 0x1002, adapter_compatibility: AMD_SIGNATURE },
    PciVendor { id: 0x8086, adapter_compatibility: INTEL_SIGNATURE },
];

/// Look up the `AdapterCompatibility` string for a PCI vendor ID
pub fn adapter_compatibility_for_pci(vendor_id: u16) -> Option<&'static str> {
    PCI_VENDORS
        .iter()
        .find(|v| v.id == vendor_id)
        .map(|v| v.adapter_compatibility)
}

/// Parse a sysfs vendor file (`"0x10de\n"`) into a vendor ID
pub fn parse_pci_vendor_id(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u16::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pci_vendor_id() {
        assert_eq!(parse_pci_vendor_id("0x10de\n"), Some(0x10de));
        assert_eq!(parse_pci_vendor_id("0X1002"), Some(0x1002));
        assert_eq!(parse_pci_vendor_id("8086"), Some(0x8086));
        assert_eq!(parse_pci_vendor_id(""), None);
        assert_eq!(parse_pci_vendor_id("0xzzzz"), None);
        assert_eq!(parse_pci_vendor_id("0x123456"), None);
    }

    #[test]
    fn test_lookup_matches_wmi_strings() {
        assert_eq!(adapter_compatibility_for_pci(0x10de), Some("NVIDIA"));
        assert_eq!(
            adapter_compatibility_for_pci(0x1002),
            Some("Advanced Micro Devices, Inc.")
        );
        assert_eq!(adapter_compatibility_for_pci(0x8086), Some("Intel Corporation"));
        assert_eq!(adapter_compatibility_for_pci(0x15ad), None);
    }
}
