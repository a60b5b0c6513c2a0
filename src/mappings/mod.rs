//! Vendor database for adapter identification

pub mod pci;

pub use pci::{adapter_compatibility_for_pci, parse_pci_vendor_id, PciVendor, PCI_VENDORS};

/// `AdapterCompatibility` value reported for NVIDIA adapters
pub const NVIDIA_SIGNATURE: &str = "NVIDIA";
/// `AdapterCompatibility` value reported for AMD adapters
pub const AMD_SIGNATURE: &str = "Advanced Micro Devices, Inc.";
/// `AdapterCompatibility` value reported for Intel adapters
pub const INTEL_SIGNATURE: &str = "Intel Corporation";

/// GPU vendors identified from an adapter's vendor string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GpuVendor {
    /// NVIDIA Corporation
    Nvidia,
    /// Advanced Micro Devices
    Amd,
    /// Intel Corporation (recognized, never primary)
    Intel,
    /// Anything else, including a missing vendor string
    Other,
}

impl GpuVendor {
    /// Whether this vendor can be selected as the primary GPU
    pub fn is_recognized(&self) -> bool {
        matches!(self, GpuVendor::Nvidia | GpuVendor::Amd)
    }
}

impl std::fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Intel => write!(f, "Intel"),
            GpuVendor::Other => write!(f, "Other"),
        }
    }
}

/// Identify the vendor behind an `AdapterCompatibility` string
///
/// Matching is exact and case-sensitive: `"nvidia"` or `"NVIDIA "` are
/// not NVIDIA signatures.
pub fn identify_vendor(adapter_compatibility: Option<&str>) -> GpuVendor {
    match adapter_compatibility {
        Some(NVIDIA_SIGNATURE) => GpuVendor::Nvidia,
        Some(AMD_SIGNATURE) => GpuVendor::Amd,
        Some(INTEL_SIGNATURE) => GpuVendor::Intel,
        _ => GpuVendor::Other,
    }
}
