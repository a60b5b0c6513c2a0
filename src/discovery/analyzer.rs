//! Vendor analysis over enumerated video controllers

use crate::classification::GraphicsCardType;
use crate::discovery::{DetectorConfig, ScanStrategy, VideoController};
use crate::mappings::GpuVendor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Per-vendor counts from a full pass over the inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTally {
    /// NVIDIA adapters
    pub nvidia: usize,
    /// AMD adapters
    pub amd: usize,
    /// Intel adapters
    pub intel: usize,
    /// Adapters with any other or no vendor string
    pub other: usize,
    /// Basic display entries ignored by configuration
    pub skipped: usize,
}

impl VendorTally {
    /// Count every record in `devices`
    pub fn collect(devices: &[VideoController], config: &DetectorConfig) -> Self {
        let mut tally = Self::default();
        for device in devices {
            if config.skip_basic_display && device.is_basic_display() {
                tally.skipped += 1;
                continue;
            }
            tally.record(device.vendor());
        }
        tally
    }

    fn record(&mut self, vendor: GpuVendor) {
        match vendor {
            GpuVendor::Nvidia => self.nvidia += 1,
            GpuVendor::Amd => self.amd += 1,
            GpuVendor::Intel => self.intel += 1,
            GpuVendor::Other => self.other += 1,
        }
    }

    /// Vendors seen at least once, highest priority first
    pub fn matched_vendors(&self) -> Vec<GpuVendor> {
        [
            (GpuVendor::Nvidia, self.nvidia),
            (GpuVendor::Amd, self.amd),
            (GpuVendor::Intel, self.intel),
            (GpuVendor::Other, self.other),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(vendor, _)| vendor)
        .collect()
    }

    /// Apply NVIDIA > AMD > UNKNOWN
    pub fn classification(&self) -> GraphicsCardType {
        if self.nvidia > 0 {
            GraphicsCardType::NVIDIA
        } else if self.amd > 0 {
            GraphicsCardType::AMD
        } else {
            GraphicsCardType::UNKNOWN
        }
    }

    /// Total records considered
    pub fn total(&self) -> usize {
        self.nvidia + self.amd + self.intel + self.other
    }
}

/// Classify an enumerated device list
pub fn classify(devices: &[VideoController], config: &DetectorConfig) -> GraphicsCardType {
    match config.strategy {
        ScanStrategy::FullScan => {
            let tally = VendorTally::collect(devices, config);
            debug!(
                "Full scan: {} NVIDIA, {} AMD, {} Intel, {} other, {} skipped",
                tally.nvidia, tally.amd, tally.intel, tally.other, tally.skipped
            );
            tally.classification()
        }
        ScanStrategy::FirstMatch => first_match(devices, config),
    }
}

fn first_match(devices: &[VideoController], config: &DetectorConfig) -> GraphicsCardType {
    for (index, device) in devices.iter().enumerate() {
        if config.skip_basic_display && device.is_basic_display() {
            continue;
        }
        match device.vendor() {
            GpuVendor::Nvidia => {
                debug!("First match at record {}: NVIDIA", index);
                return GraphicsCardType::NVIDIA;
            }
            GpuVendor::Amd => {
                debug!("First match at record {}: AMD", index);
                return GraphicsCardType::AMD;
            }
            GpuVendor::Intel | GpuVendor::Other => {}
        }
    }
    GraphicsCardType::UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const NV: &str = "NVIDIA";
    const AMD: &str = "Advanced Micro Devices, Inc.";
    const INTEL: &str = "Intel Corporation";

    fn devices(vendors: &[&str]) -> Vec<VideoController> {
        vendors.iter().map(|v| VideoController::with_vendor(*v)).collect()
    }

    #[rstest]
    #[case(&[NV], GraphicsCardType::NVIDIA)]
    #[case(&[AMD], GraphicsCardType::AMD)]
    #[case(&[NV, AMD], GraphicsCardType::NVIDIA)]
    #[case(&[AMD, NV], GraphicsCardType::NVIDIA)]
    #[case(&[INTEL, NV], GraphicsCardType::NVIDIA)]
    #[case(&[INTEL, AMD], GraphicsCardType::AMD)]
    #[case(&[INTEL], GraphicsCardType::UNKNOWN)]
    #[case(&["Matrox Graphics, Inc."], GraphicsCardType::UNKNOWN)]
    #[case(&[], GraphicsCardType::UNKNOWN)]
    fn test_full_scan(#[case] vendors: &[&str], #[case] expected: GraphicsCardType) {
        assert_eq!(classify(&devices(vendors), &DetectorConfig::full()), expected);
    }

    #[rstest]
    #[case(&[NV, AMD], GraphicsCardType::NVIDIA)]
    #[case(&[AMD, NV], GraphicsCardType::AMD)]
    #[case(&[INTEL, AMD, NV], GraphicsCardType::AMD)]
    #[case(&[INTEL], GraphicsCardType::UNKNOWN)]
    fn test_first_match_follows_enumeration_order(
        #[case] vendors: &[&str],
        #[case] expected: GraphicsCardType,
    ) {
        assert_eq!(classify(&devices(vendors), &DetectorConfig::legacy()), expected);
    }

    #[test]
    fn test_missing_property_does_not_match() {
        let list = vec![VideoController::default(), VideoController::with_vendor("")];
        assert_eq!(classify(&list, &DetectorConfig::full()), GraphicsCardType::UNKNOWN);
    }

    #[test]
    fn test_tally_counts_and_matched_vendors() {
        let list = devices(&[INTEL, NV, NV, "Parallels"]);
        let tally = VendorTally::collect(&list, &DetectorConfig::full());
        assert_eq!(
            tally,
            VendorTally { nvidia: 2, amd: 0, intel: 1, other: 1, skipped: 0 }
        );
        assert_eq!(tally.total(), 4);
        assert_eq!(
            tally.matched_vendors(),
            vec![GpuVendor::Nvidia, GpuVendor::Intel, GpuVendor::Other]
        );
    }

    #[test]
    fn test_skip_basic_display() {
        let basic = VideoController {
            name: Some("Microsoft Basic Display Adapter".to_string()),
            adapter_compatibility: Some("(Standard display types)".to_string()),
            device_id: None,
        };
        let list = vec![basic, VideoController::with_vendor(AMD)];
        let config = DetectorConfig { skip_basic_display: true, ..DetectorConfig::full() };

        let tally = VendorTally::collect(&list, &config);
        assert_eq!(tally.skipped, 1);
        assert_eq!(tally.other, 0);
        assert_eq!(classify(&list, &config), GraphicsCardType::AMD);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let list = devices(&[AMD, INTEL, NV]);
        let config = DetectorConfig::full();
        let first = classify(&list, &config);
        for _ in 0..5 {
            assert_eq!(classify(&list, &config), first);
        }
    }
}
