//! High-level API for primary GPU detection

use crate::classification::GraphicsCardType;
use crate::discovery::{
    classify, system_inventory, DetectorConfig, DeviceInventory, ScanStrategy, VendorTally,
    VideoController,
};
use crate::error::DetectResult;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Detection outcome together with what the inventory returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Primary GPU classification
    pub classification: GraphicsCardType,
    /// Scan strategy used
    pub strategy: ScanStrategy,
    /// Inventory backend name
    pub backend: String,
    /// Records in enumeration order (empty when the query failed)
    pub devices: Vec<VideoController>,
    /// Per-vendor counts (absent when the query failed)
    pub tally: Option<VendorTally>,
    /// Query failure message
    pub error: Option<String>,
    /// When the inventory was queried
    pub generated_at: DateTime<Utc>,
}

impl DetectionReport {
    /// Process exit status for this report
    pub fn exit_code(&self) -> i32 {
        self.classification.exit_code()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> DetectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Detect the primary GPU with the platform inventory
///
/// This is the main entry point for most applications. Query failures
/// are folded into [`GraphicsCardType::ERROR`].
///
/// # Example
///
/// ```no_run
/// use gputype::GraphicsCardType;
///
/// match gputype::detect() {
///     GraphicsCardType::NVIDIA => println!("launch the NVIDIA companion"),
///     GraphicsCardType::AMD => println!("launch the AMD companion"),
///     other => println!("nothing to launch ({})", other),
/// }
/// ```
pub fn detect() -> GraphicsCardType {
    detect_with(system_inventory().as_ref(), &DetectorConfig::default())
}

/// Detect the primary GPU, surfacing query failures
pub fn try_detect() -> DetectResult<GraphicsCardType> {
    try_detect_with(system_inventory().as_ref(), &DetectorConfig::default())
}

/// Detect with an explicit inventory and configuration
pub fn detect_with(inventory: &dyn DeviceInventory, config: &DetectorConfig) -> GraphicsCardType {
    match try_detect_with(inventory, config) {
        Ok(classification) => classification,
        Err(e) => {
            warn!("{} inventory query failed: {}", inventory.name(), e);
            GraphicsCardType::ERROR
        }
    }
}

/// Detect with an explicit inventory and configuration, surfacing query failures
pub fn try_detect_with(
    inventory: &dyn DeviceInventory,
    config: &DetectorConfig,
) -> DetectResult<GraphicsCardType> {
    let devices = inventory.video_controllers()?;
    let classification = classify(&devices, config);
    info!(
        "{} inventory: {} video controller(s), classified as {}",
        inventory.name(),
        devices.len(),
        classification
    );
    Ok(classification)
}

/// Run detection and keep the enumerated records for diagnostics
pub fn detect_report(inventory: &dyn DeviceInventory, config: &DetectorConfig) -> DetectionReport {
    let generated_at = Utc::now();
    let backend = inventory.name().to_string();

    match inventory.video_controllers() {
        Ok(devices) => {
            let classification = classify(&devices, config);
            let tally = VendorTally::collect(&devices, config);
            info!("{} inventory classified as {}", backend, classification);
            DetectionReport {
                classification,
                strategy: config.strategy,
                backend,
                devices,
                tally: Some(tally),
                error: None,
                generated_at,
            }
        }
        Err(e) => {
            warn!("{} inventory query failed: {}", backend, e);
            DetectionReport {
                classification: GraphicsCardType::ERROR,
                strategy: config.strategy,
                backend,
                devices: Vec::new(),
                tally: None,
                error: Some(e.to_string()),
                generated_at,
            }
        }
    }
}
