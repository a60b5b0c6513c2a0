//! Windows WMI inventory

use crate::discovery::{DeviceInventory, VideoController};
use crate::error::{DetectError, DetectResult};
use log::debug;
use serde::Deserialize;
use wmi::WMIConnection;

const VIDEO_CONTROLLER_QUERY: &str = "SELECT * FROM Win32_VideoController";

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_VideoController")]
#[serde(rename_all = "PascalCase")]
struct Win32VideoController {
    name: Option<String>,
    adapter_compatibility: Option<String>,
    #[serde(rename = "PNPDeviceID")]
    pnp_device_id: Option<String>,
}

impl From<Win32VideoController> for VideoController {
    fn from(row: Win32VideoController) -> Self {
        Self {
            name: row.name,
            adapter_compatibility: row.adapter_compatibility,
            device_id: row.pnp_device_id,
        }
    }
}

/// Inventory backed by the `Win32_VideoController` WMI class
#[derive(Debug, Clone, Copy, Default)]
pub struct WmiInventory;

impl WmiInventory {
    /// Create the backend; the WMI session is opened per query
    pub fn new() -> Self {
        Self
    }
}

impl DeviceInventory for WmiInventory {
    fn name(&self) -> &'static str {
        "wmi"
    }

    fn video_controllers(&self) -> DetectResult<Vec<VideoController>> {
        let wmi_con = WMIConnection::new()
            .map_err(|e| DetectError::Connection(format!("Failed to connect to WMI: {}", e)))?;

        let rows: Vec<Win32VideoController> = wmi_con
            .raw_query(VIDEO_CONTROLLER_QUERY)
            .map_err(|e| DetectError::Query(format!("WMI query failed: {}", e)))?;

        for row in &rows {
            debug!(
                "WMI controller {:?}: AdapterCompatibility={:?}",
                row.name, row.adapter_compatibility
            );
        }

        Ok(rows.into_iter().map(VideoController::from).collect())
    }
}
