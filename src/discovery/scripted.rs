//! Scripted inventory for tests, demos and benches

use crate::discovery::{DeviceInventory, VideoController};
use crate::error::{DetectError, DetectResult};

/// Inventory that replays a fixed device list or a fixed failure
#[derive(Debug, Clone, Default)]
pub struct ScriptedInventory {
    devices: Vec<VideoController>,
    failure: Option<String>,
}

impl ScriptedInventory {
    /// Replay `devices` on every query
    pub fn new(devices: Vec<VideoController>) -> Self {
        Self { devices, failure: None }
    }

    /// One record per vendor string, in the given order
    pub fn from_vendors<I, S>(vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(vendors.into_iter().map(VideoController::with_vendor).collect())
    }

    /// Fail every query with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            devices: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl DeviceInventory for ScriptedInventory {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn video_controllers(&self) -> DetectResult<Vec<VideoController>> {
        match &self.failure {
            Some(message) => Err(DetectError::Query(message.clone())),
            None => Ok(self.devices.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_devices_in_order() {
        let inventory = ScriptedInventory::from_vendors(["Intel Corporation", "NVIDIA"]);
        let devices = inventory.video_controllers().unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].adapter_compatibility.as_deref(), Some("NVIDIA"));
    }

    #[test]
    fn test_failing_inventory() {
        let inventory = ScriptedInventory::failing("access denied");
        let err = inventory.video_controllers().unwrap_err();
        assert_eq!(err.to_string(), "Video controller query failed: access denied");
    }
}
