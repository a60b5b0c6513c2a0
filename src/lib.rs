//! # gputype - primary GPU vendor detection
//!
//! Queries the operating system's hardware inventory for video
//! controllers and classifies the primary GPU as NVIDIA, AMD or unknown.
//! The `gputype` binary reports the classification as its exit code so
//! launchers can pick vendor-specific companion tools.
//!
//! ## Features
//!
//! - **Windows** via WMI `Win32_VideoController`
//! - **Linux** via sysfs PCI display-class devices
//! - **Hybrid systems**: NVIDIA > AMD > Unknown, independent of
//!   enumeration order
//! - **Pluggable inventory** for tests and custom backends
//!
//! ## Quick Start
//!
//! ```rust
//! use gputype::{detect_with, DetectorConfig, GraphicsCardType, ScriptedInventory};
//!
//! let inventory = ScriptedInventory::from_vendors(["Intel Corporation", "NVIDIA"]);
//! let gpu = detect_with(&inventory, &DetectorConfig::default());
//! assert_eq!(gpu, GraphicsCardType::NVIDIA);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod classification;
pub mod discovery;
pub mod error;
pub mod mappings;

pub use api::{detect, detect_report, detect_with, try_detect, try_detect_with, DetectionReport};
pub use classification::GraphicsCardType;
pub use discovery::{
    find_video_controllers, system_inventory, DetectorConfig, DeviceInventory, ScanStrategy,
    ScriptedInventory, UnsupportedInventory, VendorTally, VideoController,
};
pub use error::{DetectError, DetectResult};
pub use mappings::{identify_vendor, GpuVendor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
///
/// # Example
///
/// ```no_run
/// println!("Using gputype v{}", gputype::version());
/// ```
pub fn version() -> &'static str {
    VERSION
}

/// Whether the platform inventory can be queried at all
pub fn is_supported() -> bool {
    try_detect().is_ok()
}


/// Prelude module for convenient imports
///
/// # Example
///
/// ```no_run
/// use gputype::prelude::*;
///
/// let gpu: GraphicsCardType = detect();
/// ```
pub mod prelude {
    pub use crate::api::{detect, detect_report, detect_with, try_detect, DetectionReport};
    pub use crate::classification::GraphicsCardType;
    pub use crate::discovery::{DetectorConfig, DeviceInventory, ScanStrategy, VideoController};
    pub use crate::mappings::GpuVendor;
    pub use crate::{is_supported, version};
}
