//! Compares scan strategies on a hybrid laptop whose AMD iGPU enumerates
//! before the NVIDIA dGPU

use gputype::{detect_with, DetectorConfig, ScriptedInventory};

fn main() {
    let inventory = ScriptedInventory::from_vendors([
        "Advanced Micro Devices, Inc.",
        "NVIDIA",
    ]);

    let full = detect_with(&inventory, &DetectorConfig::full());
    let legacy = detect_with(&inventory, &DetectorConfig::legacy());

    println!("full scan:   {} (exit {})", full, full.exit_code());
    println!("first match: {} (exit {})", legacy, legacy.exit_code());
}
