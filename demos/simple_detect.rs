//! Simple example showing primary GPU detection on this machine

use gputype::{DetectorConfig, GraphicsCardType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("gputype Primary GPU Example");
    println!("===========================\n");

    let inventory = gputype::system_inventory();
    let report = gputype::detect_report(inventory.as_ref(), &DetectorConfig::default());

    println!("Backend: {}", report.backend);
    for device in &report.devices {
        println!(
            "  {} ({})",
            device.name.as_deref().unwrap_or("unnamed adapter"),
            device.adapter_compatibility.as_deref().unwrap_or("no vendor string")
        );
    }

    match report.classification {
        GraphicsCardType::NVIDIA | GraphicsCardType::AMD => {
            println!("\nPrimary GPU: {}", report.classification);
        }
        GraphicsCardType::UNKNOWN => println!("\nNo NVIDIA or AMD adapter found."),
        GraphicsCardType::ERROR => {
            println!("\nDetection failed: {}", report.error.as_deref().unwrap_or("unknown"));
        }
    }

    println!("Exit code a launcher would see: {}", report.exit_code());
    Ok(())
}
