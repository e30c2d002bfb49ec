//! `--list` — show backlight devices the configured backend can see.

use brightstep_lib::device::Backlight;

use super::{BrightstepError, Config, DevicesOutput, Result};

pub(super) fn cmd_list(config: &Config, json: bool) -> Result<()> {
    let devices = config
        .backlight()
        .list_candidates()
        .map_err(BrightstepError::Discovery)?;

    if json {
        let output = DevicesOutput {
            count: devices.len(),
            devices,
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| BrightstepError::Io(std::io::Error::other(e)))?;
        println!("{text}");
        return Ok(());
    }

    if devices.is_empty() {
        println!("No backlight devices found ({} backend).", config.backend);
        return Ok(());
    }

    println!(
        "Found {} backlight device{}:",
        devices.len(),
        if devices.len() == 1 { "" } else { "s" }
    );
    println!();

    for dev in &devices {
        println!("  {}", dev.name);
        if dev.location != dev.name {
            println!("      {}", dev.location);
        }
    }

    Ok(())
}
