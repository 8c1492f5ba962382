//! Preset listing.

use breathe_core::PRESETS;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available breathing modes:\n");

    for preset in PRESETS {
        let mut line = format!("  {:<10} Inhale {}", preset.name, preset.inhale);
        if preset.hold_in > 0 {
            line.push_str(&format!(" · Hold {}", preset.hold_in));
        }
        line.push_str(&format!(" · Exhale {}", preset.exhale));
        if preset.hold_out > 0 {
            line.push_str(&format!(" · Hold {}", preset.hold_out));
        }
        println!("{line}");
    }

    println!("\nUse:\n  breathe <mode>");
    Ok(())
}
