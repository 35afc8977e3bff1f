use chrono::{Local, Utc};
use clap::Subcommand;
use deskclock_core::{Config, Event};
use serde_json::json;

use super::{load_modes, open_store, renderer};

#[derive(Subcommand)]
pub enum ModeAction {
    /// Print the current mode and hour format as JSON
    Show,
    /// Advance to the next display mode
    Cycle,
    /// Switch between 12-hour and 24-hour time
    ToggleFormat,
}

pub fn run(action: ModeAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let mut modes = load_modes(&store);

    let output = match action {
        ModeAction::Show => json!({
            "mode": modes.current_mode(),
            "indicator": modes.current_mode().indicator_text(),
            "hour_format": modes.hour_format(),
        }),
        ModeAction::Cycle => {
            let mode = modes.cycle();
            serde_json::to_value(Event::ModeChanged { mode, at: Utc::now() })?
        }
        ModeAction::ToggleFormat => {
            let format = modes.toggle_hour_format();
            serde_json::to_value(Event::HourFormatChanged { format, at: Utc::now() })?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Render whatever the current mode displays.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let config = Config::load_or_default();
    let modes = load_modes(&store);
    let screen = renderer(&config).screen(
        modes.current_mode(),
        modes.hour_format(),
        &config.world_clock.zones,
        Local::now().naive_local(),
        Utc::now(),
    );
    println!("{screen}");
    Ok(())
}
