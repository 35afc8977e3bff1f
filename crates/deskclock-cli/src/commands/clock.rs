use chrono::{Local, Utc};
use deskclock_core::clock::{analog_hand_degrees, day_of_week, digital_time, format_date};
use deskclock_core::world_clock::{format_entry, world_clock_times};
use deskclock_core::Config;
use serde_json::json;

use super::{load_modes, open_store, renderer};

pub fn run_clock(analog: bool, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let config = Config::load_or_default();
    let format = load_modes(&store).hour_format();
    let now = Local::now().naive_local();

    if analog {
        let hands = analog_hand_degrees(&now);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&hands)?);
        } else {
            println!("{}", renderer(&config).hands(&hands));
        }
        return Ok(());
    }

    let time = digital_time(&now, format);
    if as_json {
        let out = json!({
            "time": time,
            "date": format_date(now.date()),
            "day_of_week": day_of_week(now.date()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{time}");
        println!("{}", format_date(now.date()));
    }
    Ok(())
}

pub fn run_world(as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let config = Config::load_or_default();
    let format = load_modes(&store).hour_format();
    let times = world_clock_times(&config.world_clock.zones, format, Utc::now());

    if as_json {
        let out: Vec<_> = times
            .iter()
            .map(|(zone, time)| json!({ "name": zone.name, "iana": zone.iana, "time": time }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (zone, time) in &times {
            println!("{}", format_entry(&zone.name, time));
        }
    }
    Ok(())
}
