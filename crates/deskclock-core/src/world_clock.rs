//! World clock: current time in a list of IANA zones.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::modes::HourFormat;

const INVALID_ZONE: &str = "Invalid Zone";

/// A configured world clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub name: String,
    pub iana: String,
}

impl ZoneEntry {
    pub fn new(name: impl Into<String>, iana: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iana: iana.into(),
        }
    }

    pub fn defaults() -> Vec<ZoneEntry> {
        vec![
            ZoneEntry::new("New York", "America/New_York"),
            ZoneEntry::new("London", "Europe/London"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneTime {
    pub hours: String,
    pub minutes: String,
    /// Empty in 24-hour format.
    pub ampm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ZoneTime {
    fn invalid() -> Self {
        Self {
            hours: "--".into(),
            minutes: "--".into(),
            ampm: String::new(),
            error: Some(INVALID_ZONE.into()),
        }
    }
}

/// Hours and minutes in `iana` at instant `now`. An unknown zone yields
/// the `Invalid Zone` sentinel instead of an error.
pub fn time_for_zone(iana: &str, format: HourFormat, now: DateTime<Utc>) -> ZoneTime {
    let tz: Tz = match iana.parse() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(zone = iana, "unknown time zone");
            return ZoneTime::invalid();
        }
    };
    let local = now.with_timezone(&tz);

    let (hour, ampm) = match format {
        HourFormat::TwentyFour => (local.hour(), String::new()),
        HourFormat::Twelve => {
            let (is_pm, h12) = local.hour12();
            (h12, if is_pm { "PM" } else { "AM" }.to_string())
        }
    };

    ZoneTime {
        hours: format!("{hour:02}"),
        minutes: format!("{:02}", local.minute()),
        ampm,
        error: None,
    }
}

pub fn world_clock_times(
    zones: &[ZoneEntry],
    format: HourFormat,
    now: DateTime<Utc>,
) -> Vec<(ZoneEntry, ZoneTime)> {
    zones
        .iter()
        .map(|zone| (zone.clone(), time_for_zone(&zone.iana, format, now)))
        .collect()
}

/// One-line entry such as `NEW: 10:30 AM`, or `NEW: ERROR`.
pub fn format_entry(name: &str, time: &ZoneTime) -> String {
    let display_name: String = name.chars().take(3).collect::<String>().to_uppercase();
    if time.error.is_some() {
        return format!("{display_name}: ERROR");
    }
    if time.ampm.is_empty() {
        format!("{display_name}: {}:{}", time.hours, time.minutes)
    } else {
        format!("{display_name}: {}:{} {}", time.hours, time.minutes, time.ampm)
    }
}
