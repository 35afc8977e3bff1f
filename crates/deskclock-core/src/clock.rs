//! Digital and analog clock faces.

use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;
use std::fmt;

use crate::modes::HourFormat;

/// Zero-padded time parts ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// `AM`/`PM` in 12-hour format, `None` in 24-hour format.
    pub ampm: Option<&'static str>,
}

impl fmt::Display for DigitalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)?;
        if let Some(ampm) = self.ampm {
            write!(f, " {ampm}")?;
        }
        Ok(())
    }
}

/// Split a time of day into display parts. Midnight and noon show as `12`
/// in 12-hour format.
pub fn digital_time<T: Timelike>(t: &T, format: HourFormat) -> DigitalTime {
    let (hour, ampm) = match format {
        HourFormat::TwentyFour => (t.hour(), None),
        HourFormat::Twelve => {
            let (is_pm, h12) = t.hour12();
            (h12, Some(if is_pm { "PM" } else { "AM" }))
        }
    };
    DigitalTime {
        hours: format!("{hour:02}"),
        minutes: format!("{:02}", t.minute()),
        seconds: format!("{:02}", t.second()),
        ampm,
    }
}

/// Long English date, e.g. `Monday, January 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Upper-case short weekday, e.g. `MON`.
pub fn day_of_week(date: NaiveDate) -> String {
    date.weekday().to_string().to_uppercase()
}

/// Hand rotations in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandDegrees {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Compute analog hand angles.
///
/// The hour hand counts the 12 o'clock hour as 12 rather than 0, so it
/// reads 360 at 12:00 and 375 at 12:30. Renderers treat angles modulo 360.
pub fn analog_hand_degrees<T: Timelike>(t: &T) -> HandDegrees {
    let seconds = f64::from(t.second());
    let minutes = f64::from(t.minute());
    let hour = match t.hour() % 12 {
        0 => 12.0,
        h => f64::from(h),
    };

    HandDegrees {
        second: seconds / 60.0 * 360.0,
        minute: (minutes + seconds / 60.0) / 60.0 * 360.0,
        hour: (hour + minutes / 60.0 + seconds / 3600.0) / 12.0 * 360.0,
    }
}
