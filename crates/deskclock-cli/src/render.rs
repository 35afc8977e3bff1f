//! Terminal rendering. The core never renders; everything the user sees is
//! produced here from core state, painted with the active theme.

use chrono::{DateTime, NaiveDateTime, Utc};
use colored::{ColoredString, Colorize};
use deskclock_core::clock::{day_of_week, digital_time, format_date, HandDegrees};
use deskclock_core::theme::Rgb;
use deskclock_core::timer::format_countdown;
use deskclock_core::world_clock::{format_entry, world_clock_times};
use deskclock_core::{HourFormat, Mode, Theme, TimerState, WeatherReport, ZoneEntry};

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn paint(&self, text: &str, Rgb(r, g, b): Rgb) -> ColoredString {
        text.truecolor(r, g, b)
    }

    /// Full display for `mode`: an indicator line, then primary and
    /// secondary content.
    pub fn screen(
        &self,
        mode: Mode,
        format: HourFormat,
        zones: &[ZoneEntry],
        local: NaiveDateTime,
        now: DateTime<Utc>,
    ) -> String {
        let header = format!(
            "{}  {}",
            self.paint(&format!("[{}]", mode.indicator_text()), self.theme.dim),
            self.paint(&day_of_week(local.date()), self.theme.dim),
        );

        let (primary, secondary) = match mode {
            Mode::Time => (
                digital_time(&local, format).to_string(),
                format_date(local.date()),
            ),
            Mode::WorldClock => {
                let times = world_clock_times(zones, format, now);
                let mut entries = times.iter().map(|(zone, time)| format_entry(&zone.name, time));
                (
                    entries.next().unwrap_or_else(|| "No World Clocks".to_string()),
                    entries.next().unwrap_or_default(),
                )
            }
            Mode::Settings => (
                format!("Format: {}", format.label()),
                "Run `deskclock mode toggle-format` to toggle format.".to_string(),
            ),
        };

        format!(
            "{header}\n{}\n{}",
            self.paint(&primary, self.theme.accent).bold(),
            self.paint(&secondary, self.theme.foreground),
        )
    }

    pub fn timer_line(&self, state: &TimerState) -> String {
        let status = if state.running { "running" } else { "paused" };
        format!(
            "{} {}  {}",
            self.paint(state.active_session.label(), self.theme.foreground),
            self.paint(&format_countdown(state.seconds_remaining), self.theme.accent).bold(),
            self.paint(
                &format!("Cycles: {} ({status})", state.completed_work_sessions),
                self.theme.dim
            ),
        )
    }

    pub fn hands(&self, hands: &HandDegrees) -> String {
        format!(
            "hour {:.1}°  minute {:.1}°  second {:.1}°",
            hands.hour % 360.0,
            hands.minute,
            hands.second
        )
    }

    pub fn weather(&self, report: &WeatherReport) -> String {
        format!(
            "{}  {}  {}",
            self.paint(&report.location, self.theme.foreground),
            self.paint(&report.display_temp(), self.theme.accent).bold(),
            self.paint(&report.description, self.theme.dim),
        )
    }
}
