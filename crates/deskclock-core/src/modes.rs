//! UI mode manager.
//!
//! Holds the selected display mode and the 12/24-hour preference, and
//! persists both through the injected [`KvStore`] so a restart comes back
//! to where the user left off. Persistence is best-effort; every operation
//! here is total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::storage::{keys, persist_best_effort, read_or_none, KvStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Time,
    WorldClock,
    Settings,
}

impl Mode {
    /// Cyclic display order.
    pub const ALL: [Mode; 3] = [Mode::Time, Mode::WorldClock, Mode::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Time => "TIME",
            Mode::WorldClock => "WORLD_CLOCK",
            Mode::Settings => "SETTINGS",
        }
    }

    pub fn next(self) -> Mode {
        match self {
            Mode::Time => Mode::WorldClock,
            Mode::WorldClock => Mode::Settings,
            Mode::Settings => Mode::Time,
        }
    }

    /// Label for the on-screen mode indicator, e.g. `WORLD CLOCK`.
    pub fn indicator_text(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown mode: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HourFormat {
    #[default]
    #[serde(rename = "12h")]
    Twelve,
    #[serde(rename = "24h")]
    TwentyFour,
}

impl HourFormat {
    pub fn is_24(self) -> bool {
        matches!(self, HourFormat::TwentyFour)
    }

    pub fn toggled(self) -> HourFormat {
        match self {
            HourFormat::Twelve => HourFormat::TwentyFour,
            HourFormat::TwentyFour => HourFormat::Twelve,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HourFormat::Twelve => "12-Hour",
            HourFormat::TwentyFour => "24-Hour",
        }
    }

    /// Only the exact string `"true"` selects 24-hour.
    fn from_stored(value: Option<&str>) -> HourFormat {
        if value == Some("true") {
            HourFormat::TwentyFour
        } else {
            HourFormat::Twelve
        }
    }
}

impl fmt::Display for HourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct ModeManager<S: KvStore> {
    store: S,
    current: Mode,
    hour_format: HourFormat,
}

impl<S: KvStore> ModeManager<S> {
    /// Start in `Time` / 12-hour without touching the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Mode::Time,
            hour_format: HourFormat::Twelve,
        }
    }

    /// Restore mode and hour format from the store, falling back to
    /// `Time` / 12-hour for anything absent, unreadable or unrecognised.
    pub fn load_initial(&mut self) -> Mode {
        self.current = match read_or_none(&self.store, keys::LAST_ACTIVE_MODE) {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                tracing::debug!(saved = %saved, "no valid saved mode, defaulting to TIME");
                Mode::Time
            }),
            None => Mode::Time,
        };
        self.hour_format =
            HourFormat::from_stored(read_or_none(&self.store, keys::HOUR_FORMAT_IS_24).as_deref());
        tracing::debug!(mode = %self.current, format = %self.hour_format, "ui mode loaded");
        self.current
    }

    pub fn cycle(&mut self) -> Mode {
        self.current = self.current.next();
        persist_best_effort(&self.store, keys::LAST_ACTIVE_MODE, self.current.as_str());
        tracing::debug!(mode = %self.current, "mode changed");
        self.current
    }

    pub fn toggle_hour_format(&mut self) -> HourFormat {
        self.hour_format = self.hour_format.toggled();
        let stored = if self.hour_format.is_24() { "true" } else { "false" };
        persist_best_effort(&self.store, keys::HOUR_FORMAT_IS_24, stored);
        self.hour_format
    }

    pub fn current_mode(&self) -> Mode {
        self.current
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn cycle_order_wraps() {
        let store = MemoryStore::new();
        let mut m = ModeManager::new(&store);
        assert_eq!(m.cycle(), Mode::WorldClock);
        assert_eq!(m.cycle(), Mode::Settings);
        assert_eq!(m.cycle(), Mode::Time);
    }

    #[test]
    fn three_cycles_return_home_from_any_mode() {
        for start in Mode::ALL {
            let store = MemoryStore::new();
            store.set(keys::LAST_ACTIVE_MODE, start.as_str()).unwrap();
            let mut m = ModeManager::new(&store);
            m.load_initial();
            m.cycle();
            m.cycle();
            assert_eq!(m.cycle(), start);
        }
    }

    #[test]
    fn cycle_persists() {
        let store = MemoryStore::new();
        let mut m = ModeManager::new(&store);
        m.cycle();
        assert_eq!(
            store.get(keys::LAST_ACTIVE_MODE).unwrap().as_deref(),
            Some("WORLD_CLOCK")
        );
    }

    #[test]
    fn load_restores_saved_state() {
        let store = MemoryStore::new();
        store.set(keys::LAST_ACTIVE_MODE, "SETTINGS").unwrap();
        store.set(keys::HOUR_FORMAT_IS_24, "true").unwrap();
        let mut m = ModeManager::new(&store);
        assert_eq!(m.load_initial(), Mode::Settings);
        assert_eq!(m.hour_format(), HourFormat::TwentyFour);
        assert_eq!(m.cycle(), Mode::Time);
    }

    #[test]
    fn corrupt_mode_falls_back_to_time() {
        let store = MemoryStore::new();
        store.set(keys::LAST_ACTIVE_MODE, "ANALOG").unwrap();
        store.set(keys::HOUR_FORMAT_IS_24, "yes").unwrap();
        let mut m = ModeManager::new(&store);
        assert_eq!(m.load_initial(), Mode::Time);
        assert_eq!(m.hour_format(), HourFormat::Twelve);
    }

    #[test]
    fn unreadable_store_uses_defaults() {
        let store = MemoryStore::failing();
        let mut m = ModeManager::new(&store);
        assert_eq!(m.load_initial(), Mode::Time);
        assert_eq!(m.hour_format(), HourFormat::Twelve);
        assert_eq!(m.cycle(), Mode::WorldClock);
        assert_eq!(m.toggle_hour_format(), HourFormat::TwentyFour);
    }

    #[test]
    fn toggle_format_keeps_mode() {
        let store = MemoryStore::new();
        let mut m = ModeManager::new(&store);
        m.cycle();
        assert_eq!(m.toggle_hour_format(), HourFormat::TwentyFour);
        assert_eq!(store.get(keys::HOUR_FORMAT_IS_24).unwrap().as_deref(), Some("true"));
        assert_eq!(m.toggle_hour_format(), HourFormat::Twelve);
        assert_eq!(store.get(keys::HOUR_FORMAT_IS_24).unwrap().as_deref(), Some("false"));
        assert_eq!(m.current_mode(), Mode::WorldClock);
    }

    #[test]
    fn indicator_text() {
        assert_eq!(Mode::WorldClock.indicator_text(), "WORLD CLOCK");
        assert_eq!(Mode::Time.indicator_text(), "TIME");
    }
}
