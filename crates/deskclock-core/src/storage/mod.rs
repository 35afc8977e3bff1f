mod config;
pub mod database;
mod memory;

pub use config::{Config, TimerConfig, UiConfig, WeatherConfig, WorldClockConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{ConfigError, StoreError};

/// Logical keys shared by every component that persists through a [`KvStore`].
pub mod keys {
    pub const LAST_ACTIVE_MODE: &str = "last-active-mode";
    pub const HOUR_FORMAT_IS_24: &str = "hour-format-is-24";
    pub const COMPLETED_WORK_SESSIONS: &str = "completed-work-sessions";
    pub const WEATHER_CITY: &str = "weather-city";
    pub const TIMER_STATE: &str = "timer-state";
}

/// Minimal string key-value capability injected into the stateful components.
///
/// Everything is single-threaded, so `set` takes `&self` and backends use
/// interior mutability where they need it.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Write a value, logging and swallowing any failure.
///
/// Persistence is best-effort: callers stay responsive when storage is
/// unavailable, and failed writes are never retried.
pub fn persist_best_effort<S: KvStore + ?Sized>(store: &S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key, error = %e, "could not persist value");
    }
}

/// Read a value, treating a read failure like an absent key.
pub fn read_or_none<S: KvStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read value, using default");
            None
        }
    }
}

/// Returns the data directory, creating it if needed.
///
/// `DESKCLOCK_HOME` overrides the location outright. Otherwise this is
/// `~/.config/deskclock`, or `~/.config/deskclock-dev` when
/// `DESKCLOCK_ENV=dev`.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("DESKCLOCK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("DESKCLOCK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("deskclock-dev")
            } else {
                base_dir.join("deskclock")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
