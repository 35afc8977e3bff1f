//! # Deskclock Core Library
//!
//! Business logic for the Deskclock desk clock. The `deskclock` CLI is a thin
//! presentation layer over this crate: it owns the tick source, renders, and
//! forwards user commands.
//!
//! ## Architecture
//!
//! - **Interval Timer**: a tick-driven Pomodoro state machine; the caller
//!   invokes `tick()` once per second
//! - **UI Modes**: the Time / World Clock / Settings switcher and the 12/24-hour
//!   preference
//! - **Storage**: an injected key-value store (SQLite on disk, in-memory for
//!   tests) and TOML configuration
//! - **Clock faces**: digital, analog and world clock formatting
//! - **Weather**: OpenWeatherMap lookups with IP geolocation
//!
//! ## Key Components
//!
//! - [`IntervalTimer`]: Pomodoro timer state machine
//! - [`ModeManager`]: display mode and hour format
//! - [`KvStore`]: persistence capability injected into both
//! - [`Config`]: application configuration

pub mod clock;
pub mod error;
pub mod events;
pub mod modes;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod weather;
pub mod world_clock;

pub use error::{ConfigError, CoreError, StoreError, WeatherError};
pub use events::Event;
pub use modes::{HourFormat, Mode, ModeManager};
pub use storage::{Config, Database, KvStore, MemoryStore};
pub use theme::Theme;
pub use timer::{next_session, IntervalTimer, Session, SessionDurations, TimerState};
pub use weather::{WeatherClient, WeatherPanel, WeatherReport};
pub use world_clock::ZoneEntry;
