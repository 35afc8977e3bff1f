use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modes::{HourFormat, Mode};
use crate::timer::Session;

/// Every state change in the core produces an Event.
/// The presentation layer renders from them; nothing in the core renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        session: Session,
        seconds_remaining: i64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        session: Session,
        seconds_remaining: i64,
        at: DateTime<Utc>,
    },
    TimerReset {
        session: Session,
        seconds_remaining: i64,
        at: DateTime<Utc>,
    },
    /// A countdown passed zero; the timer is idle in `next`.
    SessionEnded {
        ended: Session,
        next: Session,
        completed_work_sessions: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session: Session,
        seconds_remaining: i64,
        nominal_secs: i64,
        completed_work_sessions: u32,
        running: bool,
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: Mode,
        at: DateTime<Utc>,
    },
    HourFormatChanged {
        format: HourFormat,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_json() {
        let event = Event::SessionEnded {
            ended: Session::Work,
            next: Session::LongBreak,
            completed_work_sessions: 4,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session_ended");
        assert_eq!(json["next"], "long_break");
        assert_eq!(json["completed_work_sessions"], 4);
    }

    #[test]
    fn mode_event_uses_persisted_name() {
        let event = Event::ModeChanged {
            mode: Mode::WorldClock,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["mode"], "WORLD_CLOCK");
    }
}
