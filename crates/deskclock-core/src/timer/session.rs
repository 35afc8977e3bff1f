use serde::{Deserialize, Serialize};
use std::fmt;

/// Work sessions completed before a long break is due.
pub const LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    Work,
    ShortBreak,
    LongBreak,
}

impl Session {
    pub fn label(self) -> &'static str {
        match self {
            Session::Work => "Work",
            Session::ShortBreak => "Short Break",
            Session::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Session::Work)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nominal countdown length, in seconds, for each session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDurations {
    pub work_secs: i64,
    pub short_break_secs: i64,
    pub long_break_secs: i64,
}

impl SessionDurations {
    pub fn nominal(&self, session: Session) -> i64 {
        match session {
            Session::Work => self.work_secs,
            Session::ShortBreak => self.short_break_secs,
            Session::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for SessionDurations {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

/// Decide which session follows `current`.
///
/// `completed_work_sessions` must already count the Work session that just
/// ended, so the 4th, 8th, ... Work session is followed by a long break.
pub fn next_session(current: Session, completed_work_sessions: u32) -> Session {
    next_session_every(current, completed_work_sessions, LONG_BREAK_INTERVAL)
}

/// [`next_session`] with a custom long-break cadence. An interval of 0
/// disables long breaks.
pub fn next_session_every(current: Session, completed_work_sessions: u32, interval: u32) -> Session {
    match current {
        Session::Work => {
            if interval > 0 && completed_work_sessions > 0 && completed_work_sessions % interval == 0 {
                Session::LongBreak
            } else {
                Session::ShortBreak
            }
        }
        Session::ShortBreak | Session::LongBreak => Session::Work,
    }
}

/// Render a countdown as `MM:SS`. Negative values clamp to `00:00`.
pub fn format_countdown(seconds: i64) -> String {
    let total = seconds.max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}
