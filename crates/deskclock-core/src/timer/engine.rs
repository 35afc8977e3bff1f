//! Interval timer engine.
//!
//! A tick-driven Pomodoro state machine. It has no clock of its own: the
//! caller invokes `tick()` once per nominal second and trusts that cadence.
//!
//! ## State Transitions
//!
//! ```text
//! Idle(session) --start--> Running(session) --pause/reset--> Idle(session)
//! Running(session) --tick past zero--> Idle(next_session)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = IntervalTimer::new(store, SessionDurations::default(), 4);
//! timer.start();
//! // Once per second:
//! if let Some(Event::SessionEnded { next, .. }) = timer.tick() { /* notify */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::session::{next_session_every, Session, SessionDurations};
use crate::events::Event;
use crate::storage::{keys, persist_best_effort, read_or_none, KvStore};

/// Serializable snapshot of the timer.
///
/// `seconds_remaining` is negative only transiently, inside the tick that
/// ends a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub active_session: Session,
    pub seconds_remaining: i64,
    pub completed_work_sessions: u32,
    pub running: bool,
}

/// Core interval timer.
///
/// Persists the completed-work-session counter through the injected store;
/// everything else is returned to the caller as [`Event`]s.
pub struct IntervalTimer<S: KvStore> {
    store: S,
    durations: SessionDurations,
    long_break_interval: u32,
    state: TimerState,
}

impl<S: KvStore> IntervalTimer<S> {
    /// Create an idle timer at the start of a Work session, loading the
    /// persisted completed-session counter (0 if absent or malformed).
    pub fn new(store: S, durations: SessionDurations, long_break_interval: u32) -> Self {
        let completed_work_sessions = load_completed(&store).unwrap_or(0);
        Self {
            state: TimerState {
                active_session: Session::Work,
                seconds_remaining: durations.nominal(Session::Work),
                completed_work_sessions,
                running: false,
            },
            store,
            durations,
            long_break_interval,
        }
    }

    /// Resume from a previously saved snapshot. The counter in the store
    /// takes precedence over the one in the snapshot.
    pub fn restore(
        store: S,
        durations: SessionDurations,
        long_break_interval: u32,
        snapshot: TimerState,
    ) -> Self {
        let completed_work_sessions =
            load_completed(&store).unwrap_or(snapshot.completed_work_sessions);
        Self {
            state: TimerState {
                seconds_remaining: snapshot.seconds_remaining.max(-1),
                completed_work_sessions,
                ..snapshot
            },
            store,
            durations,
            long_break_interval,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn active_session(&self) -> Session {
        self.state.active_session
    }

    pub fn seconds_remaining(&self) -> i64 {
        self.state.seconds_remaining
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.state.completed_work_sessions
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            session: self.state.active_session,
            seconds_remaining: self.state.seconds_remaining,
            nominal_secs: self.durations.nominal(self.state.active_session),
            completed_work_sessions: self.state.completed_work_sessions,
            running: self.state.running,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.state.running {
            return None;
        }
        if self.state.seconds_remaining < 0 {
            self.switch_to(self.state.active_session);
        }
        self.state.running = true;
        tracing::debug!(session = %self.state.active_session, remaining = self.state.seconds_remaining, "timer started");
        Some(Event::TimerStarted {
            session: self.state.active_session,
            seconds_remaining: self.state.seconds_remaining,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;
        tracing::debug!(remaining = self.state.seconds_remaining, "timer paused");
        Some(Event::TimerPaused {
            session: self.state.active_session,
            seconds_remaining: self.state.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Stop and rewind the active session. The completed counter is kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.state.running = false;
        self.switch_to(self.state.active_session);
        Some(Event::TimerReset {
            session: self.state.active_session,
            seconds_remaining: self.state.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::SessionEnded)` when the
    /// countdown passes zero; the timer is then idle in the next session.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.seconds_remaining -= 1;
        if self.state.seconds_remaining < 0 {
            return Some(self.end_session());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn end_session(&mut self) -> Event {
        self.state.running = false;
        let ended = self.state.active_session;

        if ended == Session::Work {
            self.state.completed_work_sessions = self.state.completed_work_sessions.saturating_add(1);
            persist_best_effort(
                &self.store,
                keys::COMPLETED_WORK_SESSIONS,
                &self.state.completed_work_sessions.to_string(),
            );
        }

        let next = next_session_every(
            ended,
            self.state.completed_work_sessions,
            self.long_break_interval,
        );
        self.switch_to(next);
        tracing::debug!(%ended, %next, completed = self.state.completed_work_sessions, "session ended");

        Event::SessionEnded {
            ended,
            next,
            completed_work_sessions: self.state.completed_work_sessions,
            at: Utc::now(),
        }
    }

    fn switch_to(&mut self, session: Session) {
        self.state.active_session = session;
        self.state.seconds_remaining = self.durations.nominal(session);
    }
}

fn load_completed<S: KvStore>(store: &S) -> Option<u32> {
    let raw = read_or_none(store, keys::COMPLETED_WORK_SESSIONS)?;
    match raw.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(value = %raw, "ignoring malformed completed-session count");
            None
        }
    }
}
