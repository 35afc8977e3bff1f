mod engine;
mod session;

pub use engine::{IntervalTimer, TimerState};
pub use session::{
    format_countdown, next_session, next_session_every, Session, SessionDurations,
    LONG_BREAK_INTERVAL,
};
