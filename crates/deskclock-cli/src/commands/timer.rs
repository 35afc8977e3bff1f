use clap::Subcommand;
use deskclock_core::storage::{keys, persist_best_effort, read_or_none};
use deskclock_core::{Config, Event, IntervalTimer, KvStore, TimerState};
use std::io::Write;
use std::time::Duration;

use super::{open_store, renderer};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Stop and rewind the current session
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Advance the countdown by whole seconds
    Tick {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Run in the foreground, ticking once per second until the session ends
    Run,
}

fn load_timer<S: KvStore>(store: S, config: &Config) -> IntervalTimer<S> {
    let durations = config.durations();
    let interval = config.timer.sessions_before_long_break;
    let snapshot = read_or_none(&store, keys::TIMER_STATE)
        .and_then(|json| serde_json::from_str::<TimerState>(&json).ok());
    match snapshot {
        Some(snapshot) => IntervalTimer::restore(store, durations, interval, snapshot),
        None => IntervalTimer::new(store, durations, interval),
    }
}

/// Snapshot the timer for the next invocation. A failed write is logged
/// and the countdown carries on.
fn save_timer<S: KvStore>(
    store: &impl KvStore,
    timer: &IntervalTimer<S>,
) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(&timer.state())?;
    persist_best_effort(store, keys::TIMER_STATE, &json);
    Ok(())
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let config = Config::load_or_default();
    let mut timer = load_timer(&store, &config);

    match action {
        TimerAction::Start => match timer.start() {
            Some(event) => print_event(&event)?,
            None => print_event(&timer.snapshot())?,
        },
        TimerAction::Pause => match timer.pause() {
            Some(event) => print_event(&event)?,
            None => print_event(&timer.snapshot())?,
        },
        TimerAction::Reset => {
            if let Some(event) = timer.reset() {
                print_event(&event)?;
            }
        }
        TimerAction::Status => print_event(&timer.snapshot())?,
        TimerAction::Tick { count } => {
            for _ in 0..count {
                if let Some(event) = timer.tick() {
                    print_event(&event)?;
                }
            }
            print_event(&timer.snapshot())?;
        }
        TimerAction::Run => {
            let renderer = renderer(&config);
            timer.start();
            save_timer(&store, &timer)?;
            let mut stdout = std::io::stdout();
            loop {
                print!("\r{}", renderer.timer_line(&timer.state()));
                stdout.flush()?;
                std::thread::sleep(Duration::from_secs(1));
                let ended = timer.tick();
                save_timer(&store, &timer)?;
                if let Some(event) = ended {
                    if let Event::SessionEnded { next, .. } = &event {
                        println!("\x07\rSession ended. Next up: {next}");
                    }
                    print_event(&event)?;
                    break;
                }
            }
        }
    }

    save_timer(&store, &timer)?;
    Ok(())
}
