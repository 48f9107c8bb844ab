use chrono::Utc;
use clap::Subcommand;
use pomoduo_core::{duration, Event, StateStore, TimerService};

use super::{load_engine, SegmentArg};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown
    Start,
    /// Stop the countdown
    Stop,
    /// Start if stopped, stop if running
    Toggle,
    /// Swap segments immediately, resolving the activity log
    Skip,
    /// Reset one segment to its configured duration (stops the timer)
    Restart {
        /// Segment to reset
        segment: SegmentArg,
    },
    /// Set a segment duration, e.g. "25", "4m30s", "12:30"
    Set {
        /// Segment to configure
        segment: SegmentArg,
        /// Duration string
        duration: String,
    },
    /// Configure both segments from a named preset or minute values,
    /// resetting to work
    Preset {
        /// Preset name from config, or work minutes
        #[arg(value_name = "NAME_OR_WORK_MIN")]
        preset: String,
        /// Break minutes, when giving minute values
        break_minutes: Option<u32>,
    },
    /// Toggle the sound advisory flag
    Mute,
    /// Print current timer state as JSON
    Status,
    /// Fast-forward a running timer by the time since the last save,
    /// resolving the activity log like real ticks would have
    Resync,
    /// Run the timer in the foreground until Ctrl-C, printing events
    Run,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let now = Utc::now();

    if let TimerAction::Run = action {
        return run_foreground(store);
    }
    if let TimerAction::Resync = action {
        return resync(store, now);
    }

    let mut engine = load_engine(&store, now);
    let event = match action {
        TimerAction::Start => engine.start(now),
        TimerAction::Stop => engine.stop(now),
        TimerAction::Toggle => {
            if engine.is_running() {
                engine.stop(now)
            } else {
                engine.start(now)
            }
        }
        TimerAction::Skip => engine.skip(now),
        TimerAction::Restart { segment } => engine.restart(segment.into(), now),
        TimerAction::Set { segment, duration } => {
            let Some(seconds) = duration::parse(&duration) else {
                eprintln!("invalid duration: {duration}");
                std::process::exit(1);
            };
            if seconds == 0 {
                eprintln!("duration must be at least one second");
                std::process::exit(1);
            }
            engine.set_duration(segment.into(), seconds, now)
        }
        TimerAction::Preset {
            preset,
            break_minutes,
        } => {
            let (work, brk) = match break_minutes {
                Some(brk) => {
                    let Ok(work) = preset.parse::<u32>() else {
                        eprintln!("invalid work minutes: {preset}");
                        std::process::exit(1);
                    };
                    (work, brk)
                }
                None => {
                    let config = pomoduo_core::Config::load();
                    let Some(found) = config
                        .presets
                        .iter()
                        .find(|p| p.name.eq_ignore_ascii_case(&preset))
                    else {
                        eprintln!("unknown preset: {preset}");
                        std::process::exit(1);
                    };
                    (found.work_minutes, found.break_minutes)
                }
            };
            engine.apply_preset(work, brk, now)
        }
        TimerAction::Mute => engine.toggle_mute(now),
        TimerAction::Status => None,
        TimerAction::Resync | TimerAction::Run => unreachable!(),
    };

    store.save(&engine, Utc::now())?;
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }
    Ok(())
}

fn resync(store: StateStore, now: chrono::DateTime<Utc>) -> Result<(), Box<dyn std::error::Error>> {
    let Some((engine, event)) = store.resync(now) else {
        println!("{}", serde_json::to_string_pretty(&super::fresh_engine().snapshot())?);
        return Ok(());
    };
    store.save(&engine, Utc::now())?;
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }
    Ok(())
}

/// Host the live clock until Ctrl-C. A snapshot that was left running
/// resyncs through the tick path first, so time suspended between
/// invocations is accounted for before the clock re-arms.
fn run_foreground(store: StateStore) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let now = Utc::now();
        let (engine, resync_event) = match store.resync(now) {
            Some((engine, event)) => (engine, event),
            None => (super::fresh_engine(), None),
        };
        if let Some(event) = &resync_event {
            println!("{}", serde_json::to_string_pretty(event)?);
        }

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Event>();
        let service = TimerService::new(engine, store, tx);
        if let Some(event) = service.start().await {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }

        loop {
            tokio::select! {
                maybe_event = rx.recv() => {
                    match maybe_event {
                        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    service.shutdown().await;
                    println!("{}", serde_json::to_string_pretty(&service.snapshot().await)?);
                    break;
                }
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
