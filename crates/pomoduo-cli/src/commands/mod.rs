pub mod config;
pub mod log;
pub mod timer;

use clap::ValueEnum;
use pomoduo_core::{Config, Segment, StateStore, TimerEngine};

/// Clap-facing segment selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SegmentArg {
    Work,
    Break,
}

impl From<SegmentArg> for Segment {
    fn from(arg: SegmentArg) -> Self {
        match arg {
            SegmentArg::Work => Segment::Work,
            SegmentArg::Break => Segment::Break,
        }
    }
}

/// Restore the engine from the snapshot slot, seeding a fresh one from
/// config when the slot is empty or invalid.
pub fn load_engine(store: &StateStore, now: chrono::DateTime<chrono::Utc>) -> TimerEngine {
    store.load(now).unwrap_or_else(fresh_engine)
}

pub fn fresh_engine() -> TimerEngine {
    let config = Config::load();
    let mut engine = TimerEngine::with_durations(config.work_seconds(), config.break_seconds());
    if config.sound.muted {
        engine.toggle_mute(chrono::Utc::now());
    }
    engine
}
