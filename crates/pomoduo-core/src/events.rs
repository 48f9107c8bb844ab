//! Command outcomes.
//!
//! Every mutating command produces an Event. Hosting layers (the CLI, an
//! eventual GUI) render or forward them; the audio layer keys off the
//! `play_sound` advisory on completions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{LogEntry, Segment};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        segment: Segment,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerStopped {
        segment: Segment,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    /// A segment counted down to zero. Carries the log entry committed by
    /// the resolution, if any, and whether the ding should play.
    SegmentCompleted {
        segment: Segment,
        next_segment: Segment,
        entry: Option<LogEntry>,
        play_sound: bool,
        at: DateTime<Utc>,
    },
    SegmentSkipped {
        from_segment: Segment,
        to_segment: Segment,
        entry: Option<LogEntry>,
        at: DateTime<Utc>,
    },
    SegmentRestarted {
        segment: Segment,
        was_running: bool,
        at: DateTime<Utc>,
    },
    DurationSet {
        segment: Segment,
        seconds: u32,
        at: DateTime<Utc>,
    },
    PresetApplied {
        work_minutes: u32,
        break_minutes: u32,
        at: DateTime<Utc>,
    },
    MuteToggled {
        muted: bool,
        at: DateTime<Utc>,
    },
}
