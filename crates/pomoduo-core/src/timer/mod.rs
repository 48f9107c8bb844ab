mod engine;
mod log;

pub use engine::{Segment, Snapshot, TimerEngine, MAX_SEGMENT_SECS};
pub use log::{DayLog, LogEntry, LogEntryKind, PendingResolution};
