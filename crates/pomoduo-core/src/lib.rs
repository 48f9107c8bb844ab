//! # Pomoduo Core Library
//!
//! Core logic for Pomoduo, a countdown timer that alternates between two
//! named segments -- Work and Break -- and keeps a day-scoped log of
//! completed and partially-skipped cycles. All operations are available
//! through the standalone CLI binary; GUI layers are thin hosts over this
//! library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a caller-ticked state machine; one `on_tick()` per
//!   wall-clock second while running
//! - **Activity Log**: append-only work/break cycle records inside a
//!   rolling 24-hour day window
//! - **Storage**: a single SQLite kv slot for the state snapshot, plus
//!   TOML configuration; reloads fast-forward the countdown by the
//!   wall-clock time spent suspended
//! - **Service**: the live one-second clock hosting the engine
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: timer state machine and command surface
//! - [`DayLog`]: the activity log
//! - [`StateStore`]: persistence and resync gateway
//! - [`TimerService`]: clock host
//! - [`duration`]: the free-form duration codec

pub mod duration;
pub mod error;
pub mod events;
pub mod service;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, DatabaseError};
pub use events::Event;
pub use service::TimerService;
pub use storage::{Config, Database, Preset, StateStore};
pub use timer::{
    DayLog, LogEntry, LogEntryKind, PendingResolution, Segment, Snapshot, TimerEngine,
    MAX_SEGMENT_SECS,
};
