//! Persistence and resync gateway.
//!
//! The full timer state plus day log is serialized to a single kv slot
//! after every mutating operation. Loading is full-or-nothing: a record
//! missing any required field, or with a wrong type anywhere, is discarded
//! wholesale and the caller falls back to a fresh engine.
//!
//! Two restore paths share the elapsed-time arithmetic but differ in log
//! behavior, deliberately:
//!
//! - [`StateStore::load`] fast-forwards silently -- a zero-crossing swaps
//!   segments but commits no log entry and emits no event.
//! - [`StateStore::resync`] routes the crossing through the full tick
//!   resolution, exactly like a dense run of real ticks.
//!
//! Both resolve at most one zero-crossing; elapsed time beyond the first
//! crossing collapses into the duration reset. No back-dated entries are
//! fabricated for cycles that would have finished while suspended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Database;
use crate::error::Result;
use crate::events::Event;
use crate::timer::{DayLog, LogEntry, PendingResolution, Segment, TimerEngine};

/// The kv slot holding the snapshot.
pub const STATE_KEY: &str = "timer_state";

/// Wire form of an unresolved skipped-work segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PendingSkippedWork {
    work_elapsed_seconds: u32,
    work_duration: u32,
}

/// The persisted record. Field names are the wire contract; the first six
/// fields are required and reject the whole record when absent or
/// mistyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    work_remaining_seconds: u32,
    break_remaining_seconds: u32,
    work_duration: u32,
    break_duration: u32,
    current_mode: Segment,
    is_running: bool,
    #[serde(default)]
    muted: bool,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    day_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    completed_cycles: Vec<LogEntry>,
    #[serde(default)]
    work_segment_completed_by_timer: bool,
    #[serde(default)]
    pending_skipped_work: Option<PendingSkippedWork>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    last_saved_at: Option<DateTime<Utc>>,
}

impl PersistedState {
    fn from_engine(engine: &TimerEngine, now: DateTime<Utc>) -> Self {
        let log = engine.log();
        let (completed_by_timer, skipped) = match log.pending() {
            PendingResolution::None => (false, None),
            PendingResolution::CompletedByTimer => (true, None),
            PendingResolution::SkippedWork {
                work_elapsed,
                work_duration,
            } => (
                false,
                Some(PendingSkippedWork {
                    work_elapsed_seconds: work_elapsed,
                    work_duration,
                }),
            ),
        };
        Self {
            work_remaining_seconds: engine.remaining(Segment::Work),
            break_remaining_seconds: engine.remaining(Segment::Break),
            work_duration: engine.duration(Segment::Work),
            break_duration: engine.duration(Segment::Break),
            current_mode: engine.current_segment(),
            is_running: engine.is_running(),
            muted: engine.muted(),
            day_started_at: log.day_started_at(),
            completed_cycles: log.entries().to_vec(),
            work_segment_completed_by_timer: completed_by_timer,
            pending_skipped_work: skipped,
            // The authoritative reference point for resync, stamped only
            // while running.
            last_saved_at: engine.is_running().then_some(now),
        }
    }

    fn into_engine(self) -> TimerEngine {
        let pending = match self.pending_skipped_work {
            Some(p) => PendingResolution::SkippedWork {
                work_elapsed: p.work_elapsed_seconds,
                work_duration: p.work_duration,
            },
            None if self.work_segment_completed_by_timer => PendingResolution::CompletedByTimer,
            None => PendingResolution::None,
        };
        let log = DayLog::from_parts(self.day_started_at, self.completed_cycles, pending);
        TimerEngine::from_parts(
            self.work_duration,
            self.break_duration,
            self.work_remaining_seconds,
            self.break_remaining_seconds,
            self.current_mode,
            self.is_running,
            self.muted,
            log,
        )
    }

    /// Whole seconds elapsed since the record was saved, clamped at zero
    /// against clock skew.
    fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        match self.last_saved_at {
            Some(saved) if self.is_running => {
                let ms = (now - saved).num_milliseconds();
                if ms <= 0 {
                    0
                } else {
                    (ms / 1000) as u64
                }
            }
            _ => 0,
        }
    }
}

/// Gateway between the engine and the durable kv slot.
pub struct StateStore {
    db: Database,
}

impl StateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store over the default database location.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Serialize the full engine state into the slot. While running, the
    /// same write stamps `lastSavedAt = now`.
    pub fn save(&self, engine: &TimerEngine, now: DateTime<Utc>) -> Result<()> {
        let record = PersistedState::from_engine(engine, now);
        let json = serde_json::to_string(&record)?;
        self.db.kv_set(STATE_KEY, &json)?;
        Ok(())
    }

    fn read_record(&self) -> Option<PersistedState> {
        let json = match self.db.kv_get(STATE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read timer snapshot");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                // Full-or-nothing validation: schema drift discards the
                // whole record.
                tracing::warn!(error = %e, "discarding malformed timer snapshot");
                None
            }
        }
    }

    /// Restore the engine, expire the day window if stale, and silently
    /// fast-forward a running record by the wall-clock time since it was
    /// saved. `None` when the slot is empty or the record is invalid.
    pub fn load(&self, now: DateTime<Utc>) -> Option<TimerEngine> {
        let record = self.read_record()?;
        let elapsed = record.elapsed_secs(now);
        let mut engine = record.into_engine();
        engine.log_mut().expire_if_stale(now);
        engine.catch_up_silent(elapsed);
        Some(engine)
    }

    /// Restore the engine and fast-forward through the full tick
    /// resolution. Invoked when the process regains foreground while the
    /// timer was running; the caller re-arms the clock afterwards.
    pub fn resync(&self, now: DateTime<Utc>) -> Option<(TimerEngine, Option<Event>)> {
        let record = self.read_record()?;
        let elapsed = record.elapsed_secs(now);
        let mut engine = record.into_engine();
        engine.log_mut().expire_if_stale(now);
        let event = engine.resync(elapsed, now);
        Some((engine, event))
    }
}
