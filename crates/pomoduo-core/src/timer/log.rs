//! Day-scoped activity log.
//!
//! Records completed or partially-skipped work segments paired with the
//! break that followed them. The log lives inside a rolling 24-hour "day
//! window" anchored at the first segment start; once the gap since the
//! anchor exceeds 24 hours the log resets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single resolved work-break pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LogEntryKind,
}

/// What kind of work-break pair an entry records. All durations are whole
/// seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LogEntryKind {
    /// A work segment that ran to natural completion, paired with the
    /// actual break time taken.
    Cycle {
        work_duration: u32,
        break_duration: u32,
        intended_break_duration: u32,
        omit_break: bool,
    },
    /// A work segment manually cut short before completion, paired with
    /// the following break.
    SkippedWork {
        work_elapsed: u32,
        work_duration: u32,
        break_elapsed: u32,
        intended_break_duration: u32,
        omit_break: bool,
    },
}

/// The at-most-one unresolved work completion awaiting its break.
///
/// A tagged enum rather than two informally-exclusive flags, so the mutual
/// exclusion is structural. Both states clear together when an entry is
/// committed or the day window rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingResolution {
    #[default]
    None,
    /// A work segment ran to zero naturally.
    CompletedByTimer,
    /// A work segment was cut short by skip.
    SkippedWork { work_elapsed: u32, work_duration: u32 },
}

/// Append-only, day-scoped log of work-break cycles.
#[derive(Debug, Clone, Default)]
pub struct DayLog {
    day_started_at: Option<DateTime<Utc>>,
    entries: Vec<LogEntry>,
    pending: PendingResolution,
}

fn day_window() -> Duration {
    Duration::hours(24)
}

impl DayLog {
    pub(crate) fn from_parts(
        day_started_at: Option<DateTime<Utc>>,
        entries: Vec<LogEntry>,
        pending: PendingResolution,
    ) -> Self {
        Self {
            day_started_at,
            entries,
            pending,
        }
    }

    pub fn day_started_at(&self) -> Option<DateTime<Utc>> {
        self.day_started_at
    }

    /// Entries in write order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries sorted by completion time, most recent first. Write order is
    /// the audit order; this is the display order.
    pub fn entries_sorted(&self) -> Vec<LogEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sorted
    }

    pub fn pending(&self) -> PendingResolution {
        self.pending
    }

    pub(crate) fn set_pending(&mut self, pending: PendingResolution) {
        self.pending = pending;
    }

    /// Clear the log and pending state if the day window has expired.
    /// The anchor resets to `None`; the next `ensure_day_window` re-anchors.
    pub fn expire_if_stale(&mut self, now: DateTime<Utc>) -> bool {
        match self.day_started_at {
            Some(started) if now - started >= day_window() => {
                self.entries.clear();
                self.pending = PendingResolution::None;
                self.day_started_at = None;
                true
            }
            _ => false,
        }
    }

    /// Open a day window if none is active or the previous one expired.
    pub fn ensure_day_window(&mut self, now: DateTime<Utc>) {
        self.expire_if_stale(now);
        if self.day_started_at.is_none() {
            self.day_started_at = Some(now);
        }
    }

    /// Commit the pending work resolution, pairing it with the given break
    /// outcome. Returns the appended entry, or `None` when nothing was
    /// pending.
    pub(crate) fn resolve_pending(
        &mut self,
        work_duration: u32,
        break_elapsed: u32,
        intended_break_duration: u32,
        omit_break: bool,
        now: DateTime<Utc>,
    ) -> Option<LogEntry> {
        let kind = match self.pending {
            PendingResolution::None => return None,
            PendingResolution::CompletedByTimer => LogEntryKind::Cycle {
                work_duration,
                break_duration: break_elapsed,
                intended_break_duration,
                omit_break,
            },
            PendingResolution::SkippedWork {
                work_elapsed,
                work_duration,
            } => LogEntryKind::SkippedWork {
                work_elapsed,
                work_duration,
                break_elapsed,
                intended_break_duration,
                omit_break,
            },
        };
        self.ensure_day_window(now);
        self.pending = PendingResolution::None;
        let entry = LogEntry {
            id: Uuid::new_v4(),
            completed_at: now,
            kind,
        };
        self.entries.push(entry.clone());
        Some(entry)
    }

    /// Delete exactly one entry by identity. Leaves the day window and any
    /// pending resolution untouched.
    pub fn remove_entry(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    /// Empty the list. Leaves the day window and any pending resolution
    /// untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
