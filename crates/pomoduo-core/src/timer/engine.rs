//! Timer state machine.
//!
//! The engine alternates between two segments, Work and Break, each with its
//! own configured duration and remaining countdown. It has no internal
//! clock -- the caller feeds it one `on_tick()` per wall-clock second (see
//! [`crate::service::TimerService`] for the live ticker) -- which also
//! means tests can simulate any span of time by calling `on_tick()` in a
//! loop.
//!
//! ## Transitions
//!
//! ```text
//! Work --(remaining hits 0 / skip)--> Break --(remaining hits 0 / skip)--> Work
//! ```
//!
//! A zero-crossing resolves at most one segment transition per call. When
//! elapsed real time spans several full segments (see the resync path in
//! [`crate::storage::StateStore`]), the extra crossings collapse into the
//! duration reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::log::{DayLog, LogEntry, PendingResolution};
use crate::events::Event;

/// One of the two timer phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Work,
    Break,
}

impl Segment {
    pub fn other(self) -> Self {
        match self {
            Segment::Work => Segment::Break,
            Segment::Break => Segment::Work,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Work => write!(f, "work"),
            Segment::Break => write!(f, "break"),
        }
    }
}

/// Upper bound on segment durations, in seconds (55 minutes).
pub const MAX_SEGMENT_SECS: u32 = 55 * 60;

const DEFAULT_WORK_SECS: u32 = 25 * 60;
const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// Serializable snapshot of the query surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_segment: Segment,
    pub is_running: bool,
    pub muted: bool,
    pub work_remaining_seconds: u32,
    pub work_duration: u32,
    pub break_remaining_seconds: u32,
    pub break_duration: u32,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub day_started_at: Option<DateTime<Utc>>,
    pub log_entries: usize,
}

/// Work/break countdown state machine.
///
/// All mutation goes through command methods; commands return the [`Event`]
/// they produced, or `None` for a no-op. The engine holds both the timer
/// state and the day-scoped activity log, since tick resolution commits
/// log entries.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    work_duration: u32,
    break_duration: u32,
    work_remaining: u32,
    break_remaining: u32,
    current_segment: Segment,
    is_running: bool,
    muted: bool,
    log: DayLog,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::with_durations(DEFAULT_WORK_SECS, DEFAULT_BREAK_SECS)
    }
}

impl TimerEngine {
    /// Fresh engine: Work active, not running, both segments full.
    pub fn with_durations(work_secs: u32, break_secs: u32) -> Self {
        let work_duration = work_secs.clamp(1, MAX_SEGMENT_SECS);
        let break_duration = break_secs.clamp(1, MAX_SEGMENT_SECS);
        Self {
            work_duration,
            break_duration,
            work_remaining: work_duration,
            break_remaining: break_duration,
            current_segment: Segment::Work,
            is_running: false,
            muted: false,
            log: DayLog::default(),
        }
    }

    pub(crate) fn from_parts(
        work_duration: u32,
        break_duration: u32,
        work_remaining: u32,
        break_remaining: u32,
        current_segment: Segment,
        is_running: bool,
        muted: bool,
        log: DayLog,
    ) -> Self {
        let work_duration = work_duration.clamp(1, MAX_SEGMENT_SECS);
        let break_duration = break_duration.clamp(1, MAX_SEGMENT_SECS);
        Self {
            work_duration,
            break_duration,
            work_remaining: work_remaining.min(work_duration),
            break_remaining: break_remaining.min(break_duration),
            current_segment,
            is_running,
            muted,
            log,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_segment(&self) -> Segment {
        self.current_segment
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn duration(&self, segment: Segment) -> u32 {
        match segment {
            Segment::Work => self.work_duration,
            Segment::Break => self.break_duration,
        }
    }

    pub fn remaining(&self, segment: Segment) -> u32 {
        match segment {
            Segment::Work => self.work_remaining,
            Segment::Break => self.break_remaining,
        }
    }

    pub fn active_remaining(&self) -> u32 {
        self.remaining(self.current_segment)
    }

    pub fn log(&self) -> &DayLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut DayLog {
        &mut self.log
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_segment: self.current_segment,
            is_running: self.is_running,
            muted: self.muted,
            work_remaining_seconds: self.work_remaining,
            work_duration: self.work_duration,
            break_remaining_seconds: self.break_remaining,
            break_duration: self.break_duration,
            day_started_at: self.log.day_started_at(),
            log_entries: self.log.entries().len(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// One one-second decrement of the active segment.
    ///
    /// No-op when the active remaining is already zero. A decrement that
    /// reaches zero resolves the zero-crossing: log resolution, then a
    /// segment swap with the new active segment reset to full duration.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let remaining = self.active_remaining();
        if remaining == 0 {
            return None;
        }
        self.set_active_remaining(remaining - 1);
        if self.active_remaining() > 0 {
            return None;
        }
        Some(self.complete_active_segment(now))
    }

    /// No-op when already running. Opens the day window.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.log.ensure_day_window(now);
        self.is_running = true;
        Some(Event::TimerStarted {
            segment: self.current_segment,
            remaining_seconds: self.active_remaining(),
            at: now,
        })
    }

    /// No-op when not running.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerStopped {
            segment: self.current_segment,
            remaining_seconds: self.active_remaining(),
            at: now,
        })
    }

    /// Force an immediate segment swap regardless of remaining time,
    /// running or paused.
    ///
    /// Leaving Break flushes the pending work resolution with the actual
    /// break time taken. Leaving Work stashes the partial segment for the
    /// following break to resolve -- unless less than a second elapsed, in
    /// which case nothing is recorded, or at most a second remained, in
    /// which case it counts as completed by the timer. Both remainings
    /// reset to full duration.
    pub fn skip(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let from = self.current_segment;
        let entry = match from {
            Segment::Break => self.flush_break_to_log(now),
            Segment::Work => {
                let elapsed = self.work_duration - self.work_remaining;
                if elapsed >= 1 {
                    if self.work_remaining <= 1 {
                        // About to finish anyway.
                        self.log.set_pending(PendingResolution::CompletedByTimer);
                    } else {
                        self.log.set_pending(PendingResolution::SkippedWork {
                            work_elapsed: elapsed,
                            work_duration: self.work_duration,
                        });
                    }
                }
                None
            }
        };
        self.work_remaining = self.work_duration;
        self.break_remaining = self.break_duration;
        self.current_segment = from.other();
        Some(Event::SegmentSkipped {
            from_segment: from,
            to_segment: self.current_segment,
            entry,
            at: now,
        })
    }

    /// Commit the pending work resolution using the break time elapsed so
    /// far. No-op unless Break is the active segment and something is
    /// pending. A paused break that never started commits with
    /// `omit_break` set and zero break time.
    pub fn flush_break_to_log(&mut self, now: DateTime<Utc>) -> Option<LogEntry> {
        if self.current_segment != Segment::Break {
            return None;
        }
        let elapsed = self.break_duration - self.break_remaining;
        let omit_break = elapsed == 0 && !self.is_running;
        self.log
            .resolve_pending(self.work_duration, elapsed, self.break_duration, omit_break, now)
    }

    /// Reset the targeted segment's remaining to its configured duration.
    ///
    /// Unconditionally stops the timer first, even when the restarted
    /// segment is not the active one. Does not flip the segment and does
    /// not touch the log.
    pub fn restart(&mut self, segment: Segment, now: DateTime<Utc>) -> Option<Event> {
        let was_running = self.is_running;
        self.is_running = false;
        match segment {
            Segment::Work => self.work_remaining = self.work_duration,
            Segment::Break => self.break_remaining = self.break_duration,
        }
        Some(Event::SegmentRestarted {
            segment,
            was_running,
            at: now,
        })
    }

    /// Set both duration and remaining for a segment, effectively
    /// restarting it. Input is validated upstream by the duration codec;
    /// out-of-range values clamp to `1..=MAX_SEGMENT_SECS`.
    pub fn set_duration(&mut self, segment: Segment, seconds: u32, now: DateTime<Utc>) -> Option<Event> {
        let seconds = seconds.clamp(1, MAX_SEGMENT_SECS);
        match segment {
            Segment::Work => {
                self.work_duration = seconds;
                self.work_remaining = seconds;
            }
            Segment::Break => {
                self.break_duration = seconds;
                self.break_remaining = seconds;
            }
        }
        Some(Event::DurationSet {
            segment,
            seconds,
            at: now,
        })
    }

    /// Stop the timer and reconfigure both segments from minute values,
    /// forcing Work active. Does not touch the log.
    pub fn apply_preset(&mut self, work_minutes: u32, break_minutes: u32, now: DateTime<Utc>) -> Option<Event> {
        self.is_running = false;
        self.work_duration = work_minutes.saturating_mul(60).clamp(1, MAX_SEGMENT_SECS);
        self.break_duration = break_minutes.saturating_mul(60).clamp(1, MAX_SEGMENT_SECS);
        self.work_remaining = self.work_duration;
        self.break_remaining = self.break_duration;
        self.current_segment = Segment::Work;
        Some(Event::PresetApplied {
            work_minutes,
            break_minutes,
            at: now,
        })
    }

    /// Advisory for the external audio layer.
    pub fn toggle_mute(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.muted = !self.muted;
        Some(Event::MuteToggled {
            muted: self.muted,
            at: now,
        })
    }

    /// Delete one log entry by identity, independent of timer state.
    pub fn remove_log_entry(&mut self, id: uuid::Uuid) -> bool {
        self.log.remove_entry(id)
    }

    /// Empty the log. Day window and pending resolution stay untouched.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    // ── Catch-up ─────────────────────────────────────────────────────

    /// Fast-forward by `elapsed_secs` as if ticks had fired, resolving at
    /// most one zero-crossing through the full tick path (log commits,
    /// completion event). Used when the process regains foreground while
    /// running. Zero elapsed is a no-op.
    pub fn resync(&mut self, elapsed_secs: u64, now: DateTime<Utc>) -> Option<Event> {
        if !self.is_running || elapsed_secs == 0 {
            return None;
        }
        let remaining = self.active_remaining();
        if remaining == 0 {
            return None;
        }
        let new = remaining.saturating_sub(elapsed_secs.min(u64::from(u32::MAX)) as u32);
        self.set_active_remaining(new);
        if new == 0 {
            Some(self.complete_active_segment(now))
        } else {
            None
        }
    }

    /// Load-time variant of [`resync`](Self::resync): same arithmetic, but
    /// a zero-crossing swaps silently -- no log resolution, no event.
    pub(crate) fn catch_up_silent(&mut self, elapsed_secs: u64) {
        if elapsed_secs == 0 {
            return;
        }
        let remaining = self.active_remaining();
        if remaining == 0 {
            return;
        }
        let new = remaining.saturating_sub(elapsed_secs.min(u64::from(u32::MAX)) as u32);
        self.set_active_remaining(new);
        if new == 0 {
            self.swap_segment();
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_active_remaining(&mut self, seconds: u32) {
        match self.current_segment {
            Segment::Work => self.work_remaining = seconds,
            Segment::Break => self.break_remaining = seconds,
        }
    }

    /// Resolve the zero-crossing of the active segment: log resolution,
    /// then the swap.
    fn complete_active_segment(&mut self, now: DateTime<Utc>) -> Event {
        let finished = self.current_segment;
        let entry = match finished {
            Segment::Work => {
                self.log.set_pending(PendingResolution::CompletedByTimer);
                None
            }
            // The break ran to zero, so the full intended break was taken.
            Segment::Break => self.log.resolve_pending(
                self.work_duration,
                self.break_duration,
                self.break_duration,
                false,
                now,
            ),
        };
        self.swap_segment();
        Event::SegmentCompleted {
            segment: finished,
            next_segment: self.current_segment,
            entry,
            play_sound: !self.muted,
            at: now,
        }
    }

    /// Flip the active segment and reset the new active segment's
    /// remaining to its full duration.
    fn swap_segment(&mut self) {
        self.current_segment = self.current_segment.other();
        self.set_active_remaining(self.duration(self.current_segment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::log::LogEntryKind;

    fn engine(work: u32, brk: u32) -> TimerEngine {
        TimerEngine::with_durations(work, brk)
    }

    fn tick_n(engine: &mut TimerEngine, n: u32) -> Vec<Event> {
        let now = Utc::now();
        (0..n).filter_map(|_| engine.on_tick(now)).collect()
    }

    #[test]
    fn initial_state() {
        let e = TimerEngine::default();
        assert_eq!(e.current_segment(), Segment::Work);
        assert!(!e.is_running());
        assert_eq!(e.remaining(Segment::Work), 1500);
        assert_eq!(e.remaining(Segment::Break), 300);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut e = TimerEngine::default();
        let now = Utc::now();
        assert!(e.start(now).is_some());
        assert!(e.start(now).is_none());
        assert!(e.is_running());
        assert!(e.stop(now).is_some());
        assert!(e.stop(now).is_none());
        assert!(!e.is_running());
    }

    #[test]
    fn start_opens_day_window() {
        let mut e = TimerEngine::default();
        let now = Utc::now();
        assert_eq!(e.log().day_started_at(), None);
        e.start(now);
        assert_eq!(e.log().day_started_at(), Some(now));
    }

    #[test]
    fn tick_decrements_active_segment_only() {
        let mut e = engine(10, 5);
        tick_n(&mut e, 3);
        assert_eq!(e.remaining(Segment::Work), 7);
        assert_eq!(e.remaining(Segment::Break), 5);
    }

    #[test]
    fn work_completion_sets_pending_and_swaps() {
        let mut e = engine(5, 5);
        let events = tick_n(&mut e, 5);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            Event::SegmentCompleted {
                segment: Segment::Work,
                next_segment: Segment::Break,
                entry: None,
                ..
            }
        ));
        assert_eq!(e.current_segment(), Segment::Break);
        assert_eq!(e.remaining(Segment::Break), 5);
        assert_eq!(e.log().pending(), PendingResolution::CompletedByTimer);
        assert!(e.log().entries().is_empty());
    }

    #[test]
    fn full_cycle_commits_one_cycle_entry() {
        // Classic 25 minute work, 5 minute break.
        let mut e = engine(25 * 60, 5 * 60);
        tick_n(&mut e, 1500);
        assert_eq!(e.current_segment(), Segment::Break);
        assert_eq!(e.remaining(Segment::Break), 300);

        let events = tick_n(&mut e, 300);
        assert_eq!(events.len(), 1);
        assert_eq!(e.current_segment(), Segment::Work);
        assert_eq!(e.remaining(Segment::Work), 1500);
        assert_eq!(e.log().pending(), PendingResolution::None);

        let entries = e.log().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].kind,
            LogEntryKind::Cycle {
                work_duration: 1500,
                break_duration: 300,
                intended_break_duration: 300,
                omit_break: false,
            }
        );
    }

    #[test]
    fn tick_on_exhausted_segment_is_noop() {
        // An active segment can sit at zero after a restored snapshot.
        let mut e = TimerEngine::from_parts(
            10,
            5,
            0,
            5,
            Segment::Work,
            false,
            false,
            DayLog::default(),
        );
        assert!(e.on_tick(Utc::now()).is_none());
        assert_eq!(e.remaining(Segment::Work), 0);
        assert_eq!(e.current_segment(), Segment::Work);
    }

    #[test]
    fn skip_work_under_one_second_records_nothing() {
        let mut e = engine(1500, 300);
        e.skip(Utc::now());
        assert_eq!(e.current_segment(), Segment::Break);
        assert_eq!(e.log().pending(), PendingResolution::None);
        assert!(e.log().entries().is_empty());
    }

    #[test]
    fn skip_work_partial_stashes_pending() {
        let mut e = engine(1500, 300);
        tick_n(&mut e, 600);
        e.skip(Utc::now());
        assert_eq!(
            e.log().pending(),
            PendingResolution::SkippedWork {
                work_elapsed: 600,
                work_duration: 1500,
            }
        );
        assert_eq!(e.remaining(Segment::Work), 1500);
        assert_eq!(e.remaining(Segment::Break), 300);

        // Full break completion resolves it as skipped work.
        let events = tick_n(&mut e, 300);
        assert_eq!(events.len(), 1);
        assert_eq!(
            e.log().entries()[0].kind,
            LogEntryKind::SkippedWork {
                work_elapsed: 600,
                work_duration: 1500,
                break_elapsed: 300,
                intended_break_duration: 300,
                omit_break: false,
            }
        );
    }

    #[test]
    fn skip_work_with_one_second_left_counts_as_completed() {
        let mut e = engine(10, 5);
        tick_n(&mut e, 9);
        e.skip(Utc::now());
        assert_eq!(e.log().pending(), PendingResolution::CompletedByTimer);
    }

    #[test]
    fn skip_paused_break_with_zero_elapsed_commits_omitted_break() {
        let mut e = engine(10, 5);
        tick_n(&mut e, 10); // Work completes, Break active, untouched.
        let event = e.skip(Utc::now()).unwrap();
        let entry = match event {
            Event::SegmentSkipped { entry, .. } => entry.unwrap(),
            other => panic!("expected SegmentSkipped, got {other:?}"),
        };
        assert_eq!(
            entry.kind,
            LogEntryKind::Cycle {
                work_duration: 10,
                break_duration: 0,
                intended_break_duration: 5,
                omit_break: true,
            }
        );
        assert_eq!(e.log().pending(), PendingResolution::None);
        assert_eq!(e.current_segment(), Segment::Work);
    }

    #[test]
    fn skip_break_midway_commits_actual_elapsed() {
        let mut e = engine(10, 5);
        e.start(Utc::now());
        tick_n(&mut e, 10);
        tick_n(&mut e, 2);
        e.skip(Utc::now());
        assert_eq!(
            e.log().entries()[0].kind,
            LogEntryKind::Cycle {
                work_duration: 10,
                break_duration: 2,
                intended_break_duration: 5,
                omit_break: false,
            }
        );
    }

    #[test]
    fn skip_break_with_nothing_pending_records_nothing() {
        let mut e = engine(10, 5);
        e.skip(Utc::now()); // To Break, under a second of work: no pending.
        e.skip(Utc::now()); // Back to Work.
        assert!(e.log().entries().is_empty());
    }

    #[test]
    fn restart_resets_only_target_segment() {
        let mut e = engine(10, 5);
        e.start(Utc::now());
        tick_n(&mut e, 4);
        e.restart(Segment::Work, Utc::now());
        assert_eq!(e.remaining(Segment::Work), 10);
        assert_eq!(e.current_segment(), Segment::Work);
        assert!(!e.is_running());
    }

    #[test]
    fn restart_of_inactive_segment_still_stops_timer() {
        // Deliberate behavior, not a defect: restart always stops the
        // clock, even when the restarted segment is not the active one.
        let mut e = engine(10, 5);
        e.start(Utc::now());
        tick_n(&mut e, 2);
        let event = e.restart(Segment::Break, Utc::now()).unwrap();
        assert!(!e.is_running());
        assert!(matches!(
            event,
            Event::SegmentRestarted {
                segment: Segment::Break,
                was_running: true,
                ..
            }
        ));
        assert_eq!(e.remaining(Segment::Work), 8);
        assert_eq!(e.remaining(Segment::Break), 5);
    }

    #[test]
    fn set_duration_restarts_segment() {
        let mut e = engine(10, 5);
        tick_n(&mut e, 4);
        e.set_duration(Segment::Work, 120, Utc::now());
        assert_eq!(e.duration(Segment::Work), 120);
        assert_eq!(e.remaining(Segment::Work), 120);
    }

    #[test]
    fn set_duration_clamps_to_bounds() {
        let mut e = engine(10, 5);
        e.set_duration(Segment::Work, 0, Utc::now());
        assert_eq!(e.duration(Segment::Work), 1);
        e.set_duration(Segment::Break, 4000, Utc::now());
        assert_eq!(e.duration(Segment::Break), MAX_SEGMENT_SECS);
    }

    #[test]
    fn apply_preset_stops_and_forces_work() {
        let mut e = engine(10, 5);
        e.start(Utc::now());
        e.skip(Utc::now()); // Break active.
        let entries_before = e.log().entries().len();
        e.apply_preset(50, 10, Utc::now());
        assert!(!e.is_running());
        assert_eq!(e.current_segment(), Segment::Work);
        assert_eq!(e.duration(Segment::Work), 3000);
        assert_eq!(e.duration(Segment::Break), 600);
        assert_eq!(e.remaining(Segment::Work), 3000);
        assert_eq!(e.log().entries().len(), entries_before);
    }

    #[test]
    fn apply_preset_saturates_oversized_minutes() {
        let mut e = engine(10, 5);
        e.apply_preset(u32::MAX, 5, Utc::now());
        assert_eq!(e.duration(Segment::Work), MAX_SEGMENT_SECS);
        assert_eq!(e.remaining(Segment::Work), MAX_SEGMENT_SECS);
        assert_eq!(e.duration(Segment::Break), 300);
    }

    #[test]
    fn toggle_mute_flips_advisory_flag() {
        let mut e = TimerEngine::default();
        assert!(!e.muted());
        e.toggle_mute(Utc::now());
        assert!(e.muted());
        e.toggle_mute(Utc::now());
        assert!(!e.muted());
    }

    #[test]
    fn completion_event_respects_mute() {
        let mut e = engine(1, 1);
        e.toggle_mute(Utc::now());
        let event = e.on_tick(Utc::now()).unwrap();
        assert!(matches!(event, Event::SegmentCompleted { play_sound: false, .. }));
    }

    #[test]
    fn resync_partial_elapsed_just_decrements() {
        let mut e = engine(60, 5);
        e.start(Utc::now());
        assert!(e.resync(10, Utc::now()).is_none());
        assert_eq!(e.remaining(Segment::Work), 50);
    }

    #[test]
    fn resync_zero_crossing_resolves_like_ticks() {
        let mut e = engine(60, 300);
        e.start(Utc::now());
        tick_n(&mut e, 60); // Work done, pending CompletedByTimer.
        let event = e.resync(400, Utc::now()).unwrap();
        assert!(matches!(
            event,
            Event::SegmentCompleted {
                segment: Segment::Break,
                ..
            }
        ));
        assert_eq!(e.log().entries().len(), 1);
        assert_eq!(e.current_segment(), Segment::Work);
        assert_eq!(e.remaining(Segment::Work), 60);
    }

    #[test]
    fn resync_when_stopped_is_noop() {
        let mut e = engine(60, 5);
        assert!(e.resync(10, Utc::now()).is_none());
        assert_eq!(e.remaining(Segment::Work), 60);
    }

    #[test]
    fn silent_catch_up_swaps_without_logging() {
        let mut e = engine(5, 300);
        e.start(Utc::now());
        e.catch_up_silent(10);
        assert_eq!(e.current_segment(), Segment::Break);
        assert_eq!(e.remaining(Segment::Break), 300);
        assert_eq!(e.log().pending(), PendingResolution::None);
        assert!(e.log().entries().is_empty());
    }
}
