//! Live clock host for the timer engine.
//!
//! [`TimerService`] owns the engine behind a mutex and drives one tick per
//! wall-clock second from a spawned task while the timer runs. The mutex
//! plus the single ticker task serialize ticks and commands; every
//! mutation persists before the next callback can observe state.
//! Persistence is best-effort -- a failed write is logged and the timer
//! keeps functioning without durability.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::events::Event;
use crate::storage::StateStore;
use crate::timer::TimerEngine;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Hosts a [`TimerEngine`] with a live one-second clock.
#[derive(Clone)]
pub struct TimerService {
    engine: Arc<Mutex<TimerEngine>>,
    store: Arc<StateStore>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    events: mpsc::UnboundedSender<Event>,
}

impl TimerService {
    pub fn new(
        engine: TimerEngine,
        store: StateStore,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            store: Arc::new(store),
            ticker: Arc::new(Mutex::new(None)),
            events,
        }
    }

    pub async fn snapshot(&self) -> crate::timer::Snapshot {
        self.engine.lock().await.snapshot()
    }

    /// Start the engine and arm the clock. Returns `None` when the
    /// engine was already running; the clock is (re)armed either way,
    /// so a restored running snapshot keeps ticking.
    pub async fn start(&self) -> Option<Event> {
        let event = {
            let mut engine = self.engine.lock().await;
            let event = engine.start(Utc::now());
            if event.is_some() {
                persist(&self.store, &engine);
            }
            event
        };
        self.spawn_ticker().await;
        event
    }

    /// Stop the engine and cancel the clock. Idempotent.
    pub async fn stop(&self) -> Option<Event> {
        self.cancel_ticker().await;
        let mut engine = self.engine.lock().await;
        let event = engine.stop(Utc::now())?;
        persist(&self.store, &engine);
        Some(event)
    }

    /// Final save on shutdown, stopping the clock first.
    pub async fn shutdown(&self) {
        self.cancel_ticker().await;
        let mut engine = self.engine.lock().await;
        engine.stop(Utc::now());
        persist(&self.store, &engine);
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.as_ref() {
            if !handle.is_finished() {
                // Clock already scheduled.
                return;
            }
        }

        let engine = self.engine.clone();
        let store = self.store.clone();
        let events = self.events.clone();

        let handle = tokio::spawn(async move {
            // First tick a full interval out, and at most one pending tick
            // when the runtime falls behind.
            let start = time::Instant::now() + TICK_INTERVAL;
            let mut interval = time::interval_at(start, TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let event = {
                    let mut engine = engine.lock().await;
                    if !engine.is_running() {
                        break;
                    }
                    let event = engine.on_tick(Utc::now());
                    persist(&store, &engine);
                    event
                };
                if let Some(event) = event {
                    let _ = events.send(event);
                }
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}

fn persist(store: &StateStore, engine: &TimerEngine) {
    if let Err(e) = store.save(engine, Utc::now()) {
        tracing::warn!(error = %e, "best-effort save failed, continuing in memory");
    }
}
