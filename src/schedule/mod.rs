// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic task scheduling.
//!
//! A [`Ticker`] runs a callback on a fixed period inside a Tokio task. The
//! returned [`TickerHandle`] owns the task: cancelling or dropping the handle
//! stops further ticks.
//!
//! The first tick fires one full period after spawning, not immediately.
//! Ticks that could not run on time are skipped rather than replayed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! use greenhouse_sim::schedule::Ticker;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> greenhouse_sim::Result<()> {
//! let count = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&count);
//!
//! let handle = Ticker::new("example", Duration::from_secs(3))?.spawn(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! tokio::time::sleep(Duration::from_millis(6500)).await;
//! handle.cancel();
//! assert_eq!(count.load(Ordering::SeqCst), 2);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::ValueError;

/// A periodic schedule that has not been started yet.
#[derive(Debug, Clone)]
pub struct Ticker {
    name: &'static str,
    period: Duration,
}

impl Ticker {
    /// Creates a schedule that fires every `period`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ZeroInterval` if `period` is zero.
    pub fn new(name: &'static str, period: Duration) -> Result<Self, ValueError> {
        if period.is_zero() {
            return Err(ValueError::ZeroInterval(name));
        }
        Ok(Self { name, period })
    }

    /// Returns the schedule name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking, calling `on_tick` once per period.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<F>(self, mut on_tick: F) -> TickerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let Self { name, period } = self;
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let ticks = Arc::new(AtomicU64::new(0));
        let task_ticks = Arc::clone(&ticks);
        let reset = Arc::new(Notify::new());
        let task_reset = Arc::clone(&reset);

        tracing::debug!(ticker = name, period = ?period, "Starting ticker");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    // Fires on an explicit stop and when the handle is dropped
                    _ = stop_rx.changed() => break,
                    () = task_reset.notified() => {
                        tracing::trace!(ticker = name, "Phase reset");
                        interval.reset();
                    }
                    _ = interval.tick() => {
                        let tick = task_ticks.fetch_add(1, Ordering::Relaxed) + 1;
                        tracing::trace!(ticker = name, tick, "Tick");
                        on_tick();
                    }
                }
            }

            tracing::debug!(ticker = name, "Ticker stopped");
        });

        TickerHandle {
            name,
            period,
            stop_tx,
            ticks,
            reset,
            task: Some(task),
        }
    }
}

/// Cancellation handle for a running [`Ticker`].
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct TickerHandle {
    name: &'static str,
    period: Duration,
    stop_tx: watch::Sender<bool>,
    ticks: Arc<AtomicU64>,
    reset: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Returns the schedule name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns how many ticks have fired so far.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Requests the ticker to stop. No tick starts once the task has observed
    /// the request; a callback already running finishes first. Use
    /// [`shutdown`](Self::shutdown) to wait for that.
    pub fn cancel(&self) {
        if !self.is_cancelled() {
            tracing::debug!(ticker = self.name, "Cancelling ticker");
            self.stop_tx.send_replace(true);
        }
    }

    /// Restarts the period so the next tick fires one full period from now.
    pub fn reset(&self) {
        self.reset.notify_one();
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.stop_tx.borrow()
    }

    /// Returns `true` if the ticker task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancels the ticker and waits for its task to exit.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(ticker = self.name, error = %e, "Ticker task ended abnormally");
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
