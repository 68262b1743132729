// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard state holder and ticker owner.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;

use crate::error::{Error, Result};
use crate::event::{DashboardEvent, EventBus};
use crate::panel::PanelReadings;
use crate::schedule::{Ticker, TickerHandle};
use crate::state::{DashboardState, SensorSnapshot, StateChange, SystemToggles};
use crate::telemetry::Simulator;
use crate::types::{ClockReading, ShadeLevel, Subsystem};

use super::DashboardConfig;

const TELEMETRY_TICKER: &str = "telemetry";
const CLOCK_TICKER: &str = "clock";

/// The greenhouse dashboard.
///
/// The `Dashboard` owns the [`DashboardState`], a [`Simulator`] and the two
/// periodic tickers that refresh telemetry and the header clock. User
/// actions (switches, shade slider) are applied synchronously and are
/// visible as soon as the call returns.
///
/// # Features
///
/// - **Telemetry ticker**: a new snapshot every telemetry interval (3 s by default)
/// - **Clock ticker**: the header clock every clock interval (1 s by default)
/// - **Immediate regeneration**: moving a switch produces a new snapshot at once
/// - **Event system**: subscribe to updates via broadcast channels
///
/// # Examples
///
/// ```no_run
/// use greenhouse_sim::dashboard::Dashboard;
/// use greenhouse_sim::types::Subsystem;
///
/// #[tokio::main]
/// async fn main() -> greenhouse_sim::Result<()> {
///     let dashboard = Dashboard::default();
///
///     let mut events = dashboard.subscribe();
///     tokio::spawn(async move {
///         while let Ok(event) = events.recv().await {
///             println!("Event: {event:?}");
///         }
///     });
///
///     dashboard.start()?;
///     dashboard.toggle(Subsystem::Fog);
///     println!("{}", dashboard.panel());
///
///     dashboard.stop()?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Dashboard {
    name: String,
    telemetry_interval: Duration,
    clock_interval: Duration,
    shared: Arc<Shared>,
    /// Running tickers; empty while stopped.
    tickers: Mutex<Vec<TickerHandle>>,
}

/// State reachable from ticker tasks.
#[derive(Debug)]
struct Shared {
    state: RwLock<DashboardState>,
    simulator: Mutex<Simulator>,
    events: EventBus,
}

impl Shared {
    /// Samples a snapshot for the current toggles and stores it.
    ///
    /// The state write lock is held while sampling so the toggles cannot
    /// move between the read and the store.
    fn refresh_snapshot(&self) -> SensorSnapshot {
        let mut state = self.state.write();
        let snapshot = self.simulator.lock().next_snapshot(&state.toggles());
        *state = state.apply(&StateChange::snapshot(snapshot));
        let stored = state.snapshot();
        drop(state);

        tracing::trace!(?stored, "Telemetry snapshot generated");
        self.events.publish(DashboardEvent::snapshot_updated(stored));
        stored
    }

    fn refresh_clock(&self, reading: ClockReading) {
        let mut state = self.state.write();
        if state.clock() == reading {
            return;
        }
        *state = state.apply(&StateChange::clock(reading));
        drop(state);

        self.events.publish(DashboardEvent::clock_ticked(reading));
    }

    /// Moves one switch to the position chosen by `target` and regenerates
    /// the snapshot. Returns `None` if the switch did not move.
    fn switch(
        &self,
        subsystem: Subsystem,
        target: impl FnOnce(bool) -> bool,
    ) -> Option<(SystemToggles, SensorSnapshot)> {
        let mut state = self.state.write();
        let current = state.toggles().is_enabled(subsystem);
        let enabled = target(current);
        if enabled == current {
            return None;
        }

        let switched = state.apply(&StateChange::toggle(subsystem, enabled));
        let snapshot = self.simulator.lock().next_snapshot(&switched.toggles());
        *state = switched.apply(&StateChange::snapshot(snapshot));
        let toggles = state.toggles();
        let stored = state.snapshot();
        drop(state);

        tracing::debug!(%subsystem, enabled, "Subsystem switched");
        self.events
            .publish(DashboardEvent::toggle_changed(subsystem, toggles));
        self.events
            .publish(DashboardEvent::snapshot_updated(stored));
        Some((toggles, stored))
    }
}

impl Dashboard {
    /// Creates a dashboard from a configuration.
    ///
    /// Tickers are not started; call [`start`](Self::start).
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let simulator = config
            .seed
            .map_or_else(Simulator::from_entropy, Simulator::seeded);
        let state =
            DashboardState::with_initial(config.toggles, config.snapshot, config.shade_level);

        Self {
            name: config.name,
            telemetry_interval: config.telemetry_interval,
            clock_interval: config.clock_interval,
            shared: Arc::new(Shared {
                state: RwLock::new(state),
                simulator: Mutex::new(simulator),
                events: EventBus::with_capacity(config.event_capacity),
            }),
            tickers: Mutex::new(Vec::new()),
        }
    }

    /// Returns the greenhouse name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts the telemetry and clock tickers.
    ///
    /// # Errors
    ///
    /// Returns `Error::AlreadyRunning` if the tickers are running, or
    /// `ValueError::ZeroInterval` if a configured period is zero.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn start(&self) -> Result<()> {
        let mut tickers = self.tickers.lock();
        if !tickers.is_empty() {
            return Err(Error::AlreadyRunning);
        }

        let telemetry = Ticker::new(TELEMETRY_TICKER, self.telemetry_interval)?;
        let clock = Ticker::new(CLOCK_TICKER, self.clock_interval)?;

        let shared = Arc::clone(&self.shared);
        tickers.push(telemetry.spawn(move || {
            shared.refresh_snapshot();
        }));

        let shared = Arc::clone(&self.shared);
        tickers.push(clock.spawn(move || {
            shared.refresh_clock(ClockReading::now());
        }));
        drop(tickers);

        tracing::info!(
            name = %self.name,
            telemetry_interval = ?self.telemetry_interval,
            clock_interval = ?self.clock_interval,
            "Dashboard started"
        );
        self.shared.events.publish(DashboardEvent::Started);
        Ok(())
    }

    /// Stops both tickers.
    ///
    /// No new tick starts after this returns. On a multi-threaded runtime a
    /// tick callback already running on another worker may still publish
    /// once; use [`shutdown`](Self::shutdown) to wait for it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotRunning` if the tickers are not running.
    pub fn stop(&self) -> Result<()> {
        let tickers = self.take_tickers()?;
        // Dropping the handles aborts the tasks
        drop(tickers);

        self.publish_stopped();
        Ok(())
    }

    /// Stops both tickers and waits for their tasks to exit.
    ///
    /// `Stopped` is published after the last tick callback has returned, so
    /// it is the final event of the run.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotRunning` if the tickers are not running.
    pub async fn shutdown(&self) -> Result<()> {
        let tickers = self.take_tickers()?;
        for ticker in tickers {
            ticker.shutdown().await;
        }

        self.publish_stopped();
        Ok(())
    }

    fn take_tickers(&self) -> Result<Vec<TickerHandle>> {
        let tickers = std::mem::take(&mut *self.tickers.lock());
        if tickers.is_empty() {
            return Err(Error::NotRunning);
        }
        for ticker in &tickers {
            ticker.cancel();
        }
        Ok(tickers)
    }

    fn publish_stopped(&self) {
        tracing::info!(name = %self.name, "Dashboard stopped");
        self.shared.events.publish(DashboardEvent::Stopped);
    }

    /// Restarts the telemetry period after a user-driven snapshot.
    fn restart_telemetry(&self) {
        for ticker in self.tickers.lock().iter() {
            if ticker.name() == TELEMETRY_TICKER {
                ticker.reset();
            }
        }
    }

    /// Returns `true` while the tickers are running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tickers.lock().is_empty()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to dashboard events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.shared.events.subscribe()
    }

    /// Returns the number of active event subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.events.subscriber_count()
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.shared.state.read().clone()
    }

    /// Returns the current switch positions.
    #[must_use]
    pub fn toggles(&self) -> SystemToggles {
        self.shared.state.read().toggles()
    }

    /// Returns the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SensorSnapshot {
        self.shared.state.read().snapshot()
    }

    /// Returns the shade curtain deployment.
    #[must_use]
    pub fn shade_level(&self) -> ShadeLevel {
        self.shared.state.read().shade_level()
    }

    /// Returns the header clock reading.
    #[must_use]
    pub fn clock(&self) -> ClockReading {
        self.shared.state.read().clock()
    }

    /// Returns the formatted panels for the current state.
    #[must_use]
    pub fn panel(&self) -> PanelReadings {
        PanelReadings::from_state(&self.state())
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Flips a subsystem switch and regenerates the snapshot immediately.
    ///
    /// While running, the next telemetry tick is pushed back to one full
    /// period after the flip. Returns the switch positions after the flip.
    pub fn toggle(&self, subsystem: Subsystem) -> SystemToggles {
        match self.shared.switch(subsystem, |current| !current) {
            Some((toggles, _)) => {
                self.restart_telemetry();
                toggles
            }
            // Flipping always moves the switch
            None => self.toggles(),
        }
    }

    /// Moves a subsystem switch to the given position.
    ///
    /// Returns `true` if the switch moved, in which case the snapshot is
    /// regenerated immediately and the telemetry period restarts. Setting a
    /// switch to its current position is a no-op and publishes nothing.
    pub fn set_toggle(&self, subsystem: Subsystem, enabled: bool) -> bool {
        let moved = self.shared.switch(subsystem, |_| enabled).is_some();
        if moved {
            self.restart_telemetry();
        }
        moved
    }

    /// Moves the shade slider.
    ///
    /// Returns `true` if the level changed. The level does not influence the
    /// simulated readings.
    pub fn set_shade_level(&self, level: ShadeLevel) -> bool {
        let mut state = self.shared.state.write();
        if state.shade_level() == level {
            return false;
        }
        *state = state.apply(&StateChange::shade_level(level));
        drop(state);

        tracing::debug!(%level, "Shade level changed");
        self.shared
            .events
            .publish(DashboardEvent::shade_level_changed(level));
        true
    }

    /// Generates a snapshot now, outside the telemetry schedule.
    pub fn refresh_snapshot(&self) -> SensorSnapshot {
        self.shared.refresh_snapshot()
    }

    /// Sets the header clock now, outside the clock schedule.
    pub fn refresh_clock(&self, reading: ClockReading) {
        self.shared.refresh_clock(reading);
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
