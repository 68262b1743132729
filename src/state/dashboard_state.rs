// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard state container.

use serde::{Deserialize, Serialize};

use crate::types::{ClockReading, ShadeLevel};

use super::{SensorSnapshot, StateChange, SystemToggles};

/// Everything the dashboard view displays.
///
/// The container is immutable from the outside: [`apply`](Self::apply)
/// returns an updated copy instead of mutating in place. The stored snapshot
/// is always gated by the stored toggles, so a reading of a switched-off
/// subsystem is zero at every observable point.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::state::{DashboardState, StateChange};
/// use greenhouse_sim::types::Subsystem;
///
/// let state = DashboardState::new();
/// assert!(state.snapshot().drip_flow > 0.0);
///
/// // Switching drip off zeroes its flow immediately
/// let next = state.apply(&StateChange::toggle(Subsystem::Drip, false));
/// assert_eq!(next.snapshot().drip_flow, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StateFields")]
pub struct DashboardState {
    toggles: SystemToggles,
    snapshot: SensorSnapshot,
    shade_level: ShadeLevel,
    clock: ClockReading,
}

/// Wire form of [`DashboardState`]; gated on conversion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateFields {
    toggles: SystemToggles,
    snapshot: SensorSnapshot,
    shade_level: ShadeLevel,
    clock: ClockReading,
}

impl From<StateFields> for DashboardState {
    fn from(fields: StateFields) -> Self {
        Self {
            clock: fields.clock,
            ..Self::with_initial(fields.toggles, fields.snapshot, fields.shade_level)
        }
    }
}

impl DashboardState {
    /// Creates the state the dashboard opens with.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(
            SystemToggles::default(),
            SensorSnapshot::INITIAL,
            ShadeLevel::INITIAL,
        )
    }

    /// Creates a state from explicit starting values.
    ///
    /// The snapshot is gated by `toggles` before being stored.
    #[must_use]
    pub fn with_initial(
        toggles: SystemToggles,
        snapshot: SensorSnapshot,
        shade_level: ShadeLevel,
    ) -> Self {
        Self {
            toggles,
            snapshot: snapshot.gated_by(&toggles),
            shade_level,
            clock: ClockReading::default(),
        }
    }

    /// Returns the switch positions.
    #[must_use]
    pub fn toggles(&self) -> SystemToggles {
        self.toggles
    }

    /// Returns the latest sensor snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SensorSnapshot {
        self.snapshot
    }

    /// Returns the shade curtain deployment.
    #[must_use]
    pub fn shade_level(&self) -> ShadeLevel {
        self.shade_level
    }

    /// Returns the header clock reading.
    #[must_use]
    pub fn clock(&self) -> ClockReading {
        self.clock
    }

    /// Returns the state with `change` applied.
    ///
    /// Turning a subsystem off zeroes its reading. Turning it on leaves the
    /// reading at zero until the next snapshot is applied.
    #[must_use]
    pub fn apply(&self, change: &StateChange) -> Self {
        let mut next = self.clone();
        match change {
            StateChange::Toggle { subsystem, enabled } => {
                next.toggles = next.toggles.with(*subsystem, *enabled);
                next.snapshot = next.snapshot.gated_by(&next.toggles);
            }
            StateChange::ShadeLevel(level) => next.shade_level = *level,
            StateChange::Snapshot(snapshot) => {
                next.snapshot = snapshot.gated_by(&next.toggles);
            }
            StateChange::Clock(reading) => next.clock = *reading,
            StateChange::Batch(changes) => {
                next = changes.iter().fold(next, |state, change| state.apply(change));
            }
        }
        next
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
