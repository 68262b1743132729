// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard event types.

use serde::{Deserialize, Serialize};

use crate::state::{SensorSnapshot, SystemToggles};
use crate::types::{ClockReading, ShadeLevel, Subsystem};

/// Events emitted by the dashboard.
///
/// Presentation layers subscribe to these to redraw without polling.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::event::DashboardEvent;
/// use greenhouse_sim::state::SensorSnapshot;
///
/// let event = DashboardEvent::SnapshotUpdated {
///     snapshot: SensorSnapshot::INITIAL,
/// };
/// assert!(event.is_telemetry());
/// assert!(!event.is_user_action());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    /// The periodic tickers started.
    Started,

    /// The periodic tickers stopped.
    Stopped,

    /// A new telemetry snapshot is available.
    SnapshotUpdated {
        /// The snapshot, already gated by the current switch positions.
        snapshot: SensorSnapshot,
    },

    /// A subsystem switch moved.
    ToggleChanged {
        /// The subsystem whose switch moved.
        subsystem: Subsystem,
        /// The new switch position.
        enabled: bool,
        /// All switch positions after the change.
        toggles: SystemToggles,
    },

    /// The shade curtain deployment changed.
    ShadeLevelChanged {
        /// The new deployment.
        level: ShadeLevel,
    },

    /// The header clock advanced.
    ClockTicked {
        /// The new reading.
        clock: ClockReading,
    },
}

impl DashboardEvent {
    /// Returns `true` if this is a lifecycle event (started/stopped).
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Started | Self::Stopped)
    }

    /// Returns `true` if this event carries a new snapshot.
    #[must_use]
    pub fn is_telemetry(&self) -> bool {
        matches!(self, Self::SnapshotUpdated { .. })
    }

    /// Returns `true` if this event was caused by a user action.
    #[must_use]
    pub fn is_user_action(&self) -> bool {
        matches!(
            self,
            Self::ToggleChanged { .. } | Self::ShadeLevelChanged { .. }
        )
    }

    /// Creates a snapshot event.
    #[must_use]
    pub fn snapshot_updated(snapshot: SensorSnapshot) -> Self {
        Self::SnapshotUpdated { snapshot }
    }

    /// Creates a switch event.
    #[must_use]
    pub fn toggle_changed(subsystem: Subsystem, toggles: SystemToggles) -> Self {
        Self::ToggleChanged {
            subsystem,
            enabled: toggles.is_enabled(subsystem),
            toggles,
        }
    }

    /// Creates a shade level event.
    #[must_use]
    pub fn shade_level_changed(level: ShadeLevel) -> Self {
        Self::ShadeLevelChanged { level }
    }

    /// Creates a clock event.
    #[must_use]
    pub fn clock_ticked(clock: ClockReading) -> Self {
        Self::ClockTicked { clock }
    }
}
