// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the building blocks for updating dashboard state.
//! They represent discrete changes that can be applied to a
//! [`DashboardState`](super::DashboardState), either from user actions or
//! from the periodic tickers.
//!
//! # Change Types
//!
//! - [`StateChange::Toggle`] - A subsystem switch was flipped
//! - [`StateChange::ShadeLevel`] - The shade slider moved
//! - [`StateChange::Snapshot`] - A new telemetry snapshot was generated
//! - [`StateChange::Clock`] - The header clock advanced
//! - [`StateChange::Batch`] - Multiple changes grouped together
//!
//! # Examples
//!
//! ```
//! use greenhouse_sim::state::{DashboardState, StateChange};
//! use greenhouse_sim::types::Subsystem;
//!
//! let state = DashboardState::new();
//!
//! // Applying returns the updated state
//! let next = state.apply(&StateChange::toggle(Subsystem::Fog, true));
//! assert!(next.toggles().fog);
//! assert!(!state.toggles().fog);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{ClockReading, ShadeLevel, Subsystem};

use super::SensorSnapshot;

/// Represents a change in dashboard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// A subsystem switch moved.
    Toggle {
        /// The subsystem whose switch moved.
        subsystem: Subsystem,
        /// The new switch position.
        enabled: bool,
    },

    /// Shade curtain deployment changed.
    ShadeLevel(ShadeLevel),

    /// A new telemetry snapshot replaced the previous one.
    Snapshot(SensorSnapshot),

    /// The header clock advanced.
    Clock(ClockReading),

    /// Multiple changes at once, applied in order.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a switch change.
    #[must_use]
    pub fn toggle(subsystem: Subsystem, enabled: bool) -> Self {
        Self::Toggle { subsystem, enabled }
    }

    /// Creates a shade level change.
    #[must_use]
    pub fn shade_level(level: ShadeLevel) -> Self {
        Self::ShadeLevel(level)
    }

    /// Creates a snapshot change.
    #[must_use]
    pub fn snapshot(snapshot: SensorSnapshot) -> Self {
        Self::Snapshot(snapshot)
    }

    /// Creates a clock change.
    #[must_use]
    pub fn clock(reading: ClockReading) -> Self {
        Self::Clock(reading)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is a batch change.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns `true` if this change came from a user action rather than a
    /// ticker.
    #[must_use]
    pub fn is_user_action(&self) -> bool {
        match self {
            Self::Toggle { .. } | Self::ShadeLevel(_) => true,
            Self::Snapshot(_) | Self::Clock(_) => false,
            Self::Batch(changes) => changes.iter().any(Self::is_user_action),
        }
    }
}
