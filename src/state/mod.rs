// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard state types.
//!
//! This module provides the value records the dashboard displays:
//! [`SystemToggles`] (switch positions), [`SensorSnapshot`] (simulated
//! readings) and the [`DashboardState`] container that holds them together
//! with the shade level and header clock. [`StateChange`] represents
//! individual changes that can be applied to a state.
//!
//! # Examples
//!
//! ```
//! use greenhouse_sim::state::{DashboardState, StateChange};
//! use greenhouse_sim::types::ShadeLevel;
//!
//! let state = DashboardState::new();
//! let next = state.apply(&StateChange::shade_level(ShadeLevel::CLOSED));
//!
//! assert_eq!(next.shade_level(), ShadeLevel::CLOSED);
//! ```

mod dashboard_state;
mod snapshot;
mod state_change;
mod toggles;

pub use dashboard_state::DashboardState;
pub use snapshot::SensorSnapshot;
pub use state_change::StateChange;
pub use toggles::SystemToggles;
