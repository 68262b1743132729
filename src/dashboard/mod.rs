// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The running dashboard.
//!
//! [`Dashboard`] ties together the state container, the simulator, the
//! event bus and the two periodic tickers. [`DashboardConfig`] describes how
//! it starts.

mod config;
mod controller;

pub use config::{
    DEFAULT_CLOCK_INTERVAL_MS, DEFAULT_NAME, DEFAULT_TELEMETRY_INTERVAL_MS, DashboardConfig,
};
pub use controller::Dashboard;
