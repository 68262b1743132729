// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated greenhouse telemetry.
//!
//! Every reading is pseudo-random. Temperature, humidity and illuminance are
//! always sampled; the four gated readings are sampled only while their
//! governing switch is on:
//!
//! | Reading              | Range              | Gated by    |
//! |----------------------|--------------------|-------------|
//! | `temperature`        | [24.0, 30.0) °C    | -           |
//! | `humidity`           | [60, 80] %         | -           |
//! | `illuminance`        | [35000, 55000] lux | -           |
//! | `drip_flow`          | [2.0, 2.8) L/min   | `drip`      |
//! | `fog_pressure`       | [2.8, 3.4) bar     | `fog`       |
//! | `sprinkler_coverage` | [75, 95] %         | `sprinkler` |
//! | `fan_rpm`            | [1100, 1400]       | `fan`       |
//!
//! Generation knows nothing about scheduling. The
//! [`Dashboard`](crate::dashboard::Dashboard) calls it on a fixed cadence and
//! again whenever a switch moves.
//!
//! # Examples
//!
//! ```
//! use greenhouse_sim::state::SystemToggles;
//! use greenhouse_sim::telemetry::next_snapshot;
//!
//! let toggles = SystemToggles::ALL_OFF;
//! let snapshot = next_snapshot(&toggles);
//!
//! assert_eq!(snapshot.drip_flow, 0.0);
//! assert_eq!(snapshot.fog_pressure, 0.0);
//! assert_eq!(snapshot.sprinkler_coverage, 0);
//! assert_eq!(snapshot.fan_rpm, 0);
//! ```

pub mod ranges;
mod simulator;

pub use simulator::{Simulator, next_snapshot, next_snapshot_with};
