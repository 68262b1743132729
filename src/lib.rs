// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greenhouse Sim - A simulated greenhouse telemetry dashboard.
//!
//! This library generates plausible sensor readings for a greenhouse and
//! keeps them consistent with the on/off switches of its actuator
//! subsystems. A [`Dashboard`] refreshes the readings on a fixed schedule
//! and applies switch changes immediately.
//!
//! # Supported Features
//!
//! - **Telemetry**: temperature, humidity, illuminance, drip flow, fog
//!   pressure, sprinkler coverage and fan speed
//! - **Switch gating**: a subsystem that is off always reads zero
//! - **Scheduling**: 3 s telemetry and 1 s clock tickers on tokio
//! - **Events**: broadcast notifications for every change
//! - **Panels**: display-ready strings, badges and gauge angles
//!
//! # Subsystems
//!
//! | Subsystem   | Reading              | Active range     |
//! |-------------|----------------------|------------------|
//! | Drip        | flow (L/min)         | 2.0 - 2.8        |
//! | Fog         | pressure (bar)       | 2.8 - 3.4        |
//! | Sprinkler   | coverage (%)         | 75 - 95          |
//! | Fan         | speed (RPM)          | 1100 - 1400      |
//! | Auto-shade  | none                 |                  |
//!
//! # Quick Start
//!
//! ## One-off snapshot
//!
//! ```
//! use greenhouse_sim::{SystemToggles, next_snapshot};
//!
//! let snapshot = next_snapshot(&SystemToggles::default());
//! assert_eq!(snapshot.fog_pressure, 0.0);
//! ```
//!
//! ## Running dashboard
//!
//! ```no_run
//! use greenhouse_sim::{Dashboard, DashboardConfig, DashboardEvent, Subsystem};
//!
//! #[tokio::main]
//! async fn main() -> greenhouse_sim::Result<()> {
//!     let dashboard = Dashboard::new(DashboardConfig::new("Greenhouse Alpha"));
//!     let mut events = dashboard.subscribe();
//!
//!     dashboard.start()?;
//!     dashboard.toggle(Subsystem::Sprinkler);
//!
//!     while let Ok(event) = events.recv().await {
//!         if let DashboardEvent::SnapshotUpdated { .. } = event {
//!             println!("{}", dashboard.panel());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod error;
pub mod event;
pub mod panel;
pub mod schedule;
pub mod state;
pub mod telemetry;
pub mod types;

pub use dashboard::{Dashboard, DashboardConfig};
pub use error::{Error, ParseError, Result, ValueError};
pub use event::{DashboardEvent, EventBus};
pub use panel::PanelReadings;
pub use schedule::{Ticker, TickerHandle};
pub use state::{DashboardState, SensorSnapshot, StateChange, SystemToggles};
pub use telemetry::{Simulator, next_snapshot, next_snapshot_with};
pub use types::{ClockReading, ShadeLevel, Subsystem};
