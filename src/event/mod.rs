// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for dashboard updates.
//!
//! The [`EventBus`] uses tokio's broadcast channel so any number of views can
//! follow snapshot, switch, shade and clock updates.
//!
//! # Examples
//!
//! ```
//! use greenhouse_sim::event::{DashboardEvent, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(DashboardEvent::Started);
//! ```

mod dashboard_event;
mod event_bus;

pub use dashboard_event::DashboardEvent;
pub use event_bus::{DEFAULT_CHANNEL_CAPACITY, EventBus};
