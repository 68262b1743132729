// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the greenhouse dashboard.
//!
//! Each type ensures values are within their valid ranges at construction
//! time.
//!
//! # Types
//!
//! - [`Subsystem`] - The switchable subsystems (drip, fog, sprinkler, fan, auto shade)
//! - [`ShadeLevel`] - Shade curtain deployment (0-100%)
//! - [`ClockReading`] - Header clock time of day (`HH:MM:SS`)

mod clock;
mod shade;
mod subsystem;

pub use clock::ClockReading;
pub use shade::ShadeLevel;
pub use subsystem::Subsystem;
