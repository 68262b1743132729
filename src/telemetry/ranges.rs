// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sampling ranges for simulated readings.
//!
//! Float readings are drawn from half-open ranges, integer readings from
//! inclusive ranges. Gated readings are only sampled while their switch is
//! on; otherwise they are zero.

use std::ops::{Range, RangeInclusive};

/// Air temperature in °C.
pub const TEMPERATURE: Range<f64> = 24.0..30.0;

/// Relative humidity in percent.
pub const HUMIDITY: RangeInclusive<u8> = 60..=80;

/// Illuminance in lux.
pub const ILLUMINANCE: RangeInclusive<u32> = 35_000..=55_000;

/// Drip line flow in L/min, while drip is on.
pub const DRIP_FLOW: Range<f64> = 2.0..2.8;

/// Fog nozzle pressure in bar, while fog is on.
pub const FOG_PRESSURE: Range<f64> = 2.8..3.4;

/// Sprinkler coverage in percent, while sprinklers are on.
pub const SPRINKLER_COVERAGE: RangeInclusive<u8> = 75..=95;

/// Fan speed in RPM, while fans are on.
pub const FAN_RPM: RangeInclusive<u16> = 1100..=1400;

/// Full-scale illuminance of the light intensity bar.
pub const ILLUMINANCE_FULL_SCALE: u32 = 63_000;

/// Humidity band reported as optimal.
pub const OPTIMAL_HUMIDITY: RangeInclusive<u8> = 60..=80;
