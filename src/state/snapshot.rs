// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated sensor snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Subsystem;

use super::SystemToggles;

/// One generated set of sensor values, valid until the next tick.
///
/// Gated fields (`drip_flow`, `fog_pressure`, `sprinkler_coverage`,
/// `fan_rpm`) are zero whenever the governing switch is off.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::state::{SensorSnapshot, SystemToggles};
///
/// let snapshot = SensorSnapshot::INITIAL.gated_by(&SystemToggles::ALL_OFF);
/// assert_eq!(snapshot.drip_flow, 0.0);
/// assert_eq!(snapshot.fan_rpm, 0);
/// // Ungated readings are kept
/// assert_eq!(snapshot.humidity, 68);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Illuminance in lux.
    pub illuminance: u32,
    /// Drip line flow in L/min.
    pub drip_flow: f64,
    /// Fog nozzle pressure in bar.
    pub fog_pressure: f64,
    /// Sprinkler floor coverage in percent.
    pub sprinkler_coverage: u8,
    /// Fan speed in RPM.
    pub fan_rpm: u16,
}

impl SensorSnapshot {
    /// Readings shown before the first telemetry tick.
    pub const INITIAL: Self = Self {
        temperature: 26.3,
        humidity: 68,
        illuminance: 42_800,
        drip_flow: 2.4,
        fog_pressure: 0.0,
        sprinkler_coverage: 0,
        fan_rpm: 1240,
    };

    /// Returns a copy with every reading of a switched-off subsystem zeroed.
    #[must_use]
    pub fn gated_by(mut self, toggles: &SystemToggles) -> Self {
        if !toggles.drip {
            self.drip_flow = 0.0;
        }
        if !toggles.fog {
            self.fog_pressure = 0.0;
        }
        if !toggles.sprinkler {
            self.sprinkler_coverage = 0;
        }
        if !toggles.fan {
            self.fan_rpm = 0;
        }
        self
    }

    /// Returns `true` if the reading gated by `subsystem` is nonzero.
    ///
    /// Always `false` for subsystems without a reading.
    #[must_use]
    pub fn is_reading_active(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Drip => self.drip_flow > 0.0,
            Subsystem::Fog => self.fog_pressure > 0.0,
            Subsystem::Sprinkler => self.sprinkler_coverage > 0,
            Subsystem::Fan => self.fan_rpm > 0,
            Subsystem::AutoShade => false,
        }
    }

    /// Returns `true` if no gated reading is nonzero while its switch is off.
    #[must_use]
    pub fn respects(&self, toggles: &SystemToggles) -> bool {
        Subsystem::ALL
            .into_iter()
            .all(|subsystem| !self.is_reading_active(subsystem) || toggles.is_enabled(subsystem))
    }
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}
