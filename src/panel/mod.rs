// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display-ready panel readings.
//!
//! [`PanelReadings`] turns a [`DashboardState`] into the strings, badges and
//! gauge angles a view renders. It holds no state of its own and is rebuilt
//! after every change.
//!
//! # Examples
//!
//! ```
//! use greenhouse_sim::panel::PanelReadings;
//! use greenhouse_sim::state::DashboardState;
//!
//! let panel = PanelReadings::from_state(&DashboardState::new());
//!
//! assert_eq!(panel.temperature.value, "26.3");
//! assert_eq!(panel.light.lux, "42,800");
//! assert_eq!(panel.humidity_status, "Optimal");
//! assert_eq!(panel.fog.status, "Standby");
//! ```

use std::fmt;

use serde::Serialize;

use crate::state::{DashboardState, SensorSnapshot, SystemToggles};
use crate::telemetry::ranges;
use crate::types::Subsystem;

/// Upper end of the temperature gauge in °C.
pub const TEMPERATURE_GAUGE_MAX: f64 = 45.0;

/// Upper end of the humidity gauge in percent.
pub const HUMIDITY_GAUGE_MAX: f64 = 100.0;

/// Placeholder for a reading that is not shown.
pub const NO_READING: &str = "--";

/// A semicircular gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    /// Formatted value.
    pub value: String,
    /// Unit suffix.
    pub unit: &'static str,
    /// Needle angle in degrees, from 90 (empty) to 270 (full scale).
    pub angle: f64,
}

impl Gauge {
    fn new(value: f64, max: f64, formatted: String, unit: &'static str) -> Self {
        Self {
            value: formatted,
            unit,
            angle: gauge_angle(value, max),
        }
    }
}

/// One subsystem card with its switch, badge and primary reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchPanel {
    /// The subsystem on this card.
    pub subsystem: Subsystem,
    /// Switch position.
    pub enabled: bool,
    /// Status badge text.
    pub status: &'static str,
    /// Formatted primary reading.
    pub reading: String,
    /// Unit of the primary reading.
    pub unit: &'static str,
}

impl SwitchPanel {
    fn new(
        subsystem: Subsystem,
        toggles: &SystemToggles,
        reading: String,
        unit: &'static str,
    ) -> Self {
        let enabled = toggles.is_enabled(subsystem);
        Self {
            subsystem,
            enabled,
            status: subsystem.status_label(enabled),
            reading,
            unit,
        }
    }
}

/// The light and shading card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightPanel {
    /// Illuminance with thousands separators.
    pub lux: String,
    /// Illuminance as a share of full scale, capped at 100.
    pub intensity_percent: u8,
    /// Shade deployment, e.g. `45%`.
    pub shade: String,
    /// Automatic shading switch.
    pub auto_shade: SwitchPanel,
}

/// Everything a dashboard view shows, formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReadings {
    /// Header clock, `HH:MM:SS`.
    pub clock: String,
    /// Temperature gauge.
    pub temperature: Gauge,
    /// Humidity gauge.
    pub humidity: Gauge,
    /// `Optimal` or `Warning`.
    pub humidity_status: &'static str,
    /// Drip irrigation card (flow).
    pub drip: SwitchPanel,
    /// Fogging card (pressure).
    pub fog: SwitchPanel,
    /// Humidity on the fogging card, [`NO_READING`] while fog is off.
    pub fog_humidity: String,
    /// Sprinkler card (coverage).
    pub sprinkler: SwitchPanel,
    /// Fan card (speed).
    pub fan: SwitchPanel,
    /// Light and shading card.
    pub light: LightPanel,
}

impl PanelReadings {
    /// Formats the given state.
    #[must_use]
    pub fn from_state(state: &DashboardState) -> Self {
        let toggles = state.toggles();
        let snapshot: SensorSnapshot = state.snapshot();

        let fog_humidity = if toggles.fog {
            snapshot.humidity.to_string()
        } else {
            NO_READING.to_string()
        };

        Self {
            clock: state.clock().to_string(),
            temperature: Gauge::new(
                snapshot.temperature,
                TEMPERATURE_GAUGE_MAX,
                one_decimal(snapshot.temperature),
                "°C",
            ),
            humidity: Gauge::new(
                f64::from(snapshot.humidity),
                HUMIDITY_GAUGE_MAX,
                snapshot.humidity.to_string(),
                "%",
            ),
            humidity_status: humidity_status(snapshot.humidity),
            drip: SwitchPanel::new(
                Subsystem::Drip,
                &toggles,
                one_decimal(snapshot.drip_flow),
                "L/min",
            ),
            fog: SwitchPanel::new(
                Subsystem::Fog,
                &toggles,
                one_decimal(snapshot.fog_pressure),
                "bar",
            ),
            fog_humidity,
            sprinkler: SwitchPanel::new(
                Subsystem::Sprinkler,
                &toggles,
                snapshot.sprinkler_coverage.to_string(),
                "%",
            ),
            fan: SwitchPanel::new(Subsystem::Fan, &toggles, snapshot.fan_rpm.to_string(), "RPM"),
            light: LightPanel {
                lux: thousands(snapshot.illuminance),
                intensity_percent: intensity_percent(snapshot.illuminance),
                shade: state.shade_level().to_string(),
                auto_shade: SwitchPanel::new(
                    Subsystem::AutoShade,
                    &toggles,
                    state.shade_level().value().to_string(),
                    "%",
                ),
            },
        }
    }

    /// Returns the subsystem cards in display order.
    #[must_use]
    pub fn switches(&self) -> [&SwitchPanel; 5] {
        [
            &self.drip,
            &self.fog,
            &self.sprinkler,
            &self.fan,
            &self.light.auto_shade,
        ]
    }
}

impl fmt::Display for PanelReadings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.clock)?;
        writeln!(
            f,
            "  Temperature  {} {}",
            self.temperature.value, self.temperature.unit
        )?;
        writeln!(
            f,
            "  Humidity     {} {} ({})",
            self.humidity.value, self.humidity.unit, self.humidity_status
        )?;
        writeln!(
            f,
            "  Light        {} lux ({}%), shade {}",
            self.light.lux, self.light.intensity_percent, self.light.shade
        )?;
        for panel in self.switches() {
            writeln!(
                f,
                "  {:<15} {:<8} {} {}",
                panel.subsystem.display_name(),
                panel.status,
                panel.reading,
                panel.unit
            )?;
        }
        write!(f, "  Fog humidity {}", self.fog_humidity)
    }
}

/// Formats with at most one decimal; a trailing `.0` is dropped.
fn one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    if let Some(whole) = text.strip_suffix(".0") {
        return whole.to_string();
    }
    text
}

/// Inserts `,` between groups of three digits.
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn intensity_percent(lux: u32) -> u8 {
    let percent = f64::from(lux) / f64::from(ranges::ILLUMINANCE_FULL_SCALE) * 100.0;
    // Clamped to 0..=100 before the cast
    percent.clamp(0.0, 100.0).round() as u8
}

fn humidity_status(humidity: u8) -> &'static str {
    if ranges::OPTIMAL_HUMIDITY.contains(&humidity) {
        "Optimal"
    } else {
        "Warning"
    }
}

fn gauge_angle(value: f64, max: f64) -> f64 {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    90.0 + ratio * 180.0
}
