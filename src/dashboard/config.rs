// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, ParseError, ValueError};
use crate::event::DEFAULT_CHANNEL_CAPACITY;
use crate::state::{SensorSnapshot, SystemToggles};
use crate::types::ShadeLevel;

/// Default telemetry refresh period in milliseconds.
pub const DEFAULT_TELEMETRY_INTERVAL_MS: u64 = 3_000;

/// Default header clock refresh period in milliseconds.
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1_000;

/// Default greenhouse name.
pub const DEFAULT_NAME: &str = "Greenhouse Alpha";

/// Configuration for a [`Dashboard`](super::Dashboard).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use greenhouse_sim::dashboard::DashboardConfig;
/// use greenhouse_sim::state::SystemToggles;
///
/// // Defaults: 3 s telemetry, 1 s clock
/// let config = DashboardConfig::default();
/// assert_eq!(config.telemetry_interval, Duration::from_secs(3));
///
/// // With optional settings
/// let config = DashboardConfig::new("Greenhouse Beta")
///     .with_telemetry_interval(Duration::from_secs(5))
///     .with_toggles(SystemToggles::ALL_ON)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Greenhouse name shown under the dashboard title.
    pub name: String,
    /// Period between telemetry snapshots.
    pub telemetry_interval: Duration,
    /// Period between header clock updates.
    pub clock_interval: Duration,
    /// Switch positions at startup.
    pub toggles: SystemToggles,
    /// Shade curtain deployment at startup.
    pub shade_level: ShadeLevel,
    /// Readings shown before the first telemetry tick.
    pub snapshot: SensorSnapshot,
    /// Event bus capacity.
    pub event_capacity: usize,
    /// Simulator seed for reproducible runs (None = OS entropy).
    pub seed: Option<u64>,
}

impl DashboardConfig {
    /// Creates a default configuration with the given greenhouse name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the telemetry refresh period.
    #[must_use]
    pub fn with_telemetry_interval(mut self, interval: Duration) -> Self {
        self.telemetry_interval = interval;
        self
    }

    /// Sets the header clock refresh period.
    #[must_use]
    pub fn with_clock_interval(mut self, interval: Duration) -> Self {
        self.clock_interval = interval;
        self
    }

    /// Sets the switch positions at startup.
    #[must_use]
    pub fn with_toggles(mut self, toggles: SystemToggles) -> Self {
        self.toggles = toggles;
        self
    }

    /// Sets the shade deployment at startup.
    #[must_use]
    pub fn with_shade_level(mut self, level: ShadeLevel) -> Self {
        self.shade_level = level;
        self
    }

    /// Sets the readings shown before the first tick.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: SensorSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Sets the event bus capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Seeds the simulator.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that both refresh periods are nonzero.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ZeroInterval` naming the offending schedule.
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.telemetry_interval.is_zero() {
            return Err(ValueError::ZeroInterval("telemetry"));
        }
        if self.clock_interval.is_zero() {
            return Err(ValueError::ZeroInterval("clock"));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Every field is optional; missing fields keep their defaults. Keys are
    /// camelCase throughout, and intervals are given in milliseconds.
    ///
    /// ```
    /// use std::time::Duration;
    /// use greenhouse_sim::dashboard::DashboardConfig;
    ///
    /// let config = DashboardConfig::from_json(r#"{
    ///     "name": "North House",
    ///     "telemetryIntervalMs": 5000,
    ///     "toggles": { "fog": true },
    ///     "shadeLevel": 80
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.name, "North House");
    /// assert_eq!(config.telemetry_interval, Duration::from_secs(5));
    /// assert!(config.toggles.fog);
    /// assert_eq!(config.shade_level.value(), 80);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` for malformed JSON or unknown fields,
    /// `ParseError::InvalidValue` for an out-of-range shade level, and
    /// `ValueError::ZeroInterval` for a zero period.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let file: ConfigFile = serde_json::from_str(json).map_err(ParseError::from)?;

        let shade_level =
            ShadeLevel::new(file.shade_level).map_err(|e| ParseError::InvalidValue {
                field: "shadeLevel".to_string(),
                message: e.to_string(),
            })?;

        let config = Self {
            name: file.name,
            telemetry_interval: Duration::from_millis(file.telemetry_interval_ms),
            clock_interval: Duration::from_millis(file.clock_interval_ms),
            toggles: file.toggles,
            shade_level,
            snapshot: file.snapshot.unwrap_or(SensorSnapshot::INITIAL),
            event_capacity: file.event_capacity,
            seed: file.seed,
        };
        config.validate()?;

        tracing::debug!(name = %config.name, "Loaded dashboard configuration");
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            telemetry_interval: Duration::from_millis(DEFAULT_TELEMETRY_INTERVAL_MS),
            clock_interval: Duration::from_millis(DEFAULT_CLOCK_INTERVAL_MS),
            toggles: SystemToggles::default(),
            shade_level: ShadeLevel::INITIAL,
            snapshot: SensorSnapshot::INITIAL,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: None,
        }
    }
}

/// On-disk shape of [`DashboardConfig`].
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
struct ConfigFile {
    name: String,
    telemetry_interval_ms: u64,
    clock_interval_ms: u64,
    toggles: SystemToggles,
    shade_level: u8,
    snapshot: Option<SensorSnapshot>,
    event_capacity: usize,
    seed: Option<u64>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            telemetry_interval_ms: DEFAULT_TELEMETRY_INTERVAL_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            toggles: SystemToggles::default(),
            shade_level: ShadeLevel::INITIAL.value(),
            snapshot: None,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: None,
        }
    }
}
