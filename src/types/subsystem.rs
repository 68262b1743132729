// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switchable greenhouse subsystems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A fictitious greenhouse subsystem with an on/off switch.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::types::Subsystem;
///
/// let fan: Subsystem = "fan".parse().unwrap();
/// assert_eq!(fan, Subsystem::Fan);
/// assert_eq!(fan.status_label(true), "Running");
/// assert_eq!(fan.status_label(false), "Stopped");
///
/// assert!("heater".parse::<Subsystem>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    /// Drip irrigation lines.
    Drip,
    /// Roof fogging nozzles.
    Fog,
    /// Rotating floor sprinklers.
    Sprinkler,
    /// Evaporative cooling fans.
    Fan,
    /// Automatic shade curtain schedule.
    AutoShade,
}

impl Subsystem {
    /// All subsystems in dashboard order.
    pub const ALL: [Self; 5] = [
        Self::Drip,
        Self::Fog,
        Self::Sprinkler,
        Self::Fan,
        Self::AutoShade,
    ];

    /// Returns the machine-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drip => "drip",
            Self::Fog => "fog",
            Self::Sprinkler => "sprinkler",
            Self::Fan => "fan",
            Self::AutoShade => "auto_shade",
        }
    }

    /// Returns the panel title shown next to the switch.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Drip => "Water Drip",
            Self::Fog => "Fogging System",
            Self::Sprinkler => "Sprinkler",
            Self::Fan => "Evap Fan",
            Self::AutoShade => "Automation",
        }
    }

    /// Returns the status badge text for the given switch position.
    #[must_use]
    pub const fn status_label(&self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (Self::Fan, true) => "Running",
            (Self::Fan, false) => "Stopped",
            (Self::Sprinkler, false) => "Off",
            (_, true) => "Active",
            (_, false) => "Standby",
        }
    }

    /// Returns `true` if this subsystem gates a snapshot field.
    ///
    /// The shade automation switch has no associated reading.
    #[must_use]
    pub const fn gates_reading(&self) -> bool {
        !matches!(self, Self::AutoShade)
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subsystem {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drip" => Ok(Self::Drip),
            "fog" => Ok(Self::Fog),
            "sprinkler" => Ok(Self::Sprinkler),
            "fan" => Ok(Self::Fan),
            "auto_shade" | "autoshade" | "auto-shade" => Ok(Self::AutoShade),
            _ => Err(ValueError::UnknownSubsystem(s.to_string())),
        }
    }
}
