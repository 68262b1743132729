// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subsystem switch positions.

use serde::{Deserialize, Serialize};

use crate::types::Subsystem;

/// On/off state of every greenhouse subsystem switch.
///
/// The flags are independent: any combination is valid. The default is the
/// position the dashboard opens with (drip, fan and auto shade on).
///
/// # Examples
///
/// ```
/// use greenhouse_sim::state::SystemToggles;
/// use greenhouse_sim::types::Subsystem;
///
/// let toggles = SystemToggles::default();
/// assert!(toggles.drip);
/// assert!(!toggles.fog);
///
/// let flipped = toggles.toggled(Subsystem::Fog);
/// assert!(flipped.fog);
/// // The original is untouched
/// assert!(!toggles.fog);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemToggles {
    /// Drip irrigation.
    pub drip: bool,
    /// Fogging nozzles.
    pub fog: bool,
    /// Floor sprinklers.
    pub sprinkler: bool,
    /// Evaporative fans.
    pub fan: bool,
    /// Shade curtain automation.
    pub auto_shade: bool,
}

impl SystemToggles {
    /// Every switch off.
    pub const ALL_OFF: Self = Self {
        drip: false,
        fog: false,
        sprinkler: false,
        fan: false,
        auto_shade: false,
    };

    /// Every switch on.
    pub const ALL_ON: Self = Self {
        drip: true,
        fog: true,
        sprinkler: true,
        fan: true,
        auto_shade: true,
    };

    /// Returns whether the given subsystem is switched on.
    #[must_use]
    pub const fn is_enabled(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Drip => self.drip,
            Subsystem::Fog => self.fog,
            Subsystem::Sprinkler => self.sprinkler,
            Subsystem::Fan => self.fan,
            Subsystem::AutoShade => self.auto_shade,
        }
    }

    /// Returns a copy with one switch set to the given position.
    #[must_use]
    pub const fn with(mut self, subsystem: Subsystem, enabled: bool) -> Self {
        match subsystem {
            Subsystem::Drip => self.drip = enabled,
            Subsystem::Fog => self.fog = enabled,
            Subsystem::Sprinkler => self.sprinkler = enabled,
            Subsystem::Fan => self.fan = enabled,
            Subsystem::AutoShade => self.auto_shade = enabled,
        }
        self
    }

    /// Returns a copy with one switch flipped.
    #[must_use]
    pub const fn toggled(self, subsystem: Subsystem) -> Self {
        let current = self.is_enabled(subsystem);
        self.with(subsystem, !current)
    }

    /// Iterates over the subsystems that are switched on.
    pub fn enabled(&self) -> impl Iterator<Item = Subsystem> + '_ {
        Subsystem::ALL
            .into_iter()
            .filter(move |subsystem| self.is_enabled(*subsystem))
    }

    /// Iterates over all 32 switch combinations.
    pub fn combinations() -> impl Iterator<Item = Self> {
        (0u8..32).map(|bits| Self {
            drip: bits & 0b0_0001 != 0,
            fog: bits & 0b0_0010 != 0,
            sprinkler: bits & 0b0_0100 != 0,
            fan: bits & 0b0_1000 != 0,
            auto_shade: bits & 0b1_0000 != 0,
        })
    }
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            drip: true,
            fog: false,
            sprinkler: false,
            fan: true,
            auto_shade: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn with_sets_only_one_flag() {
        let toggles = SystemToggles::ALL_OFF.with(Subsystem::Sprinkler, true);
        assert_eq!(toggles.enabled().collect::<Vec<_>>(), vec![Subsystem::Sprinkler]);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for subsystem in Subsystem::ALL {
            let toggles = SystemToggles::default();
            assert_eq!(toggles.toggled(subsystem).toggled(subsystem), toggles);
        }
    }

    #[test]
    fn combinations_are_distinct_and_complete() {
        let all: HashSet<_> = SystemToggles::combinations().collect();
        assert_eq!(all.len(), 32);
        assert!(all.contains(&SystemToggles::ALL_OFF));
        assert!(all.contains(&SystemToggles::ALL_ON));
        assert!(all.contains(&SystemToggles::default()));
    }

    #[test]
    fn deserialize_camel_case_with_defaults() {
        let toggles: SystemToggles =
            serde_json::from_str(r#"{"fog":true,"autoShade":false}"#).unwrap();
        assert!(toggles.fog);
        assert!(!toggles.auto_shade);
        // Missing fields keep the dashboard defaults
        assert!(toggles.drip);
        assert!(toggles.fan);
        assert!(!toggles.sprinkler);
    }
}
