// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pseudo-random snapshot generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::{SensorSnapshot, SystemToggles};

use super::ranges;

/// A snapshot generator that owns its RNG.
///
/// Unlike the thread-local generator behind [`next_snapshot`], a
/// `Simulator` is `Send` and can live inside state shared with ticker
/// tasks. Seeding it makes a dashboard run reproducible.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::state::SystemToggles;
/// use greenhouse_sim::telemetry::Simulator;
///
/// let mut a = Simulator::seeded(3);
/// let mut b = Simulator::seeded(3);
/// let toggles = SystemToggles::ALL_ON;
/// assert_eq!(a.next_snapshot(&toggles), b.next_snapshot(&toggles));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Creates a simulator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a simulator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates the next snapshot for the given switch positions.
    pub fn next_snapshot(&mut self, toggles: &SystemToggles) -> SensorSnapshot {
        next_snapshot_with(&mut self.rng, toggles)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Generates a fresh snapshot using the thread-local RNG.
///
/// Ungated readings are always sampled. Each gated reading is sampled only
/// when its switch is on and is zero otherwise. The function has no side
/// effects and cannot fail.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::state::SystemToggles;
/// use greenhouse_sim::telemetry::{next_snapshot, ranges};
///
/// let snapshot = next_snapshot(&SystemToggles::ALL_OFF);
/// assert!(ranges::TEMPERATURE.contains(&snapshot.temperature));
/// assert_eq!(snapshot.fan_rpm, 0);
/// ```
#[must_use]
pub fn next_snapshot(toggles: &SystemToggles) -> SensorSnapshot {
    next_snapshot_with(&mut rand::thread_rng(), toggles)
}

/// Generates a fresh snapshot from the given RNG.
///
/// Identical to [`next_snapshot`] but lets the caller supply a seeded
/// generator for reproducible sequences.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use greenhouse_sim::state::SystemToggles;
/// use greenhouse_sim::telemetry::next_snapshot_with;
///
/// let toggles = SystemToggles::default();
/// let a = next_snapshot_with(&mut StdRng::seed_from_u64(7), &toggles);
/// let b = next_snapshot_with(&mut StdRng::seed_from_u64(7), &toggles);
/// assert_eq!(a, b);
/// ```
pub fn next_snapshot_with<R: Rng>(rng: &mut R, toggles: &SystemToggles) -> SensorSnapshot {
    let temperature = rng.gen_range(ranges::TEMPERATURE);
    let humidity = rng.gen_range(ranges::HUMIDITY);
    let illuminance = rng.gen_range(ranges::ILLUMINANCE);

    let drip_flow = if toggles.drip {
        rng.gen_range(ranges::DRIP_FLOW)
    } else {
        0.0
    };
    let fog_pressure = if toggles.fog {
        rng.gen_range(ranges::FOG_PRESSURE)
    } else {
        0.0
    };
    let sprinkler_coverage = if toggles.sprinkler {
        rng.gen_range(ranges::SPRINKLER_COVERAGE)
    } else {
        0
    };
    let fan_rpm = if toggles.fan {
        rng.gen_range(ranges::FAN_RPM)
    } else {
        0
    };

    SensorSnapshot {
        temperature,
        humidity,
        illuminance,
        drip_flow,
        fog_pressure,
        sprinkler_coverage,
        fan_rpm,
    }
}
