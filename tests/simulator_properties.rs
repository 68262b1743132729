// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property tests for snapshot generation over every switch combination.

use greenhouse_sim::telemetry::ranges;
use greenhouse_sim::{SensorSnapshot, Simulator, Subsystem, SystemToggles, next_snapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DRAWS_PER_COMBINATION: usize = 100;

fn assert_bounds(snapshot: &SensorSnapshot, toggles: &SystemToggles) {
    assert!(
        ranges::TEMPERATURE.contains(&snapshot.temperature),
        "temperature out of range: {snapshot:?}"
    );
    assert!(ranges::HUMIDITY.contains(&snapshot.humidity), "{snapshot:?}");
    assert!(ranges::ILLUMINANCE.contains(&snapshot.illuminance), "{snapshot:?}");

    if toggles.drip {
        assert!(ranges::DRIP_FLOW.contains(&snapshot.drip_flow), "{snapshot:?}");
    } else {
        assert_eq!(snapshot.drip_flow, 0.0);
    }
    if toggles.fog {
        assert!(ranges::FOG_PRESSURE.contains(&snapshot.fog_pressure), "{snapshot:?}");
    } else {
        assert_eq!(snapshot.fog_pressure, 0.0);
    }
    if toggles.sprinkler {
        assert!(ranges::SPRINKLER_COVERAGE.contains(&snapshot.sprinkler_coverage));
    } else {
        assert_eq!(snapshot.sprinkler_coverage, 0);
    }
    if toggles.fan {
        assert!(ranges::FAN_RPM.contains(&snapshot.fan_rpm));
    } else {
        assert_eq!(snapshot.fan_rpm, 0);
    }
}

// ============================================================================
// Gating and bounds
// ============================================================================

mod gating {
    use super::*;

    #[test]
    fn covers_all_thirty_two_combinations() {
        assert_eq!(SystemToggles::combinations().count(), 32);
    }

    #[test]
    fn every_combination_respects_switches_and_ranges() {
        let mut simulator = Simulator::seeded(0x00C0_FFEE);
        for toggles in SystemToggles::combinations() {
            for _ in 0..DRAWS_PER_COMBINATION {
                let snapshot = simulator.next_snapshot(&toggles);
                assert_bounds(&snapshot, &toggles);
                assert!(snapshot.respects(&toggles));
            }
        }
    }

    #[test]
    fn thread_rng_generation_respects_switches() {
        for toggles in SystemToggles::combinations() {
            let snapshot = next_snapshot(&toggles);
            assert_bounds(&snapshot, &toggles);
        }
    }

    #[test]
    fn auto_shade_does_not_change_readings() {
        let with = SystemToggles::ALL_OFF.with(Subsystem::AutoShade, true);
        let a = greenhouse_sim::next_snapshot_with(&mut StdRng::seed_from_u64(8), &with);
        let b = greenhouse_sim::next_snapshot_with(
            &mut StdRng::seed_from_u64(8),
            &SystemToggles::ALL_OFF,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_both_satisfy_bounds() {
        let toggles = SystemToggles::default();
        let first = next_snapshot(&toggles);
        let second = next_snapshot(&toggles);
        assert_bounds(&first, &toggles);
        assert_bounds(&second, &toggles);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn drip_fan_and_auto_shade_on() {
        let toggles = SystemToggles::default();
        assert!(toggles.drip && toggles.fan && toggles.auto_shade);
        assert!(!toggles.fog && !toggles.sprinkler);

        let snapshot = next_snapshot(&toggles);
        assert_eq!(snapshot.fog_pressure, 0.0);
        assert_eq!(snapshot.sprinkler_coverage, 0);
        assert!((2.0..2.8).contains(&snapshot.drip_flow));
        assert!((1100..=1400).contains(&snapshot.fan_rpm));
    }

    #[test]
    fn everything_off() {
        let snapshot = next_snapshot(&SystemToggles::ALL_OFF);
        assert_eq!(snapshot.drip_flow, 0.0);
        assert_eq!(snapshot.fog_pressure, 0.0);
        assert_eq!(snapshot.sprinkler_coverage, 0);
        assert_eq!(snapshot.fan_rpm, 0);
        assert!((24.0..30.0).contains(&snapshot.temperature));
    }

    #[test]
    fn everything_on() {
        let snapshot = next_snapshot(&SystemToggles::ALL_ON);
        for subsystem in Subsystem::ALL {
            if subsystem.gates_reading() {
                assert!(snapshot.is_reading_active(subsystem), "{subsystem}");
            }
        }
    }

    #[test]
    fn seeded_simulators_agree() {
        let mut a = Simulator::seeded(2024);
        let mut b = Simulator::seeded(2024);
        for toggles in SystemToggles::combinations() {
            assert_eq!(a.next_snapshot(&toggles), b.next_snapshot(&toggles));
        }
    }
}
