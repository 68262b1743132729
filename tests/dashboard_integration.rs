// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the running dashboard using paused Tokio time.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use greenhouse_sim::telemetry::ranges;
use greenhouse_sim::{
    ClockReading, Dashboard, DashboardConfig, DashboardEvent, Error, SensorSnapshot, ShadeLevel,
    Subsystem, SystemToggles,
};
use tokio::sync::broadcast::{Receiver, error::TryRecvError};
use tokio::time::{Instant, timeout};

fn seeded_dashboard() -> Dashboard {
    Dashboard::new(DashboardConfig::default().with_seed(17))
}

/// Waits for the next snapshot event, skipping everything else.
async fn next_snapshot_event(rx: &mut Receiver<DashboardEvent>) -> SensorSnapshot {
    loop {
        if let DashboardEvent::SnapshotUpdated { snapshot } = rx.recv().await.unwrap() {
            return snapshot;
        }
    }
}

fn drain(rx: &mut Receiver<DashboardEvent>) -> Vec<DashboardEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ============================================================================
// Telemetry schedule
// ============================================================================

mod telemetry {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_snapshot_arrives_after_one_period() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();

        let started = Instant::now();
        dashboard.start().unwrap();
        let snapshot = next_snapshot_event(&mut rx).await;

        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert_eq!(snapshot, dashboard.snapshot());
        assert!(snapshot.respects(&dashboard.toggles()));

        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn snapshots_repeat_every_period() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();
        dashboard.start().unwrap();

        let started = Instant::now();
        for n in 1..=4 {
            let snapshot = next_snapshot_event(&mut rx).await;
            assert_eq!(started.elapsed(), Duration::from_secs(3 * n));
            assert!(ranges::TEMPERATURE.contains(&snapshot.temperature));
        }

        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn custom_interval_is_honoured() {
        let dashboard = Dashboard::new(
            DashboardConfig::default()
                .with_telemetry_interval(Duration::from_millis(500))
                .with_seed(1),
        );
        let mut rx = dashboard.subscribe();
        let started = Instant::now();
        dashboard.start().unwrap();

        next_snapshot_event(&mut rx).await;
        assert_eq!(started.elapsed(), Duration::from_millis(500));

        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn switch_change_restarts_telemetry_period() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();
        let started = Instant::now();
        dashboard.start().unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        dashboard.toggle(Subsystem::Fog);
        let fresh = dashboard.snapshot();
        drain(&mut rx);

        // Without the restart the next tick would land at 3 s
        let snapshot = next_snapshot_event(&mut rx).await;
        assert_eq!(started.elapsed(), Duration::from_secs(5));
        assert_ne!(snapshot, fresh);
        assert!(ranges::FOG_PRESSURE.contains(&snapshot.fog_pressure));

        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn ticked_snapshots_follow_current_switches() {
        let dashboard = Dashboard::new(
            DashboardConfig::default()
                .with_toggles(SystemToggles::ALL_OFF)
                .with_seed(4),
        );
        let mut rx = dashboard.subscribe();
        dashboard.start().unwrap();

        let snapshot = next_snapshot_event(&mut rx).await;
        assert!(snapshot.respects(&SystemToggles::ALL_OFF));

        dashboard.set_toggle(Subsystem::Sprinkler, true);
        drain(&mut rx);

        let snapshot = next_snapshot_event(&mut rx).await;
        assert!(ranges::SPRINKLER_COVERAGE.contains(&snapshot.sprinkler_coverage));
        assert_eq!(snapshot.fan_rpm, 0);

        dashboard.stop().unwrap();
    }
}

// ============================================================================
// User actions
// ============================================================================

mod actions {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toggle_updates_without_waiting_for_tick() {
        let dashboard = seeded_dashboard();
        dashboard.start().unwrap();
        let before = Instant::now();

        dashboard.toggle(Subsystem::Fog);
        let snapshot = dashboard.snapshot();
        assert!(ranges::FOG_PRESSURE.contains(&snapshot.fog_pressure));

        dashboard.toggle(Subsystem::Drip);
        assert_eq!(dashboard.snapshot().drip_flow, 0.0);

        // No time passed
        assert_eq!(before.elapsed(), Duration::ZERO);
        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_events_are_published_in_order() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();

        dashboard.toggle(Subsystem::Fan);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            DashboardEvent::ToggleChanged {
                subsystem: Subsystem::Fan,
                enabled: false,
                ..
            }
        ));
        assert!(matches!(
            events[1],
            DashboardEvent::SnapshotUpdated { snapshot } if snapshot.fan_rpm == 0
        ));
    }

    #[test]
    fn shade_level_does_not_touch_readings() {
        let dashboard = seeded_dashboard();
        let before = dashboard.snapshot();

        assert!(dashboard.set_shade_level(ShadeLevel::new(80).unwrap()));
        assert_eq!(dashboard.snapshot(), before);
        assert_eq!(dashboard.panel().light.shade, "80%");
    }

    #[test]
    fn panel_tracks_switches() {
        let dashboard = seeded_dashboard();
        assert_eq!(dashboard.panel().fog_humidity, "--");

        dashboard.toggle(Subsystem::Fog);
        let panel = dashboard.panel();
        assert_eq!(panel.fog.status, "Active");
        assert_eq!(panel.fog_humidity, dashboard.snapshot().humidity.to_string());
    }
}

// ============================================================================
// Clock
// ============================================================================

mod clock {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn clock_ticks_every_second() {
        let dashboard = seeded_dashboard();

        // Twelve hours away from the wall clock so the first tick always differs
        let now = chrono::Local::now().time();
        let far = NaiveTime::from_hms_opt((now.hour() + 12) % 24, 0, 0).unwrap();
        dashboard.refresh_clock(ClockReading::from_time(far));

        let mut rx = dashboard.subscribe();
        let started = Instant::now();
        dashboard.start().unwrap();

        let event = timeout(Duration::from_secs(2), async {
            loop {
                if let DashboardEvent::ClockTicked { clock } = rx.recv().await.unwrap() {
                    return clock;
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(started.elapsed(), Duration::from_secs(1));
        assert_eq!(event, dashboard.clock());
        assert_ne!(event, ClockReading::from_time(far));

        dashboard.stop().unwrap();
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn start_and_stop_publish_events() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();

        dashboard.start().unwrap();
        assert!(dashboard.is_running());
        assert_eq!(rx.try_recv().unwrap(), DashboardEvent::Started);

        dashboard.stop().unwrap();
        assert!(!dashboard.is_running());
        assert_eq!(rx.try_recv().unwrap(), DashboardEvent::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_both_tickers() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();
        dashboard.start().unwrap();

        next_snapshot_event(&mut rx).await;
        dashboard.stop().unwrap();
        drain(&mut rx);
        let frozen = dashboard.snapshot();

        tokio::time::sleep(Duration::from_secs(30)).await;

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert_eq!(dashboard.snapshot(), frozen);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn shutdown_publishes_stopped_last() {
        let dashboard = Dashboard::new(
            DashboardConfig::default()
                .with_telemetry_interval(Duration::from_millis(5))
                .with_clock_interval(Duration::from_millis(5))
                .with_event_capacity(4096)
                .with_seed(9),
        );
        let mut rx = dashboard.subscribe();
        dashboard.start().unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        dashboard.shutdown().await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(events.last(), Some(&DashboardEvent::Stopped));
        assert!(events.iter().any(DashboardEvent::is_telemetry));
        assert!(!dashboard.is_running());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop() {
        let dashboard = seeded_dashboard();
        dashboard.start().unwrap();
        dashboard.stop().unwrap();
        dashboard.start().unwrap();

        let mut rx = dashboard.subscribe();
        next_snapshot_event(&mut rx).await;

        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn lifecycle_errors() {
        let dashboard = seeded_dashboard();
        assert!(matches!(dashboard.stop(), Err(Error::NotRunning)));

        dashboard.start().unwrap();
        assert!(matches!(dashboard.start(), Err(Error::AlreadyRunning)));
        dashboard.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_dashboard_stops_tickers() {
        let dashboard = seeded_dashboard();
        let mut rx = dashboard.subscribe();
        dashboard.start().unwrap();
        drop(dashboard);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let events = drain(&mut rx);
        assert_eq!(events, vec![DashboardEvent::Started]);
    }
}
