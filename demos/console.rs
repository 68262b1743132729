// SPDX-License-Identifier: MPL-2.0

//! Console dashboard example.
//!
//! Runs the greenhouse dashboard, flips a few switches along the way and
//! prints the panels every time a new snapshot arrives.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example console -- [seconds] [config.json]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Run for the default 20 seconds
//! cargo run --example console
//!
//! # Run for a minute with a custom configuration
//! cargo run --example console -- 60 greenhouse.json
//! ```

use std::env;
use std::time::Duration;

use greenhouse_sim::{Dashboard, DashboardConfig, DashboardEvent, ShadeLevel, Subsystem};
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_RUN_SECS: u64 = 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let run_for = match args.get(1) {
        Some(secs) => Duration::from_secs(secs.parse()?),
        None => Duration::from_secs(DEFAULT_RUN_SECS),
    };
    let config = match args.get(2) {
        Some(path) => DashboardConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => DashboardConfig::default(),
    };

    let dashboard = Dashboard::new(config);
    println!("=== {} ===", dashboard.name());
    println!("{}", dashboard.panel());
    println!();

    let mut events = dashboard.subscribe();
    dashboard.start()?;

    // Scripted user actions, one every few seconds
    let mut script = vec![
        (Subsystem::Fog, None),
        (Subsystem::Sprinkler, None),
        (Subsystem::AutoShade, Some(ShadeLevel::CLOSED)),
        (Subsystem::Fan, None),
    ]
    .into_iter();
    let mut actions = tokio::time::interval(Duration::from_secs(4));
    actions.tick().await;

    let deadline = tokio::time::sleep(run_for);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            () = &mut deadline => break,
            _ = actions.tick() => {
                if let Some((subsystem, shade)) = script.next() {
                    let toggles = dashboard.toggle(subsystem);
                    println!(
                        ">> {} switched {}",
                        subsystem.display_name(),
                        if toggles.is_enabled(subsystem) { "on" } else { "off" }
                    );
                    if let Some(level) = shade {
                        dashboard.set_shade_level(level);
                        println!(">> Shade set to {level}");
                    }
                }
            }
            event = events.recv() => match event {
                Ok(DashboardEvent::SnapshotUpdated { .. }) => {
                    println!("{}", dashboard.panel());
                    println!();
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    eprintln!("Skipped {skipped} events");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    dashboard.stop()?;
    println!("Stopped after {}s", run_for.as_secs());
    Ok(())
}
