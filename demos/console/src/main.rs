//! console — scripted demo drive for the dash vehicle simulation.
//!
//! Wires a text panel and a CSV trip recorder to a `VehicleController`,
//! then plays a short drive: a city block, a highway stretch fast enough to
//! trip the overspeed warning and long enough to light the low-fuel lamp, a
//! coast-down and cool-off, and a refuel.  The controller only exposes
//! `tick()`; this binary owns the cadence.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Instant;

use anyhow::Result;

use dash_core::Cadence;
use dash_output::{CsvWriter, TripRecorder};
use dash_panel::warning::LOW_FUEL_PCT;
use dash_panel::TextPanel;
use dash_sim::VehicleController;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/console";

/// Pace the drive at the reference cadence (1 tick/s) instead of running
/// flat out.
const PACED: bool = false;

/// Bound on the highway cruise so a tuning change cannot hang the demo.
const MAX_CRUISE_TICKS: u32 = 500;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== console — dash vehicle simulation demo drive ===");
    println!();

    let cadence = Cadence::per_second();
    let pace = || {
        if PACED {
            thread::sleep(cadence.period);
        }
    };

    // 1. Controller with a panel on stdout and a CSV trip recorder.
    let mut vehicle = VehicleController::new();
    vehicle.subscribe(Box::new(TextPanel::new(io::stdout())));

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let recorder = Rc::new(RefCell::new(TripRecorder::new(writer)));
    vehicle.subscribe(Box::new(Rc::clone(&recorder)));

    let t0 = Instant::now();

    // 2. City block: three steps up, a short cruise, three steps down.
    for _ in 0..3 {
        vehicle.accelerate()?;
    }
    for _ in 0..5 {
        pace();
        vehicle.tick()?;
    }
    for _ in 0..3 {
        vehicle.brake()?;
    }

    // 3. Highway stretch: 90 km/h trips the overspeed warning, and the
    //    cruise runs until the low-fuel lamp comes on.
    for _ in 0..9 {
        vehicle.accelerate()?;
    }
    let mut cruise_ticks = 0;
    while vehicle.snapshot().fuel >= LOW_FUEL_PCT && cruise_ticks < MAX_CRUISE_TICKS {
        pace();
        vehicle.tick()?;
        cruise_ticks += 1;
    }

    // 4. Coast to a stop and idle until the engine is cold.
    while vehicle.snapshot().speed > 0 {
        vehicle.brake()?;
    }
    while vehicle.snapshot().temperature > 0 {
        pace();
        vehicle.tick()?;
    }

    // 5. Refuel: every gauge returns to its initial reading.
    let trip = vehicle.snapshot();
    vehicle.refuel()?;

    let elapsed = t0.elapsed();

    // 6. Summary.
    println!();
    println!(
        "Drive complete in {:.3} s ({} ticks simulated, {:?} at the reference cadence)",
        elapsed.as_secs_f64(),
        vehicle.elapsed().0,
        cadence.span(vehicle.elapsed()),
    );
    println!();
    println!("{:<22} {:>10}", "End of trip", "");
    println!("{}", "-".repeat(33));
    println!("{:<22} {:>10.1}", "Odometer (km)", trip.distance);
    println!("{:<22} {:>10.2}", "Fuel used (%)", 100.0 - trip.fuel);
    println!("{:<22} {:>10}", "Temperature (°C)", trip.temperature);

    // Release the controller's handle so the recorder can be unwrapped and
    // its file flushed.
    drop(vehicle);
    let mut recorder = Rc::try_unwrap(recorder)
        .ok()
        .expect("controller released its handle")
        .into_inner();
    if let Some(e) = recorder.take_error() {
        eprintln!("recorder error: {e}");
    }
    println!(
        "{:<22} {:>10}",
        "dashboard_updates.csv",
        format!("{} rows", recorder.updates_seen()),
    );
    recorder.finish()?;

    Ok(())
}
