//! Unit and scenario tests for the vehicle state machine.

use std::cell::RefCell;
use std::rc::Rc;

use dash_bus::{EventKind, Listener, ListenerResult};
use dash_core::{Snapshot, Tick};

use crate::params::{RPM_PER_KMH, RPM_REDLINE};
use crate::{ControlError, SimulationState, VehicleController};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Counts how many updates it receives.
struct CountUpdates(Rc<RefCell<usize>>);

impl Listener for CountUpdates {
    fn on_event(&mut self, _kind: EventKind, _snapshot: &Snapshot) -> ListenerResult {
        *self.0.borrow_mut() += 1;
        Ok(())
    }
}

/// Records every snapshot it receives.
struct RecordUpdates(Rc<RefCell<Vec<Snapshot>>>);

impl Listener for RecordUpdates {
    fn on_event(&mut self, _kind: EventKind, snapshot: &Snapshot) -> ListenerResult {
        self.0.borrow_mut().push(*snapshot);
        Ok(())
    }
}

/// Fails on every event.
struct AlwaysFails;

impl Listener for AlwaysFails {
    fn on_event(&mut self, _kind: EventKind, _snapshot: &Snapshot) -> ListenerResult {
        Err("panel unplugged".into())
    }
}

fn counter(vehicle: &mut VehicleController) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    vehicle.subscribe(Box::new(CountUpdates(Rc::clone(&count))));
    count
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Accelerate to 50 km/h and tick until the tank runs dry.
fn run_dry(vehicle: &mut VehicleController) {
    for _ in 0..5 {
        vehicle.accelerate().unwrap();
    }
    for _ in 0..1_000 {
        if vehicle.snapshot().fuel <= 0.0 {
            return;
        }
        vehicle.tick().unwrap();
    }
    panic!("tank never ran dry");
}

// ── State transitions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn moving_tick_burns_fuel_heats_and_advances() {
        let mut state = SimulationState::new();
        state.raise_speed();
        state.raise_speed();
        state.raise_speed(); // 30 km/h

        state.advance_tick();
        assert_close(state.fuel(), 99.7); // 30 × 0.01
        assert_close(state.distance(), 3.0); // 30 / 10
        assert_eq!(state.temperature(), 5);
    }

    #[test]
    fn rpm_tracks_speed_up_to_the_redline() {
        let mut state = SimulationState::new();
        for step in 1..=14u32 {
            state.raise_speed();
            assert_eq!(state.rpm(), step * 10 * RPM_PER_KMH);
        }
        // 140 km/h sits exactly on the redline; one more step stays there.
        assert_eq!(state.rpm(), RPM_REDLINE);
        state.raise_speed();
        assert_eq!(state.speed(), 150);
        assert_eq!(state.rpm(), RPM_REDLINE);
    }

    #[test]
    fn resting_tick_cools_to_zero_and_stops() {
        let mut state = SimulationState::new();
        state.raise_speed();
        state.advance_tick();
        state.advance_tick(); // temperature 10
        state.lower_speed();
        assert_eq!(state.temperature(), 10);

        state.advance_tick();
        assert_eq!(state.temperature(), 5);
        state.advance_tick();
        assert_eq!(state.temperature(), 0);
        state.advance_tick();
        assert_eq!(state.temperature(), 0, "a cold engine stays at 0");
    }

    #[test]
    fn cold_resting_tick_changes_nothing() {
        let mut state = SimulationState::new();
        let before = state.snapshot();
        state.advance_tick();
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn temperature_capped_at_the_ceiling() {
        let mut state = SimulationState::new();
        state.raise_speed();
        for _ in 0..25 {
            state.advance_tick();
        }
        assert_eq!(state.temperature(), 100);
    }

    #[test]
    fn lower_speed_saturates_at_zero() {
        let mut state = SimulationState::new();
        state.lower_speed();
        assert_eq!(state.speed(), 0);
    }

    #[test]
    fn reset_restores_the_initial_record() {
        let mut state = SimulationState::new();
        state.raise_speed();
        state.advance_tick();
        state.reset();
        assert_eq!(state.snapshot(), Snapshot::INITIAL);
    }
}

// ── Controller operations ─────────────────────────────────────────────────────

#[cfg(test)]
mod operations {
    use super::*;

    #[test]
    fn accelerate_steps_speed_and_rpm() {
        let mut vehicle = VehicleController::new();
        let snapshot = vehicle.accelerate().unwrap();
        assert_eq!(snapshot.speed, 10);
        assert_eq!(snapshot.rpm, 500);
    }

    #[test]
    fn accelerate_is_unbounded_above() {
        let mut vehicle = VehicleController::new();
        for _ in 0..20 {
            vehicle.accelerate().unwrap();
        }
        let snapshot = vehicle.snapshot();
        assert_eq!(snapshot.speed, 200);
        assert_eq!(snapshot.rpm, RPM_REDLINE, "only the rpm gauge is clamped");
    }

    #[test]
    fn accelerate_on_an_empty_tank_mutates_nothing() {
        let mut vehicle = VehicleController::new();
        run_dry(&mut vehicle);
        let before = vehicle.snapshot();
        assert!(before.fuel <= 0.0);

        let err = vehicle.accelerate().unwrap_err();
        assert!(matches!(err, ControlError::FuelEmpty));
        assert_eq!(vehicle.snapshot(), before);
    }

    #[test]
    fn brake_is_total_even_at_rest() {
        let mut vehicle = VehicleController::new();
        let snapshot = vehicle.brake().unwrap();
        assert_eq!(snapshot.speed, 0);
        assert_eq!(snapshot.rpm, 0);
    }

    #[test]
    fn brake_works_with_an_empty_tank() {
        let mut vehicle = VehicleController::new();
        run_dry(&mut vehicle);
        assert_eq!(vehicle.snapshot().speed, 50);
        vehicle.brake().unwrap();
        assert_eq!(vehicle.snapshot().speed, 40);
    }

    #[test]
    fn refuel_restores_the_initial_record_exactly() {
        let mut vehicle = VehicleController::new();
        for _ in 0..4 {
            vehicle.accelerate().unwrap();
        }
        for _ in 0..7 {
            vehicle.tick().unwrap();
        }
        let snapshot = vehicle.refuel().unwrap();
        assert_eq!(snapshot, Snapshot::INITIAL);
        assert_eq!(vehicle.snapshot(), Snapshot::INITIAL);
    }

    #[test]
    fn refuel_leaves_elapsed_ticks_alone() {
        let mut vehicle = VehicleController::new();
        for _ in 0..3 {
            vehicle.tick().unwrap();
        }
        vehicle.refuel().unwrap();
        assert_eq!(vehicle.elapsed(), Tick(3));
    }

    #[test]
    fn fuel_never_increases_except_via_refuel() {
        let mut vehicle = VehicleController::new();
        let mut last_fuel = vehicle.snapshot().fuel;
        for round in 0..120 {
            match round % 4 {
                0 => {
                    vehicle.accelerate().unwrap();
                }
                3 => {
                    vehicle.brake().unwrap();
                }
                _ => {
                    vehicle.tick().unwrap();
                }
            }
            let fuel = vehicle.snapshot().fuel;
            assert!(fuel <= last_fuel, "fuel rose from {last_fuel} to {fuel}");
            last_fuel = fuel;
        }
        vehicle.refuel().unwrap();
        assert_eq!(vehicle.snapshot().fuel, 100.0);
    }
}

// ── Notification contract ─────────────────────────────────────────────────────

#[cfg(test)]
mod notifications {
    use super::*;

    #[test]
    fn every_successful_operation_publishes_once() {
        let mut vehicle = VehicleController::new();
        let count = counter(&mut vehicle);

        vehicle.accelerate().unwrap();
        vehicle.tick().unwrap();
        vehicle.brake().unwrap();
        vehicle.refuel().unwrap();
        assert_eq!(*count.borrow(), 4);
    }

    #[test]
    fn tick_at_rest_still_publishes() {
        let mut vehicle = VehicleController::new();
        let count = counter(&mut vehicle);
        vehicle.tick().unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn aborted_accelerate_publishes_nothing() {
        let mut vehicle = VehicleController::new();
        run_dry(&mut vehicle);
        let count = counter(&mut vehicle);

        assert!(vehicle.accelerate().is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn payload_is_the_post_mutation_snapshot() {
        let mut vehicle = VehicleController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        vehicle.subscribe(Box::new(RecordUpdates(Rc::clone(&seen))));

        vehicle.accelerate().unwrap();
        vehicle.tick().unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].speed, 10);
        assert_eq!(*seen.last().unwrap(), vehicle.snapshot());
    }

    #[test]
    fn failing_listener_surfaces_but_the_mutation_commits() {
        let mut vehicle = VehicleController::new();
        vehicle.subscribe(Box::new(AlwaysFails));

        let err = vehicle.accelerate().unwrap_err();
        assert!(matches!(err, ControlError::Notify(_)));
        assert_eq!(vehicle.snapshot().speed, 10, "mutation is not rolled back");
    }

    #[test]
    fn unsubscribed_listener_is_not_notified() {
        let mut vehicle = VehicleController::new();
        let count = Rc::new(RefCell::new(0));
        let id = vehicle.subscribe(Box::new(CountUpdates(Rc::clone(&count))));

        vehicle.tick().unwrap();
        assert!(vehicle.unsubscribe(id));
        vehicle.tick().unwrap();
        assert_eq!(*count.borrow(), 1);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Accelerate to 30, cross one tick, coast to a stop, cool down.
    #[test]
    fn city_drive_matches_hand_computation() {
        let mut vehicle = VehicleController::new();

        for _ in 0..3 {
            vehicle.accelerate().unwrap();
        }
        let rolling = vehicle.snapshot();
        assert_eq!(rolling.speed, 30);
        assert_eq!(rolling.rpm, 1500);

        let after_tick = vehicle.tick().unwrap();
        assert_close(after_tick.fuel, 99.7);
        assert_close(after_tick.distance, 3.0);
        assert_eq!(after_tick.temperature, 5);

        for _ in 0..3 {
            vehicle.brake().unwrap();
        }
        let stopped = vehicle.snapshot();
        assert_eq!(stopped.speed, 0);
        assert_eq!(stopped.rpm, 0);

        let cooled = vehicle.tick().unwrap();
        assert_eq!(cooled.temperature, 0);
        assert_close(cooled.distance, 3.0);
    }

    #[test]
    fn distance_is_the_sum_of_speed_tenths_over_moving_ticks() {
        let mut vehicle = VehicleController::new();
        let mut expected = 0.0;

        for round in 0..60 {
            if round % 5 == 0 {
                vehicle.accelerate().unwrap();
            }
            if round % 7 == 0 {
                vehicle.brake().unwrap();
            }
            let speed = vehicle.snapshot().speed;
            vehicle.tick().unwrap();
            expected += f64::from(speed) / 10.0;
        }

        assert_close(vehicle.snapshot().distance, expected);
    }

    #[test]
    fn distance_never_decreases() {
        let mut vehicle = VehicleController::new();
        let mut last = 0.0;
        for round in 0..200 {
            match round % 6 {
                0 | 1 => {
                    vehicle.accelerate().unwrap();
                }
                4 => {
                    vehicle.brake().unwrap();
                }
                _ => {
                    vehicle.tick().unwrap();
                }
            }
            let distance = vehicle.snapshot().distance;
            assert!(distance >= last);
            last = distance;
        }
    }

    #[test]
    fn temperature_stays_bounded_over_long_mixed_sequences() {
        let mut vehicle = VehicleController::new();
        for round in 0..500 {
            match round % 5 {
                0 => {
                    if vehicle.snapshot().fuel > 0.0 {
                        vehicle.accelerate().unwrap();
                    } else {
                        vehicle.refuel().unwrap();
                    }
                }
                3 => {
                    vehicle.brake().unwrap();
                }
                _ => {
                    vehicle.tick().unwrap();
                }
            }
            assert!(vehicle.snapshot().temperature <= 100);
        }
    }

    #[test]
    fn rpm_invariant_holds_after_every_operation() {
        let mut vehicle = VehicleController::new();
        for round in 0..300 {
            match round % 4 {
                0 | 1 => {
                    if vehicle.snapshot().fuel > 0.0 {
                        vehicle.accelerate().unwrap();
                    }
                }
                2 => {
                    vehicle.tick().unwrap();
                }
                _ => {
                    vehicle.brake().unwrap();
                }
            }
            let snapshot = vehicle.snapshot();
            assert_eq!(
                snapshot.rpm,
                (snapshot.speed * RPM_PER_KMH).min(RPM_REDLINE),
                "rpm must stay a pure function of speed"
            );
        }
    }
}
