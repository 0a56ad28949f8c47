use crate::flight::{Flight, FlightKind, Priority};
use crate::simulation::Simulation;
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn at(s: &str) -> Time {
    s.parse().unwrap()
}

pub fn flight(number: &str, kind: FlightKind, scheduled: &str, duration: u64, priority: Priority) -> Flight {
    Flight {
        number: number.to_string(),
        origin: "MAD".to_string(),
        destination: "BCN".to_string(),
        kind,
        scheduled: at(scheduled),
        duration,
        priority,
    }
}

pub fn add_flight(
    sim: &mut Simulation,
    number: &str,
    kind: FlightKind,
    scheduled: &str,
    duration: u64,
    priority: Priority,
) {
    sim.insert_flight(flight(number, kind, scheduled, duration, priority));
}

pub fn numbers(sim: &Simulation) -> Vec<String> {
    sim.queue_snapshot()
        .into_iter()
        .map(|e| e.flight.number)
        .collect()
}

/// Ticks until the clock shows `target` or stops moving.
pub fn tick_until(sim: &mut Simulation, target: Time) {
    while sim.now() < target {
        if sim.tick().is_noop() {
            break;
        }
    }
}

pub fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Emergency),
        Just(Priority::Military),
        Just(Priority::Special),
        Just(Priority::Commercial),
    ]
}

pub fn arb_kind() -> impl Strategy<Value = FlightKind> {
    prop_oneof![Just(FlightKind::Arrival), Just(FlightKind::Departure)]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (0..1440u64, 0..15u64, arb_kind(), arb_priority(), 0..10_000u32).prop_map(
        |(minute, duration, kind, priority, n)| Flight {
            number: format!("FL{:04}", n % 10_000),
            origin: "LIM".to_string(),
            destination: "CUZ".to_string(),
            kind,
            scheduled: Time(minute),
            duration,
            priority,
        },
    )
}
