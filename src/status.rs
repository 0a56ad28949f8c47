use crate::flight::{Flight, FlightKind};
use crate::time::Time;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Landing,
    TakingOff,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::OnTime => "ON TIME",
            FlightStatus::Delayed => "DELAYED",
            FlightStatus::Landing => "LANDING",
            FlightStatus::TakingOff => "TAKING OFF",
        };
        write!(f, "{}", label)
    }
}

/// Board status of `flight` at `now`. A queued flight is on time up to and
/// including its scheduled minute.
pub fn resolve(flight: &Flight, now: Time, on_runway: bool) -> FlightStatus {
    match (on_runway, flight.kind) {
        (false, _) if now <= flight.scheduled => FlightStatus::OnTime,
        (false, _) => FlightStatus::Delayed,
        (true, FlightKind::Arrival) => FlightStatus::Landing,
        (true, FlightKind::Departure) => FlightStatus::TakingOff,
    }
}
