use crate::error::FlightError;
use crate::time::Time;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightKind {
    Arrival,
    Departure,
}

impl FlightKind {
    pub const ALL: [FlightKind; 2] = [FlightKind::Arrival, FlightKind::Departure];
}

impl fmt::Display for FlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightKind::Arrival => write!(f, "ARRIVAL"),
            FlightKind::Departure => write!(f, "DEPARTURE"),
        }
    }
}

impl FromStr for FlightKind {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ARRIVAL" => Ok(FlightKind::Arrival),
            "DEPARTURE" => Ok(FlightKind::Departure),
            _ => Err(FlightError::InvalidKind(s.to_string())),
        }
    }
}

/// Declared in order of urgency, so the derived ordering puts emergencies first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Emergency,
    Military,
    Special,
    Commercial,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Emergency,
        Priority::Military,
        Priority::Special,
        Priority::Commercial,
    ];

    /// Lower ranks are served first on a scheduling tie.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Emergency => 1,
            Priority::Military => 2,
            Priority::Special => 3,
            Priority::Commercial => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Emergency => "EMERGENCY",
            Priority::Military => "MILITARY",
            Priority::Special => "SPECIAL",
            Priority::Commercial => "COMMERCIAL",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Priority {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EMERGENCY" => Ok(Priority::Emergency),
            "MILITARY" => Ok(Priority::Military),
            "SPECIAL" => Ok(Priority::Special),
            "COMMERCIAL" => Ok(Priority::Commercial),
            _ => Err(FlightError::InvalidPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub kind: FlightKind,
    pub scheduled: Time,
    pub duration: u64,
    pub priority: Priority,
}

/// Raw form fields as typed by a user or read from a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlightDraft {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub kind: String,
    pub scheduled: String,
    pub duration: String,
    pub priority: String,
}

impl From<&Flight> for FlightDraft {
    fn from(flight: &Flight) -> Self {
        FlightDraft {
            number: flight.number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            kind: flight.kind.to_string(),
            scheduled: flight.scheduled.to_string(),
            duration: flight.duration.to_string(),
            priority: flight.priority.to_string(),
        }
    }
}

fn is_flight_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 6
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

fn is_airport_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn parse_airport(field: &'static str, value: String) -> Result<String, FlightError> {
    if is_airport_code(&value) {
        Ok(value)
    } else {
        Err(FlightError::InvalidAirport { field, value })
    }
}

fn parse_duration(s: &str) -> Result<u64, FlightError> {
    let invalid = || FlightError::InvalidDuration(s.to_string());
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<u32>().map(u64::from).map_err(|_| invalid())
}

impl TryFrom<FlightDraft> for Flight {
    type Error = FlightError;

    fn try_from(draft: FlightDraft) -> Result<Self, Self::Error> {
        if !is_flight_number(&draft.number) {
            return Err(FlightError::InvalidNumber(draft.number));
        }
        Ok(Flight {
            origin: parse_airport("origin", draft.origin)?,
            destination: parse_airport("destination", draft.destination)?,
            kind: draft.kind.parse()?,
            scheduled: draft.scheduled.parse()?,
            duration: parse_duration(&draft.duration)?,
            priority: draft.priority.parse()?,
            number: draft.number,
        })
    }
}
