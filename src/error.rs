use std::io;

/// A field that failed validation at the entry boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlightError {
    #[error("flight number {0:?} must be 2 letters followed by 4 digits")]
    InvalidNumber(String),
    #[error("{field} code {value:?} must be 3 uppercase letters")]
    InvalidAirport { field: &'static str, value: String },
    #[error("flight kind {0:?} must be ARRIVAL or DEPARTURE")]
    InvalidKind(String),
    #[error("time {0:?} must have the format HH:MM")]
    InvalidTime(String),
    #[error("duration {0:?} must be a whole number of minutes")]
    InvalidDuration(String),
    #[error("priority {0:?} must be EMERGENCY, MILITARY, SPECIAL or COMMERCIAL")]
    InvalidPriority(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("flight #{index} in scenario: {source}")]
    InvalidFlight {
        index: usize,
        #[source]
        source: FlightError,
    },
}
