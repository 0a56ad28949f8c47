use crate::flight::{Flight, FlightKind, Priority};
use crate::time::Time;
use rand::Rng;

const MIN_DURATION: u64 = 3;
const MAX_DURATION: u64 = 10;

fn letters<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| char::from(rng.random_range(b'A'..=b'Z'))).collect()
}

fn digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| char::from(rng.random_range(b'0'..=b'9'))).collect()
}

/// A syntactically valid flight with random fields, for demos and tests.
pub fn random_flight<R: Rng + ?Sized>(rng: &mut R) -> Flight {
    let number = format!("{}{}", letters(rng, 2), digits(rng, 4));
    Flight {
        number,
        origin: letters(rng, 3),
        destination: letters(rng, 3),
        kind: FlightKind::ALL[rng.random_range(0..FlightKind::ALL.len())],
        scheduled: Time::hm(rng.random_range(0..24), rng.random_range(0..60)),
        duration: rng.random_range(MIN_DURATION..=MAX_DURATION),
        priority: Priority::ALL[rng.random_range(0..Priority::ALL.len())],
    }
}

pub fn random_flights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Flight> {
    (0..count).map(|_| random_flight(rng)).collect()
}
