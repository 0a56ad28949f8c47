use crate::error::LoadError;
use crate::flight::{Flight, FlightDraft};
use crate::simulation::queue::FlightQueue;
use crate::status::{self, FlightStatus};
use crate::time::Time;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// The flight holding the runway. Its `scheduled` time is restamped to the
/// minute it was promoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunwayOccupant {
    pub flight: Flight,
    pub originally_scheduled: Time,
}

impl RunwayOccupant {
    pub fn since(&self) -> Time {
        self.flight.scheduled
    }

    fn is_done(&self, now: Time) -> bool {
        now - self.since() >= self.flight.duration
    }
}

/// A flight together with the status it shows on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub flight: Flight,
    pub status: FlightStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running,
    /// Running, but nothing is queued and the runway is free.
    Paused,
    /// The clock reached 23:59.
    Halted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub previous: Time,
    pub now: Time,
    pub retired: Option<Flight>,
    pub promoted: Option<Flight>,
}

impl TickOutcome {
    fn unchanged(now: Time) -> TickOutcome {
        TickOutcome {
            previous: now,
            now,
            retired: None,
            promoted: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.previous == self.now && self.retired.is_none() && self.promoted.is_none()
    }
}

pub struct Simulation {
    queue: FlightQueue,
    now: Time,
    runway: Option<RunwayOccupant>,
    last_completed: Option<Flight>,
    running: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(vec![])
    }
}

impl Simulation {
    pub fn new(flights: Vec<Flight>) -> Simulation {
        let mut queue = FlightQueue::new();
        queue.extend(flights);
        Simulation {
            queue,
            now: Time::MIDNIGHT,
            runway: None,
            last_completed: None,
            running: false,
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            flights: Vec<FlightDraft>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        let flights = raw
            .flights
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                Flight::try_from(draft).map_err(|source| LoadError::InvalidFlight { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Simulation::new(flights))
    }

    pub fn now(&self) -> Time {
        self.now
    }

    pub fn state(&self) -> ClockState {
        if !self.running {
            ClockState::Idle
        } else if self.now >= Time::END_OF_DAY {
            ClockState::Halted
        } else if self.queue.is_empty() && self.runway.is_none() {
            ClockState::Paused
        } else {
            ClockState::Running
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Queues `flight`. While running, a due flight goes straight to a free
    /// runway.
    pub fn insert_flight(&mut self, flight: Flight) -> Option<Flight> {
        info!(number = %flight.number, scheduled = %flight.scheduled, priority = %flight.priority, "flight queued");
        self.queue.insert(flight);
        let promoted = if self.running { self.promote_due() } else { None };
        self.assert_invariants();
        promoted
    }

    pub fn insert_random<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        crate::generator::random_flights(rng, count)
            .into_iter()
            .for_each(|f| {
                self.insert_flight(f);
            });
    }

    pub fn queue_snapshot(&self) -> Vec<BoardEntry> {
        self.queue
            .iter()
            .map(|f| BoardEntry {
                flight: f.clone(),
                status: status::resolve(f, self.now, false),
            })
            .collect()
    }

    pub fn runway(&self) -> Option<&RunwayOccupant> {
        self.runway.as_ref()
    }

    pub fn runway_occupant(&self) -> Option<BoardEntry> {
        self.runway.as_ref().map(|o| BoardEntry {
            flight: o.flight.clone(),
            status: status::resolve(&o.flight, self.now, true),
        })
    }

    pub fn last_completed(&self) -> Option<&Flight> {
        self.last_completed.as_ref()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Ends the run and rewinds the clock to 00:00.
    pub fn stop(&mut self) -> TickOutcome {
        self.running = false;
        self.reset_clock()
    }

    /// Rewinds the clock to 00:00. A flight still on the runway was timed
    /// against the old clock, so it is retired as it stands. While running,
    /// a flight due at 00:00 is promoted straight away.
    pub fn reset_clock(&mut self) -> TickOutcome {
        let previous = self.now;
        let retired = self.runway.take().map(|occupant| {
            info!(number = %occupant.flight.number, at = %previous, "flight retired by clock reset");
            self.last_completed = Some(occupant.flight.clone());
            occupant.flight
        });
        self.now = Time::MIDNIGHT;
        let promoted = if self.running { self.promote_due() } else { None };
        self.assert_invariants();

        TickOutcome {
            previous,
            now: self.now,
            retired,
            promoted,
        }
    }

    /// Advances the simulated clock by one step, then retires and promotes
    /// flights, in that order.
    pub fn tick(&mut self) -> TickOutcome {
        let previous = self.now;
        if !self.running || self.now >= Time::END_OF_DAY {
            return TickOutcome::unchanged(previous);
        }

        let next = match (&self.runway, self.queue.peek_earliest()) {
            (Some(_), _) => self.now.advance_clamped(1),
            // fast-forward to the next flight, never backwards
            (None, Some(head)) => head.scheduled.max(self.now).min(Time::END_OF_DAY),
            (None, None) => return TickOutcome::unchanged(previous),
        };
        if next > previous + 1 {
            debug!(from = %previous, to = %next, "clock jumped to next flight");
        }
        self.now = next;

        let retired = self.retire_finished();
        let promoted = self.promote_due();
        self.assert_invariants();

        TickOutcome {
            previous,
            now: next,
            retired,
            promoted,
        }
    }

    fn retire_finished(&mut self) -> Option<Flight> {
        if !self.runway.as_ref().is_some_and(|o| o.is_done(self.now)) {
            return None;
        }
        let occupant = self.runway.take()?;
        debug!(number = %occupant.flight.number, at = %self.now, "flight retired");
        self.last_completed = Some(occupant.flight.clone());
        Some(occupant.flight)
    }

    fn promote_due(&mut self) -> Option<Flight> {
        if self.runway.is_some() {
            return None;
        }
        if !self.queue.peek_earliest().is_some_and(|f| f.scheduled <= self.now) {
            return None;
        }
        let mut flight = self.queue.pop_earliest()?;
        let originally_scheduled = flight.scheduled;
        flight.scheduled = self.now;
        debug!(
            number = %flight.number,
            scheduled = %originally_scheduled,
            at = %self.now,
            "flight promoted to runway"
        );
        self.runway = Some(RunwayOccupant {
            flight: flight.clone(),
            originally_scheduled,
        });
        Some(flight)
    }

    fn assert_invariants(&self) {
        debug_assert!(self.now <= Time::END_OF_DAY, "Clock past end of day");
        debug_assert!(
            self.queue
                .iter()
                .zip(self.queue.iter().skip(1))
                .all(|(a, b)| (a.scheduled, a.priority.rank()) <= (b.scheduled, b.priority.rank())),
            "Queue order violated"
        );
        debug_assert!(
            self.runway
                .as_ref()
                .is_none_or(|o| o.since() <= self.now),
            "Runway occupant promoted in the future"
        );
    }
}
