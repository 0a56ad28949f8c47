use crate::flight::Flight;

/// Pending flights, kept sorted by scheduled time and then priority rank.
/// Ties on both stay in insertion order.
#[derive(Debug, Default, Clone)]
pub struct FlightQueue {
    flights: Vec<Flight>,
}

impl FlightQueue {
    pub fn new() -> FlightQueue {
        FlightQueue::default()
    }

    pub fn insert(&mut self, flight: Flight) {
        self.flights.push(flight);
        // stable sort: full ties keep insertion order
        self.flights.sort_by_key(|f| (f.scheduled, f.priority.rank()));
    }

    pub fn peek_earliest(&self) -> Option<&Flight> {
        self.flights.first()
    }

    pub fn pop_earliest(&mut self) -> Option<Flight> {
        if self.flights.is_empty() {
            None
        } else {
            Some(self.flights.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }
}

impl Extend<Flight> for FlightQueue {
    fn extend<T: IntoIterator<Item = Flight>>(&mut self, iter: T) {
        iter.into_iter().for_each(|f| self.insert(f));
    }
}
