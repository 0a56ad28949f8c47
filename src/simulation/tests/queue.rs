use crate::flight::FlightKind::{Arrival, Departure};
use crate::flight::Priority::{Commercial, Emergency, Military, Special};
use crate::simulation::queue::FlightQueue;
use crate::simulation::tests::utils::{at, flight};

#[test]
fn test_empty_queue_has_no_head() {
    let mut queue = FlightQueue::new();
    assert!(queue.is_empty());
    assert_eq!(None, queue.peek_earliest());
    assert_eq!(None, queue.pop_earliest());
}

#[test]
fn test_pops_in_time_order() {
    let mut queue = FlightQueue::new();
    queue.insert(flight("AA0003", Arrival, "14:00", 5, Commercial));
    queue.insert(flight("AA0001", Departure, "06:15", 5, Commercial));
    queue.insert(flight("AA0002", Arrival, "09:40", 5, Emergency));

    assert_eq!(3, queue.len());
    assert_eq!(Some(at("06:15")), queue.peek_earliest().map(|f| f.scheduled));
    assert_eq!("AA0001", queue.pop_earliest().unwrap().number);
    assert_eq!("AA0002", queue.pop_earliest().unwrap().number);
    assert_eq!("AA0003", queue.pop_earliest().unwrap().number);
    assert_eq!(None, queue.pop_earliest());
}

#[test]
fn test_emergency_before_commercial_on_same_minute() {
    let mut queue = FlightQueue::new();
    queue.insert(flight("CO1000", Departure, "10:00", 5, Commercial));
    queue.insert(flight("EM1000", Arrival, "10:00", 5, Emergency));

    let order: Vec<&str> = queue.iter().map(|f| f.number.as_str()).collect();
    assert_eq!(vec!["EM1000", "CO1000"], order);
}

#[test]
fn test_priority_ladder() {
    let mut queue = FlightQueue::new();
    queue.insert(flight("CO0001", Arrival, "12:00", 5, Commercial));
    queue.insert(flight("SP0001", Arrival, "12:00", 5, Special));
    queue.insert(flight("MI0001", Arrival, "12:00", 5, Military));
    queue.insert(flight("EM0001", Arrival, "12:00", 5, Emergency));
    // earlier time wins regardless of priority
    queue.insert(flight("CO0002", Arrival, "11:59", 5, Commercial));

    let order: Vec<&str> = queue.iter().map(|f| f.number.as_str()).collect();
    assert_eq!(vec!["CO0002", "EM0001", "MI0001", "SP0001", "CO0001"], order);
}

#[test]
fn test_full_ties_keep_insertion_order() {
    let mut queue = FlightQueue::new();
    queue.insert(flight("SP0001", Arrival, "08:00", 5, Special));
    queue.insert(flight("SP0002", Departure, "08:00", 9, Special));
    queue.insert(flight("EM0001", Arrival, "08:00", 5, Emergency));
    queue.insert(flight("SP0003", Arrival, "08:00", 1, Special));

    let order: Vec<&str> = queue.iter().map(|f| f.number.as_str()).collect();
    assert_eq!(vec!["EM0001", "SP0001", "SP0002", "SP0003"], order);
}

#[test]
fn test_duplicate_numbers_are_kept() {
    let mut queue = FlightQueue::new();
    queue.insert(flight("AB1234", Arrival, "08:00", 5, Special));
    queue.insert(flight("AB1234", Arrival, "07:00", 5, Special));
    assert_eq!(2, queue.len());
}
