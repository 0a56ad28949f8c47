pub mod clock;
pub mod queue;


pub use clock::{BoardEntry, ClockState, Simulation, TickOutcome};
