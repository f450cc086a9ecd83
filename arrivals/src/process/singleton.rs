//! Single-shot deterministic arrival model.

use crate::event::Event;
use crate::process::ArrivalProcess;

/// Generates exactly one event at a fixed arrival time.
///
/// Deterministic and idempotent: every call to
/// [`generate_events`](ArrivalProcess::generate_events) returns an equal
/// (not identical) one-element sequence.
#[derive(Debug, Clone)]
pub struct SingletonProcess {
    name: String,
    duration: u64,
    arrival: u64,
}

impl SingletonProcess {
    /// Creates a process that emits one event `(name, arrival, duration)`.
    pub fn new(name: impl Into<String>, duration: u64, arrival: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            arrival,
        }
    }
}

impl ArrivalProcess for SingletonProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate_events(&mut self) -> Vec<Event> {
        vec![Event::new(self.name.clone(), self.arrival, self.duration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_exactly_one_event() {
        let mut process = SingletonProcess::new("A", 5, 10);
        let events = process.generate_events();

        assert_eq!(events, vec![Event::new("A", 10, 5)]);
    }

    #[test]
    fn repeated_calls_are_equal() {
        let mut process = SingletonProcess::new("A", 5, 10);
        let first = process.generate_events();
        let second = process.generate_events();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_times_are_valid() {
        let mut process = SingletonProcess::new("boot", 0, 0);
        assert_eq!(process.generate_events(), vec![Event::new("boot", 0, 0)]);
    }
}
