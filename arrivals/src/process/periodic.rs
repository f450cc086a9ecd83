//! Fixed-cadence deterministic arrival model.

use crate::event::Event;
use crate::process::ArrivalProcess;

/// Generates a fixed number of events at a fixed cadence.
///
/// The i-th event (0-indexed) arrives at
/// `first_arrival + i * interarrival_time` and carries the same duration as
/// every other event. Deterministic and idempotent across calls.
#[derive(Debug, Clone)]
pub struct PeriodicProcess {
    name: String,
    duration: u64,
    interarrival_time: u64,
    first_arrival: u64,
    num_repetitions: u32,
}

impl PeriodicProcess {
    /// Creates a process that emits `num_repetitions` evenly spaced events.
    ///
    /// `num_repetitions == 0` is valid and yields an empty sequence.
    pub fn new(
        name: impl Into<String>,
        duration: u64,
        interarrival_time: u64,
        first_arrival: u64,
        num_repetitions: u32,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            interarrival_time,
            first_arrival,
            num_repetitions,
        }
    }
}

impl ArrivalProcess for PeriodicProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate_events(&mut self) -> Vec<Event> {
        (0..self.num_repetitions)
            .map(|i| {
                let arrival = self.first_arrival + u64::from(i) * self.interarrival_time;
                Event::new(self.name.clone(), arrival, self.duration)
            })
            .collect()
    }
}
