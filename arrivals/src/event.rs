//! Event records produced by arrival processes.

/// A single arrival produced by a process.
///
/// Events are plain value records: the owning process name, the simulation
/// time at which the event arrives, and how long its work takes. Both time
/// fields are fixed at construction and never mutated afterwards. The type
/// performs no validation; generators are responsible for the values they
/// emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    process_name: String,
    arrival_time: u64,
    duration: u64,
}

impl Event {
    /// Creates a new event.
    pub fn new(process_name: impl Into<String>, arrival_time: u64, duration: u64) -> Self {
        Self {
            process_name: process_name.into(),
            arrival_time,
            duration,
        }
    }

    /// Name of the process that generated this event.
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Simulation-clock timestamp at which the event becomes active.
    pub fn arrival_time(&self) -> u64 {
        self.arrival_time
    }

    /// Service time the event requires once started.
    pub fn duration(&self) -> u64 {
        self.duration
    }
}

/// Scheduling outcome for one event, filled in by a downstream scheduler.
///
/// Generators never read or write these values. A scheduler that assigns
/// events to resources keeps one record per event (keyed however it tracks
/// event identity) and owns it exclusively, so sharing [`Event`] values never
/// aliases mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleRecord {
    /// Time at which the scheduler actually started the event.
    pub start_time: u64,
    /// Delay between arrival and start.
    pub wait_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_carries_construction_values() {
        let event = Event::new("A", 10, 5);
        assert_eq!(event.process_name(), "A");
        assert_eq!(event.arrival_time(), 10);
        assert_eq!(event.duration(), 5);
    }

    #[test]
    fn events_compare_by_value() {
        assert_eq!(Event::new("A", 10, 5), Event::new("A", 10, 5));
        assert_ne!(Event::new("A", 10, 5), Event::new("B", 10, 5));
        assert_ne!(Event::new("A", 10, 5), Event::new("A", 11, 5));
    }

    #[test]
    fn schedule_record_defaults_to_zero() {
        let record = ScheduleRecord::default();
        assert_eq!(record.start_time, 0);
        assert_eq!(record.wait_time, 0);
    }
}
