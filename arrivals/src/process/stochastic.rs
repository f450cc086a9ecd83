//! Stochastic renewal arrival model.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ArrivalResult;
use crate::event::Event;
use crate::process::ArrivalProcess;
use crate::random::{validated_mean, ExpSampler, VariateSource};

/// Generates a horizon-truncated renewal process.
///
/// Inter-arrival gaps and event durations are independent draws from two
/// exponential samplers. Generation walks a cursor from `first_arrival`
/// forward: while the cursor is strictly below `end_time`, it emits one event
/// at the cursor and advances by the next gap. The horizon bounds arrivals,
/// not completions, so the last event's duration may run past `end_time`.
///
/// Continuous samples are truncated toward zero to integer time units; a gap
/// or duration of 0 is permitted, which is why successive arrival times are
/// non-decreasing rather than strictly increasing. The loop has no iteration
/// cap — it terminates almost surely for any positive mean, but a mean so
/// small that gaps round to 0 almost always is a caller error, not something
/// this type defends against.
///
/// The process owns its two samplers and advances them on every call, so
/// calling [`generate_events`](ArrivalProcess::generate_events) twice on one
/// instance continues the underlying random streams and yields different
/// sequences. Reproducibility comes from rebuilding the process with the same
/// seed, as [`StochasticProcess::seeded`] does.
#[derive(Debug, Clone)]
pub struct StochasticProcess<D = ExpSampler, A = ExpSampler> {
    name: String,
    first_arrival: u64,
    end_time: u64,
    duration_sampler: D,
    interarrival_sampler: A,
}

impl StochasticProcess {
    /// Creates a process with two deterministic ChaCha8 sampler streams.
    ///
    /// Both streams derive from the same seed but are independent (distinct
    /// ChaCha stream identifiers), so duration and inter-arrival draws never
    /// correlate. Rejects a zero, negative, or non-finite mean.
    pub fn seeded(
        name: impl Into<String>,
        mean_duration: f64,
        mean_interarrival_time: f64,
        first_arrival: u64,
        end_time: u64,
        seed: u64,
    ) -> ArrivalResult<Self> {
        let mean_duration = validated_mean("mean_duration", mean_duration)?;
        let mean_interarrival_time =
            validated_mean("mean_interarrival_time", mean_interarrival_time)?;

        let mut duration_rng = ChaCha8Rng::seed_from_u64(seed);
        duration_rng.set_stream(0);
        let mut interarrival_rng = ChaCha8Rng::seed_from_u64(seed);
        interarrival_rng.set_stream(1);

        Ok(Self::with_samplers(
            name,
            ExpSampler::new(mean_duration, duration_rng)?,
            ExpSampler::new(mean_interarrival_time, interarrival_rng)?,
            first_arrival,
            end_time,
        ))
    }
}

impl<D: VariateSource, A: VariateSource> StochasticProcess<D, A> {
    /// Creates a process over caller-supplied variate sources.
    ///
    /// This is the injection seam: tests substitute scripted sources to
    /// verify the generation loop, truncation, and horizon check without
    /// depending on randomness quality.
    pub fn with_samplers(
        name: impl Into<String>,
        duration_sampler: D,
        interarrival_sampler: A,
        first_arrival: u64,
        end_time: u64,
    ) -> Self {
        Self {
            name: name.into(),
            first_arrival,
            end_time,
            duration_sampler,
            interarrival_sampler,
        }
    }

    /// Exclusive upper bound on generated arrival times.
    pub fn end_time(&self) -> u64 {
        self.end_time
    }
}

impl<D: VariateSource, A: VariateSource> ArrivalProcess for StochasticProcess<D, A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let mut arrival_time = self.first_arrival;

        while arrival_time < self.end_time {
            // Truncation toward zero; the sample is non-negative, so this
            // matches the floor semantics of the deterministic models.
            let duration = self.duration_sampler.next_sample() as u64;
            tracing::trace!(
                process = %self.name,
                arrival_time,
                duration,
                "emitting renewal event"
            );
            events.push(Event::new(self.name.clone(), arrival_time, duration));

            let gap = self.interarrival_sampler.next_sample() as u64;
            arrival_time += gap;
        }

        tracing::debug!(
            process = %self.name,
            events = events.len(),
            end_time = self.end_time,
            "renewal generation complete"
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Variate source replaying a fixed script of samples.
    struct Script {
        samples: Vec<f64>,
        next: usize,
    }

    impl Script {
        fn new(samples: Vec<f64>) -> Self {
            Self { samples, next: 0 }
        }
    }

    impl VariateSource for Script {
        fn next_sample(&mut self) -> f64 {
            let sample = self.samples[self.next];
            self.next += 1;
            sample
        }
    }

    #[test]
    fn scripted_run_truncates_and_stops_at_horizon() {
        let durations = Script::new(vec![2.9, 0.4]);
        let gaps = Script::new(vec![3.2, 9.9]);
        let mut process = StochasticProcess::with_samplers("S", durations, gaps, 0, 5);

        let events = process.generate_events();

        // 2.9 truncates to 2 and 0.4 to 0; the cursor moves 0 -> 3 -> 12,
        // and 12 fails the strict horizon check before a third event.
        assert_eq!(
            events,
            vec![Event::new("S", 0, 2), Event::new("S", 3, 0)]
        );
    }

    #[test]
    fn first_arrival_at_horizon_yields_empty_without_sampling() {
        // Empty scripts panic if consulted, proving the loop body never runs.
        let durations = Script::new(vec![]);
        let gaps = Script::new(vec![]);
        let mut process = StochasticProcess::with_samplers("S", durations, gaps, 50, 50);

        assert!(process.generate_events().is_empty());
    }

    #[test]
    fn first_arrival_past_horizon_yields_empty() {
        let durations = Script::new(vec![]);
        let gaps = Script::new(vec![]);
        let mut process = StochasticProcess::with_samplers("S", durations, gaps, 100, 50);

        assert!(process.generate_events().is_empty());
    }

    #[test]
    fn zero_gaps_stack_arrivals_at_one_instant() {
        let durations = Script::new(vec![1.0, 1.0, 1.0]);
        let gaps = Script::new(vec![0.7, 0.2, 5.0]);
        let mut process = StochasticProcess::with_samplers("S", durations, gaps, 0, 2);

        let events = process.generate_events();

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.arrival_time() == 0));
    }

    #[test]
    fn last_event_may_run_past_horizon() {
        // Arrival 4 is under the horizon of 5 even though 4 + 100 is not:
        // the horizon bounds arrivals, never completions.
        let durations = Script::new(vec![100.9]);
        let gaps = Script::new(vec![10.0]);
        let mut process = StochasticProcess::with_samplers("S", durations, gaps, 4, 5);

        assert_eq!(process.generate_events(), vec![Event::new("S", 4, 100)]);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut first = StochasticProcess::seeded("C", 3.0, 4.0, 0, 200, 42).unwrap();
        let mut second = StochasticProcess::seeded("C", 3.0, 4.0, 0, 200, 42).unwrap();

        assert_eq!(first.generate_events(), second.generate_events());
    }

    #[test]
    fn seeded_worked_example_past_horizon_is_empty() {
        let mut process = StochasticProcess::seeded("C", 3.0, 4.0, 100, 50, 0).unwrap();
        assert!(process.generate_events().is_empty());
    }

    #[test]
    fn seeded_arrivals_respect_horizon_and_order() {
        for seed in [1, 42, 12345] {
            let mut process = StochasticProcess::seeded("C", 3.0, 4.0, 10, 500, seed).unwrap();
            let events = process.generate_events();

            let mut previous = 0;
            for event in &events {
                assert!(event.arrival_time() < 500);
                assert!(event.arrival_time() >= previous);
                previous = event.arrival_time();
            }
        }
    }

    #[test]
    fn repeated_calls_continue_the_random_streams() {
        let mut process = StochasticProcess::seeded("C", 3.0, 4.0, 0, 100, 7).unwrap();
        let first = process.generate_events();
        let second = process.generate_events();

        // Both runs honor the contract even though the streams advanced.
        for events in [&first, &second] {
            assert!(events.iter().all(|e| e.arrival_time() < 100));
            assert!(events.iter().all(|e| e.process_name() == "C"));
        }
    }

    #[test]
    fn rejects_unusable_means() {
        assert!(StochasticProcess::seeded("C", 0.0, 4.0, 0, 50, 0).is_err());
        assert!(StochasticProcess::seeded("C", 3.0, -1.0, 0, 50, 0).is_err());
        assert!(StochasticProcess::seeded("C", f64::NAN, 4.0, 0, 50, 0).is_err());
    }
}
