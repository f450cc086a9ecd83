//! Arrival models that turn fixed parameters into event streams.
//!
//! Each model implements the [`ArrivalProcess`] capability: a named generator
//! that materializes a finite event sequence on demand. The set of models is
//! closed and small:
//!
//! - [`SingletonProcess`]: exactly one event at a fixed time
//! - [`PeriodicProcess`]: N events at a fixed cadence
//! - [`StochasticProcess`]: a horizon-truncated renewal process with
//!   exponential inter-arrival and service times
//!
//! A caller typically holds a `Vec<Box<dyn ArrivalProcess>>`, asks each
//! process for its events, and merges the streams itself; merging and
//! scheduling are outside this crate.

mod periodic;
mod singleton;
mod stochastic;

pub use periodic::PeriodicProcess;
pub use singleton::SingletonProcess;
pub use stochastic::StochasticProcess;

use crate::event::Event;

/// Capability trait for event generation.
///
/// Implementations guarantee:
///
/// - every returned [`Event`] carries `process_name == self.name()`;
/// - the returned sequence is finite and ordered by construction;
/// - each call returns a fresh, independent `Vec` — earlier results are
///   never mutated or invalidated by later calls;
/// - generation never panics or errors for parameters the constructor
///   accepted.
///
/// `generate_events` takes `&mut self` because stochastic implementations
/// advance their samplers between calls. The deterministic models do not
/// mutate and return equal sequences on every call.
pub trait ArrivalProcess {
    /// Name identifying this process, copied into every generated event.
    fn name(&self) -> &str;

    /// Materializes this process's event sequence.
    fn generate_events(&mut self) -> Vec<Event>;
}
