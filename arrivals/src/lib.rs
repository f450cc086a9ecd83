//! # Arrivals
//!
//! Arrival-stream generators for discrete-event simulation inputs.
//!
//! The crate turns fixed process parameters into timestamped event streams:
//! sequences of (process name, arrival time, duration) records produced by
//! three arrival models — deterministic single-shot, deterministic periodic,
//! and stochastic renewal with exponential inter-arrival and service times.
//!
//! Key properties:
//! - **Reproducible**: stochastic generation runs over seeded ChaCha8
//!   streams, so the same seed produces identical event sequences
//! - **Injectable randomness**: generators pull samples through the
//!   [`VariateSource`] seam, so tests can script the exact control flow
//! - **Synchronous**: one call to [`ArrivalProcess::generate_events`] runs
//!   to completion with no I/O and returns a fully materialized `Vec`
//!
//! Scheduling the merged stream against resources, persistence, and
//! visualization are all downstream concerns; this crate only produces the
//! inputs.
//!
//! ## Quick start
//!
//! ```
//! use arrivals::{ArrivalProcess, PeriodicProcess, SingletonProcess, StochasticProcess};
//!
//! # fn main() -> Result<(), arrivals::InvalidParameter> {
//! let mut processes: Vec<Box<dyn ArrivalProcess>> = vec![
//!     Box::new(SingletonProcess::new("setup", 5, 10)),
//!     Box::new(PeriodicProcess::new("poll", 2, 10, 0, 3)),
//!     Box::new(StochasticProcess::seeded("requests", 3.0, 4.0, 0, 100, 42)?),
//! ];
//!
//! for process in &mut processes {
//!     let events = process.generate_events();
//!     assert!(events.iter().all(|e| e.process_name() == process.name()));
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Error types for generator construction.
pub mod error;
/// Event records produced by arrival processes.
pub mod event;
/// Arrival models and the generation capability trait.
pub mod process;
/// Exponential random-variate sampling.
pub mod random;

pub use error::{ArrivalResult, InvalidParameter};
pub use event::{Event, ScheduleRecord};
pub use process::{ArrivalProcess, PeriodicProcess, SingletonProcess, StochasticProcess};
pub use random::{ExpSampler, VariateSource};
