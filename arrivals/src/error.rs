use thiserror::Error;

/// Errors raised when a generator is constructed with unusable parameters.
///
/// Validation happens once, at construction. Generation itself never fails:
/// any process built successfully can call
/// [`generate_events`](crate::ArrivalProcess::generate_events) without an
/// error path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    /// A mean handed to an exponential sampler was zero, negative, or not finite.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositiveMean {
        /// Name of the offending constructor parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// A type alias for `Result<T, InvalidParameter>`.
pub type ArrivalResult<T> = Result<T, InvalidParameter>;
