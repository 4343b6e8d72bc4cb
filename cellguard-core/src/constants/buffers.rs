//! Buffer Sizes
//!
//! The evaluation path never allocates; events go into fixed-capacity
//! storage sized from these constants.

/// Number of monitored parameters (temperature, SoC, charge rate).
pub const PARAMETER_COUNT: usize = 3;

/// Upper bound on events a single parameter can produce in one evaluation.
///
/// A non-finite reading yields two violations. A finite reading yields at
/// most one violation plus one warning (only when the margin is wider than
/// the range itself).
pub const MAX_EVENTS_PER_PARAMETER: usize = 2;

/// Capacity of a [`Verdict`](crate::Verdict) event list.
pub const MAX_EVENTS: usize = PARAMETER_COUNT * MAX_EVENTS_PER_PARAMETER;
