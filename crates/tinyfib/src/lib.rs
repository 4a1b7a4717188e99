#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! A tiny Fibonacci calculator.
//!
//! Two strategies for the same sequence: [`fibonacci`] iterates a pair of
//! rolling accumulators in linear time, [`fibonacci_recursive`] spells out
//! the recurrence directly and pays for it with exponential time. Both
//! reject negative positions and agree everywhere else.

mod error;
pub use error::*;

mod iterative;
pub use iterative::fibonacci;

mod recursive;
pub use recursive::fibonacci_recursive;

#[cfg(feature = "log")]
pub(crate) use log;

#[cfg(not(feature = "log"))]
pub(crate) mod log {
    macro_rules! debug( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
}
