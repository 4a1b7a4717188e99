use crate::error::{Error, Result};
use crate::log;

/// Compute the Fibonacci number at position `n` by iterating a pair of rolling accumulators.
///
/// Positions are 0-indexed, so `fibonacci(0) == 0` and `fibonacci(1) == 1`.
/// Runs in linear time and constant extra space. Returns
/// [`Error::InvalidArgument`] when `n` is negative. Positions above 93
/// overflow a `u64` and are outside the supported domain.
pub fn fibonacci(n: i32) -> Result<u64> {
    log::debug!("fibonacci: n={}", n);

    if n < 0 {
        return Err(Error::InvalidArgument(n));
    }
    if n <= 1 {
        return Ok(n as u64);
    }

    let mut last: u64 = 0;
    let mut curr: u64 = 1;
    for _ in 2..=n {
        let next = last + curr;
        last = curr;
        curr = next;
    }
    Ok(curr)
}
