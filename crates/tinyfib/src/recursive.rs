use crate::error::{Error, Result};
use crate::log;

/// Compute the Fibonacci number at position `n` by direct recursion on the defining recurrence.
///
/// Same contract as [`fibonacci`](crate::fibonacci): 0-indexed positions,
/// [`Error::InvalidArgument`] for negative `n`, positions above 93 outside
/// the supported domain. Runs in exponential time with call depth
/// proportional to `n` — no memoization, every subtree is recomputed.
pub fn fibonacci_recursive(n: i32) -> Result<u64> {
    log::debug!("fibonacci_recursive: n={}", n);

    if n < 0 {
        return Err(Error::InvalidArgument(n));
    }
    Ok(fib(n))
}

// validated at the public boundary, so the recursion itself stays unchecked
fn fib(n: i32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fib(n - 1) + fib(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() -> Result<()> {
        assert_eq!(fibonacci_recursive(0)?, 0);
        assert_eq!(fibonacci_recursive(1)?, 1);
        Ok(())
    }

    #[test]
    fn known_values() -> Result<()> {
        assert_eq!(fibonacci_recursive(2)?, 1);
        assert_eq!(fibonacci_recursive(10)?, 55);
        assert_eq!(fibonacci_recursive(20)?, 6765);
        Ok(())
    }

    #[test]
    fn negative_position_is_rejected() {
        assert_eq!(fibonacci_recursive(-1), Err(Error::InvalidArgument(-1)));
        assert_eq!(fibonacci_recursive(-5), Err(Error::InvalidArgument(-5)));
    }
}
