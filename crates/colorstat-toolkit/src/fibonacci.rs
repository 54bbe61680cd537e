/// Sums the first `n` Fibonacci numbers, `F(0) + F(1) + ... + F(n - 1)`.
///
/// The sequence starts `F(0) = 0`, `F(1) = 1`. The sum over zero terms is 0.
/// Returns `None` if the sum does not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use colorstat_toolkit::fibonacci::sum_first_n_fibonacci;
///
/// assert_eq!(sum_first_n_fibonacci(0), Some(0));
/// assert_eq!(sum_first_n_fibonacci(10), Some(88));
/// assert_eq!(sum_first_n_fibonacci(50), Some(20_365_011_073));
/// ```
#[must_use]
pub fn sum_first_n_fibonacci(n: u32) -> Option<u128> {
    // The sum equals F(n + 1) - 1, so it overflows exactly when the last
    // `next` computed below does.
    let (mut current, mut next) = (0_u128, 1_u128);
    let mut sum = 0_u128;
    for _ in 0..n {
        sum = sum.checked_add(current)?;
        (current, next) = (next, current.checked_add(next)?);
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sums() {
        assert_eq!(sum_first_n_fibonacci(0), Some(0));
        assert_eq!(sum_first_n_fibonacci(1), Some(0));
        assert_eq!(sum_first_n_fibonacci(2), Some(1));
        assert_eq!(sum_first_n_fibonacci(3), Some(2));
        assert_eq!(sum_first_n_fibonacci(10), Some(88));
    }

    #[test]
    fn test_fifty_terms() {
        assert_eq!(sum_first_n_fibonacci(50), Some(20_365_011_073));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(sum_first_n_fibonacci(150).is_some());
        assert_eq!(sum_first_n_fibonacci(500), None);
    }
}
