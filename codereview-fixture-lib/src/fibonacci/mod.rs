/// Calculate the nth Fibonacci number.
///
/// Indices at or below zero yield 0. Uses plain double recursion, so the cost
/// grows exponentially with `n`.
///
/// There is no overflow handling: F(94) and beyond do not fit in a `u64`, so
/// the addition panics in debug builds and wraps in release builds.
#[must_use]
pub fn calculate_fibonacci(n: i64) -> u64 {
    if n <= 0 {
        0
    } else if n == 1 {
        1
    } else {
        calculate_fibonacci(n - 1) + calculate_fibonacci(n - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(calculate_fibonacci(0), 0);
        assert_eq!(calculate_fibonacci(1), 1);
        assert_eq!(calculate_fibonacci(2), 1);
    }

    #[test]
    fn test_fibonacci_ten() {
        assert_eq!(calculate_fibonacci(10), 55);
    }

    #[test]
    fn test_fibonacci_negative_is_zero() {
        assert_eq!(calculate_fibonacci(-1), 0);
        assert_eq!(calculate_fibonacci(-42), 0);
        assert_eq!(calculate_fibonacci(i64::MIN), 0);
    }

    #[test]
    fn test_fibonacci_sequence_prefix() {
        let seq: Vec<u64> = (0..12).map(calculate_fibonacci).collect();
        assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn test_fibonacci_twenty_five() {
        assert_eq!(calculate_fibonacci(25), 75_025);
    }
}
