//! Fibonacci numbers extended to negative indices.

/// Returns `F(n)` for any integer `n`, or `None` if it does not fit in an `i64`.
///
/// `F(0) = 0`, `F(1) = 1` and `F(n) = F(n-1) + F(n-2)` everywhere, which for
/// negative indices gives `F(-m) = (-1)^(m+1) · F(m)`.
///
/// ```
/// use algos::fibonacci::fibonacci;
///
/// assert_eq!(fibonacci(10), Some(55));
/// assert_eq!(fibonacci(-10), Some(-55));
/// assert_eq!(fibonacci(-9), Some(34));
/// ```
pub fn fibonacci(n: i64) -> Option<i64> {
    let m = n.unsigned_abs();
    if m == 0 {
        return Some(0);
    }

    // (F(k-1), F(k)) for k = 1..=m
    let (mut prev, mut current) = (0i64, 1i64);
    for _ in 1..m {
        (prev, current) = (current, prev.checked_add(current)?);
    }

    if n < 0 && m % 2 == 0 {
        Some(-current)
    } else {
        Some(current)
    }
}
