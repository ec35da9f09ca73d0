//! Divisor counting by trial division.

/// Number of divisors of a value together with the work spent finding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DivisorCount {
    /// Number of positive divisors.
    pub count: u64,
    /// Trial-division steps taken, one per candidate and one per extra division.
    pub iterations: u64,
}

/// Counts the positive divisors of `x`.
///
/// Every prime `p` found by trial division up to `√x` is divided out
/// completely, its multiplicity `m` contributes a factor `m + 1`. A leftover
/// `x > 1` is a prime and doubles the count.
///
/// # Panics
///
/// Panics if `x` is zero.
pub fn count_divisors(mut x: u64) -> DivisorCount {
    assert!(x > 0, "zero has infinitely many divisors");

    let mut count = 1;
    let mut iterations = 0;
    let mut p = 2;
    while p <= x / p {
        iterations += 1;
        if x % p == 0 {
            let mut power = 1;
            x /= p;
            while x % p == 0 {
                iterations += 1;
                power += 1;
                x /= p;
            }
            count *= power + 1;
        }
        p += 1;
    }
    if x > 1 {
        count *= 2;
    }

    DivisorCount { count, iterations }
}

/// Counts divisors of every input on the calling thread.
pub fn count_all_sequential(input: &[u64]) -> Vec<u64> {
    input.iter().map(|&x| count_divisors(x).count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(x: u64) -> u64 {
        (1..=x).filter(|d| x % d == 0).count() as u64
    }

    #[test]
    fn test_small_values() {
        assert_eq!(count_divisors(1).count, 1);
        assert_eq!(count_divisors(2).count, 2);
        assert_eq!(count_divisors(6).count, 4);
        assert_eq!(count_divisors(17).count, 2);
        assert_eq!(count_divisors(28).count, 6);
        assert_eq!(count_divisors(360).count, 24);
    }

    #[test]
    fn test_against_naive() {
        for x in 1..2000 {
            assert_eq!(count_divisors(x).count, naive(x), "x = {x}");
        }
    }

    #[test]
    fn test_iterations() {
        // 12: p = 2 divides (one extra division), p = 3 stops the loop since 3 > 3 / 3
        assert_eq!(
            count_divisors(12),
            DivisorCount {
                count: 6,
                iterations: 2
            }
        );
        assert_eq!(count_divisors(1).iterations, 0);
        // prime 101 tries p = 2..=10
        assert_eq!(count_divisors(101).iterations, 9);
    }

    #[test]
    fn test_large_values() {
        // 2^62
        assert_eq!(count_divisors(1 << 62).count, 63);
        // 10^18 = 2^18 · 5^18
        assert_eq!(count_divisors(1_000_000_000_000_000_000).count, 19 * 19);
        // 2^64 - 1 = 3 · 5 · 17 · 257 · 641 · 65537 · 6700417, the loop must not overflow
        assert_eq!(count_divisors(u64::MAX).count, 128);
    }

    #[test]
    #[should_panic(expected = "infinitely many divisors")]
    fn test_zero() {
        count_divisors(0);
    }
}
