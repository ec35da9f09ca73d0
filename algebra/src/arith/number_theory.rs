//! Trial-division helpers and modular arithmetic on `u64`.

/// Calculates `a * b (mod modulus)` with a 128-bit intermediate.
#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Calculates `base^exp (mod modulus)`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    if exp == 0 {
        return 1 % modulus;
    }
    let mut base = base % modulus;
    if base < 2 {
        return base;
    }
    let mut result = 1 % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Calculates `value^(-1) (mod modulus)` by Fermat's little theorem.
///
/// # Correctness
///
/// - `modulus` is prime
/// - `value` is not divisible by `modulus`
///
/// # Panics
///
/// Panics if `modulus < 2`.
#[inline]
pub fn inv_mod(value: u64, modulus: u64) -> u64 {
    assert!(modulus >= 2, "modulus must be at least 2");
    pow_mod(value, modulus - 2, modulus)
}

/// Greatest common divisor, `gcd(0, 0) = 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Euler's totient `φ(n)`, with `φ(0) = 0`.
pub fn totient(mut n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut result = 1;
    let mut p = 2;
    while p <= n / p {
        if n % p == 0 {
            let mut power = 1;
            n /= p;
            while n % p == 0 {
                power *= p;
                n /= p;
            }
            result *= (p - 1) * power;
        }
        p += 1;
    }
    if n > 1 {
        result *= n - 1;
    }
    result
}

/// The distinct prime divisors of `n` in ascending order.
pub fn prime_divisors(mut n: u64) -> Vec<u64> {
    let mut divisors = Vec::new();
    let mut p = 2;
    while p <= n / p {
        if n % p == 0 {
            divisors.push(p);
            n /= p;
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        divisors.push(n);
    }
    divisors
}
