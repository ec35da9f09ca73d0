use crate::AlgebraError;

use super::{gcd, pow_mod, prime_divisors, totient};

/// Check whether `root` generates the whole multiplicative group modulo `modulus`.
///
/// With `φ = φ(modulus)`, `g` is a generator iff `gcd(g, modulus) = 1` and
/// `g^(φ/q) ≠ 1` for every prime `q | φ`.
pub fn is_primitive_root(root: u64, modulus: u64) -> bool {
    if modulus < 2 {
        return false;
    }
    let order = totient(modulus);
    let exponents = cofactor_exponents(order);
    passes(root % modulus, modulus, &exponents)
}

/// Find the smallest primitive root modulo `modulus`.
///
/// For a prime `p` the group order is `p - 1`. Other moduli are accepted
/// too, the search succeeds exactly for `2, 4, p^k` and `2p^k`.
///
/// # Errors
///
/// [`AlgebraError::InvalidModulus`] for `modulus < 2`, and
/// [`AlgebraError::NoPrimitiveRoot`] when no candidate in `1..modulus` works.
pub fn primitive_root(modulus: u64) -> Result<u64, AlgebraError> {
    if modulus < 2 {
        return Err(AlgebraError::InvalidModulus { modulus });
    }

    let order = totient(modulus);
    let exponents = cofactor_exponents(order);

    (1..modulus)
        .find(|&candidate| passes(candidate, modulus, &exponents))
        .ok_or(AlgebraError::NoPrimitiveRoot { modulus })
}

/// `order / q` for each distinct prime `q | order`.
fn cofactor_exponents(order: u64) -> Vec<u64> {
    prime_divisors(order)
        .into_iter()
        .map(|q| order / q)
        .collect()
}

#[inline]
fn passes(candidate: u64, modulus: u64, exponents: &[u64]) -> bool {
    if gcd(candidate, modulus) != 1 {
        return false;
    }
    exponents
        .iter()
        .all(|&e| pow_mod(candidate, e, modulus) != 1)
}
