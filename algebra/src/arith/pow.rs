use std::ops::Mul;

use num_traits::One;

/// Calculates `base^exp` with `O(log exp)` multiplications.
///
/// Works for any type with a multiplication and a unit, so it serves field
/// values, plain integers and matrices alike.
pub fn pow<T>(mut base: T, mut exp: u64) -> T
where
    T: Clone + One + Mul<Output = T>,
{
    let mut result = T::one();
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base.clone();
        }
        exp >>= 1;
        if exp > 0 {
            base = base.clone() * base;
        }
    }
    result
}
