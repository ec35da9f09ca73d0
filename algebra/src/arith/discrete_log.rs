use crate::AlgebraError;

use super::{inv_mod, mul_mod, pow_mod};

/// Solve `root^x ≡ target (mod modulus)` with baby-step giant-step.
///
/// Baby steps store `target * root^(-i)` for `i < k`, giant steps store
/// `root^(j*k)` for `j < ⌈modulus / k⌉`, where `k = ⌊√modulus⌋`. Both tables
/// are sorted and every giant step is looked up among the baby steps. A
/// match gives `x = j*k + i`, which is checked before it is returned.
///
/// Runs in `O(√modulus · log modulus)` time and `O(√modulus)` memory.
///
/// # Correctness
///
/// - `modulus` is prime, the inverse of `root` is taken by Fermat's little theorem.
///
/// # Errors
///
/// [`AlgebraError::InvalidModulus`] for `modulus < 2`, and
/// [`AlgebraError::NoDiscreteLog`] when `target` is not a power of `root`.
pub fn discrete_log(root: u64, target: u64, modulus: u64) -> Result<u64, AlgebraError> {
    if modulus < 2 {
        return Err(AlgebraError::InvalidModulus { modulus });
    }

    let root = root % modulus;
    let target = target % modulus;
    let not_found = AlgebraError::NoDiscreteLog {
        base: root,
        target,
        modulus,
    };

    if target == 1 {
        return Ok(0);
    }
    if root == 0 || target == 0 {
        return Err(not_found);
    }

    let step = floor_sqrt(modulus).max(1);

    let root_inv = inv_mod(root, modulus);
    let mut baby: Vec<(u64, u64)> = Vec::with_capacity(step as usize);
    let mut value = target;
    for i in 0..step {
        baby.push((value, i));
        value = mul_mod(value, root_inv, modulus);
    }

    let giant_count = modulus.div_ceil(step);
    let root_step = pow_mod(root, step, modulus);
    let mut giant: Vec<(u64, u64)> = Vec::with_capacity(giant_count as usize);
    let mut value = 1;
    for j in 0..giant_count {
        giant.push((value, j * step));
        value = mul_mod(value, root_step, modulus);
    }

    baby.sort_unstable();
    giant.sort_unstable();

    for &(value, giant_exponent) in &giant {
        let pos = baby.partition_point(|&(v, _)| v < value);
        match baby.get(pos) {
            Some(&(v, baby_exponent)) if v == value => {
                let exponent = giant_exponent + baby_exponent;
                if pow_mod(root, exponent, modulus) == target {
                    return Ok(exponent);
                }
            }
            _ => continue,
        }
    }

    Err(not_found)
}

fn floor_sqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_floor_sqrt() {
        assert_eq!(floor_sqrt(0), 0);
        assert_eq!(floor_sqrt(1), 1);
        assert_eq!(floor_sqrt(15), 3);
        assert_eq!(floor_sqrt(16), 4);
        assert_eq!(floor_sqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_small_field() {
        let p = 13;
        let g = 2;
        for e in 0..p - 1 {
            let y = pow_mod(g, e, p);
            let x = discrete_log(g, y, p).unwrap();
            assert_eq!(pow_mod(g, x, p), y);
        }
    }

    #[test]
    fn test_random_exponent() {
        let p = 998_244_353;
        let g = 3;
        let mut rng = thread_rng();
        let e = rng.gen_range(0..p - 1);
        let y = pow_mod(g, e, p);

        let x = discrete_log(g, y, p).unwrap();
        assert_eq!(pow_mod(g, x, p), y);
        assert_eq!(x % (p - 1), e % (p - 1));
    }

    #[test]
    fn test_not_reachable() {
        // 4 has order 3 modulo 7 and only reaches {1, 2, 4}.
        assert_eq!(
            discrete_log(4, 3, 7),
            Err(AlgebraError::NoDiscreteLog {
                base: 4,
                target: 3,
                modulus: 7
            })
        );
        assert!(discrete_log(3, 0, 7).is_err());
        assert!(discrete_log(0, 5, 7).is_err());
    }

    #[test]
    fn test_trivial_cases() {
        assert_eq!(discrete_log(5, 1, 7), Ok(0));
        assert_eq!(discrete_log(5, 8, 7), Ok(0));
        assert_eq!(discrete_log(3, 3, 7), Ok(1));
        assert_eq!(
            discrete_log(3, 1, 1),
            Err(AlgebraError::InvalidModulus { modulus: 1 })
        );
    }
}
