//! Gaussian elimination over a field.
//!
//! Neither routine swaps rows. A zero on the diagonal when it is needed as
//! a pivot is reported as [`AlgebraError::ZeroPivot`], even when a row swap
//! would have rescued the system.

use crate::field::Field;
use crate::AlgebraError;

/// Solves the `n × (n+1)` augmented system `a` in place.
///
/// Forward elimination makes `a` upper triangular, then back substitution
/// leaves `x_i` in the last column of row `i`. The coefficient part is left
/// in its triangular form.
///
/// # Errors
///
/// - [`AlgebraError::DimensionMismatch`] if some row does not have `n + 1` entries.
/// - [`AlgebraError::ZeroPivot`] if a diagonal coefficient is zero.
pub fn gauss_augmented<F: Field>(a: &mut [Vec<F>]) -> Result<(), AlgebraError> {
    let n = a.len();
    for (row, values) in a.iter().enumerate() {
        if values.len() != n + 1 {
            return Err(AlgebraError::DimensionMismatch {
                row,
                columns: values.len(),
                expected: n + 1,
            });
        }
    }

    for i in 0..n {
        let pivot = a[i][i];
        if pivot.is_zero() {
            return Err(AlgebraError::ZeroPivot { row: i });
        }
        let pivot_inv = pivot.try_inv()?;

        let (upper, lower) = a.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        for row in lower.iter_mut() {
            let coeff = row[i] * pivot_inv;
            if coeff.is_zero() {
                continue;
            }
            for (x, &p) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                *x -= p * coeff;
            }
        }
    }

    for i in (0..n).rev() {
        let mut rhs = a[i][n];
        for j in i + 1..n {
            rhs -= a[i][j] * a[j][n];
        }
        a[i][n] = rhs.try_div(a[i][i])?;
    }

    Ok(())
}

/// Solves `a · x = b` in place, the solution ends up in `b`.
///
/// Every pivot clears its column both below and above the diagonal, so `a`
/// ends up diagonal and each `x_i = b_i / a_ii` is independent of the others.
///
/// # Errors
///
/// - [`AlgebraError::DimensionMismatch`] if `a` is not square or `b` has the wrong length.
/// - [`AlgebraError::ZeroPivot`] if a diagonal coefficient is zero.
pub fn gauss<F: Field>(a: &mut [Vec<F>], b: &mut [F]) -> Result<(), AlgebraError> {
    let n = a.len();
    for (row, values) in a.iter().enumerate() {
        if values.len() != n {
            return Err(AlgebraError::DimensionMismatch {
                row,
                columns: values.len(),
                expected: n,
            });
        }
    }
    if b.len() != n {
        return Err(AlgebraError::DimensionMismatch {
            row: n,
            columns: b.len(),
            expected: n,
        });
    }

    for i in 0..n {
        let pivot = a[i][i];
        if pivot.is_zero() {
            return Err(AlgebraError::ZeroPivot { row: i });
        }
        let pivot_inv = pivot.try_inv()?;
        let pivot_row = a[i].clone();
        let pivot_rhs = b[i];

        for j in (0..n).filter(|&j| j != i) {
            let coeff = a[j][i] * pivot_inv;
            if coeff.is_zero() {
                continue;
            }
            for (x, &p) in a[j][i..].iter_mut().zip(&pivot_row[i..]) {
                *x -= p * coeff;
            }
            b[j] -= coeff * pivot_rhs;
        }
    }

    for (i, x) in b.iter_mut().enumerate() {
        *x = x.try_div(a[i][i])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};

    use super::*;
    use crate::field::ModInt;

    type FF = ModInt<1_000_000_007>;

    fn matrix(rows: &[&[i64]]) -> Vec<Vec<FF>> {
        rows.iter()
            .map(|row| row.iter().map(|&v| FF::from(v)).collect())
            .collect()
    }

    #[test]
    fn test_augmented() {
        // x + 2y + 3z = 14, 2x + 5y + 3z = 21, x + 8z = 25
        let mut a = matrix(&[&[1, 2, 3, 14], &[2, 5, 3, 21], &[1, 0, 8, 25]]);
        gauss_augmented(&mut a).unwrap();
        let x: Vec<FF> = a.iter().map(|row| row[3]).collect();
        assert_eq!(x, vec![FF::from(1i64), FF::from(2i64), FF::from(3i64)]);
    }

    #[test]
    fn test_augmented_fractional_solution() {
        // 2x = 1
        let mut a = matrix(&[&[2, 1]]);
        gauss_augmented(&mut a).unwrap();
        assert_eq!(a[0][1] * FF::from(2i64), FF::one());
    }

    #[test]
    fn test_separate_vector() {
        let mut a = matrix(&[&[2, 1, -1], &[-3, -1, 2], &[-2, 1, 2]]);
        let mut b: Vec<FF> = [8i64, -11, -3].into_iter().map(FF::from).collect();
        gauss(&mut a, &mut b).unwrap();
        assert_eq!(b, vec![FF::from(2i64), FF::from(3i64), FF::from(-1i64)]);

        for (i, row) in a.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert_eq!(v.is_zero(), i != j, "a[{i}][{j}] = {v}");
            }
        }
    }

    #[test]
    fn test_zero_pivot() {
        let mut a = matrix(&[&[0, 1, 1], &[1, 0, 1]]);
        assert_eq!(
            gauss_augmented(&mut a),
            Err(AlgebraError::ZeroPivot { row: 0 })
        );

        // singular: second row is twice the first
        let mut a = matrix(&[&[1, 2], &[2, 4]]);
        let mut b = vec![FF::one(), FF::one()];
        assert_eq!(gauss(&mut a, &mut b), Err(AlgebraError::ZeroPivot { row: 1 }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut a = matrix(&[&[1, 2], &[3, 4]]);
        assert_eq!(
            gauss_augmented(&mut a),
            Err(AlgebraError::DimensionMismatch {
                row: 0,
                columns: 2,
                expected: 3
            })
        );

        let mut b = vec![FF::one()];
        assert_eq!(
            gauss(&mut a, &mut b),
            Err(AlgebraError::DimensionMismatch {
                row: 2,
                columns: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_empty_system() {
        let mut a: Vec<Vec<FF>> = Vec::new();
        assert!(gauss_augmented(&mut a).is_ok());
        let mut b: Vec<FF> = Vec::new();
        assert!(gauss(&mut a, &mut b).is_ok());
    }
}
