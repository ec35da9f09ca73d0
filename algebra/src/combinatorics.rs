//! Factorials, inverse factorials and binomial coefficients.

use crate::field::{Field, ModInt};
use crate::AlgebraError;

/// Tables of `i!` and `(i!)^(-1)` for `0 <= i <= N`.
///
/// Only `(N!)^(-1)` is computed by an actual inversion, the other inverse
/// factorials come from `(i!)^(-1) = ((i+1)!)^(-1) · (i+1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combinatorics<const P: u32> {
    fact: Vec<ModInt<P>>,
    ifact: Vec<ModInt<P>>,
}

impl<const P: u32> Combinatorics<P> {
    /// Builds the tables up to `bound` inclusive.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::TableTooLarge`] if `bound >= P`, since then `bound!`
    /// is zero in the field and has no inverse.
    pub fn new(bound: usize) -> Result<Self, AlgebraError> {
        if bound as u64 >= P as u64 {
            return Err(AlgebraError::TableTooLarge {
                bound,
                modulus: P as u64,
            });
        }

        let mut fact = vec![ModInt::<P>::new(1); bound + 1];
        for i in 2..=bound {
            fact[i] = fact[i - 1] * ModInt::from(i);
        }

        let mut ifact = vec![ModInt::<P>::new(1); bound + 1];
        ifact[bound] = fact[bound].try_inv()?;
        for i in (0..bound).rev() {
            ifact[i] = ifact[i + 1] * ModInt::from(i + 1);
        }

        Ok(Self { fact, ifact })
    }

    /// The largest `n` the tables cover.
    #[inline]
    pub fn bound(&self) -> usize {
        self.fact.len() - 1
    }

    /// Returns `n!`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Self::bound`].
    #[inline]
    pub fn factorial(&self, n: usize) -> ModInt<P> {
        self.fact[self.checked_index(n)]
    }

    /// Returns `(n!)^(-1)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Self::bound`].
    #[inline]
    pub fn inv_factorial(&self, n: usize) -> ModInt<P> {
        self.ifact[self.checked_index(n)]
    }

    /// Returns `C(n, k)`, or zero when `n < 0`, `k < 0` or `k > n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Self::bound`].
    pub fn binomial(&self, n: i64, k: i64) -> ModInt<P> {
        if n < 0 || k < 0 || k > n {
            return ModInt::new(0);
        }
        let (n, k) = (n as usize, k as usize);
        self.factorial(n) * self.ifact[k] * self.ifact[n - k]
    }

    /// Returns `n! / (n-k)!`, the number of ordered selections of `k` out of `n`,
    /// or zero when `n < 0`, `k < 0` or `k > n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Self::bound`].
    pub fn arrangements(&self, n: i64, k: i64) -> ModInt<P> {
        if n < 0 || k < 0 || k > n {
            return ModInt::new(0);
        }
        let (n, k) = (n as usize, k as usize);
        self.factorial(n) * self.ifact[n - k]
    }

    #[inline]
    fn checked_index(&self, n: usize) -> usize {
        assert!(
            n <= self.bound(),
            "{n} is outside the factorial table (bound {})",
            self.bound()
        );
        n
    }
}
