//! Dense polynomials over a field, and interpolation through sample points.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, SliceIndex};

use num_traits::{One, Zero};

use crate::field::Field;
use crate::linear::gauss_augmented;
use crate::AlgebraError;

/// Represents a polynomial where coefficients are elements of a specified field `F`.
///
/// The `i`-th element of `data` is the coefficient of `x^i`.
///
/// # Examples
/// ```
/// use algebra::{field::Mod998244353, polynomial::Polynomial};
///
/// // 1 + 2x + 3x^2
/// let poly = Polynomial::new(vec![1u32, 2, 3].into_iter().map(Mod998244353::new).collect());
/// assert_eq!(poly.evaluate(Mod998244353::new(2)), Mod998244353::new(17));
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Polynomial<F: Field> {
    data: Vec<F>,
}

impl<F: Field> From<Vec<F>> for Polynomial<F> {
    #[inline]
    fn from(value: Vec<F>) -> Self {
        Self { data: value }
    }
}

impl<F: Field> Polynomial<F> {
    /// Creates a new [`Polynomial<F>`].
    #[inline]
    pub fn new(poly: Vec<F>) -> Self {
        Self { data: poly }
    }

    /// Finds the unique polynomial of degree below `points.len()` through `points`.
    ///
    /// Builds the Vandermonde system `Σ_j c_j · x_i^j = y_i` and solves it
    /// with [`gauss_augmented`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroPivot`] when the system is degenerate, which
    /// happens when two points share an `x`.
    pub fn interpolate(points: &[(F, F)]) -> Result<Self, AlgebraError> {
        let n = points.len();

        let mut system: Vec<Vec<F>> = points
            .iter()
            .map(|&(x, y)| {
                let mut row = Vec::with_capacity(n + 1);
                let mut power = F::one();
                for _ in 0..n {
                    row.push(power);
                    power *= x;
                }
                row.push(y);
                row
            })
            .collect();

        gauss_augmented(&mut system)?;

        Ok(Self {
            data: system.into_iter().map(|row| row[n]).collect(),
        })
    }

    /// Drop self, and return the data
    #[inline]
    pub fn data(self) -> Vec<F> {
        self.data
    }

    /// Get the coefficient counts of polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator that allows reading each value or coefficient of the polynomial.
    #[inline]
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Evaluates the polynomial at `x`, accumulating `c_i · x^i` with a running power.
    pub fn evaluate(&self, x: F) -> F {
        let mut power = F::one();
        let mut result = F::zero();
        for &coeff in &self.data {
            result += coeff * power;
            power *= x;
        }
        result
    }
}

impl<F: Field, I: SliceIndex<[F]>> IndexMut<I> for Polynomial<F> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut *self.data, index)
    }
}

impl<F: Field, I: SliceIndex<[F]>> Index<I> for Polynomial<F> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.data, index)
    }
}
