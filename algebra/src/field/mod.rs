//! Prime fields.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Zero};

use crate::AlgebraError;

#[macro_use]
mod macros;
mod mod_int;

pub use mod_int::{Mod1000000007, Mod998244353, ModInt};

/// A trait defining the algebraic structure of a prime field.
///
/// The operators behave like the mathematical ones, except that dividing by
/// zero panics. Callers that cannot rule out a zero divisor use
/// [`Field::try_inv`] or [`Field::try_div`] instead.
pub trait Field:
    Sized
    + Copy
    + Debug
    + Eq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Inv<Output = Self>
{
    /// The modulus of the field.
    const MODULUS: u64;

    /// Try to calculate the multiplicative inverse of `self`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `self` is zero.
    fn try_inv(self) -> Result<Self, AlgebraError>;

    /// Try to calculate `self / rhs`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    fn try_div(self, rhs: Self) -> Result<Self, AlgebraError> {
        rhs.try_inv().map(|inv| self * inv)
    }

    /// Calculates `self * self`.
    #[inline]
    fn square(self) -> Self {
        self * self
    }
}
