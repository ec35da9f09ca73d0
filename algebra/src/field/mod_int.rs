use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Pow, Zero};

use crate::arith::pow;
use crate::AlgebraError;

use super::Field;

/// An element of the prime field `Z_P`, stored as its residue in `[0, P)`.
///
/// Every operation returns a new, reduced value. `P` has to be a prime for
/// division to be meaningful, and must lie in `2..2^31` so that a sum of two
/// residues fits in a `u32`.
///
/// The derived ordering compares residues. It exists so values can be
/// sorted and searched, it carries no meaning in the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModInt<const P: u32>(u32);

/// The field modulo `998244353 = 119·2^23 + 1`.
pub type Mod998244353 = ModInt<998_244_353>;

/// The field modulo `10^9 + 7`.
pub type Mod1000000007 = ModInt<1_000_000_007>;

impl<const P: u32> ModInt<P> {
    const VALID_MODULUS: () = assert!(P >= 2 && P < (1 << 31), "modulus must be in 2..2^31");

    /// Creates a new [`ModInt<P>`] from `value (mod P)`.
    #[inline]
    pub const fn new(value: u32) -> Self {
        let () = Self::VALID_MODULUS;
        Self(value % P)
    }

    /// Returns the residue in `[0, P)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    fn add_reduce(self, rhs: Self) -> Self {
        let sum = self.0 + rhs.0;
        Self(if sum >= P { sum - P } else { sum })
    }

    #[inline]
    fn sub_reduce(self, rhs: Self) -> Self {
        Self(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + P - rhs.0
        })
    }

    #[inline]
    fn mul_reduce(self, rhs: Self) -> Self {
        Self(((self.0 as u64 * rhs.0 as u64) % P as u64) as u32)
    }

    #[inline]
    fn div_reduce(self, rhs: Self) -> Self {
        self.mul_reduce(rhs.inv())
    }
}

impl<const P: u32> fmt::Display for ModInt<P> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_from_unsigned!(ModInt: u8, u16, u32, u64, u128, usize);
impl_from_signed!(ModInt: i8, i16, i32, i64, i128, isize);

impl<const P: u32> Zero for ModInt<P> {
    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u32> One for ModInt<P> {
    #[inline]
    fn one() -> Self {
        Self(1)
    }
}

impl_binary_ops!(impl Add::add, AddAssign::add_assign for ModInt with add_reduce);
impl_binary_ops!(impl Sub::sub, SubAssign::sub_assign for ModInt with sub_reduce);
impl_binary_ops!(impl Mul::mul, MulAssign::mul_assign for ModInt with mul_reduce);
impl_binary_ops!(impl Div::div, DivAssign::div_assign for ModInt with div_reduce);

impl<const P: u32> Neg for ModInt<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(if self.0 == 0 { 0 } else { P - self.0 })
    }
}

impl<const P: u32> Inv for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    fn inv(self) -> Self::Output {
        match self.try_inv() {
            Ok(inv) => inv,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const P: u32> Pow<u64> for ModInt<P> {
    type Output = Self;

    #[inline]
    fn pow(self, rhs: u64) -> Self::Output {
        pow(self, rhs)
    }
}

impl<const P: u32> Sum for ModInt<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, const P: u32> Sum<&'a Self> for ModInt<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<const P: u32> Product for ModInt<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, const P: u32> Product<&'a Self> for ModInt<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<const P: u32> Field for ModInt<P> {
    const MODULUS: u64 = P as u64;

    #[inline]
    fn try_inv(self) -> Result<Self, AlgebraError> {
        if self.is_zero() {
            return Err(AlgebraError::DivisionByZero { modulus: P as u64 });
        }
        Ok(pow(self, P as u64 - 2))
    }
}
