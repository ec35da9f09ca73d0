macro_rules! impl_binary_ops {
    (impl $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident for $FieldName:ident with $method:ident) => {
        impl<const P: u32> $Op<Self> for $FieldName<P> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl<const P: u32> $Op<&Self> for $FieldName<P> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: &Self) -> Self::Output {
                self.$method(*rhs)
            }
        }

        impl<const P: u32> $OpAssign<Self> for $FieldName<P> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.$method(rhs);
            }
        }

        impl<const P: u32> $OpAssign<&Self> for $FieldName<P> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Self) {
                *self = self.$method(*rhs);
            }
        }
    };
}

macro_rules! impl_from_unsigned {
    ($FieldName:ident: $($T:ty),+) => {
        $(
            impl<const P: u32> From<$T> for $FieldName<P> {
                #[inline]
                fn from(value: $T) -> Self {
                    let () = Self::VALID_MODULUS;
                    Self((value as u128 % P as u128) as u32)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($FieldName:ident: $($T:ty),+) => {
        $(
            impl<const P: u32> From<$T> for $FieldName<P> {
                #[inline]
                fn from(value: $T) -> Self {
                    let () = Self::VALID_MODULUS;
                    Self((value as i128).rem_euclid(P as i128) as u32)
                }
            }
        )+
    };
}
