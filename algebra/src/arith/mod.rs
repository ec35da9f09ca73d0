//! Define arithmetic operations over plain integers.

mod discrete_log;
mod number_theory;
mod pow;
mod prim_root;

pub use discrete_log::discrete_log;
pub use number_theory::{gcd, inv_mod, mul_mod, pow_mod, prime_divisors, totient};
pub use pow::pow;
pub use prim_root::{is_primitive_root, primitive_root};
