#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Modular arithmetic toolkit: prime fields, factorial tables, linear
//! systems, interpolation, primitive roots and discrete logarithms.

pub mod arith;
pub mod combinatorics;
pub mod field;
pub mod linear;
pub mod polynomial;

mod error;

pub use combinatorics::Combinatorics;
pub use error::AlgebraError;
pub use field::{Field, Mod1000000007, Mod998244353, ModInt};
