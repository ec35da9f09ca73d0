#![deny(missing_docs)]

//! Small contest helpers: exhaustive enumerators, binary lifting on trees
//! and Fibonacci numbers over all integer indices.

pub mod brute;
pub mod fibonacci;
pub mod jumps;

mod error;

pub use error::JumpsError;
