//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when dividing by the zero element of a field.
    #[error("Division by zero in the field with modulus {modulus}!")]
    DivisionByZero {
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when gaussian elimination meets a zero pivot.
    #[error("Zero pivot at row {row}, the system has no unique solution")]
    ZeroPivot {
        /// The row whose diagonal coefficient vanished.
        row: usize,
    },
    /// Error that occurs when a linear system does not have the expected shape.
    #[error("Row {row} has {columns} columns, expected {expected}")]
    DimensionMismatch {
        /// The offending row, or the row count when the vector length is wrong.
        row: usize,
        /// The actual number of columns.
        columns: usize,
        /// The expected number of columns.
        expected: usize,
    },
    /// Error that occurs when a factorial table would contain `0 = p!`.
    #[error("factorial table bound {bound} must be less than the modulus {modulus}")]
    TableTooLarge {
        /// The requested bound.
        bound: usize,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when the given modulus has no primitive root.
    #[error("There is no primitive root with the modulus {modulus}!")]
    NoPrimitiveRoot {
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when no exponent maps `base` to `target`.
    #[error("No x satisfies {base}^x = {target} (mod {modulus})")]
    NoDiscreteLog {
        /// The base of the power.
        base: u64,
        /// The value being searched for.
        target: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when a modulus is too small to define a group.
    #[error("The modulus {modulus} is not valid here")]
    InvalidModulus {
        /// The modulus.
        modulus: u64,
    },
}
