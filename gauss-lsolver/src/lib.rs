//! `gauss-lsolver`: classical Gaussian elimination for dense linear systems.
//!
//! Solves `Ax = b` by forward elimination without pivoting followed by back
//! substitution. A zero pivot is reported as an error rather than worked
//! around, so systems that need row swaps fail with
//! [`GaussError::EliminationFailure`].

pub mod algorithms;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use algorithms::{
    back_substitution::back_substitute,
    classical::{solve, solve_in_place, ClassicalEliminationMetadata},
    elimination::eliminate,
    ClassicalGaussianElimination, SolveAlgorithm, SolveResult,
};

// Re-export from gauss_core
pub use gauss_core::{DenseMatrix, DenseVector, GaussError, Matrix, RowSlice, Vector};
