//! # Gauss Core Library
//!
//! Dense matrix and vector types, row slices and slice kernels used by the
//! elimination solvers, plus random system generation.

pub mod error;
pub mod matrix;
pub mod ops;
pub mod random;
pub mod slice;
pub mod traits;
pub mod vector;

// Re-export public types
pub use error::GaussError;
pub use matrix::DenseMatrix;
pub use slice::RowSlice;
pub use traits::{Matrix, Vector};
pub use vector::DenseVector;
