use gauss_core::{error::Result, GaussError, Matrix, Vector};
use num_traits::Float;

pub mod back_substitution;
pub mod classical;
pub mod elimination;

#[derive(Debug, Clone)]
pub struct SolveResult<V: Float, M> {
    pub x: Vec<V>,   // Solution vector
    pub metadata: M, // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm,
/// generic over the Matrix type it supports.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on. Must match `M::Value`.
    type Value: Float + std::fmt::Debug;
    type Metadata: std::fmt::Debug;

    /// Solves the linear system Ax = b for x.
    ///
    /// # Arguments
    ///
    /// * `a` - The coefficient matrix A. Left untouched.
    /// * `b` - The right-hand side vector b.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or a `GaussError`.
    fn solve(&self, a: &M, b: &[Self::Value]) -> Result<SolveResult<Self::Value, Self::Metadata>>;

    fn validate_inputs(&self, a: &M, b: &[Self::Value]) -> Result<()> {
        check_system(a, b)
    }
}

/// Square `a` with `b` matching its rows.
pub(crate) fn check_system<M: Matrix, V: Vector + ?Sized>(a: &M, b: &V) -> Result<()> {
    let b_len = b.len();
    let (rows, cols) = a.dims();
    if !a.is_square() {
        return Err(GaussError::InvalidDimensions(format!(
            "Matrix A must be square (dims: {}x{})",
            rows, cols
        )));
    }
    if rows != b_len {
        return Err(GaussError::InvalidDimensions(format!(
            "Matrix A rows ({}) must match RHS vector b length ({})",
            rows, b_len
        )));
    }
    Ok(())
}

/// With `tolerance == 0` this is exactly `value == 0`.
pub(crate) fn is_zero_pivot<T: Float>(value: T, tolerance: T) -> bool {
    value.abs() <= tolerance
}

// --- Algorithm Struct Definitions ---

/// Gaussian elimination without pivoting, followed by back substitution.
#[derive(Debug, Clone)]
pub struct ClassicalGaussianElimination {
    /// Pivots and diagonal entries with `|v| <= pivot_tolerance` are treated
    /// as zero. The default of 0.0 only rejects exact zeros.
    pub pivot_tolerance: f64,
}

impl Default for ClassicalGaussianElimination {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
        }
    }
}

impl ClassicalGaussianElimination {
    /// Creates a new instance with exact zero-pivot detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new instance that rejects pivots up to `pivot_tolerance` in magnitude.
    pub fn with_params(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }
}
