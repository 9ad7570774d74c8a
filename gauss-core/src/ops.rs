//! Slice-level kernels shared by the solvers and by solution checks.

use std::fmt::Debug;

use num_traits::Float;

use crate::error::{GaussError, Result};
use crate::matrix::DenseMatrix;
use crate::traits::{Matrix, Vector};
use crate::vector::DenseVector;

fn check_lengths(op: &str, x: usize, y: usize) -> Result<()> {
    if x != y {
        return Err(GaussError::InvalidDimensions(format!(
            "{} operands differ in length ({} != {})",
            op, x, y
        )));
    }
    Ok(())
}

/// `y := alpha * x + y`.
pub fn axpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) -> Result<()> {
    check_lengths("axpy", x.len(), y.len())?;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = alpha * xi + *yi;
    }
    Ok(())
}

/// Dot product of two equal-length slices. Zero for empty input.
pub fn dot<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    check_lengths("dot", x.len(), y.len())?;
    Ok(x.iter().zip(y).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// Computes `A * x`.
pub fn mat_vec<T: Float + Debug>(a: &DenseMatrix<T>, x: &DenseVector<T>) -> Result<DenseVector<T>> {
    if a.cols() != x.len() {
        return Err(GaussError::InvalidDimensions(format!(
            "Matrix columns ({}) must match vector length ({})",
            a.cols(),
            x.len()
        )));
    }
    let values = (0..a.rows())
        .map(|i| dot(a.row(i), x.as_slice()))
        .collect::<Result<Vec<T>>>()?;
    Ok(DenseVector::new(values))
}

/// Largest absolute component of `A * x - b`.
pub fn residual_max_norm<T: Float + Debug>(
    a: &DenseMatrix<T>,
    x: &DenseVector<T>,
    b: &DenseVector<T>,
) -> Result<T> {
    let ax = mat_vec(a, x)?;
    check_lengths("residual", ax.len(), b.len())?;
    Ok(ax
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc.max((l - r).abs())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axpy() {
        let mut y = vec![1.0, 1.0, 1.0];
        axpy(-2.0, &[1.0, 2.0, 3.0], &mut y).unwrap();
        assert_eq!(y, vec![-1.0, -3.0, -5.0]);
    }

    #[test]
    fn test_axpy_length_mismatch() {
        let mut y = vec![1.0];
        assert!(matches!(
            axpy(1.0, &[1.0, 2.0], &mut y),
            Err(GaussError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_dot_of_empty_slices_is_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(dot(&empty, &empty).unwrap(), 0.0);
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
    }

    #[test]
    fn test_mat_vec_and_residual() {
        let a = DenseMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let x = DenseVector::new(vec![1.0, 3.0]);
        let ax = mat_vec(&a, &x).unwrap();
        assert_eq!(ax.as_slice(), &[5.0, 10.0]);

        let b = DenseVector::new(vec![5.0, 9.5]);
        assert_eq!(residual_max_norm(&a, &x, &b).unwrap(), 0.5);
    }

    #[test]
    fn test_mat_vec_rejects_mismatched_vector() {
        let a: DenseMatrix<f64> = DenseMatrix::zeros(2, 3);
        let x = DenseVector::zeros(2);
        assert!(mat_vec(&a, &x).is_err());
    }
}
