use std::fmt::Debug;

use gauss_core::{error::Result, DenseMatrix, DenseVector, Matrix};
use log::{debug, warn};
use num_traits::{Float, NumCast};

use super::{
    back_substitution::{back_substitute, back_substitute_with_tolerance},
    elimination::{eliminate, eliminate_with_tolerance},
    ClassicalGaussianElimination, SolveAlgorithm, SolveResult,
};

/// Solves `a x = b` by classical Gaussian elimination.
///
/// Takes the system by value: the caller's matrix and vector are only consumed
/// if moved in, so clone them first to keep the originals. Either solver
/// failure is returned unchanged.
pub fn solve<T: Float + Debug>(mut a: DenseMatrix<T>, mut b: DenseVector<T>) -> Result<DenseVector<T>> {
    solve_in_place(&mut a, &mut b)
}

/// Like [`solve`], but leaves the eliminated triangular system in `a` and `b`.
pub fn solve_in_place<T: Float + Debug>(
    a: &mut DenseMatrix<T>,
    b: &mut DenseVector<T>,
) -> Result<DenseVector<T>> {
    eliminate(a, b)?;
    back_substitute(a, b)
}

/// True when the pivot spread exceeds what `T` can resolve.
pub(crate) fn pivots_near_singular<T: Float>(smallest: T, largest: T) -> bool {
    smallest <= largest * T::epsilon()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalEliminationMetadata<T> {
    pub dimension: usize,
    /// Scaled row updates applied during forward elimination.
    pub row_operations: usize,
    /// Smallest `|A(i, i)|` of the triangular system, `None` for an empty system.
    pub smallest_pivot: Option<T>,
}

impl<T: Float + Debug> SolveAlgorithm<DenseMatrix<T>> for ClassicalGaussianElimination {
    type Value = T;
    type Metadata = ClassicalEliminationMetadata<T>;

    fn solve(
        &self,
        a: &DenseMatrix<T>,
        b: &[T],
    ) -> Result<SolveResult<Self::Value, Self::Metadata>> {
        self.validate_inputs(a, b)?;

        let n = a.rows();
        let tolerance = <T as NumCast>::from(self.pivot_tolerance)
            .unwrap_or_else(T::zero)
            .max(T::zero());
        debug!(
            "Classical elimination on {}x{} system (pivot tolerance {:?})",
            n, n, tolerance
        );

        let mut a = a.clone();
        let mut b = DenseVector::new(b.to_vec());
        let row_operations = eliminate_with_tolerance(&mut a, &mut b, tolerance)?;
        let x = back_substitute_with_tolerance(&a, &b, tolerance)?;

        let diagonal = (0..n).map(|i| a[(i, i)].abs());
        let smallest_pivot = diagonal.clone().reduce(T::min);
        let largest_pivot = diagonal.reduce(T::max);
        if let (Some(smallest), Some(largest)) = (smallest_pivot, largest_pivot) {
            if pivots_near_singular(smallest, largest) {
                warn!(
                    "Pivot ratio {:?} / {:?} is below machine epsilon, solution may be inaccurate",
                    smallest, largest
                );
            }
        }
        debug!("Classical elimination finished after {} row operations", row_operations);

        Ok(SolveResult {
            x: x.into_vec(),
            metadata: ClassicalEliminationMetadata {
                dimension: n,
                row_operations,
                smallest_pivot,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_core::GaussError;

    #[test]
    fn test_solve_one_by_one() {
        let a = DenseMatrix::from_rows(vec![vec![5.0]]).unwrap();
        let x = solve(a, DenseVector::new(vec![10.0])).unwrap();
        assert_eq!(x.as_slice(), &[2.0]);
    }

    #[test]
    fn test_solve_in_place_keeps_triangular_system() {
        let mut a = DenseMatrix::from_rows(vec![vec![2.0, 1.0], vec![4.0, 5.0]]).unwrap();
        let mut b = DenseVector::new(vec![3.0, 9.0]);
        let x = solve_in_place(&mut a, &mut b).unwrap();
        assert_eq!(x.as_slice(), &[1.0, 1.0]);
        assert_eq!(a.row(1), &[0.0, 3.0]);
        assert_eq!(b.as_slice(), &[3.0, 3.0]);
    }

    #[test]
    fn test_algorithm_reports_metadata() {
        let a = DenseMatrix::from_rows(vec![vec![2.0, 1.0], vec![4.0, 5.0]]).unwrap();
        let result = ClassicalGaussianElimination::new().solve(&a, &[3.0, 9.0]).unwrap();
        assert_eq!(result.x, vec![1.0, 1.0]);
        assert_eq!(
            result.metadata,
            ClassicalEliminationMetadata {
                dimension: 2,
                row_operations: 1,
                smallest_pivot: Some(2.0),
            }
        );
        // input matrix is untouched
        assert_eq!(a[(1, 0)], 4.0);
    }

    #[test]
    fn test_algorithm_tolerance_is_opt_in() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0 + 1e-15]]).unwrap();
        let b = [2.0, 2.0];
        assert!(ClassicalGaussianElimination::default().solve(&a, &b).is_ok());
        let err = ClassicalGaussianElimination::with_params(1e-12)
            .solve(&a, &b)
            .unwrap_err();
        assert_eq!(err, GaussError::BackSubstitutionFailure { row: 1 });
    }

    #[test]
    fn test_nearly_singular_system_reports_tiny_pivot() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 1.0 + f64::EPSILON]]).unwrap();
        let result = ClassicalGaussianElimination::new().solve(&a, &[2.0, 2.0]).unwrap();
        assert_eq!(result.x, vec![2.0, 0.0]);
        assert_eq!(result.metadata.smallest_pivot, Some(f64::EPSILON));
        assert!(pivots_near_singular(f64::EPSILON, 1.0));
    }

    #[test]
    fn test_well_conditioned_pivots_are_not_flagged() {
        assert!(!pivots_near_singular(2.0, 3.0));
        assert!(!pivots_near_singular(1e-3f32, 1.0));
    }

    #[test]
    fn test_algorithm_on_f32() {
        let a = DenseMatrix::from_rows(vec![vec![4.0f32, 1.0], vec![1.0, 3.0]]).unwrap();
        let result = ClassicalGaussianElimination::new().solve(&a, &[1.0, 2.0]).unwrap();
        let expected = [1.0f32 / 11.0, 7.0 / 11.0];
        for (got, want) in result.x.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}
