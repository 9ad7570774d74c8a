use std::fmt::Debug;

use gauss_core::{error::Result, ops, DenseMatrix, DenseVector, GaussError, Matrix, RowSlice};
use num_traits::Float;

use super::{check_system, is_zero_pivot};

/// Solves the upper-triangular system `a x = b`, resolving unknowns from the
/// last row to the first.
///
/// Entries below the diagonal of `a` are never read. A zero diagonal entry
/// fails with [`GaussError::BackSubstitutionFailure`] naming its row.
pub fn back_substitute<T: Float + Debug>(
    a: &DenseMatrix<T>,
    b: &DenseVector<T>,
) -> Result<DenseVector<T>> {
    back_substitute_with_tolerance(a, b, T::zero())
}

pub(crate) fn back_substitute_with_tolerance<T: Float + Debug>(
    a: &DenseMatrix<T>,
    b: &DenseVector<T>,
    tolerance: T,
) -> Result<DenseVector<T>> {
    check_system(a, b)?;
    let n = a.rows();
    let mut x = DenseVector::zeros(n);

    for i in (0..n).rev() {
        let tail = RowSlice::tail(i + 1, n);
        let s = b[i] - ops::dot(tail.of(a.row(i)), tail.of(x.as_slice()))?;

        let m = a[(i, i)];
        if is_zero_pivot(m, tolerance) {
            return Err(GaussError::BackSubstitutionFailure { row: i });
        }
        x[i] = s / m;
    }

    Ok(x)
}
