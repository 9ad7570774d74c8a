use std::fmt::Debug;

use gauss_core::{error::Result, ops, DenseMatrix, DenseVector, GaussError, Matrix, RowSlice};
use num_traits::Float;

use super::{check_system, is_zero_pivot};

/// Reduces `a` to upper-triangular form in place, applying the same row
/// operations to `b`.
///
/// Columns are processed left to right without pivoting. A pivot that is
/// exactly zero fails with [`GaussError::EliminationFailure`] carrying the
/// pivot row, even when a row swap would have made the system solvable.
/// On failure `a` and `b` hold the partially eliminated system.
pub fn eliminate<T: Float + Debug>(a: &mut DenseMatrix<T>, b: &mut DenseVector<T>) -> Result<()> {
    eliminate_with_tolerance(a, b, T::zero()).map(|_| ())
}

/// Same as [`eliminate`], treating `|pivot| <= tolerance` as zero.
/// Returns the number of row updates performed.
pub(crate) fn eliminate_with_tolerance<T: Float + Debug>(
    a: &mut DenseMatrix<T>,
    b: &mut DenseVector<T>,
    tolerance: T,
) -> Result<usize> {
    check_system(&*a, &*b)?;
    let n = a.rows();
    let mut row_operations = 0;

    // traverse from the first column to the next-to-last,
    // filling zeros into all elements under the diagonal
    for j in 0..n.saturating_sub(1) {
        let pivot = a[(j, j)];
        if is_zero_pivot(pivot, tolerance) {
            return Err(GaussError::EliminationFailure { row: j });
        }

        let tail = RowSlice::tail(j, n);
        for i in j + 1..n {
            let mult = a[(i, j)] / pivot;
            let (pivot_row, target_row) = a.split_rows_mut(j, i);
            ops::axpy(-mult, tail.of(pivot_row), tail.of_mut(target_row))?;
            // rounding can leave a residue here
            target_row[j] = T::zero();

            let b_j = b[j];
            b[i] = b[i] - mult * b_j;
            row_operations += 1;
        }
    }

    Ok(row_operations)
}
