//! Random systems for demonstrations and property checks.

use fastrand::Rng;

use crate::matrix::DenseMatrix;
use crate::vector::DenseVector;

pub fn seeded_rng(seed: u64) -> Rng {
    Rng::with_seed(seed)
}

/// Entries uniform in `[0, n)`.
pub fn random_vector(rng: &mut Rng, n: usize) -> DenseVector<f64> {
    DenseVector::new((0..n).map(|_| n as f64 * rng.f64()).collect())
}

/// `n` rows, each drawn like `random_vector`.
pub fn random_matrix(rng: &mut Rng, n: usize) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::zeros(n, n);
    for i in 0..n {
        m.row_mut(i).copy_from_slice(random_vector(rng, n).as_slice());
    }
    m
}

/// Random matrix with entries in `[-1, 1)` whose diagonal strictly exceeds the
/// absolute sum of the rest of its row. Naive elimination never meets a zero
/// pivot on such a matrix.
pub fn diagonally_dominant_matrix(rng: &mut Rng, n: usize) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::zeros(n, n);
    for i in 0..n {
        let row = m.row_mut(i);
        for v in row.iter_mut() {
            *v = 2.0 * rng.f64() - 1.0;
        }
        let off_diagonal: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        let sign = if rng.bool() { 1.0 } else { -1.0 };
        row[i] = sign * (off_diagonal + 1.0 + rng.f64());
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn test_random_entries_in_range() {
        let mut rng = seeded_rng(7);
        let m = random_matrix(&mut rng, 4);
        assert_eq!(m.dims(), (4, 4));
        assert!(m.data().iter().all(|&v| (0.0..4.0).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_system() {
        let a = random_vector(&mut seeded_rng(42), 5);
        let b = random_vector(&mut seeded_rng(42), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_diagonal_dominance() {
        let mut rng = seeded_rng(3);
        let m = diagonally_dominant_matrix(&mut rng, 6);
        for i in 0..6 {
            let row = m.row(i);
            let off: f64 = (0..6).filter(|&j| j != i).map(|j| row[j].abs()).sum();
            assert!(row[i].abs() > off);
        }
    }
}
