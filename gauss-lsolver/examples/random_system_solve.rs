use gauss_core::{
    ops::residual_max_norm,
    random::{diagonally_dominant_matrix, random_vector, seeded_rng},
};
use gauss_lsolver::{ClassicalGaussianElimination, DenseVector, SolveAlgorithm};
use std::time::Instant;

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let n = 200;
    log::info!("Setting up {}x{} diagonally dominant matrix A and random vector b...", n, n);

    let mut rng = seeded_rng(2024);
    let a = diagonally_dominant_matrix(&mut rng, n);
    let b = random_vector(&mut rng, n);

    let algorithm = ClassicalGaussianElimination::new();
    let start_time = Instant::now();
    let result = algorithm.solve(&a, b.as_slice());
    let duration = start_time.elapsed();

    match result {
        Ok(result) => {
            let x = DenseVector::new(result.x);
            log::info!("Solver finished successfully!");
            log::info!("  Row operations: {}", result.metadata.row_operations);
            log::info!("  Smallest pivot: {:?}", result.metadata.smallest_pivot);
            match residual_max_norm(&a, &x, &b) {
                Ok(residual) => log::info!("  Max residual: {:.6e}", residual),
                Err(e) => log::error!("Residual check failed: {}", e),
            }
            log::info!("  Time elapsed: {:?}", duration);
        }
        Err(e) => {
            log::error!("Solver failed: {}", e);
        }
    }
}
