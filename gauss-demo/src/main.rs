use std::{env, error::Error, fs, path::Path};

use gauss_core::{
    ops::mat_vec,
    random::{random_matrix, random_vector, seeded_rng},
    DenseMatrix, DenseVector,
};
use gauss_lsolver::solve;
use serde::Deserialize;

const DEFAULT_DIMENSIONS: [usize; 3] = [3, 4, 5];

/// A fixed system read with `--system <file.json>`.
#[derive(Debug, Deserialize)]
struct SystemFile {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

#[derive(Debug)]
enum Run {
    Random(Vec<usize>),
    System(String),
}

fn parse_args(args: &[String]) -> Result<Run, Box<dyn Error>> {
    match args {
        [] => Ok(Run::Random(DEFAULT_DIMENSIONS.to_vec())),
        [flag, path] if flag == "--system" => Ok(Run::System(path.clone())),
        [flag] if flag == "--system" => Err("--system needs a JSON file path".into()),
        dims => {
            let dims = dims
                .iter()
                .map(|d| d.parse::<usize>().map_err(|e| format!("invalid dimension {d:?}: {e}")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Run::Random(dims))
        }
    }
}

/// A system together with the outcome of solving it.
struct SolvedSystem {
    a: DenseMatrix<f64>,
    b: DenseVector<f64>,
    x: gauss_core::error::Result<DenseVector<f64>>,
}

impl SolvedSystem {
    fn solve(a: DenseMatrix<f64>, b: DenseVector<f64>) -> Self {
        let x = solve(a.clone(), b.clone());
        Self { a, b, x }
    }
}

/// Prints the system, the solution and `A * x`. Solver failures are logged,
/// not returned.
fn report(system: &SolvedSystem) {
    println!("A = {}", system.a);
    println!("b = {}", system.b);

    match &system.x {
        Ok(x) => {
            println!("classical elim solution is x = {}", x);
            match mat_vec(&system.a, x) {
                Ok(v) => println!(" A * x = {}", v),
                Err(e) => log::error!("{}", e),
            }
        }
        Err(e) => log::error!("{}", e),
    }
}

fn solve_random_system(rng: &mut fastrand::Rng, n: usize) {
    log::info!("Solving random {}x{} system", n, n);
    let a = random_matrix(rng, n);
    let b = random_vector(rng, n);
    report(&SolvedSystem::solve(a, b));
}

/// Reads a JSON system file and solves it. Only I/O, JSON and shape errors
/// are returned as `Err`; the solver outcome is kept in the result.
fn load_and_solve(path: &Path) -> Result<SolvedSystem, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let system: SystemFile = serde_json::from_str(&text)?;
    log::info!("Solving system from {}", path.display());
    let a = DenseMatrix::from_rows(system.a)?;
    Ok(SolvedSystem::solve(a, DenseVector::new(system.b)))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_args(&args)? {
        Run::System(path) => report(&load_and_solve(Path::new(&path))?),
        Run::Random(dims) => {
            let seed = match env::var("GAUSS_SEED") {
                Ok(s) => s.parse::<u64>()?,
                Err(_) => fastrand::u64(..),
            };
            log::info!("Random seed: {}", seed);
            let mut rng = seeded_rng(seed);
            for n in dims {
                solve_random_system(&mut rng, n);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_core::{ops::residual_max_norm, GaussError};
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("systems").join(name)
    }

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_dimensions() {
        match parse_args(&[]).unwrap() {
            Run::Random(dims) => assert_eq!(dims, vec![3, 4, 5]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_explicit_dimensions_and_system_flag() {
        match parse_args(&args(&["2", "7"])).unwrap() {
            Run::Random(dims) => assert_eq!(dims, vec![2, 7]),
            other => panic!("unexpected {other:?}"),
        }
        match parse_args(&args(&["--system", "sys.json"])).unwrap() {
            Run::System(path) => assert_eq!(path, "sys.json"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_args(&args(&["--system"])).is_err());
        assert!(parse_args(&args(&["three"])).is_err());
    }

    #[test]
    fn test_system_file_format() {
        let system: SystemFile =
            serde_json::from_str(r#"{ "a": [[0, 1], [1, 0]], "b": [1, 1] }"#).unwrap();
        assert_eq!(system.a, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(system.b, vec![1.0, 1.0]);
    }

    #[test]
    fn test_golden_system_file_solves() -> Result<(), Box<dyn Error>> {
        let system = load_and_solve(&fixture("golden_3x3.json"))?;
        let x = system.x.as_ref().map_err(|e| e.to_string())?;
        assert!(residual_max_norm(&system.a, x, &system.b)? < 1e-9);
        assert!((x[0] - 6.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_system_file_needing_pivoting_fails_elimination() -> Result<(), Box<dyn Error>> {
        let system = load_and_solve(&fixture("needs_pivoting.json"))?;
        assert_eq!(system.x, Err(GaussError::EliminationFailure { row: 0 }));
        Ok(())
    }

    #[test]
    fn test_missing_system_file_is_an_error() {
        assert!(load_and_solve(&fixture("does_not_exist.json")).is_err());
    }
}
