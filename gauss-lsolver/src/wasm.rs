//! JavaScript bindings, enabled with the `wasm` feature.

use gauss_core::{DenseMatrix, DenseVector, GaussError};
use wasm_bindgen::prelude::*;

// Initialize logging and panic hook for WASM
#[wasm_bindgen(start)]
pub fn wasm_init() {
    // Only run this initialization once.
    static START: std::sync::Once = std::sync::Once::new();
    START.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        log::info!("Gauss solver WASM module initialized.");
    });
}

fn to_js(err: GaussError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Solves an `n`x`n` system given `a` in row-major order.
#[wasm_bindgen(js_name = solveDense)]
pub fn solve_dense(n: usize, a: Vec<f64>, b: Vec<f64>) -> Result<Vec<f64>, JsValue> {
    let a = DenseMatrix::new(n, n, a).map_err(to_js)?;
    crate::solve(a, DenseVector::new(b))
        .map(DenseVector::into_vec)
        .map_err(to_js)
}
