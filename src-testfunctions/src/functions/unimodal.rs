//! Unimodal scoring functions

use ndarray::Array1;

/// Sphere function - N-dimensional, minimized
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum()
}

/// Negated sphere - N-dimensional, maximized
/// Global maximum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn negated_sphere(x: &Array1<f64>) -> f64 {
    -sphere(x)
}

/// Identity on the first coordinate, maximized at the upper bound
pub fn linear(x: &Array1<f64>) -> f64 {
    x.first().copied().unwrap_or(0.0)
}

/// Rosenbrock function - N-dimensional, minimized
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}
