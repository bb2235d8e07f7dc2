//! Surrogates for model metrics
//!
//! They mimic the score surface of a cross-validated classifier: bounded,
//! maximized, flat near the optimum and optionally noisy across folds.

use ndarray::Array1;
use rand::Rng;

/// Best reachable accuracy of [`mock_cv_accuracy`]
pub const MOCK_CV_BEST_ACCURACY: f64 = 0.95;

/// Accuracy-like score of two hyperparameters, maximized
///
/// - `x[0]`: log10 of a regularization strength, best at 0.5
/// - `x[1]`: an integer tree count, best at 120
///
/// Global maximum: f(x) = 0.95 at x = (0.5, 120)
/// Bounds: x_0 in [-3, 3], x_1 in [10, 200]
pub fn mock_cv_accuracy(x: &Array1<f64>) -> f64 {
    let log_c = x.first().copied().unwrap_or(0.0);
    let trees = x.get(1).copied().unwrap_or(120.0);
    let penalty = 0.02 * (log_c - 0.5).powi(2) + 1e-4 * ((trees - 120.0) / 10.0).powi(2);
    (MOCK_CV_BEST_ACCURACY - penalty).clamp(0.0, 1.0)
}

/// Sphere with uniform noise in [-0.01, 0.01), minimized
///
/// Two calls at the same point usually disagree, like two cross-validation runs.
pub fn noisy_sphere(x: &Array1<f64>) -> f64 {
    noisy_sphere_with(x, &mut rand::rng())
}

pub fn noisy_sphere_with<R: Rng + ?Sized>(x: &Array1<f64>, rng: &mut R) -> f64 {
    crate::sphere(x) + rng.random_range(-0.01..0.01)
}
