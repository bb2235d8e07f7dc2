//! Scoring functions for exercising the GA tuner
//!
//! Each function maps a vector of hyperparameter values to a score. The registry
//! describes the search box, which coordinates are integers, and whether the
//! score is maximized, so a command line driver can build a search space from a
//! function name alone.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use gatuner_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let meta = get_scorer_metadata("mock_cv_accuracy").unwrap();
//! assert!(meta.maximize);
//! ```

use ndarray::Array1;
use std::collections::BTreeMap;

pub mod functions;
pub use functions::*;

/// Scoring function signature
pub type ScorerFn = fn(&Array1<f64>) -> f64;

/// Search box and optimum of a scoring function
#[derive(Debug, Clone)]
pub struct ScorerMetadata {
    pub name: String,
    /// (lower, upper) per coordinate
    pub bounds: Vec<(f64, f64)>,
    /// Coordinates that take integer values
    pub integer: Vec<bool>,
    /// true when larger scores are better
    pub maximize: bool,
    /// Location and value of the optimum
    pub optimum: (Vec<f64>, f64),
    pub description: String,
    pub scorer: ScorerFn,
}

fn entry(
    name: &str,
    bounds: Vec<(f64, f64)>,
    integer: Vec<bool>,
    maximize: bool,
    optimum: (Vec<f64>, f64),
    description: &str,
    scorer: ScorerFn,
) -> (String, ScorerMetadata) {
    (
        name.to_string(),
        ScorerMetadata {
            name: name.to_string(),
            bounds,
            integer,
            maximize,
            optimum,
            description: description.to_string(),
            scorer,
        },
    )
}

/// Metadata for every registered scorer, keyed by name
pub fn get_all_scorers() -> BTreeMap<String, ScorerMetadata> {
    BTreeMap::from([
        entry(
            "sphere",
            vec![(-5.12, 5.12); 2],
            vec![false; 2],
            false,
            (vec![0.0, 0.0], 0.0),
            "2D unimodal bowl, minimized",
            sphere,
        ),
        entry(
            "negated_sphere",
            vec![(-5.12, 5.12); 2],
            vec![false; 2],
            true,
            (vec![0.0, 0.0], 0.0),
            "2D unimodal dome, maximized",
            negated_sphere,
        ),
        entry(
            "linear",
            vec![(0.0, 10.0)],
            vec![false],
            true,
            (vec![10.0], 10.0),
            "1D identity, maximized at the upper bound",
            linear,
        ),
        entry(
            "rosenbrock",
            vec![(-2.048, 2.048); 2],
            vec![false; 2],
            false,
            (vec![1.0, 1.0], 0.0),
            "2D curved valley, minimized",
            rosenbrock,
        ),
        entry(
            "rastrigin",
            vec![(-5.12, 5.12); 2],
            vec![false; 2],
            false,
            (vec![0.0, 0.0], 0.0),
            "2D multimodal, minimized",
            rastrigin,
        ),
        entry(
            "ackley",
            vec![(-32.768, 32.768); 2],
            vec![false; 2],
            false,
            (vec![0.0, 0.0], 0.0),
            "2D multimodal, minimized",
            ackley,
        ),
        entry(
            "noisy_sphere",
            vec![(-5.12, 5.12); 2],
            vec![false; 2],
            false,
            (vec![0.0, 0.0], 0.0),
            "2D bowl with evaluation noise, minimized",
            noisy_sphere,
        ),
        entry(
            "mock_cv_accuracy",
            vec![(-3.0, 3.0), (10.0, 200.0)],
            vec![false, true],
            true,
            (vec![0.5, 120.0], MOCK_CV_BEST_ACCURACY),
            "classifier accuracy over (log10 C, trees), maximized",
            mock_cv_accuracy,
        ),
    ])
}

pub fn get_scorer_metadata(name: &str) -> Option<ScorerMetadata> {
    get_all_scorers().remove(name)
}

pub fn get_scorer(name: &str) -> Option<ScorerFn> {
    get_scorer_metadata(name).map(|m| m.scorer)
}

pub fn scorer_names() -> Vec<String> {
    get_all_scorers().into_keys().collect()
}
