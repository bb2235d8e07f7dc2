use gatuner::{
    Direction, EvolutionEngine, GaParameters, ParameterSpace, Params, Population, Reporter,
    TunerOptions, Updating, infallible, tune,
};
use gatuner_testfunctions::{mock_cv_accuracy, sphere};
use ndarray::Array1;

#[derive(Default)]
struct Snapshots {
    generations: Vec<(usize, Population)>,
}

impl Reporter for Snapshots {
    fn population(&mut self, generation: usize, population: &Population) {
        self.generations.push((generation, population.clone()));
    }
}

fn identity_x(p: &Params) -> f64 {
    p.get_f64("x").unwrap_or(f64::NAN)
}

#[test]
fn test_identity_on_unit_box() {
    let ga = GaParameters { pop_size: 5, fscale: 0.5, gmax: 3, cp: 1.0, direction: Direction::Max };
    let space = ParameterSpace::builder().float("x", 0.0, 10.0).build().unwrap();
    let options = TunerOptions { seed: Some(42), verbosity: 0, ..Default::default() };
    let eval = infallible(identity_x);

    let mut engine = EvolutionEngine::new(space, ga, &options, &eval).unwrap();
    let mut snapshots = Snapshots::default();
    let report = engine.run_with(&mut snapshots, None).unwrap();

    assert_eq!(report.generations, 3);
    assert_eq!(report.nfev, 15);
    assert_eq!(report.history.len(), 2);
    assert_eq!(snapshots.generations.len(), 2);

    // winner scores never decrease
    let max = &report.history.max_scores;
    assert!(max.windows(2).all(|w| w[1] >= w[0]));

    let x = report.best_params.get_f64("x").unwrap();
    assert!((0.0..=10.0).contains(&x));
    assert_eq!(x, report.best_score);

    let last = engine.population().unwrap();
    let best_reachable = last.iter().map(|m| m.score).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(report.best_score, best_reachable);
    for m in last.iter() {
        let x = m.params.get_f64("x").unwrap();
        assert!((0.0..=10.0).contains(&x));
    }
}

#[test]
fn test_same_seed_same_run() {
    let run = || {
        let ga = GaParameters { pop_size: 8, fscale: 0.7, gmax: 6, cp: 0.8, direction: Direction::Max };
        let space = ParameterSpace::builder().float("x", 0.0, 10.0).int("n", 1, 50).build().unwrap();
        let options = TunerOptions { seed: Some(7), verbosity: 0, ..Default::default() };
        let eval = infallible(|p: &Params| identity_x(p) + p.get_f64("n").unwrap_or(0.0) / 100.0);
        tune(ga, space, &eval, options).unwrap()
    };
    let (a, b) = (run(), run());
    assert_eq!(a.best_params, b.best_params);
    assert_eq!(a.history, b.history);
}

#[test]
fn test_mock_cv_accuracy_with_statics() {
    let ga = GaParameters { pop_size: 20, fscale: 0.6, gmax: 40, cp: 0.7, direction: Direction::Max };
    let space = ParameterSpace::builder()
        .float("log_c", -3.0, 3.0)
        .int("n_estimators", 10, 200)
        .fixed("solver", "liblinear")
        .fixed("max_iter", 100i64)
        .build()
        .unwrap();
    let options = TunerOptions { seed: Some(3), verbosity: 0, ..Default::default() };
    let eval = infallible(|p: &Params| {
        let x = Array1::from(vec![
            p.get_f64("log_c").unwrap_or(0.0),
            p.get_f64("n_estimators").unwrap_or(0.0),
        ]);
        mock_cv_accuracy(&x)
    });

    let report = tune(ga, space, &eval, options).unwrap();
    assert!(report.best_score > 0.93, "best {}", report.best_score);
    assert_eq!(report.best_params.get_str("solver"), Some("liblinear"));
    assert_eq!(report.best_params.get_i64("max_iter"), Some(100));
    assert!(report.best_params.get_i64("n_estimators").is_some());
}

#[test]
fn test_deferred_updating_minimizes_sphere() {
    let ga = GaParameters { pop_size: 30, fscale: 0.5, gmax: 60, cp: 0.9, direction: Direction::Min };
    let space = ParameterSpace::builder().float("a", -5.12, 5.12).float("b", -5.12, 5.12).build().unwrap();
    let options = TunerOptions {
        seed: Some(11),
        verbosity: 0,
        updating: Updating::Deferred,
        ..Default::default()
    };
    let eval = infallible(|p: &Params| {
        let x = Array1::from(vec![p.get_f64("a").unwrap_or(0.0), p.get_f64("b").unwrap_or(0.0)]);
        sphere(&x)
    });

    let report = tune(ga, space, &eval, options).unwrap();
    assert!(report.best_score < 1e-2, "best {}", report.best_score);
    let min = &report.history.min_scores;
    assert!(min.windows(2).all(|w| w[1] <= w[0]));
}
