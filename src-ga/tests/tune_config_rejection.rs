use std::sync::atomic::{AtomicUsize, Ordering};

use gatuner::{
    ConfigError, GaParameters, ParameterSpace, Params, TunerConfig, TunerError, TunerOptions, infallible,
    tune, tune_config,
};
use serde_json::json;

#[test]
fn test_missing_cp_is_rejected_before_any_evaluation() {
    let calls = AtomicUsize::new(0);
    let eval = infallible(|_: &Params| {
        calls.fetch_add(1, Ordering::SeqCst);
        1.0
    });
    let doc = json!({
        "ga_parameters": {"pop_size": 5, "fscale": 0.5, "gmax": 3, "direction": "max"},
        "model_parameters": {"x": [null, "float"]},
        "boundaries": {"x": [0, 10]}
    });

    let err = TunerConfig::from_json(&doc).unwrap_err();
    assert!(matches!(err, ConfigError::MissingParameter { ref name } if name == "cp"));
    assert_eq!(err.parameter(), Some("cp"));
    assert!(err.to_string().contains("cp"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_bound_is_rejected() {
    let err = ParameterSpace::from_json(&json!({"a": [null, "float"]}), &json!({})).unwrap_err();
    assert!(matches!(err, ConfigError::MissingBound { ref name } if name == "a"));
}

#[test]
fn test_config_document_errors() {
    let cases = [
        (
            json!({"ga_parameters": {"pop_size": 5, "fscale": 0.5, "gmax": 3, "cp": 0.5, "direction": "up"},
                   "model_parameters": {"x": [null, "float"]}, "boundaries": {"x": [0, 1]}}),
            "direction",
        ),
        (
            json!({"ga_parameters": {"pop_size": 5, "fscale": 0.5, "gmax": 3, "cp": 1.5, "direction": "max"},
                   "model_parameters": {"x": [null, "float"]}, "boundaries": {"x": [0, 1]}}),
            "cp",
        ),
        (
            json!({"ga_parameters": {"pop_size": 5, "fscale": 0.5, "gmax": 3, "cp": 0.5, "direction": "max", "seed": 1},
                   "model_parameters": {"x": [null, "float"]}, "boundaries": {"x": [0, 1]}}),
            "seed",
        ),
        (json!({"model_parameters": {"x": [null, "float"]}, "boundaries": {"x": [1, 1]}}), "x"),
        (json!({"model_parameters": {"x": [null, "float"]}, "boundaries": {"x": [0]}}), "x"),
        (json!({"model_parameters": {"x": ["a", "int"]}}), "x"),
        (json!({"model_parameters": {"x": [null, "complex"]}, "boundaries": {"x": [0, 1]}}), "x"),
    ];
    for (doc, param) in cases {
        let err = TunerConfig::from_json(&doc).unwrap_err();
        assert_eq!(err.parameter(), Some(param), "{} -> {}", doc, err);
    }
}

#[test]
fn test_small_population_is_rejected_before_any_evaluation() {
    let calls = AtomicUsize::new(0);
    let eval = infallible(|_: &Params| {
        calls.fetch_add(1, Ordering::SeqCst);
        1.0
    });
    let space = ParameterSpace::builder().float("x", 0.0, 1.0).build().unwrap();
    let ga = GaParameters { pop_size: 4, ..GaParameters::default() };

    let err = tune(ga, space, &eval, TunerOptions::default()).unwrap_err();
    assert!(matches!(err, TunerError::Config(ConfigError::OutOfRange { ref name, .. }) if name == "pop_size"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    let doc = json!({
        "ga_parameters": {"pop_size": 6, "fscale": 0.5, "gmax": 4, "cp": 0.9, "direction": "min"},
        "model_parameters": {"x": [null, "float"], "penalty": ["l2", "str"]},
        "boundaries": {"x": [-1, 1]},
        "seed": 5,
        "verbosity": 0
    });
    std::fs::write(&path, doc.to_string()).unwrap();

    let config = TunerConfig::from_file(&path).unwrap();
    let eval = infallible(|p: &Params| p.get_f64("x").map(|x| x * x).unwrap_or(0.0));
    let report = tune_config(config, &eval).unwrap();
    assert_eq!(report.generations, 4);
    assert_eq!(report.best_params.get_str("penalty"), Some("l2"));
}
