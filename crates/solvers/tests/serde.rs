#![cfg(feature = "serde")]

use approx::assert_relative_eq;

use rootsweep_core::Interval;
use rootsweep_solvers::{Criterion, RootResult, bisection, regula_falsi, roots::Solver};

#[test]
fn root_result_survives_json() {
    let f = |x: f64| x * x - 2.0;
    let interval = Interval::new(0.0, 2.0).expect("finite endpoints");

    let result = bisection::solve_unobserved(&f, interval, &bisection::Config::default())
        .expect("should solve");

    let json = serde_json::to_string(&result).expect("should serialize");
    let back: RootResult = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back.status, result.status);
    assert_eq!(back.method, result.method);
    assert_eq!(back.iterations, result.iterations);
    assert_eq!(back.trace.len(), result.trace.len());
    assert_relative_eq!(back.root, result.root, max_relative = 1e-15);

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["status"], "Converged");
    assert_eq!(value["method"], "Bisection");
    assert_eq!(value["trace"].as_array().map(Vec::len), Some(result.iterations));
}

#[test]
fn solver_choice_reads_from_json() {
    let json = r#"{
        "RegulaFalsi": {
            "tol": 1e-8,
            "max_iters": 80,
            "criterion": "Either",
            "slope_tol": 1e-14
        }
    }"#;

    let solver: Solver = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(
        solver,
        Solver::RegulaFalsi(regula_falsi::Config {
            tol: 1e-8,
            max_iters: 80,
            criterion: Criterion::Either,
            slope_tol: 1e-14,
        })
    );
}
