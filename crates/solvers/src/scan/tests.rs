use approx::assert_relative_eq;

use rootsweep_core::Interval;

use super::{Config, DEFAULT_DOMAIN, MAX_SAMPLES, Scan, ScanError, scan};

fn domain(low: f64, high: f64) -> Interval {
    Interval::new(low, high).expect("finite endpoints")
}

fn config(step: f64) -> Config {
    Config::new(step).expect("valid step")
}

fn cubic(x: f64) -> f64 {
    x.powi(3) - x
}

#[test]
fn samples_landing_on_roots_are_exact() {
    let found = scan(&cubic, domain(-2.0, 2.0), &config(0.5)).expect("should scan");

    assert_eq!(found.exact_roots, vec![-1.0, 0.0, 1.0]);
    assert!(found.intervals.is_empty());
}

#[test]
fn brackets_roots_between_samples() {
    let found = scan(&cubic, domain(-2.0, 2.0), &config(0.3)).expect("should scan");

    assert_eq!(found.intervals.len(), 2);

    let [first, second] = [found.intervals[0], found.intervals[1]];
    assert_relative_eq!(first.low(), -1.1, epsilon = 1e-12);
    assert_relative_eq!(first.high(), -0.8, epsilon = 1e-12);
    assert_relative_eq!(second.low(), -0.2, epsilon = 1e-12);
    assert_relative_eq!(second.high(), 0.1, epsilon = 1e-12);

    // The sample at -2 + 10·0.3 lands on the root at 1.
    assert_eq!(found.exact_roots, vec![1.0]);
}

#[test]
fn every_bracket_has_a_sign_change() {
    let f = |x: f64| (3.0 * x).sin();
    let found = scan(&f, domain(-4.0, 4.0), &config(0.25)).expect("should scan");

    assert!(!found.intervals.is_empty());
    for bracket in &found.intervals {
        assert!(f(bracket.low()) * f(bracket.high()) < 0.0);
        assert_relative_eq!(bracket.width(), 0.25, epsilon = 1e-12);
    }
}

#[test]
fn reversed_domain_scans_the_same() {
    let forward = scan(&cubic, domain(-2.0, 2.0), &config(0.3)).expect("should scan");
    let reversed = scan(&cubic, domain(2.0, -2.0), &config(0.3)).expect("should scan");

    assert_eq!(forward, reversed);
}

#[test]
fn undefined_samples_break_the_chain() {
    // ln is undefined at and below zero and has an exact root at 1.
    let found = scan(&|x: f64| x.ln(), domain(-1.0, 2.0), &config(0.5)).expect("should scan");

    assert_eq!(found.exact_roots, vec![1.0]);
    assert!(found.intervals.is_empty());
}

#[test]
fn no_bracket_across_an_undefined_pole() {
    let found = scan(&|x: f64| 1.0 / x, domain(-1.0, 1.0), &config(0.5)).expect("should scan");

    assert!(found.is_empty());
}

#[test]
fn duplicates_collapse_after_rounding() {
    // Flat near zero: several samples fall below the zero tolerance and
    // round to the same value.
    let f = |x: f64| (x - 0.5).powi(3);
    let coarse = config(1e-4).with_decimals(2).expect("valid decimals");

    let found = scan(&f, domain(0.4, 0.6), &coarse).expect("should scan");

    assert_eq!(found.exact_roots, vec![0.5]);
    assert!(found.intervals.is_empty());
}

#[test]
fn zero_tolerance_is_adjustable() {
    let f = |x: f64| x - 0.01;

    let strict = scan(&f, domain(0.0, 1.0), &config(0.25)).expect("should scan");
    assert!(strict.exact_roots.is_empty());
    assert_eq!(strict.intervals.len(), 1);

    let loose = config(0.25).with_zero_tol(0.1).expect("valid tolerance");
    let found = scan(&f, domain(0.0, 1.0), &loose).expect("should scan");
    assert_eq!(found.exact_roots, vec![0.0]);
    assert!(found.intervals.is_empty());
}

#[test]
fn finds_nothing_without_roots() {
    let found = scan(&|x: f64| x * x + 1.0, domain(-3.0, 3.0), &config(0.1)).expect("should scan");

    assert_eq!(found, Scan::default());
    assert!(found.is_empty());
}

#[test]
fn default_domain_covers_both_signs() {
    let domain = Interval::try_from(DEFAULT_DOMAIN).expect("finite endpoints");
    let found = scan(&|x: f64| x * x - 50.0, domain, &Config::default()).expect("should scan");

    assert_eq!(found.intervals.len(), 2);
    assert!(found.intervals[0].contains(-(50.0_f64.sqrt())));
    assert!(found.intervals[1].contains(50.0_f64.sqrt()));
}

#[test]
fn rejects_degenerate_domain() {
    let point = Interval::point(1.0).expect("finite point");

    assert_eq!(
        scan(&cubic, point, &Config::default()),
        Err(ScanError::DegenerateDomain { x: 1.0 })
    );
}

#[test]
fn rejects_oversized_scans() {
    let result = scan(&cubic, domain(0.0, 1e6), &config(1e-3));

    assert!(matches!(
        result,
        Err(ScanError::TooManySamples { samples }) if samples > MAX_SAMPLES as f64
    ));
}

#[test]
fn repeated_scans_are_identical() {
    let first = scan(&cubic, domain(-2.0, 2.0), &config(0.3)).expect("should scan");
    let second = scan(&cubic, domain(-2.0, 2.0), &config(0.3)).expect("should scan");

    assert_eq!(first, second);
}
