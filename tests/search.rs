//! Integration tests for the golden-section search engine.

use unimodal::{Direction, Error, GoldenSection};

/// Inverse golden ratio, (sqrt(5) - 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

#[test]
fn minimizes_known_quadratic() {
    // Minimize f(x) = (x - 2)^2 + 1 on [-5, 5].
    // Optimal: x = 2, f(2) = 1.
    let result = GoldenSection::new()
        .tol(1e-6)
        .minimize(|x| (x - 2.0).powi(2) + 1.0, -5.0, 5.0)
        .expect("search should succeed");

    assert!(
        (result.x - 2.0).abs() < 1e-6,
        "x_opt {} should be within tolerance of 2",
        result.x
    );
    assert!(
        (result.value - 1.0).abs() < 1e-9,
        "f_opt {} should be close to 1",
        result.value
    );
}

#[test]
fn maximizes_concave_function() {
    // Maximize f(x) = -(x - 1)^2 + 3 on [-4, 4].
    // Optimal: x = 1, f(1) = 3.
    let result = GoldenSection::new()
        .tol(1e-6)
        .maximize(|x| -(x - 1.0).powi(2) + 3.0, -4.0, 4.0)
        .expect("search should succeed");

    assert!((result.x - 1.0).abs() < 1e-6);
    assert!((result.value - 3.0).abs() < 1e-9);
}

#[test]
fn direction_symmetry() {
    // Minimizing f and maximizing -f take identical branches, so they land
    // on the same point with values of opposite sign.
    let f = |x: f64| (x - 2.0).powi(2) + 1.0;
    let engine = GoldenSection::new().tol(1e-6);

    let min = engine.minimize(f, -5.0, 5.0).unwrap();
    let max = engine.maximize(|x| -f(x), -5.0, 5.0).unwrap();

    assert!((min.x - max.x).abs() < 1e-9);
    assert!((min.value + max.value).abs() < 1e-12);
    assert_eq!(min.iterations, max.iterations);
}

#[test]
fn invalid_interval_performs_zero_evaluations() {
    let mut calls = 0usize;
    let err = GoldenSection::new()
        .minimize(
            |x| {
                calls += 1;
                x
            },
            5.0,
            -5.0,
        )
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInterval { .. }));
    assert_eq!(calls, 0, "no evaluation may happen before the bracket check");
}

#[test]
fn one_evaluation_per_iteration() {
    // Total evaluations = iterations + 2: two to seed the interior points,
    // then exactly one per narrowing step.
    let mut calls = 0usize;
    let result = GoldenSection::new()
        .tol(1e-8)
        .minimize(
            |x| {
                calls += 1;
                (x - 2.0).powi(2) + 1.0
            },
            -5.0,
            5.0,
        )
        .unwrap();

    assert_eq!(calls, result.iterations + 2);
}

#[test]
fn iteration_count_matches_shrink_factor() {
    // The bracket shrinks by exactly INV_PHI per iteration, so the loop
    // runs until (b - a) * INV_PHI^n drops to the tolerance.
    let tol = 1e-6;
    let result = GoldenSection::new()
        .tol(tol)
        .minimize(|x| (x - 2.0).powi(2) + 1.0, -5.0, 5.0)
        .unwrap();

    let mut len = 10.0;
    let mut expected = 0usize;
    while len > tol {
        len *= INV_PHI;
        expected += 1;
    }
    assert_eq!(result.iterations, expected);
}

#[test]
fn converged_bracket_is_within_tolerance() {
    let tol = 1e-5;
    let result = GoldenSection::new()
        .tol(tol)
        .minimize(|x| (x + 3.0).powi(2), -10.0, 10.0)
        .unwrap();

    assert!(result.iterations < 1000, "must converge before the cap");
    let final_len = 20.0 * INV_PHI.powi(i32::try_from(result.iterations).unwrap());
    assert!(final_len <= tol * (1.0 + 1e-9));
}

#[test]
fn iteration_cap_bounds_the_work() {
    let mut calls = 0usize;
    let result = GoldenSection::new()
        .tol(1e-15)
        .max_iter(5)
        .minimize(
            |x| {
                calls += 1;
                x * x
            },
            -1.0,
            1.0,
        )
        .unwrap();

    assert_eq!(result.iterations, 5, "cap reached signals non-convergence");
    assert_eq!(calls, 7);
}

#[test]
fn zero_iteration_cap() {
    let mut calls = 0usize;
    let result = GoldenSection::new()
        .max_iter(0)
        .minimize(
            |x| {
                calls += 1;
                (x - 2.0).powi(2)
            },
            -5.0,
            5.0,
        )
        .unwrap();

    assert_eq!(result.iterations, 0);
    assert_eq!(calls, 2, "only the two seeding evaluations");
}

#[test]
fn fallible_objective_error_surfaces_with_message() {
    // Fail once the bracket has narrowed into (0, 1): the engine must stop
    // at the first failure, with no retry.
    let mut calls = 0usize;
    let err = GoldenSection::new()
        .search_with(
            |x: f64| {
                calls += 1;
                if x > 0.0 && x < 1.0 {
                    Err(format!("domain hole at {x}"))
                } else {
                    Ok((x - 0.5).powi(2))
                }
            },
            -20.0,
            20.0,
            Direction::Minimize,
        )
        .unwrap_err();

    assert!(matches!(&err, Error::Evaluation(msg) if msg.starts_with("domain hole at")));
    assert!(calls >= 1);
}

#[test]
fn nan_objective_still_terminates() {
    // log is NaN over half the bracket; branch selection is unspecified
    // but the bracket still shrinks every iteration.
    let result = GoldenSection::new()
        .tol(1e-6)
        .minimize(|x: f64| x.ln(), -1.0, 1.0)
        .unwrap();

    assert!(result.iterations < 1000);
}

#[test]
fn tight_interval_converges_immediately() {
    let result = GoldenSection::new()
        .tol(1e-2)
        .minimize(|x| x * x, 0.0, 1e-3)
        .unwrap();

    assert_eq!(result.iterations, 0, "bracket already shorter than tol");
}
