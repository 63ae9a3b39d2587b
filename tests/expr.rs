//! Integration tests driving the search engine with parsed expressions.

use unimodal::{Direction, Error, Expr, GoldenSection};

#[test]
fn expression_driven_minimization() {
    // f(x) = (x - 2)^2 + sin(x) is strictly convex (f'' = 2 - sin x > 0),
    // with its minimum near x = 2.354 where 2(x - 2) = -cos(x).
    let f = Expr::parse("(x-2)**2 + math.sin(x)").unwrap();
    let result = GoldenSection::new()
        .tol(1e-8)
        .minimize(|x| f.eval(x), -5.0, 5.0)
        .expect("search should succeed");

    assert!((result.x - 2.354).abs() < 1e-3);
    let expected = (result.x - 2.0).powi(2) + result.x.sin();
    assert!((result.value - expected).abs() < 1e-12);
}

#[test]
fn expression_driven_maximization() {
    // Maximize -(x - 1)^2 + 3: optimum at x = 1, value 3.
    let f = Expr::parse("-(x - 1)^2 + 3").unwrap();
    let result = GoldenSection::new()
        .tol(1e-7)
        .search(|x| f.eval(x), -4.0, 4.0, Direction::Maximize)
        .unwrap();

    assert!((result.x - 1.0).abs() < 1e-6);
    assert!((result.value - 3.0).abs() < 1e-9);
}

#[test]
fn expression_matches_closure() {
    // The parsed expression and the equivalent closure drive the search to
    // the same optimum (up to the tolerance; the two evaluation paths may
    // differ in the last ulp).
    // [1, 2] brackets a single interior minimum of the wavy example.
    let f = Expr::parse("(x - 0.5)**2 + sin(3 * x)").unwrap();
    let engine = GoldenSection::new().tol(1e-6);

    let from_expr = engine.minimize(|x| f.eval(x), 1.0, 2.0).unwrap();
    let from_closure = engine
        .minimize(|x: f64| (x - 0.5).powi(2) + (3.0 * x).sin(), 1.0, 2.0)
        .unwrap();

    assert_eq!(from_expr.iterations, from_closure.iterations);
    assert!((from_expr.x - from_closure.x).abs() < 5e-6);
}

#[test]
fn expression_with_nan_region_does_not_panic() {
    // log(x) is NaN for x < 0; the search must still terminate.
    let f = Expr::parse("log(x)").unwrap();
    let result = GoldenSection::new()
        .tol(1e-6)
        .minimize(|x| f.eval(x), -1.0, 1.0)
        .unwrap();

    assert!(result.iterations < 1000);
}

#[test]
fn sandbox_rejects_foreign_names_before_any_search() {
    for src in ["system('ls')", "open(x)", "x + y", "math.hypot(x, x)"] {
        let err = Expr::parse(src).expect_err(src);
        assert!(
            matches!(err, Error::UnknownName(_) | Error::UnexpectedChar { .. }),
            "{src} must be rejected at parse time, got: {err}"
        );
    }
}

#[test]
fn parse_errors_render_helpfully() {
    let err = Expr::parse("y + 1").unwrap_err();
    assert!(err.to_string().contains("unknown name 'y'"));

    let err = Expr::parse("x @ 2").unwrap_err();
    assert!(err.to_string().contains("position 2"));
}
