use polish::*;

// ═══════════════════════════════════════════════════════════════════════
// Literals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_single_literal() {
    assert_eq!(evaluate("5").unwrap(), 5.0);
    assert_eq!(evaluate("-3.5").unwrap(), -3.5);
    assert_eq!(evaluate("0").unwrap(), 0.0);
}

#[test]
fn test_eval_integer_literal_is_float() {
    let value = evaluate("3").unwrap();
    assert_eq!(format_number(value), "3.0");
}

#[test]
fn test_eval_literal_forms() {
    assert_eq!(evaluate("+7").unwrap(), 7.0);
    assert_eq!(evaluate(".25").unwrap(), 0.25);
    assert_eq!(evaluate("2.").unwrap(), 2.0);
    assert_eq!(evaluate("1e2").unwrap(), 100.0);
    assert_eq!(evaluate("inf").unwrap(), f64::INFINITY);
}

// ═══════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_add() {
    assert_eq!(evaluate("+ 1 2").unwrap(), 3.0);
}

#[test]
fn test_eval_sub_is_left_minus_right() {
    assert_eq!(evaluate("- 1 2").unwrap(), -1.0);
    assert_eq!(evaluate("- 10 4").unwrap(), 6.0);
}

#[test]
fn test_eval_mul() {
    assert_eq!(evaluate("* 4 2.5").unwrap(), 10.0);
}

#[test]
fn test_eval_div_is_left_over_right() {
    assert_eq!(evaluate("/ 1 4").unwrap(), 0.25);
    assert_eq!(evaluate("/ 9 3").unwrap(), 3.0);
}

#[test]
fn test_eval_negative_operands() {
    assert_eq!(evaluate("- -1 -2").unwrap(), 1.0);
    assert_eq!(evaluate("* -3 2").unwrap(), -6.0);
}

// ═══════════════════════════════════════════════════════════════════════
// Nesting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_nested_left() {
    // (1 + 2) * 3
    assert_eq!(evaluate("* + 1 2 3").unwrap(), 9.0);
}

#[test]
fn test_eval_nested_right() {
    // 3 * (1 + 2)
    assert_eq!(evaluate("* 3 + 1 2").unwrap(), 9.0);
    // 10 - (4 - 1)
    assert_eq!(evaluate("- 10 - 4 1").unwrap(), 7.0);
}

#[test]
fn test_eval_nested_both_sides() {
    // (2 * 3) - (8 / 4)
    assert_eq!(evaluate("- * 2 3 / 8 4").unwrap(), 4.0);
    // ((1 + 2) * (3 + 4)) / 7
    assert_eq!(evaluate("/ * + 1 2 + 3 4 7").unwrap(), 3.0);
}

#[test]
fn test_eval_deeply_nested() {
    // 1 + (1 + (1 + ... ))
    let depth = 1000;
    let src = format!("{}1", "+ 1 ".repeat(depth));
    assert_eq!(evaluate(&src).unwrap(), (depth + 1) as f64);
}

#[test]
fn test_eval_ignores_extra_whitespace() {
    assert_eq!(evaluate("  +\t1 \n 2  ").unwrap(), 3.0);
}

// ═══════════════════════════════════════════════════════════════════════
// Division Policy
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_strict_division_by_zero_is_error() {
    for src in ["/ 1 0", "/ 0 0", "/ -1 0", "/ 1 -0", "/ 5 - 2 2", "+ 1 / 3 0.0"] {
        assert!(
            matches!(evaluate(src), Err(EvalError::DivisionByZero { .. })),
            "{src:?} should fail under strict division"
        );
    }
}

#[test]
fn test_eval_ieee_division_by_zero() {
    let ctx = EvalContext::ieee();
    assert_eq!(evaluate_with("/ 1 0", &ctx).unwrap(), f64::INFINITY);
    assert_eq!(evaluate_with("/ -1 0", &ctx).unwrap(), f64::NEG_INFINITY);
    assert!(evaluate_with("/ 0 0", &ctx).unwrap().is_nan());
}

#[test]
fn test_eval_ieee_division_propagates_infinity() {
    let ctx = EvalContext::ieee();
    assert_eq!(evaluate_with("+ 1 / 1 0", &ctx).unwrap(), f64::INFINITY);
}

#[test]
fn test_eval_policies_agree_on_nonzero_divisors() {
    let ieee = EvalContext::ieee();
    let src = "/ * 3 7 - 5 3";
    assert_eq!(evaluate(src), evaluate_with(src, &ieee));
}

// ═══════════════════════════════════════════════════════════════════════
// Scoped Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_in_scope_resolves_names() {
    let mut scope = Scope::new();
    scope.define("x", 4.0).unwrap();
    scope.define("y", 2.0).unwrap();

    let ctx = EvalContext::default();
    assert_eq!(evaluate_in("/ x y", &scope, &ctx).unwrap(), 2.0);
    assert_eq!(evaluate_in("x", &scope, &ctx).unwrap(), 4.0);
}

#[test]
fn test_eval_without_scope_rejects_names() {
    assert!(matches!(evaluate("x"), Err(EvalError::Parse { .. })));
}

// ═══════════════════════════════════════════════════════════════════════
// Idempotence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_repeated_calls_are_independent() {
    let src = "* + 1 2 3";
    let first = evaluate(src);
    for _ in 0..10 {
        assert_eq!(evaluate(src), first);
    }

    // A failing call leaves nothing behind for the next one
    assert!(evaluate("1 2 3").is_err());
    assert_eq!(evaluate("5").unwrap(), 5.0);
}

#[test]
fn test_eval_shared_context_across_threads() {
    let ctx = EvalContext::default();
    let ctx = &ctx;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| s.spawn(move || evaluate_with(&format!("+ {} 1", i), ctx)))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), i as f64 + 1.0);
        }
    });
}
