use std::{fs, thread};

use infix::{EvalError, EvalOptions, PowerAssociativity, Rounding, evaluate, evaluate_with};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_infix_blocks(&content) {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (expression, expected) =
                    line.rsplit_once("=>")
                        .unwrap_or_else(|| panic!("Example in {path:?} lacks '=>': {line}"));
                check_example(expression.trim(), expected.trim(), path);
            }
        }
    }

    assert!(count > 0, "No infix examples found in book/src");
}

fn check_example(expression: &str, expected: &str, path: &std::path::Path) {
    let actual = evaluate(expression);
    match expected {
        "MalformedExpression" => {
            assert!(matches!(actual, Err(EvalError::MalformedExpression { .. })),
                    "{expression} in {path:?}: expected malformed, got {actual:?}");
        },
        "UnbalancedParens" => assert_eq!(actual,
                                         Err(EvalError::UnbalancedParens),
                                         "{expression} in {path:?}"),
        "DivisionByZero" => assert_eq!(actual,
                                       Err(EvalError::DivisionByZero),
                                       "{expression} in {path:?}"),
        number => {
            let number: f64 = number.parse()
                                    .unwrap_or_else(|_| panic!("Bad expectation in {path:?}: {number}"));
            assert_eq!(actual, Ok(number), "{expression} in {path:?}");
        },
    }
}

fn extract_infix_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```infix") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(evaluate("3+4*2"), Ok(11.0));
    assert_eq!(evaluate("(3+4)*2"), Ok(14.0));
    assert_eq!(evaluate("2+3^2*2"), Ok(20.0));
    assert_eq!(evaluate("((2))*((3))"), Ok(6.0));
}

#[test]
fn chained_powers_group_left_by_default() {
    assert_eq!(evaluate("2^3^2"), Ok(64.0));
    assert_eq!(evaluate("2**3**2"), Ok(64.0));
}

#[test]
fn right_associative_powers_on_request() {
    let options = EvalOptions::default().with_power(PowerAssociativity::Right);
    assert_eq!(evaluate_with("2^3^2", &options), Ok(512.0));
    assert_eq!(evaluate_with("2^3^2*2", &options), Ok(1024.0));
    assert_eq!(evaluate_with("10-4-3", &options), Ok(3.0));
}

#[test]
fn implicit_multiplication() {
    assert_eq!(evaluate("3(4+5)"), Ok(27.0));
    assert_eq!(evaluate("(4+5)3"), Ok(27.0));
    assert_eq!(evaluate("2(3)(4)"), Ok(24.0));
}

#[test]
fn leading_negated_group() {
    assert_eq!(evaluate("-(3+4)"), Ok(-7.0));
    assert_eq!(evaluate(" - ( 3 + 4 ) * 2"), Ok(-14.0));
}

#[test]
fn minus_after_a_negative_literal_is_binary() {
    assert_eq!(evaluate("-3-2"), Ok(-5.0));
    assert_eq!(evaluate("-3*-2"), Ok(6.0));
}

#[test]
fn typed_errors_instead_of_exits() {
    assert_eq!(evaluate("10/0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("(1+2"), Err(EvalError::UnbalancedParens));
    assert!(matches!(evaluate("42"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("abc"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate(""), Err(EvalError::MalformedExpression { .. })));
}

#[test]
fn division_checks_the_divisor_only() {
    assert_eq!(evaluate("0/5"), Ok(0.0));
    assert_eq!(evaluate("5/(1-1)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("5/-0"), Err(EvalError::DivisionByZero));
}

#[test]
fn non_finite_results_are_not_errors() {
    assert_eq!(evaluate("10^400"), Ok(f64::INFINITY));
    assert!(evaluate("(-8)^0.5").unwrap().is_nan());
}

#[test]
fn rounding_is_opt_in() {
    let options = EvalOptions::default().with_rounding(Rounding::DecimalPlaces(1));
    assert_eq!(evaluate_with("1/3*3", &options), Ok(0.9));
    assert_eq!(evaluate("1/3*3"), Ok(1.0));
    assert_eq!(evaluate("0.1+0.2"), Ok(0.1 + 0.2));
    assert_eq!(evaluate_with("0.1+0.2", &options), Ok(0.3));
}

#[test]
fn rounding_keeps_large_results_finite() {
    let options = EvalOptions::default().with_rounding(Rounding::DecimalPlaces(20));
    assert_eq!(evaluate_with("10^300*1", &options), evaluate("10^300*1"));

    let options = EvalOptions::default().with_rounding(Rounding::DecimalPlaces(255));
    let big = format!("1{}+1", "0".repeat(60));
    assert_eq!(evaluate_with(&big, &options), Ok(1e60));
}

#[test]
fn repeated_evaluation_is_stable() {
    let first = evaluate("3(4+5)/2^2");
    for _ in 0..100 {
        assert_eq!(evaluate("3(4+5)/2^2"), first);
    }
    assert_eq!(evaluate("10/0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("3(4+5)/2^2"), first);
}

#[test]
fn concurrent_evaluations_do_not_interfere() {
    let handles: Vec<_> = (1..=8).map(|n| {
                                     thread::spawn(move || {
                                         let expression = format!("{n}*(2+3)-{n}");
                                         (0..500).map(|_| evaluate(&expression))
                                                 .collect::<Vec<_>>()
                                     })
                                 })
                                 .collect();

    for (n, handle) in (1..=8).zip(handles) {
        let expected = f64::from(n) * 4.0;
        for result in handle.join().unwrap() {
            assert_eq!(result, Ok(expected));
        }
    }
}

#[test]
fn operator_count_is_validated_before_arithmetic() {
    // Would divide by zero if the surplus operator were not caught first.
    assert!(matches!(evaluate("1/0*"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("(1/0"), Err(EvalError::UnbalancedParens)));
}
