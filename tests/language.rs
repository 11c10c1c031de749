use std::{
    error::Error,
    fs::{self},
};

use prefix_eval::{
    EvalError, evaluate, evaluate_script,
    interpreter::operation::{Arity, resolve},
};
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

        for (i, code) in extract_prefix_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = evaluate_script(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No prefix examples found in book/src");
}

fn extract_prefix_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```prefix") {
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

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("+ 1 2", 3.0);
    assert_value("- 5 3", 2.0);
    assert_value("* 7 9", 63.0);
    assert_value("/ 10 4", 2.5);
    assert_value("42", 42.0);
}

#[test]
fn operand_order_follows_notation() {
    assert_value("- 3 5", -2.0);
    assert_value("/ 1 4", 0.25);
    assert_value("pow 2 3", 8.0);
    assert_value("pow 3 2", 9.0);
}

#[test]
fn nested_expressions() {
    assert_value("+ 1 * 2 3", 7.0);
    assert_value("* + 1 2 3", 9.0);
    assert_value("- * 2 5 / 9 3", 7.0);
    assert_value("+ sqrt 16 9", 13.0);
    assert_value("sqrt + pow 3 2 pow 4 2", 5.0);
}

#[test]
fn unary_functions() {
    assert_value("sqrt 16", 4.0);
    assert_value("sin 90", 1.0);
    assert_value("sin 30", 0.5);
    assert_value("cos 0", 1.0);
    assert_value("cos 60", 0.5);
    assert_value("log 1", 0.0);
    assert_value(&format!("log {}", std::f64::consts::E), 1.0);
}

#[test]
fn numerals() {
    assert_value("+ -2 0.5", -1.5);
    assert_value("* 1e3 2", 2000.0);
    assert_value("+ .5 +1", 1.5);
}

#[test]
fn whitespace_is_flexible() {
    assert_value("  +\t1   2  ", 3.0);
    assert_value("+ 1\n2", 3.0);
    assert_value("+ 1\r\n2", 3.0);
}

#[test]
fn domain_errors_are_not_reported() {
    assert!(evaluate("sqrt -1").is_ok_and(f64::is_nan));
    assert_eq!(evaluate("log 0"), Ok(f64::NEG_INFINITY));
}

#[test]
fn division_by_zero() {
    assert_error("/ 1 0", &EvalError::DivisionByZero);
    assert_error("/ 1 -0", &EvalError::DivisionByZero);
    assert_error("+ 1 / 2 - 3 3", &EvalError::DivisionByZero);
}

#[test]
fn unsupported_operations() {
    assert_error("foo 1 2", &EvalError::UnsupportedOperation { token: "foo".to_string() });
    assert_error("+ 1 tan 2", &EvalError::UnsupportedOperation { token: "tan".to_string() });
    assert_error("+ 1 2.3.4", &EvalError::UnsupportedOperation { token: "2.3.4".to_string() });
    assert_error("^ 2 3", &EvalError::UnsupportedOperation { token: "^".to_string() });
}

#[test]
fn malformed_expressions() {
    assert_error("", &EvalError::EmptyExpression);
    assert_error("   \n ", &EvalError::EmptyExpression);
    assert_error("+ 1",
                 &EvalError::MissingOperands { operator: "+".to_string(),
                                               expected: 2,
                                               found:    1, });
    assert_error("sqrt",
                 &EvalError::MissingOperands { operator: "sqrt".to_string(),
                                               expected: 1,
                                               found:    0, });
    assert_error("1 2", &EvalError::UnconsumedOperands { count: 2 });
    assert_error("+ 1 2 3", &EvalError::UnconsumedOperands { count: 2 });
}

#[test]
fn evaluation_is_repeatable() {
    let src = "- pow 2 5 * 3 sqrt 49";
    let first = evaluate(src);
    let second = evaluate(src);
    assert_eq!(first, Ok(11.0));
    assert_eq!(first, second);
}

#[test]
fn scripts_evaluate_each_line() {
    let src = "+ 1 2\n\n# comment line\n* 3 4\n   sqrt 81";
    assert_eq!(evaluate_script(src), Ok(vec![3.0, 12.0, 9.0]));
    assert_eq!(evaluate_script(""), Ok(vec![]));
}

#[test]
fn script_errors_carry_the_line() {
    let err = evaluate_script("+ 1 2\n\n- 3 1\nbar 1").unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.error, EvalError::UnsupportedOperation { token: "bar".to_string() });
    assert_eq!(err.to_string(), "Error on line 4: Unsupported operation: 'bar'.");
}

#[test]
fn error_messages() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero.");
    assert_eq!(EvalError::UnsupportedOperation { token: "foo".to_string() }.to_string(),
               "Unsupported operation: 'foo'.");
}

#[test]
fn special_numerals() {
    assert_eq!(evaluate("inf"), Ok(f64::INFINITY));
    assert_eq!(evaluate("- 0 Infinity"), Ok(f64::NEG_INFINITY));
    assert_eq!(evaluate("+ 1 INF"), Ok(f64::INFINITY));
    assert!(evaluate("nan").is_ok_and(f64::is_nan));
    assert!(evaluate("* 2 NaN").is_ok_and(f64::is_nan));
}

#[test]
fn unknown_operators_are_reported_before_operand_counts() {
    assert_error("foo", &EvalError::UnsupportedOperation { token: "foo".to_string() });
    assert_error("+ foo", &EvalError::UnsupportedOperation { token: "foo".to_string() });
}

#[test]
fn operation_arity_is_checked() {
    let plus = resolve("+").unwrap();
    assert_eq!(plus.apply(&[1.0, 2.0, 3.0]),
               Err(EvalError::SurplusOperands { operator: "+".to_string(),
                                                expected: 2,
                                                found:    3, }));
    assert_eq!(plus.apply(&[1.0]),
               Err(EvalError::MissingOperands { operator: "+".to_string(),
                                                expected: 2,
                                                found:    1, }));

    let sqrt = resolve("sqrt").unwrap();
    assert_eq!(sqrt.arity, Arity::Unary);
    assert_eq!(sqrt.apply(&[]),
               Err(EvalError::MissingOperands { operator: "sqrt".to_string(),
                                                expected: 1,
                                                found:    0, }));
    assert_eq!(sqrt.apply(&[16.0, 9.0]),
               Err(EvalError::SurplusOperands { operator: "sqrt".to_string(),
                                                expected: 1,
                                                found:    2, }));
    assert_eq!(EvalError::SurplusOperands { operator: "sqrt".to_string(),
                                            expected: 1,
                                            found:    2, }.to_string(),
               "Operator 'sqrt' takes only 1 operand(s), but was given 2.");
}

#[test]
fn unicode_whitespace_separates_tokens() {
    assert_value("+ 1\u{A0}2", 3.0);
    assert_value("*\u{0B}3\u{2003}4", 12.0);
    assert_eq!(evaluate_script("+ 1\u{A0}2\u{3000}\n- 5 1"), Ok(vec![3.0, 4.0]));
}

#[test]
fn script_error_exposes_its_cause() {
    let err = evaluate_script("/ 1 0").unwrap_err();
    let source = err.source().expect("script errors wrap an evaluation error");
    assert_eq!(source.to_string(), "Division by zero.");
    assert_eq!(source.downcast_ref::<EvalError>(), Some(&EvalError::DivisionByZero));
}

#[test]
fn blank_lines_keep_line_numbers() {
    let err = evaluate_script("\n\n+ 1 2\n\n\n* 3\n").unwrap_err();
    assert_eq!(err.line, 6);
    assert_eq!(err.error,
               EvalError::MissingOperands { operator: "*".to_string(),
                                            expected: 2,
                                            found:    1, });

    let err = evaluate_script("sqrt 4\n\n# note\n\n1 2").unwrap_err();
    assert_eq!(err.line, 5);
    assert_eq!(err.error, EvalError::UnconsumedOperands { count: 2 });
}
