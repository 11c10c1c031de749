//! # prefix-eval
//!
//! prefix-eval evaluates arithmetic expressions written in prefix (Polish)
//! notation, such as `+ 1 * 2 3`. It supports the binary operators `+`, `-`,
//! `*`, `/` and `pow`, and the unary functions `sin`, `cos` (both in
//! degrees), `log` (natural logarithm) and `sqrt`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]

use tracing::debug;

use crate::interpreter::lexer::{Token, tokenize};

/// Provides the error types for evaluation and scripts.
///
/// # Responsibilities
/// - Defines `EvalError`, whose variants let callers branch on the kind of
///   failure (unsupported operator, division by zero, malformed expression).
/// - Defines `ScriptError`, which attaches a line number to an `EvalError`.
pub mod error;
/// Tokenizes, resolves and evaluates prefix expressions.
///
/// # Responsibilities
/// - Splits source text into words.
/// - Maps operator tokens to operations.
/// - Reduces expressions over a value stack.
pub mod interpreter;

pub use error::{EvalError, ScriptError};
pub use interpreter::evaluator::{EvalResult, evaluate};

/// Evaluates every expression of a multi-line script.
///
/// Each non-blank line is an independent prefix expression. Lines whose first
/// word starts with `#` are comments and are skipped. Results are returned in
/// line order.
///
/// # Errors
/// Returns a `ScriptError` carrying the line number and the underlying
/// `EvalError` of the first expression that fails.
///
/// # Examples
/// ```
/// use prefix_eval::{EvalError, evaluate_script};
///
/// let source = "# totals\n+ 1 2\n\npow 2 8\n";
/// assert_eq!(evaluate_script(source), Ok(vec![3.0, 256.0]));
///
/// let err = evaluate_script("+ 1 2\n/ 4 0").unwrap_err();
/// assert_eq!(err.line, 2);
/// assert_eq!(err.error, EvalError::DivisionByZero);
/// ```
pub fn evaluate_script(source: &str) -> Result<Vec<f64>, ScriptError> {
    let mut results = Vec::new();

    for (line, words) in split_lines(source) {
        if words.first().is_some_and(|word| word.starts_with('#')) {
            continue;
        }
        let value = interpreter::evaluator::eval_tokens(words.as_slice())
            .map_err(|error| ScriptError { line, error })?;
        debug!(line, value, "script line evaluated");
        results.push(value);
    }

    Ok(results)
}

/// Groups the words of `source` by the line they appear on.
///
/// Lines without any word produce no group, so blank lines vanish while the
/// remaining groups keep their original line numbers.
///
/// # Parameters
/// - `source`: The script text.
///
/// # Returns
/// One `(line, words)` pair per non-blank line, in source order.
fn split_lines(source: &str) -> Vec<(usize, Vec<String>)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, Vec<String>)> = None;

    for (token, line) in tokenize(source) {
        match token {
            Token::Word(word) => current.get_or_insert_with(|| (line, Vec::new())).1.push(word),
            Token::NewLine => lines.extend(current.take()),
            Token::Ignored => {},
        }
    }
    lines.extend(current);

    lines
}
