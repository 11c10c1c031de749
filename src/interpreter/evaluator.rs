use tracing::{debug, trace};

use crate::{error::EvalError, interpreter::operation::resolve};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a list of prefix-notation tokens.
///
/// Tokens are walked right to left over a fresh value stack. Numerals are
/// pushed; operators pop their operands, the most recently pushed value
/// becoming the first operand, and push the result. Exactly one value must
/// remain once every token is consumed.
///
/// # Errors
/// - `UnsupportedOperation` for a non-numeric token that is not an operator.
/// - `DivisionByZero` when `/` receives a zero divisor.
/// - `MissingOperands` when an operator finds too few values on the stack.
/// - `EmptyExpression` when `tokens` is empty.
/// - `UnconsumedOperands` when more than one value is left at the end.
///
/// # Example
/// ```
/// use prefix_eval::interpreter::evaluator::eval_tokens;
///
/// let tokens = ["-", "10", "*", "2", "3"];
/// assert_eq!(eval_tokens(&tokens), Ok(4.0));
/// ```
pub fn eval_tokens<S: AsRef<str>>(tokens: &[S]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let token: &str = token.as_ref();
        if let Ok(number) = token.parse::<f64>() {
            stack.push(number);
            continue;
        }

        let operation = resolve(token)?;
        let expected = operation.arity.count();
        if stack.len() < expected {
            return Err(EvalError::MissingOperands { operator: token.to_string(),
                                                    expected,
                                                    found: stack.len() });
        }

        let operands: Vec<f64> = stack.drain(stack.len() - expected..).rev().collect();
        let result = operation.apply(&operands)?;
        trace!(operator = token, ?operands, result, "reduced");
        stack.push(result);
    }

    match stack.as_slice() {
        [] => Err(EvalError::EmptyExpression),
        [value] => Ok(*value),
        rest => Err(EvalError::UnconsumedOperands { count: rest.len() }),
    }
}

/// Evaluates a whitespace-delimited prefix expression.
///
/// Line breaks are treated like any other whitespace. Each call is
/// independent; no state is carried between evaluations.
///
/// # Errors
/// See [`eval_tokens`].
///
/// # Example
/// ```
/// use prefix_eval::{error::EvalError, interpreter::evaluator::evaluate};
///
/// assert_eq!(evaluate("+ 1 * 2 3"), Ok(7.0));
/// assert_eq!(evaluate("/ 1 0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let tokens = crate::interpreter::lexer::words(expression);
    let result = eval_tokens(tokens.as_slice());
    debug!(expression, ?result, "evaluated");
    result
}
